//! Audio - WAV 编解码

pub mod wav;
