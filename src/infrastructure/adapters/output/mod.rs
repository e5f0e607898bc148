//! 会话音频出口实现

pub mod file_output;

pub use file_output::FileAudioOutput;
