//! Speech Context
//!
//! 语音合成上下文：文本、音色、输出格式的值对象

mod value_objects;

pub use value_objects::{AudioFormat, SpeechText, VoiceName};
