//! Application Commands

pub mod handlers;
mod speech_commands;

pub use handlers::{CreateSpeechHandler, SpeechResult};
pub use speech_commands::CreateSpeech;
