//! Command Handlers

mod speech_command_handlers;

pub use speech_command_handlers::{CreateSpeechHandler, SpeechResult};
