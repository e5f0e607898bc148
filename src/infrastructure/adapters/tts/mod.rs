//! 外部语音合成客户端实现

pub mod openai_speech;

pub use openai_speech::OpenAiSpeechClient;
