//! Adapters - 外部服务客户端与出口实现

pub mod llm;
pub mod output;
pub mod tts;

pub use llm::OpenAiChatClient;
pub use output::FileAudioOutput;
pub use tts::OpenAiSpeechClient;
