//! LLM 客户端实现

pub mod openai_chat;

pub use openai_chat::OpenAiChatClient;
