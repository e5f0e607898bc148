//! Application Layer
//!
//! - Ports: 端口定义（SpeechModel, VoiceStore, ChatModel, SpeechSynthesizer, AudioOutput）
//! - Commands: CQRS 命令处理器（合成）
//! - Queries: CQRS 查询处理器（音色列表）
//! - Session: 呼叫会话组装

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod session;

pub use commands::{CreateSpeech, CreateSpeechHandler, SpeechResult};
pub use error::ApplicationError;
pub use queries::{ListVoices, ListVoicesHandler};
