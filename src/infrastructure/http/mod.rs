//! HTTP 基础设施
//!
//! OpenAI 兼容的语音合成 HTTP 接口

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use server::HttpServer;
pub use state::AppState;
