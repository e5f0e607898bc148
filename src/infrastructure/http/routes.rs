//! HTTP Routes
//!
//! API Endpoints:
//! - /v1/audio/speech  POST  合成语音（OpenAI 兼容）
//! - /v1/voices        GET   列出可用音色
//! - /health           GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health))
        .nest("/v1", v1_routes())
}

/// OpenAI 兼容 API 路由
fn v1_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/audio/speech", post(handlers::create_speech))
        .route("/voices", get(handlers::list_voices))
}
