//! Health Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::HealthResponse;
use crate::infrastructure::http::state::AppState;

/// GET /health
///
/// 不触发模型加载，只报告服务存活与目标设备
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        device: state.model.device().to_string(),
    })
}
