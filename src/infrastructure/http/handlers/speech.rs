//! Speech Handlers - OpenAI 兼容语音合成端点

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;

use crate::application::CreateSpeech;
use crate::infrastructure::audio::wav;
use crate::infrastructure::http::dto::SpeechRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /v1/audio/speech
///
/// 合成结果整段返回，Content-Disposition 标记为附件下载
pub async fn create_speech(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeechRequest>,
) -> Result<Response, ApiError> {
    let command = CreateSpeech {
        model: req.model,
        input: req.input,
        voice: req.voice,
        response_format: req.response_format,
        speed: req.speed,
    };

    let result = state.create_speech_handler.handle(command).await?;
    let audio = wav::encode(&result.waveform.samples, result.waveform.sample_rate);

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.format.content_type())
        .header(header::CONTENT_LENGTH, audio.len())
        .header(
            header::CONTENT_DISPOSITION,
            "attachment; filename=speech.wav",
        )
        .body(Body::from(audio))
        .unwrap())
}
