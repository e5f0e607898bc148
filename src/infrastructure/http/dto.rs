//! HTTP DTOs
//!
//! OpenAI 兼容的请求/响应结构

use serde::{Deserialize, Serialize};

/// POST /v1/audio/speech 请求体
///
/// 除 input 外的字段都可省略；model 与 speed 为兼容性保留，
/// 当前实现接受但不使用
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    /// 模型标识（保留字段）
    #[serde(default = "default_model")]
    pub model: String,

    /// 要合成的文本
    pub input: String,

    /// 音色名称（voices 目录下 .pt 文件的 basename）
    #[serde(default = "default_voice")]
    pub voice: String,

    /// 输出格式；非 wav 的取值被接受但输出仍为 wav
    #[serde(default = "default_response_format")]
    pub response_format: String,

    /// 语速（保留字段）
    #[serde(default = "default_speed")]
    pub speed: f32,
}

fn default_model() -> String {
    "chatterbox".to_string()
}

fn default_voice() -> String {
    "default".to_string()
}

fn default_response_format() -> String {
    "wav".to_string()
}

fn default_speed() -> f32 {
    1.0
}

/// GET /v1/voices 响应体
#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<String>,
}

/// GET /health 响应体
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub device: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_request_defaults() {
        let request: SpeechRequest = serde_json::from_str(r#"{"input": "Hello"}"#).unwrap();
        assert_eq!(request.model, "chatterbox");
        assert_eq!(request.input, "Hello");
        assert_eq!(request.voice, "default");
        assert_eq!(request.response_format, "wav");
        assert_eq!(request.speed, 1.0);
    }

    #[test]
    fn test_speech_request_missing_input_is_rejected() {
        let result: Result<SpeechRequest, _> = serde_json::from_str(r#"{"voice": "alice"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_health_response_shape() {
        let response = HealthResponse {
            status: "ok",
            device: "cuda".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["device"], "cuda");
    }
}
