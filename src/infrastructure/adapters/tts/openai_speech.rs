//! OpenAI Speech Client - 调用 OpenAI 兼容的语音合成服务
//!
//! 实现 SpeechSynthesizerPort trait
//!
//! 外部 API:
//! POST {base_url}/audio/speech
//! Request: {"model": "...", "input": "...", "voice": "...", "response_format": "wav"}  (JSON)
//! Response: audio binary

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeechSynthesizerPort, SynthesisError};
use crate::config::TtsBackendConfig;

/// 语音合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

/// OpenAI 兼容语音合成客户端
pub struct OpenAiSpeechClient {
    client: Client,
    config: TtsBackendConfig,
}

impl OpenAiSpeechClient {
    pub fn new(config: TtsBackendConfig) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SynthesisError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.config.base_url.trim_end_matches('/'))
    }

    fn health_url(&self) -> String {
        // base_url 以 /v1 结尾，健康检查挂在服务根路径
        let base = self
            .config
            .base_url
            .trim_end_matches('/')
            .trim_end_matches("/v1");
        format!("{}/health", base)
    }
}

#[async_trait]
impl SpeechSynthesizerPort for OpenAiSpeechClient {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SynthesisError> {
        let request = SpeechRequest {
            model: &self.config.model,
            input: text,
            voice: &self.config.voice,
            response_format: &self.config.response_format,
        };

        tracing::debug!(
            url = %self.speech_url(),
            voice = %self.config.voice,
            text_len = text.len(),
            "Sending speech synthesis request"
        );

        let response = self
            .client
            .post(&self.speech_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SynthesisError::Timeout
                } else if e.is_connect() {
                    SynthesisError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    SynthesisError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(audio_size = audio.len(), "Speech synthesis completed");
        Ok(audio)
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(&self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
