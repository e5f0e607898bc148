//! Speech Synthesizer Port - 下游合成服务抽象
//!
//! Call Agent 调用的 OpenAI 兼容 audio/speech 服务接口
//! （可以指向本仓库的 TTS Adapter，也可以是其它兼容后端）

use async_trait::async_trait;
use thiserror::Error;

/// 合成错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Speech Synthesizer Port
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 合成文本，返回编码后的音频字节（WAV）
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SynthesisError>;

    /// 检查合成服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
