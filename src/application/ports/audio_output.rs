//! Audio Output Port - 会话音频出口抽象
//!
//! 合成的回复音频交给会话出口；生产部署中这是房间音轨发布
//! （由宿主框架承担），console 模式下是文件输出

use async_trait::async_trait;
use thiserror::Error;

/// 音频输出错误
#[derive(Debug, Error)]
pub enum AudioOutputError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Output Port
#[async_trait]
pub trait AudioOutputPort: Send + Sync {
    /// 发布一段 WAV 音频到会话出口
    async fn publish(&self, session_id: &str, wav: &[u8]) -> Result<(), AudioOutputError>;
}
