//! Voice Store Port - 音色 embedding 仓库抽象
//!
//! 音色目录对服务只读；缺失的音色不是错误（回退到无条件生成）

use async_trait::async_trait;
use thiserror::Error;

use super::speech_model::SpeakerEmbedding;
use crate::domain::speech::VoiceName;

/// 音色存储错误
#[derive(Debug, Error)]
pub enum VoiceStoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Invalid embedding file for voice '{voice}': {reason}")]
    InvalidEmbedding { voice: String, reason: String },
}

/// Voice Store Port
#[async_trait]
pub trait VoiceStorePort: Send + Sync {
    /// 加载指定音色的 embedding
    ///
    /// - 文件不存在 → `Ok(None)`（静默回退到默认音色）
    /// - 文件损坏 → `Err(InvalidEmbedding)`（向上传播为服务端错误）
    async fn load(&self, voice: &VoiceName) -> Result<Option<SpeakerEmbedding>, VoiceStoreError>;

    /// 枚举可用音色名（`.pt` 文件的 basename）
    ///
    /// 目录不存在时返回空列表；每次调用重新扫描文件系统，不缓存
    async fn list(&self) -> Result<Vec<String>, VoiceStoreError>;
}
