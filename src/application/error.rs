//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use super::ports::{ModelError, VoiceStoreError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（客户端输入问题）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 模型错误（加载/生成失败，按设计不做恢复）
    #[error("Model error: {0}")]
    ModelError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<ModelError> for ApplicationError {
    fn from(e: ModelError) -> Self {
        Self::ModelError(e.to_string())
    }
}

impl From<VoiceStoreError> for ApplicationError {
    fn from(e: VoiceStoreError) -> Self {
        match e {
            VoiceStoreError::IoError(msg) => Self::StorageError(msg),
            VoiceStoreError::InvalidEmbedding { .. } => Self::StorageError(e.to_string()),
        }
    }
}
