//! Speech Model Port - 本地生成式 TTS 模型抽象
//!
//! 定义本地模型推理的抽象接口，具体实现在 infrastructure/engine 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::speech::SpeechText;

/// 模型错误
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model load failed: {0}")]
    LoadError(String),

    #[error("Generation failed: {0}")]
    GenerationError(String),
}

/// 说话人 embedding
///
/// 从 `<voices_dir>/<voice>.pt` 加载的定长向量，用于条件化生成；
/// 文件内容为 raw little-endian f32
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerEmbedding {
    values: Vec<f32>,
}

impl SpeakerEmbedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// 从文件字节解析
    ///
    /// 字节数必须是 4 的整数倍，否则视为损坏的 voice 文件
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        if bytes.is_empty() {
            return Err("Embedding file is empty".to_string());
        }
        if bytes.len() % 4 != 0 {
            return Err(format!(
                "Embedding file truncated: {} bytes is not a multiple of 4",
                bytes.len()
            ));
        }
        let values = bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(Self { values })
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn dimension(&self) -> usize {
        self.values.len()
    }
}

/// 生成结果波形
#[derive(Debug, Clone)]
pub struct Waveform {
    /// 单声道 PCM 样本，范围 [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// 采样率（Hz）
    pub sample_rate: u32,
}

impl Waveform {
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        (self.samples.len() as u64 * 1000) / self.sample_rate as u64
    }
}

/// Speech Model Port
///
/// 本地生成式音频模型的抽象接口
#[async_trait]
pub trait SpeechModelPort: Send + Sync {
    /// 执行生成
    ///
    /// embedding 为 None 时使用无条件默认音色
    async fn generate(
        &self,
        text: &SpeechText,
        speaker_embedding: Option<&SpeakerEmbedding>,
    ) -> Result<Waveform, ModelError>;

    /// 模型运行的设备字符串（"cuda" / "cpu" / ...）
    fn device(&self) -> &str;
}
