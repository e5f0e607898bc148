//! Chatterbox Engine - 本地合成引擎
//!
//! 实现 SpeechModelPort：
//! - 模型首次请求时加载，`tokio::sync::OnceCell` 保证 single-flight，
//!   并发首请求共享同一次初始化
//! - 生成并发由 Semaphore 限制（默认 1，即串行），生成期间占住 handler，
//!   不支持取消，不设超时
//!
//! 内置后端是一个确定性的 DSP 合成器：基频与音色由 speaker embedding
//! 条件化，神经网络后端在同一端口接入

use async_trait::async_trait;
use tokio::sync::{OnceCell, Semaphore};

use crate::application::ports::{ModelError, SpeakerEmbedding, SpeechModelPort, Waveform};
use crate::domain::speech::SpeechText;

use super::device::Device;

/// 引擎配置
#[derive(Debug, Clone)]
pub struct ChatterboxEngineConfig {
    /// 显式设备串；None 则自动探测
    pub device: Option<String>,
    /// 输出采样率（Hz）
    pub sample_rate: u32,
    /// 最大并发生成数
    pub max_concurrent_generations: usize,
}

impl Default for ChatterboxEngineConfig {
    fn default() -> Self {
        Self {
            device: None,
            sample_rate: 24000,
            max_concurrent_generations: 1,
        }
    }
}

/// 本地合成引擎
pub struct ChatterboxEngine {
    device: Device,
    sample_rate: u32,
    model: OnceCell<SynthModel>,
    permits: Semaphore,
}

impl ChatterboxEngine {
    pub fn new(config: ChatterboxEngineConfig) -> Self {
        let device = Device::resolve(config.device.as_deref());
        Self {
            device,
            sample_rate: config.sample_rate,
            model: OnceCell::new(),
            permits: Semaphore::new(config.max_concurrent_generations.max(1)),
        }
    }

    /// 模型是否已完成加载
    pub fn is_loaded(&self) -> bool {
        self.model.initialized()
    }

    async fn model(&self) -> Result<&SynthModel, ModelError> {
        self.model
            .get_or_try_init(|| async {
                tracing::info!(device = %self.device, "Loading synthesis model");
                SynthModel::load(self.sample_rate)
            })
            .await
    }
}

#[async_trait]
impl SpeechModelPort for ChatterboxEngine {
    async fn generate(
        &self,
        text: &SpeechText,
        speaker_embedding: Option<&SpeakerEmbedding>,
    ) -> Result<Waveform, ModelError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| ModelError::GenerationError("Engine shut down".to_string()))?;

        let model = self.model().await?.clone();
        let text = text.clone();
        let embedding = speaker_embedding.cloned();

        // 推理是同步阻塞的，挪到阻塞线程池，生成期间持有 permit
        let waveform = tokio::task::spawn_blocking(move || {
            model.synthesize(text.as_str(), embedding.as_ref())
        })
        .await
        .map_err(|e| ModelError::GenerationError(format!("Generation task failed: {}", e)))??;

        Ok(waveform)
    }

    fn device(&self) -> &str {
        self.device.as_str()
    }
}

/// 已加载的合成模型
///
/// 加载一次、跨请求复用；克隆是浅拷贝级别的小结构
#[derive(Debug, Clone)]
struct SynthModel {
    sample_rate: u32,
    /// 谐波增益表，加载期预计算
    harmonics: Vec<f32>,
}

/// 无条件生成的默认基频（Hz）
const DEFAULT_F0: f32 = 165.0;
/// 每字符发音时长（秒）
const CHAR_DURATION: f32 = 0.055;
/// 词间停顿（秒）
const WORD_GAP: f32 = 0.04;

impl SynthModel {
    fn load(sample_rate: u32) -> Result<Self, ModelError> {
        if sample_rate == 0 {
            return Err(ModelError::LoadError("sample rate cannot be 0".to_string()));
        }
        let harmonics = (1..=4).map(|h| 1.0 / (h as f32)).collect();
        Ok(Self {
            sample_rate,
            harmonics,
        })
    }

    fn synthesize(
        &self,
        text: &str,
        embedding: Option<&SpeakerEmbedding>,
    ) -> Result<Waveform, ModelError> {
        let (base_f0, brightness) = match embedding {
            Some(emb) => Self::voice_params(emb),
            None => (DEFAULT_F0, 1.0),
        };

        let sr = self.sample_rate as f32;
        let mut samples = Vec::new();

        for word in text.split_whitespace() {
            for (i, ch) in word.chars().enumerate() {
                let n = (CHAR_DURATION * sr) as usize;
                // 字符决定音高偏移，音节内缓慢下行
                let offset = ((ch as u32 % 12) as f32 - 6.0) * 4.0;
                let f0 = (base_f0 + offset - i as f32 * 1.5).max(60.0);

                for t in 0..n {
                    let time = t as f32 / sr;
                    let envelope = hann(t, n);
                    let mut value = 0.0f32;
                    for (h, gain) in self.harmonics.iter().enumerate() {
                        let harmonic = (h + 1) as f32;
                        let amp = gain * brightness.powf(h as f32);
                        value += amp
                            * (2.0 * std::f32::consts::PI * f0 * harmonic * time).sin();
                    }
                    samples.push(value * envelope * 0.3);
                }
            }
            let gap = (WORD_GAP * sr) as usize;
            samples.extend(std::iter::repeat(0.0).take(gap));
        }

        if samples.is_empty() {
            return Err(ModelError::GenerationError(
                "no synthesizable content".to_string(),
            ));
        }

        Ok(Waveform {
            samples,
            sample_rate: self.sample_rate,
        })
    }

    /// 从 embedding 推导基频与亮度
    fn voice_params(embedding: &SpeakerEmbedding) -> (f32, f32) {
        let values = embedding.values();
        let mean = values.iter().sum::<f32>() / values.len() as f32;
        let sigmoid = 1.0 / (1.0 + (-mean).exp());
        let f0 = 110.0 + 110.0 * sigmoid;
        let var = values
            .iter()
            .map(|v| (v - mean) * (v - mean))
            .sum::<f32>()
            / values.len() as f32;
        let brightness = (0.6 + var.sqrt().min(1.0) * 0.4).min(1.0);
        (f0, brightness)
    }
}

fn hann(t: usize, n: usize) -> f32 {
    if n <= 1 {
        return 1.0;
    }
    let x = t as f32 / (n - 1) as f32;
    0.5 * (1.0 - (2.0 * std::f32::consts::PI * x).cos())
}
