//! Call Context - VAD 与轮次检测配置
//!
//! 两个模型都是宿主框架内部运行的黑盒，这里只携带其打包默认参数；
//! 算法本身不在本仓库实现

use serde::{Deserialize, Serialize};

/// VAD（语音活动检测）配置，Silero 打包默认值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VadConfig {
    /// 判定为语音的概率阈值
    pub activation_threshold: f32,
    /// 静音多久判定语音结束（秒）
    pub min_silence_duration: f32,
    /// 语音段最短时长（秒）
    pub min_speech_duration: f32,
    /// 输入采样率（Hz）
    pub sample_rate: u32,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            activation_threshold: 0.5,
            min_silence_duration: 0.55,
            min_speech_duration: 0.05,
            sample_rate: 16000,
        }
    }
}

impl VadConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(0.0..=1.0).contains(&self.activation_threshold) {
            return Err("activation_threshold must be within 0.0..=1.0");
        }
        if self.sample_rate == 0 {
            return Err("sample_rate cannot be 0");
        }
        Ok(())
    }
}

/// 轮次检测模型配置，多语言模型打包默认值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnDetectorConfig {
    /// 模型标识
    pub model: String,
    /// 判定轮次结束的概率阈值
    pub unlikely_threshold: f32,
}

impl Default for TurnDetectorConfig {
    fn default() -> Self {
        Self {
            model: "multilingual".to_string(),
            unlikely_threshold: 0.15,
        }
    }
}

impl TurnDetectorConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.model.is_empty() {
            return Err("turn detector model cannot be empty");
        }
        if !(0.0..=1.0).contains(&self.unlikely_threshold) {
            return Err("unlikely_threshold must be within 0.0..=1.0");
        }
        Ok(())
    }
}
