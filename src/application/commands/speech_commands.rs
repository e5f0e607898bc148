//! Speech Commands
//!
//! OpenAI 兼容合成请求对应的命令定义

/// 创建合成命令
///
/// 字段与 OpenAI audio/speech 请求一一对应；`model` 与 `speed`
/// 为兼容性保留，当前运行时不参与生成
#[derive(Debug, Clone)]
pub struct CreateSpeech {
    pub model: String,
    pub input: String,
    pub voice: String,
    pub response_format: String,
    pub speed: f32,
}
