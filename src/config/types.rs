//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
///
/// 同时覆盖两个可部署单元：TTS Adapter（server/model）与 Call Agent（agent）
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 本地 TTS 模型配置
    #[serde(default)]
    pub model: ModelConfig,

    /// Call Agent 配置
    #[serde(default)]
    pub agent: AgentConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            model: ModelConfig::default(),
            agent: AgentConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8880
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 本地 TTS 模型配置
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// 音色 embedding 目录（`<voice>.pt` 文件）
    #[serde(default = "default_voices_dir")]
    pub voices_dir: PathBuf,

    /// 计算设备；None 表示自动探测（CUDA 可用则 cuda，否则 cpu）
    #[serde(default)]
    pub device: Option<String>,

    /// 输出采样率（Hz）
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// 最大并发生成数
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_generations: usize,
}

fn default_voices_dir() -> PathBuf {
    PathBuf::from("/voices")
}

fn default_sample_rate() -> u32 {
    24000
}

fn default_max_concurrent() -> usize {
    1
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            voices_dir: default_voices_dir(),
            device: None,
            sample_rate: default_sample_rate(),
            max_concurrent_generations: default_max_concurrent(),
        }
    }
}

/// Call Agent 配置
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// STT 服务配置（Riva gRPC）
    #[serde(default)]
    pub stt: SttConfig,

    /// LLM 服务配置（OpenAI 兼容）
    #[serde(default)]
    pub llm: LlmConfig,

    /// TTS 服务配置（OpenAI 兼容）
    #[serde(default)]
    pub tts: TtsBackendConfig,

    /// 房间配置（console 模式下本进程直接处理的呼叫）
    #[serde(default)]
    pub room: RoomConfig,

    /// 合成音频的输出目录（console 模式下代替房间音轨）
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data/output")
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            stt: SttConfig::default(),
            llm: LlmConfig::default(),
            tts: TtsBackendConfig::default(),
            room: RoomConfig::default(),
            output_dir: default_output_dir(),
        }
    }
}

/// STT 服务配置
///
/// Riva 流式识别端点；音频传输由宿主框架负责，这里只保存连接参数
#[derive(Debug, Clone, Deserialize)]
pub struct SttConfig {
    /// gRPC 端点 host:port
    #[serde(default = "default_stt_server")]
    pub server: String,

    /// 是否启用 TLS
    #[serde(default)]
    pub use_ssl: bool,

    /// 识别语言
    #[serde(default = "default_stt_language")]
    pub language: String,

    /// 自动标点
    #[serde(default = "default_true")]
    pub automatic_punctuation: bool,
}

fn default_stt_server() -> String {
    "riva-stt.call-center.svc.cluster.local:50051".to_string()
}

fn default_stt_language() -> String {
    "en-US".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            server: default_stt_server(),
            use_ssl: false,
            language: default_stt_language(),
            automatic_punctuation: default_true(),
        }
    }
}

/// LLM 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// OpenAI 兼容 Base URL
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,

    /// 模型标识
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API key（自托管 vLLM 不校验）
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// 采样温度
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// 请求超时时间（秒）
    #[serde(default = "default_client_timeout")]
    pub timeout_secs: u64,
}

fn default_llm_base_url() -> String {
    "http://vllm.call-center.svc.cluster.local:8000/v1".to_string()
}

fn default_llm_model() -> String {
    "meta-llama/Llama-3.1-8B-Instruct".to_string()
}

fn default_api_key() -> String {
    "not-needed".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_client_timeout() -> u64 {
    120
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            api_key: default_api_key(),
            temperature: default_temperature(),
            timeout_secs: default_client_timeout(),
        }
    }
}

/// 下游 TTS 服务配置（Call Agent 调用的合成后端）
#[derive(Debug, Clone, Deserialize)]
pub struct TtsBackendConfig {
    /// OpenAI 兼容 Base URL
    #[serde(default = "default_tts_base_url")]
    pub base_url: String,

    /// 模型标识
    #[serde(default = "default_tts_model")]
    pub model: String,

    /// 音色名称
    #[serde(default = "default_tts_voice")]
    pub voice: String,

    /// 输出格式
    #[serde(default = "default_tts_format")]
    pub response_format: String,

    /// API key
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_client_timeout")]
    pub timeout_secs: u64,
}

fn default_tts_base_url() -> String {
    "http://chatterbox-tts.call-center.svc.cluster.local:8880/v1".to_string()
}

fn default_tts_model() -> String {
    "chatterbox".to_string()
}

fn default_tts_voice() -> String {
    "default".to_string()
}

fn default_tts_format() -> String {
    "wav".to_string()
}

impl Default for TtsBackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_tts_base_url(),
            model: default_tts_model(),
            voice: default_tts_voice(),
            response_format: default_tts_format(),
            api_key: default_api_key(),
            timeout_secs: default_client_timeout(),
        }
    }
}

/// 房间配置
#[derive(Debug, Clone, Deserialize)]
pub struct RoomConfig {
    /// 房间名
    #[serde(default = "default_room_name")]
    pub name: String,

    /// 呼入方 identity
    #[serde(default = "default_participant_identity")]
    pub participant_identity: String,

    /// 呼入方接入类型: "sip" 或 "standard"
    #[serde(default = "default_participant_kind")]
    pub participant_kind: String,
}

fn default_room_name() -> String {
    "call-center".to_string()
}

fn default_participant_identity() -> String {
    "caller".to_string()
}

fn default_participant_kind() -> String {
    "sip".to_string()
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            name: default_room_name(),
            participant_identity: default_participant_identity(),
            participant_kind: default_participant_kind(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
