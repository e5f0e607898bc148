//! HelloJade - 呼叫中心语音客服系统
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Speech Context: 合成文本、音色名、输出格式
//! - Call Context: 参与者、降噪策略、VAD / 轮次检测配置
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SpeechModel, VoiceStore, ChatModel, SpeechSynthesizer, AudioOutput）
//! - Commands / Queries: CQRS 处理器
//! - Session: 通话会话组装与回复生成
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: OpenAI 兼容的语音合成接口
//! - Engine: 本地合成引擎（设备探测、懒加载、并发限制）
//! - Voices: 文件系统音色仓库
//! - Adapters: LLM / TTS 客户端、会话音频出口
//! - Audio: WAV 编解码
//!
//! 两个入口：
//! - `hellojade-tts`: 语音合成 HTTP 服务
//! - `hellojade-agent`: 通话 Agent（console 模式）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
