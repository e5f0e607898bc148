//! Infrastructure Layer - 基础设施层
//!
//! 端口的具体实现：HTTP 接口、本地合成引擎、音色仓库、
//! 外部服务客户端、音频编解码

pub mod adapters;
pub mod audio;
pub mod engine;
pub mod http;
pub mod voices;
