//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 专用环境变量（`DEVICE`、`VOICES_DIR`，运维直接注入）
//! 2. 通用环境变量（前缀 `HELLOJADE_`）
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `HELLOJADE_SERVER__PORT=9000`
/// - `HELLOJADE_AGENT__LLM__BASE_URL=http://vllm:8000/v1`
/// - `DEVICE=cuda`（覆盖 model.device）
/// - `VOICES_DIR=/mnt/voices`（覆盖 model.voices_dir）
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8880)?
        .set_default("model.voices_dir", "/voices")?
        .set_default("model.sample_rate", 24000)?
        .set_default("model.max_concurrent_generations", 1)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 通用环境变量
    // 前缀: HELLOJADE_，层级分隔符: __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix("HELLOJADE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let mut app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 4. 专用覆盖变量（最高优先级，容器编排直接注入）
    apply_env_overrides(&mut app_config);

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 应用 `DEVICE` / `VOICES_DIR` 覆盖
fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(device) = std::env::var("DEVICE") {
        if !device.is_empty() {
            config.model.device = Some(device);
        }
    }
    if let Ok(dir) = std::env::var("VOICES_DIR") {
        if !dir.is_empty() {
            config.model.voices_dir = PathBuf::from(dir);
        }
    }
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.model.sample_rate == 0 {
        return Err(ConfigError::ValidationError(
            "Model sample rate cannot be 0".to_string(),
        ));
    }

    if config.model.max_concurrent_generations == 0 {
        return Err(ConfigError::ValidationError(
            "max_concurrent_generations cannot be 0".to_string(),
        ));
    }

    if config.agent.llm.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM base URL cannot be empty".to_string(),
        ));
    }

    if config.agent.tts.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS base URL cannot be empty".to_string(),
        ));
    }

    if config.agent.stt.server.is_empty() {
        return Err(ConfigError::ValidationError(
            "STT server cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Voices Directory: {:?}", config.model.voices_dir);
    tracing::info!(
        "Device: {}",
        config.model.device.as_deref().unwrap_or("<auto>")
    );
    tracing::info!("Sample Rate: {} Hz", config.model.sample_rate);
    tracing::info!(
        "Max Concurrent Generations: {}",
        config.model.max_concurrent_generations
    );
    tracing::info!("STT Server: {}", config.agent.stt.server);
    tracing::info!("LLM Base URL: {}", config.agent.llm.base_url);
    tracing::info!("TTS Base URL: {}", config.agent.tts.base_url);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8880);
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_concurrency() {
        let mut config = AppConfig::default();
        config.model.max_concurrent_generations = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_llm_url() {
        let mut config = AppConfig::default();
        config.agent.llm.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    // 环境变量是进程级的，测试并行跑时必须互斥
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn test_device_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("DEVICE", "cuda");
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config);
        std::env::remove_var("DEVICE");
        assert_eq!(config.model.device.as_deref(), Some("cuda"));
    }

    #[test]
    fn test_voices_dir_env_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("VOICES_DIR", "/mnt/voices");
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config);
        std::env::remove_var("VOICES_DIR");
        assert_eq!(config.model.voices_dir, PathBuf::from("/mnt/voices"));
    }

    #[test]
    fn test_empty_env_value_does_not_override() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("DEVICE", "");
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config);
        std::env::remove_var("DEVICE");
        assert!(config.model.device.is_none());
    }
}
