//! HelloJade TTS - 语音合成 HTTP 服务
//!
//! OpenAI 兼容接口：
//! - POST /v1/audio/speech
//! - GET  /v1/voices
//! - GET  /health

use std::sync::Arc;

use hellojade::application::ports::SpeechModelPort;
use hellojade::config::{load_config, print_config};
use hellojade::infrastructure::engine::{ChatterboxEngine, ChatterboxEngineConfig};
use hellojade::infrastructure::http::{AppState, HttpServer};
use hellojade::infrastructure::voices::FileVoiceStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},hellojade={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("HelloJade TTS - 语音合成服务");
    print_config(&config);

    // 创建本地合成引擎（模型在首个请求时加载）
    let engine = Arc::new(ChatterboxEngine::new(ChatterboxEngineConfig {
        device: config.model.device.clone(),
        sample_rate: config.model.sample_rate,
        max_concurrent_generations: config.model.max_concurrent_generations,
    }));
    tracing::info!(device = engine.device(), "Synthesis engine ready");

    // 创建文件系统音色仓库
    let voice_store = Arc::new(FileVoiceStore::new(&config.model.voices_dir));

    // 创建 HTTP 服务器
    let state = AppState::new(engine, voice_store);
    let server = HttpServer::new(config.server.clone(), state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
