//! HelloJade Agent - 通话 Agent 入口（console 模式）
//!
//! 按配置组装一个呼叫会话：STT / LLM / TTS / VAD / 轮次检测，
//! 启动后生成问候语回复，随后等待退出信号。
//! 生产部署中音频链路由宿主框架承载，这里的出口是文件。

use std::sync::Arc;

use hellojade::application::session::{JobContext, SessionBuilder, GREETING_INSTRUCTIONS};
use hellojade::config::{load_config, print_config};
use hellojade::domain::call::{Participant, ParticipantKind};
use hellojade::infrastructure::adapters::{FileAudioOutput, OpenAiChatClient, OpenAiSpeechClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},hellojade={}",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("HelloJade Agent - 呼叫中心语音客服");
    print_config(&config);

    let agent_config = config.agent.clone();

    // 外部服务客户端
    let llm = Arc::new(
        OpenAiChatClient::new(agent_config.llm.clone())
            .map_err(|e| anyhow::anyhow!("Failed to create LLM client: {}", e))?,
    );
    let tts = Arc::new(
        OpenAiSpeechClient::new(agent_config.tts.clone())
            .map_err(|e| anyhow::anyhow!("Failed to create TTS client: {}", e))?,
    );
    let audio_output = Arc::new(FileAudioOutput::new(&agent_config.output_dir));

    // 呼叫上下文来自配置；kind 无法解析时按 SIP 呼入处理
    let kind = ParticipantKind::parse(&agent_config.room.participant_kind)
        .unwrap_or(ParticipantKind::Sip);
    let ctx = JobContext {
        room: agent_config.room.name.clone(),
        participant: Participant::new(agent_config.room.participant_identity.clone(), kind),
    };

    // 组装并启动会话
    let mut session = SessionBuilder::new(agent_config)
        .with_llm(llm)
        .with_tts(tts)
        .with_audio_output(audio_output)
        .build(ctx)
        .map_err(|e| anyhow::anyhow!("Failed to assemble session: {}", e))?;

    session
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start session: {}", e))?;

    // 问候语
    let reply = session
        .generate_reply(GREETING_INSTRUCTIONS)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to generate greeting: {}", e))?;
    tracing::info!(
        session_id = session.id(),
        reply = %reply.text,
        "Greeting delivered"
    );

    // 等待退出信号
    tokio::signal::ctrl_c().await?;
    tracing::info!(session_id = session.id(), "Received shutdown signal");

    Ok(())
}
