//! Call Session - 会话组装与单次回复

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioOutputPort, ChatMessage, ChatModelPort, SpeechSynthesizerPort,
};
use crate::config::SttConfig;
use crate::domain::call::{
    noise_cancellation_for, NoiseCancellation, Participant, TurnDetectorConfig, VadConfig,
};

/// 宿主框架下发的呼叫上下文
#[derive(Debug, Clone)]
pub struct JobContext {
    /// 房间标识
    pub room: String,
    /// 呼入参与者
    pub participant: Participant,
}

/// Agent 定义：系统指令
///
/// TODO: function tools（账户查询、转人工、FAQ、预约）尚未实现
#[derive(Debug, Clone)]
pub struct AgentDefinition {
    pub instructions: String,
}

impl Default for AgentDefinition {
    fn default() -> Self {
        Self {
            instructions: super::AGENT_INSTRUCTIONS.to_string(),
        }
    }
}

/// STT 句柄
///
/// 只携带连接参数；流式识别链路由宿主框架建立
#[derive(Debug, Clone)]
pub struct SttHandle {
    config: SttConfig,
}

impl SttHandle {
    pub fn new(config: SttConfig) -> Self {
        Self { config }
    }

    /// gRPC 端点 URI
    pub fn endpoint_uri(&self) -> String {
        let scheme = if self.config.use_ssl { "grpcs" } else { "grpc" };
        format!("{}://{}", scheme, self.config.server)
    }

    pub fn language(&self) -> &str {
        &self.config.language
    }

    pub fn automatic_punctuation(&self) -> bool {
        self.config.automatic_punctuation
    }
}

/// 一次 generate_reply 的结果
#[derive(Debug)]
pub struct Reply {
    /// LLM 回复文本
    pub text: String,
    /// 合成音频字节数（WAV）
    pub audio_bytes: usize,
}

/// 呼叫会话
///
/// 五个服务句柄 + 一条系统指令的临时组合；呼叫结束即丢弃
pub struct CallSession {
    id: String,
    room: String,
    participant: Participant,
    noise_cancellation: NoiseCancellation,
    stt: SttHandle,
    llm: Arc<dyn ChatModelPort>,
    tts: Arc<dyn SpeechSynthesizerPort>,
    vad: VadConfig,
    turn_detector: TurnDetectorConfig,
    audio_output: Arc<dyn AudioOutputPort>,
    agent: AgentDefinition,
    started_at: Option<DateTime<Utc>>,
}

impl CallSession {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn assemble(
        ctx: JobContext,
        stt: SttHandle,
        llm: Arc<dyn ChatModelPort>,
        tts: Arc<dyn SpeechSynthesizerPort>,
        vad: VadConfig,
        turn_detector: TurnDetectorConfig,
        audio_output: Arc<dyn AudioOutputPort>,
        agent: AgentDefinition,
    ) -> Self {
        let noise_cancellation = noise_cancellation_for(ctx.participant.kind);
        Self {
            id: Uuid::new_v4().to_string(),
            room: ctx.room,
            participant: ctx.participant,
            noise_cancellation,
            stt,
            llm,
            tts,
            vad,
            turn_detector,
            audio_output,
            agent,
            started_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn noise_cancellation(&self) -> NoiseCancellation {
        self.noise_cancellation
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// 启动会话
    ///
    /// 记录组装结果并探测下游合成服务；失败不重试不捕获，
    /// 掉线/不可达由宿主框架处置
    pub async fn start(&mut self) -> Result<(), ApplicationError> {
        self.vad
            .validate()
            .map_err(ApplicationError::validation)?;
        self.turn_detector
            .validate()
            .map_err(ApplicationError::validation)?;

        if !self.tts.health_check().await {
            tracing::warn!(session_id = %self.id, "TTS backend health check failed");
        }

        self.started_at = Some(Utc::now());

        tracing::info!(
            session_id = %self.id,
            room = %self.room,
            participant = %self.participant.identity,
            participant_kind = ?self.participant.kind,
            noise_cancellation = self.noise_cancellation.label(),
            stt_endpoint = %self.stt.endpoint_uri(),
            stt_language = self.stt.language(),
            stt_punctuation = self.stt.automatic_punctuation(),
            vad_threshold = self.vad.activation_threshold,
            turn_detector = %self.turn_detector.model,
            "Call session started"
        );

        Ok(())
    }

    /// 生成一次回复：一次 chat completion + 一次合成，
    /// 音频交给会话出口。上游失败原样上抛
    pub async fn generate_reply(&self, instructions: &str) -> Result<Reply, ApplicationError> {
        let messages = [
            ChatMessage::system(self.agent.instructions.clone()),
            ChatMessage::system(instructions.to_string()),
        ];

        let text = self
            .llm
            .complete(&messages)
            .await
            .map_err(|e| ApplicationError::ExternalServiceError(e.to_string()))?;

        let audio = self
            .tts
            .synthesize(&text)
            .await
            .map_err(|e| ApplicationError::ExternalServiceError(e.to_string()))?;

        self.audio_output
            .publish(&self.id, &audio)
            .await
            .map_err(|e| ApplicationError::InternalError(e.to_string()))?;

        tracing::info!(
            session_id = %self.id,
            reply_chars = text.chars().count(),
            audio_bytes = audio.len(),
            "Reply generated"
        );

        Ok(Reply {
            text,
            audio_bytes: audio.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::application::ports::{
        AudioOutputError, ChatError, SynthesisError,
    };
    use crate::application::session::SessionBuilder;
    use crate::config::AgentConfig;
    use crate::domain::call::ParticipantKind;

    struct FakeChat {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ChatModelPort for FakeChat {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ChatError::ServiceError("backend down".to_string()));
            }
            assert_eq!(messages.len(), 2);
            Ok("Hello! How can I help you today?".to_string())
        }
    }

    struct FakeSynth {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SpeechSynthesizerPort for FakeSynth {
        async fn synthesize(&self, _text: &str) -> Result<Vec<u8>, SynthesisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![0u8; 128])
        }
    }

    #[derive(Default)]
    struct CapturingOutput {
        published: Mutex<Vec<usize>>,
    }

    #[async_trait]
    impl AudioOutputPort for CapturingOutput {
        async fn publish(&self, _session_id: &str, wav: &[u8]) -> Result<(), AudioOutputError> {
            self.published.lock().unwrap().push(wav.len());
            Ok(())
        }
    }

    fn build_session(
        kind: ParticipantKind,
        chat_fail: bool,
    ) -> (CallSession, Arc<FakeChat>, Arc<FakeSynth>, Arc<CapturingOutput>) {
        let chat = Arc::new(FakeChat {
            calls: AtomicUsize::new(0),
            fail: chat_fail,
        });
        let synth = Arc::new(FakeSynth {
            calls: AtomicUsize::new(0),
        });
        let output = Arc::new(CapturingOutput::default());

        let ctx = JobContext {
            room: "call-center".to_string(),
            participant: Participant::new("caller", kind),
        };

        let session = SessionBuilder::new(AgentConfig::default())
            .with_llm(chat.clone())
            .with_tts(synth.clone())
            .with_audio_output(output.clone())
            .build(ctx)
            .unwrap();

        (session, chat, synth, output)
    }

    #[tokio::test]
    async fn test_start_marks_session_running() {
        let (mut session, _, _, _) = build_session(ParticipantKind::Sip, false);
        assert!(!session.is_running());
        session.start().await.unwrap();
        assert!(session.is_running());
    }

    #[tokio::test]
    async fn test_sip_call_uses_telephony_noise_cancellation() {
        let (session, _, _, _) = build_session(ParticipantKind::Sip, false);
        assert_eq!(
            session.noise_cancellation(),
            NoiseCancellation::BvcTelephony
        );

        let (session, _, _, _) = build_session(ParticipantKind::Standard, false);
        assert_eq!(session.noise_cancellation(), NoiseCancellation::Bvc);
    }

    #[tokio::test]
    async fn test_generate_reply_one_chat_one_synthesis() {
        let (mut session, chat, synth, output) = build_session(ParticipantKind::Sip, false);
        session.start().await.unwrap();

        let reply = session
            .generate_reply(crate::application::session::GREETING_INSTRUCTIONS)
            .await
            .unwrap();

        assert_eq!(chat.calls.load(Ordering::SeqCst), 1);
        assert_eq!(synth.calls.load(Ordering::SeqCst), 1);
        assert_eq!(reply.audio_bytes, 128);
        assert!(!reply.text.is_empty());
        assert_eq!(output.published.lock().unwrap().as_slice(), &[128]);
    }

    #[tokio::test]
    async fn test_backend_failure_propagates_without_synthesis() {
        let (mut session, chat, synth, _) = build_session(ParticipantKind::Sip, true);
        session.start().await.unwrap();

        let result = session.generate_reply("greet").await;
        assert!(matches!(
            result,
            Err(ApplicationError::ExternalServiceError(_))
        ));
        assert_eq!(chat.calls.load(Ordering::SeqCst), 1);
        // LLM 失败后不应再调用合成
        assert_eq!(synth.calls.load(Ordering::SeqCst), 0);
    }
}
