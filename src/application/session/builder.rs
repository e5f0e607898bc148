//! Session Builder - 按配置组装呼叫会话

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{AudioOutputPort, ChatModelPort, SpeechSynthesizerPort};
use crate::config::AgentConfig;
use crate::domain::call::{TurnDetectorConfig, VadConfig};

use super::call_session::{AgentDefinition, CallSession, JobContext, SttHandle};

/// 会话构建器
///
/// STT/VAD/轮次检测来自配置与打包默认值；
/// LLM、TTS、音频出口三个端口由调用方注入
pub struct SessionBuilder {
    config: AgentConfig,
    vad: VadConfig,
    turn_detector: TurnDetectorConfig,
    agent: AgentDefinition,
    llm: Option<Arc<dyn ChatModelPort>>,
    tts: Option<Arc<dyn SpeechSynthesizerPort>>,
    audio_output: Option<Arc<dyn AudioOutputPort>>,
}

impl SessionBuilder {
    pub fn new(config: AgentConfig) -> Self {
        Self {
            config,
            vad: VadConfig::default(),
            turn_detector: TurnDetectorConfig::default(),
            agent: AgentDefinition::default(),
            llm: None,
            tts: None,
            audio_output: None,
        }
    }

    pub fn with_llm(mut self, llm: Arc<dyn ChatModelPort>) -> Self {
        self.llm = Some(llm);
        self
    }

    pub fn with_tts(mut self, tts: Arc<dyn SpeechSynthesizerPort>) -> Self {
        self.tts = Some(tts);
        self
    }

    pub fn with_audio_output(mut self, audio_output: Arc<dyn AudioOutputPort>) -> Self {
        self.audio_output = Some(audio_output);
        self
    }

    /// 覆盖 VAD 参数（缺省使用打包默认值）
    pub fn with_vad(mut self, vad: VadConfig) -> Self {
        self.vad = vad;
        self
    }

    /// 覆盖轮次检测参数（缺省使用打包默认值）
    pub fn with_turn_detector(mut self, turn_detector: TurnDetectorConfig) -> Self {
        self.turn_detector = turn_detector;
        self
    }

    /// 组装会话
    pub fn build(self, ctx: JobContext) -> Result<CallSession, ApplicationError> {
        let llm = self.llm.ok_or_else(|| {
            ApplicationError::InternalError("Session requires an LLM handle".to_string())
        })?;
        let tts = self.tts.ok_or_else(|| {
            ApplicationError::InternalError("Session requires a TTS handle".to_string())
        })?;
        let audio_output = self.audio_output.ok_or_else(|| {
            ApplicationError::InternalError("Session requires an audio output".to_string())
        })?;

        let stt = SttHandle::new(self.config.stt.clone());

        Ok(CallSession::assemble(
            ctx,
            stt,
            llm,
            tts,
            self.vad,
            self.turn_detector,
            audio_output,
            self.agent,
        ))
    }
}
