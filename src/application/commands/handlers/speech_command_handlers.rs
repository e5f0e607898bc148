//! Speech Command Handlers

use std::sync::Arc;

use crate::application::commands::CreateSpeech;
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechModelPort, VoiceStorePort, Waveform};
use crate::domain::speech::{AudioFormat, SpeechText, VoiceName};

/// 合成结果
#[derive(Debug)]
pub struct SpeechResult {
    /// 生成的波形（编码为传输格式是表示层的事）
    pub waveform: Waveform,
    /// 输出格式
    pub format: AudioFormat,
    /// 是否使用了 speaker embedding 条件化
    pub conditioned: bool,
}

/// CreateSpeech Handler
///
/// 验证 → 解析音色 → 调用模型生成。
/// 缺失的 voice 文件静默回退为无条件生成；模型错误不做恢复，直接上抛
pub struct CreateSpeechHandler {
    model: Arc<dyn SpeechModelPort>,
    voice_store: Arc<dyn VoiceStorePort>,
}

impl CreateSpeechHandler {
    pub fn new(model: Arc<dyn SpeechModelPort>, voice_store: Arc<dyn VoiceStorePort>) -> Self {
        Self { model, voice_store }
    }

    pub async fn handle(&self, command: CreateSpeech) -> Result<SpeechResult, ApplicationError> {
        // 输入验证先于任何模型调用
        let text =
            SpeechText::new(command.input).map_err(ApplicationError::validation)?;
        let voice =
            VoiceName::new(command.voice).map_err(ApplicationError::validation)?;
        // response_format 只做尽力解析；不认识的值回退为 WAV 输出，
        // 不拒绝请求（客户端默认 mp3 也能拿到音频）
        let format = AudioFormat::parse(&command.response_format).unwrap_or_else(|| {
            tracing::debug!(
                response_format = %command.response_format,
                "Unsupported response_format, returning wav"
            );
            AudioFormat::Wav
        });

        // 音色文件缺失不是错误；损坏的文件上抛
        let embedding = self.voice_store.load(&voice).await?;
        let conditioned = embedding.is_some();

        if !conditioned {
            tracing::debug!(voice = %voice, "Voice embedding not found, generating unconditioned");
        }

        let waveform = self.model.generate(&text, embedding.as_ref()).await?;

        tracing::info!(
            chars = text.char_count(),
            voice = %voice,
            conditioned = conditioned,
            duration_ms = waveform.duration_ms(),
            "Speech generated"
        );

        Ok(SpeechResult {
            waveform,
            format,
            conditioned,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::application::ports::{
        ModelError, SpeakerEmbedding, VoiceStoreError,
    };

    /// 记录调用的假模型
    struct RecordingModel {
        calls: AtomicUsize,
        conditioned_calls: AtomicUsize,
    }

    impl RecordingModel {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                conditioned_calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl SpeechModelPort for RecordingModel {
        async fn generate(
            &self,
            _text: &SpeechText,
            speaker_embedding: Option<&SpeakerEmbedding>,
        ) -> Result<Waveform, ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if speaker_embedding.is_some() {
                self.conditioned_calls.fetch_add(1, Ordering::SeqCst);
            }
            Ok(Waveform {
                samples: vec![0.0; 2400],
                sample_rate: 24000,
            })
        }

        fn device(&self) -> &str {
            "cpu"
        }
    }

    /// 只认识 "known" 音色的假存储
    struct FixedVoiceStore;

    #[async_trait]
    impl VoiceStorePort for FixedVoiceStore {
        async fn load(
            &self,
            voice: &VoiceName,
        ) -> Result<Option<SpeakerEmbedding>, VoiceStoreError> {
            if voice.as_str() == "known" {
                Ok(Some(SpeakerEmbedding::new(vec![0.1, 0.2])))
            } else {
                Ok(None)
            }
        }

        async fn list(&self) -> Result<Vec<String>, VoiceStoreError> {
            Ok(vec!["known".to_string()])
        }
    }

    fn command(input: &str, voice: &str) -> CreateSpeech {
        CreateSpeech {
            model: "chatterbox".to_string(),
            input: input.to_string(),
            voice: voice.to_string(),
            response_format: "wav".to_string(),
            speed: 1.0,
        }
    }

    #[tokio::test]
    async fn test_empty_input_rejected_without_model_call() {
        let model = RecordingModel::new();
        let handler = CreateSpeechHandler::new(model.clone(), Arc::new(FixedVoiceStore));

        let result = handler.handle(command("   ", "default")).await;
        assert!(matches!(
            result,
            Err(ApplicationError::ValidationError(_))
        ));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_voice_generates_unconditioned() {
        let model = RecordingModel::new();
        let handler = CreateSpeechHandler::new(model.clone(), Arc::new(FixedVoiceStore));

        let result = handler
            .handle(command("Hello there", "nonexistent"))
            .await
            .unwrap();
        assert!(!result.conditioned);
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
        assert_eq!(model.conditioned_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_known_voice_passes_embedding() {
        let model = RecordingModel::new();
        let handler = CreateSpeechHandler::new(model.clone(), Arc::new(FixedVoiceStore));

        let result = handler.handle(command("Hello", "known")).await.unwrap();
        assert!(result.conditioned);
        assert_eq!(model.conditioned_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unsupported_format_falls_back_to_wav() {
        let model = RecordingModel::new();
        let handler = CreateSpeechHandler::new(model.clone(), Arc::new(FixedVoiceStore));

        // 客户端默认请求 mp3 也必须成功，输出仍是 WAV
        let mut cmd = command("Hello", "default");
        cmd.response_format = "mp3".to_string();
        let result = handler.handle(cmd).await.unwrap();
        assert_eq!(result.format, AudioFormat::Wav);
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_path_escaping_voice_rejected() {
        let model = RecordingModel::new();
        let handler = CreateSpeechHandler::new(model.clone(), Arc::new(FixedVoiceStore));

        let result = handler.handle(command("Hello", "../secret")).await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }
}
