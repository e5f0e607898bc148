//! Application Ports
//!
//! 端口定义：抽象接口由基础设施层实现

mod audio_output;
mod chat_model;
mod speech_model;
mod speech_synthesizer;
mod voice_store;

pub use audio_output::{AudioOutputError, AudioOutputPort};
pub use chat_model::{ChatError, ChatMessage, ChatModelPort, ChatRole};
pub use speech_model::{ModelError, SpeakerEmbedding, SpeechModelPort, Waveform};
pub use speech_synthesizer::{SpeechSynthesizerPort, SynthesisError};
pub use voice_store::{VoiceStoreError, VoiceStorePort};
