//! Application State
//!
//! 包含 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::ports::{SpeechModelPort, VoiceStorePort};
use crate::application::{CreateSpeechHandler, ListVoicesHandler};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub model: Arc<dyn SpeechModelPort>,
    pub voice_store: Arc<dyn VoiceStorePort>,

    // ========== Command Handlers ==========
    pub create_speech_handler: CreateSpeechHandler,

    // ========== Query Handlers ==========
    pub list_voices_handler: ListVoicesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(model: Arc<dyn SpeechModelPort>, voice_store: Arc<dyn VoiceStorePort>) -> Self {
        Self {
            model: model.clone(),
            voice_store: voice_store.clone(),

            create_speech_handler: CreateSpeechHandler::new(model.clone(), voice_store.clone()),
            list_voices_handler: ListVoicesHandler::new(voice_store),
        }
    }
}
