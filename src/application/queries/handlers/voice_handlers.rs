//! Voice Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::VoiceStorePort;
use crate::application::queries::ListVoices;

/// ListVoices Handler
///
/// 每次查询重新扫描音色目录；目录缺失返回空列表
pub struct ListVoicesHandler {
    voice_store: Arc<dyn VoiceStorePort>,
}

impl ListVoicesHandler {
    pub fn new(voice_store: Arc<dyn VoiceStorePort>) -> Self {
        Self { voice_store }
    }

    pub async fn handle(&self, _query: ListVoices) -> Result<Vec<String>, ApplicationError> {
        let voices = self.voice_store.list().await?;
        Ok(voices)
    }
}
