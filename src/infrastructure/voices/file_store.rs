//! 文件系统音色仓库
//!
//! voices 目录下每个 `<name>.pt` 文件是一个小端 f32 向量形式的
//! speaker embedding；目录由运维挂载，服务只读

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{SpeakerEmbedding, VoiceStoreError, VoiceStorePort};
use crate::domain::speech::VoiceName;

/// 音色文件扩展名
const VOICE_EXTENSION: &str = "pt";

/// 基于文件系统的音色仓库
pub struct FileVoiceStore {
    voices_dir: PathBuf,
}

impl FileVoiceStore {
    pub fn new(voices_dir: impl AsRef<Path>) -> Self {
        Self {
            voices_dir: voices_dir.as_ref().to_path_buf(),
        }
    }

    fn voice_path(&self, voice: &VoiceName) -> PathBuf {
        self.voices_dir
            .join(format!("{}.{}", voice.as_str(), VOICE_EXTENSION))
    }
}

#[async_trait]
impl VoiceStorePort for FileVoiceStore {
    async fn load(&self, voice: &VoiceName) -> Result<Option<SpeakerEmbedding>, VoiceStoreError> {
        let path = self.voice_path(voice);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(VoiceStoreError::IoError(format!(
                    "Failed to read voice file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let embedding =
            SpeakerEmbedding::from_bytes(&bytes).map_err(|reason| {
                VoiceStoreError::InvalidEmbedding {
                    voice: voice.as_str().to_string(),
                    reason,
                }
            })?;

        tracing::debug!(
            voice = voice.as_str(),
            dimension = embedding.dimension(),
            "Loaded speaker embedding"
        );
        Ok(Some(embedding))
    }

    async fn list(&self) -> Result<Vec<String>, VoiceStoreError> {
        let mut entries = match tokio::fs::read_dir(&self.voices_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(VoiceStoreError::IoError(format!(
                    "Failed to scan voices dir {}: {}",
                    self.voices_dir.display(),
                    e
                )))
            }
        };

        let mut voices = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| VoiceStoreError::IoError(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(VOICE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                voices.push(stem.to_string());
            }
        }

        voices.sort();
        Ok(voices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_embedding(dir: &std::path::Path, name: &str, values: &[f32]) {
        let mut bytes = Vec::new();
        for v in values {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        std::fs::write(dir.join(format!("{}.pt", name)), bytes).unwrap();
    }

    #[tokio::test]
    async fn test_load_existing_voice() {
        let dir = tempfile::tempdir().unwrap();
        write_embedding(dir.path(), "alice", &[0.5, -1.0, 2.0]);

        let store = FileVoiceStore::new(dir.path());
        let voice = VoiceName::new("alice").unwrap();
        let embedding = store.load(&voice).await.unwrap().unwrap();
        assert_eq!(embedding.values(), &[0.5, -1.0, 2.0]);
    }

    #[tokio::test]
    async fn test_load_missing_voice_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileVoiceStore::new(dir.path());
        let voice = VoiceName::new("nobody").unwrap();
        assert!(store.load(&voice).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_truncated_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.pt"), [1u8, 2, 3]).unwrap();

        let store = FileVoiceStore::new(dir.path());
        let voice = VoiceName::new("bad").unwrap();
        let err = store.load(&voice).await.unwrap_err();
        assert!(matches!(err, VoiceStoreError::InvalidEmbedding { .. }));
    }

    #[tokio::test]
    async fn test_list_returns_pt_basenames_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_embedding(dir.path(), "bob", &[0.1]);
        write_embedding(dir.path(), "alice", &[0.2]);
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let store = FileVoiceStore::new(dir.path());
        assert_eq!(store.list().await.unwrap(), vec!["alice", "bob"]);
    }

    #[tokio::test]
    async fn test_list_missing_dir_is_empty() {
        let store = FileVoiceStore::new("/nonexistent/voices/dir");
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_rescans_each_call() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileVoiceStore::new(dir.path());
        assert!(store.list().await.unwrap().is_empty());

        write_embedding(dir.path(), "late", &[0.3]);
        assert_eq!(store.list().await.unwrap(), vec!["late"]);
    }
}
