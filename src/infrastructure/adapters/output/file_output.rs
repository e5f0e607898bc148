//! File Audio Output - console 模式的会话音频出口
//!
//! 把每段回复音频落盘到 `<output_dir>/<session_id>-<seq>.wav`，
//! 便于离线回放排查

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::application::ports::{AudioOutputError, AudioOutputPort};

/// 文件音频出口
pub struct FileAudioOutput {
    output_dir: PathBuf,
    sequence: AtomicU64,
}

impl FileAudioOutput {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            sequence: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl AudioOutputPort for FileAudioOutput {
    async fn publish(&self, session_id: &str, wav: &[u8]) -> Result<(), AudioOutputError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| AudioOutputError::IoError(format!("Failed to create output dir: {}", e)))?;

        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        let path = self
            .output_dir
            .join(format!("{}-{:03}.wav", session_id, seq));

        tokio::fs::write(&path, wav)
            .await
            .map_err(|e| AudioOutputError::IoError(format!("Failed to write audio: {}", e)))?;

        tracing::info!(path = %path.display(), size = wav.len(), "Reply audio written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_writes_sequenced_files() {
        let dir = tempfile::tempdir().unwrap();
        let output = FileAudioOutput::new(dir.path());

        output.publish("call-1", b"RIFFaaaa").await.unwrap();
        output.publish("call-1", b"RIFFbbbb").await.unwrap();

        let first = std::fs::read(dir.path().join("call-1-000.wav")).unwrap();
        let second = std::fs::read(dir.path().join("call-1-001.wav")).unwrap();
        assert_eq!(first, b"RIFFaaaa");
        assert_eq!(second, b"RIFFbbbb");
    }

    #[tokio::test]
    async fn test_publish_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/output");
        let output = FileAudioOutput::new(&nested);

        output.publish("call-2", b"RIFF").await.unwrap();
        assert!(nested.join("call-2-000.wav").exists());
    }
}
