//! Speech Context - Value Objects

use serde::{Deserialize, Serialize};

/// 待合成文本
///
/// 不变量: 去除首尾空白后非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechText(String);

impl SpeechText {
    pub fn new(text: impl Into<String>) -> Result<Self, &'static str> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err("Input text is empty");
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for SpeechText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 音色名称
///
/// 不变量:
/// - 非空，长度不超过 100 字符
/// - 不包含路径分隔符或 `..`（voice 会被拼接为 `<voices_dir>/<voice>.pt`，
///   不允许逃出目录）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceName(String);

impl VoiceName {
    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into();
        if name.is_empty() {
            return Err("Voice name cannot be empty");
        }
        if name.len() > 100 {
            return Err("Voice name too long");
        }
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err("Voice name contains path separators");
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 输出音频格式
///
/// 当前运行时只产出 WAV；OpenAI 客户端可能传 mp3/opus 等，
/// 解析失败由调用方回退为 WAV，不作为拒绝理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioFormat {
    Wav,
}

impl AudioFormat {
    pub fn parse(format: &str) -> Option<Self> {
        match format.to_ascii_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_text_rejects_empty() {
        assert!(SpeechText::new("").is_err());
        assert!(SpeechText::new("   ").is_err());
        assert!(SpeechText::new("\t\n").is_err());
    }

    #[test]
    fn test_speech_text_accepts_non_empty() {
        let text = SpeechText::new("Hello there").unwrap();
        assert_eq!(text.as_str(), "Hello there");
        assert_eq!(text.char_count(), 11);
    }

    #[test]
    fn test_voice_name_rejects_path_escapes() {
        assert!(VoiceName::new("../etc/passwd").is_err());
        assert!(VoiceName::new("a/b").is_err());
        assert!(VoiceName::new("a\\b").is_err());
        assert!(VoiceName::new("").is_err());
    }

    #[test]
    fn test_voice_name_accepts_plain_names() {
        assert_eq!(VoiceName::new("default").unwrap().as_str(), "default");
        assert_eq!(VoiceName::new("jade_01").unwrap().as_str(), "jade_01");
    }

    #[test]
    fn test_audio_format_parse() {
        assert_eq!(AudioFormat::parse("wav"), Some(AudioFormat::Wav));
        assert_eq!(AudioFormat::parse("WAV"), Some(AudioFormat::Wav));
        assert_eq!(AudioFormat::parse("mp3"), None);
        assert_eq!(AudioFormat::Wav.content_type(), "audio/wav");
    }
}
