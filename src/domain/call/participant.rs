//! Call Context - 参与者与降噪策略

use serde::{Deserialize, Serialize};

/// 呼入方接入类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantKind {
    /// 电话网关接入（SIP）
    Sip,
    /// 原生 App / 浏览器接入
    Standard,
}

impl ParticipantKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "sip" => Some(Self::Sip),
            "standard" => Some(Self::Standard),
            _ => None,
        }
    }
}

/// 降噪策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseCancellation {
    /// 通用 BVC
    Bvc,
    /// 电话线路调优的 BVC
    BvcTelephony,
}

impl NoiseCancellation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bvc => "BVC",
            Self::BvcTelephony => "BVCTelephony",
        }
    }
}

/// 按参与者接入类型选择降噪策略
///
/// SIP 线路使用电话调优变体，其余使用通用变体
pub fn noise_cancellation_for(kind: ParticipantKind) -> NoiseCancellation {
    match kind {
        ParticipantKind::Sip => NoiseCancellation::BvcTelephony,
        ParticipantKind::Standard => NoiseCancellation::Bvc,
    }
}

/// 呼入参与者元数据
#[derive(Debug, Clone)]
pub struct Participant {
    pub identity: String,
    pub kind: ParticipantKind,
}

impl Participant {
    pub fn new(identity: impl Into<String>, kind: ParticipantKind) -> Self {
        Self {
            identity: identity.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sip_gets_telephony_variant() {
        assert_eq!(
            noise_cancellation_for(ParticipantKind::Sip),
            NoiseCancellation::BvcTelephony
        );
    }

    #[test]
    fn test_standard_gets_general_variant() {
        assert_eq!(
            noise_cancellation_for(ParticipantKind::Standard),
            NoiseCancellation::Bvc
        );
    }

    #[test]
    fn test_participant_kind_parse() {
        assert_eq!(ParticipantKind::parse("sip"), Some(ParticipantKind::Sip));
        assert_eq!(ParticipantKind::parse("SIP"), Some(ParticipantKind::Sip));
        assert_eq!(
            ParticipantKind::parse("standard"),
            Some(ParticipantKind::Standard)
        );
        assert_eq!(ParticipantKind::parse("webrtc"), None);
    }
}
