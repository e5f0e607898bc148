//! Call Context
//!
//! 呼叫上下文：参与者、降噪策略选择、VAD/轮次检测默认参数

mod detectors;
mod participant;

pub use detectors::{TurnDetectorConfig, VadConfig};
pub use participant::{
    noise_cancellation_for, NoiseCancellation, Participant, ParticipantKind,
};
