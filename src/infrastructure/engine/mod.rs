//! 本地合成引擎：设备探测与模型生命周期

pub mod chatterbox;
pub mod device;

pub use chatterbox::{ChatterboxEngine, ChatterboxEngineConfig};
pub use device::Device;
