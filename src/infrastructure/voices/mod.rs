//! 音色仓库实现

pub mod file_store;

pub use file_store::FileVoiceStore;
