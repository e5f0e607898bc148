//! Voice Queries

/// 列出可用音色
#[derive(Debug, Clone, Copy)]
pub struct ListVoices;
