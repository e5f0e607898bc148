//! HTTP Handlers

pub mod health;
pub mod speech;
pub mod voices;

pub use health::health;
pub use speech::create_speech;
pub use voices::list_voices;
