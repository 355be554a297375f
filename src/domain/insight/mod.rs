pub mod emotion;
pub mod error;
pub mod service;

pub use emotion::{Emotion, UnknownEmotion, VoiceSettings};
pub use error::InsightServiceError;
pub use service::{speech_prompt, InsightAudio, InsightService, InsightServiceApi};
