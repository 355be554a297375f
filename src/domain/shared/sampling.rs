use serde::{Deserialize, Serialize};

/// Sampling parameters forwarded to the completion backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl SamplingOptions {
    /// Used by both the report and the insight paths
    pub const STANDARD: SamplingOptions = SamplingOptions {
        temperature: 0.7,
        max_tokens: 1000,
    };
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self::STANDARD
    }
}
