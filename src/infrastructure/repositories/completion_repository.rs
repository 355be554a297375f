use crate::domain::shared::SamplingOptions;
use async_trait::async_trait;

/// Repository for text completion.
/// Abstracts the underlying language model backend (Ollama, OpenAI-compatible servers, etc.)
///
/// Implementations make a single attempt per call; callers decide how to degrade on failure.
#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Complete a prompt and return the generated text
    ///
    /// # Arguments
    /// * `prompt` - The full prompt, formatting directives included
    /// * `options` - Sampling parameters (temperature, output length)
    ///
    /// # Errors
    /// Returns error if the backend is unreachable, answers with a non-success status,
    /// or the response carries no text
    async fn complete(&self, prompt: &str, options: &SamplingOptions) -> Result<String, String>;
}
