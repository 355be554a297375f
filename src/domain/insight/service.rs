use super::emotion::Emotion;
use super::error::InsightServiceError;
use crate::domain::shared::SamplingOptions;
use crate::infrastructure::repositories::{CompletionRepository, TtsRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Narrated insight ready to be sent to the client
#[derive(Debug, Clone)]
pub struct InsightAudio {
    pub emotion: Emotion,
    /// Text after emotion shaping, exactly as handed to the synthesizer
    pub spoken_text: String,
    pub audio_data: Vec<u8>,
}

/// Prompt asking the model for a short speech about the idea
pub fn speech_prompt(idea: &str) -> String {
    format!(
        "Provide an insightful speech on: {idea}\n\
         Include:\n\
         - A thought-provoking opening statement\n\
         - 3 key challenges that could arise\n\
         - 3 potential solutions or best practices\n\
         - A motivational closing statement"
    )
}

pub struct InsightService {
    completion_repo: Arc<dyn CompletionRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    sampling: SamplingOptions,
}

impl InsightService {
    pub fn new(
        completion_repo: Arc<dyn CompletionRepository>,
        tts_repo: Arc<dyn TtsRepository>,
    ) -> Self {
        Self {
            completion_repo,
            tts_repo,
            sampling: SamplingOptions::STANDARD,
        }
    }
}

#[async_trait]
pub trait InsightServiceApi: Send + Sync {
    /// Generate a spoken insight about a business idea
    ///
    /// This operation:
    /// - Asks the completion backend for a short speech (single attempt)
    /// - Shapes the text according to the emotion
    /// - Synthesizes it with the emotion's voice settings
    ///
    /// Returns the MP3 bytes along with the shaped text
    async fn generate_insight(
        &self,
        idea: &str,
        emotion: Emotion,
    ) -> Result<InsightAudio, InsightServiceError>;
}

#[async_trait]
impl InsightServiceApi for InsightService {
    async fn generate_insight(
        &self,
        idea: &str,
        emotion: Emotion,
    ) -> Result<InsightAudio, InsightServiceError> {
        tracing::info!(
            idea = %idea,
            emotion = %emotion,
            "Insight request"
        );

        // 1. Generate the speech text
        let speech = self
            .completion_repo
            .complete(&speech_prompt(idea), &self.sampling)
            .await
            .map_err(InsightServiceError::Completion)?;

        // 2. Shape it for the requested emotion
        let spoken_text = emotion.shape_text(&speech);

        tracing::info!(
            emotion = %emotion,
            speech_length = speech.len(),
            spoken_length = spoken_text.len(),
            "Speech text shaped"
        );

        // 3. Synthesize with the emotion's voice settings
        let voice = emotion.preset();
        let audio_data = self
            .tts_repo
            .synthesize(&spoken_text, &voice)
            .await
            .map_err(InsightServiceError::Synthesis)?;

        Ok(InsightAudio {
            emotion,
            spoken_text,
            audio_data,
        })
    }
}
