use async_trait::async_trait;
use parking_lot::Mutex;
use startup_insight_backend::domain::{insight::VoiceSettings, shared::SamplingOptions};
use startup_insight_backend::infrastructure::repositories::{CompletionRepository, TtsRepository};

pub const SPEECH_REPLY: &str = "What if coffee found you first! Three challenges matter. Start small.";
pub const SECTION_REPLY: &str = "Here is the analysis:\n1) Point one\ncontinued\n2.) Point two";

/// Completion backend that answers speech prompts with [`SPEECH_REPLY`] and
/// every other prompt with [`SECTION_REPLY`]
#[derive(Default)]
pub struct StubCompletion {
    /// Prompts containing this marker fail
    pub fail_on: Option<&'static str>,
    pub prompts: Mutex<Vec<String>>,
}

impl StubCompletion {
    pub fn failing_on(marker: &'static str) -> Self {
        Self {
            fail_on: Some(marker),
            ..Default::default()
        }
    }
}

#[async_trait]
impl CompletionRepository for StubCompletion {
    async fn complete(&self, prompt: &str, _options: &SamplingOptions) -> Result<String, String> {
        self.prompts.lock().push(prompt.to_string());

        if let Some(marker) = self.fail_on {
            if prompt.contains(marker) {
                return Err("Ollama connection failed: connection refused".to_string());
            }
        }

        if prompt.starts_with("Provide an insightful speech on:") {
            Ok(SPEECH_REPLY.to_string())
        } else {
            Ok(SECTION_REPLY.to_string())
        }
    }
}

/// Speech backend that records what it was asked to say
#[derive(Default)]
pub struct RecordingTts {
    pub fail: bool,
    pub calls: Mutex<Vec<(String, VoiceSettings)>>,
}

impl RecordingTts {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl TtsRepository for RecordingTts {
    async fn synthesize(&self, text: &str, voice: &VoiceSettings) -> Result<Vec<u8>, String> {
        self.calls.lock().push((text.to_string(), *voice));
        if self.fail {
            Err("Speech synthesis error: backend returned status 503".to_string())
        } else {
            Ok(mock_audio_bytes())
        }
    }
}

pub fn mock_audio_bytes() -> Vec<u8> {
    // Minimal valid MP3 file (silence)
    vec![
        0xFF, 0xFB, 0x90, 0x00, // MP3 frame header
        0x00, 0x00, 0x00, 0x00, // Some padding
    ]
}
