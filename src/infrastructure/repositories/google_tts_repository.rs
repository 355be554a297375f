use super::tts_repository::TtsRepository;
use crate::domain::insight::VoiceSettings;
use async_trait::async_trait;
use regex::Regex;
use reqwest::{header, Client};
use std::sync::OnceLock;

/// Google Translate TTS rejects requests longer than 100 characters
const MAX_BATCH_CHARS: usize = 100;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/120.0 Safari/537.36";

fn boundary_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[.!?,;:]+\s+|\n+").expect("valid boundary pattern"))
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Break a segment that is too long on its own into pieces of at most `MAX_BATCH_CHARS`,
/// first on word boundaries and then, for oversized words, on characters.
fn fit_segment(segment: &str) -> Vec<String> {
    if char_len(segment) <= MAX_BATCH_CHARS {
        return vec![segment.to_string()];
    }

    let mut pieces = Vec::new();
    for word in segment.split_inclusive(char::is_whitespace) {
        if char_len(word) <= MAX_BATCH_CHARS {
            pieces.push(word.to_string());
        } else {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(MAX_BATCH_CHARS) {
                pieces.push(chunk.iter().collect());
            }
        }
    }
    pieces
}

/// Split text into batches that respect sentence and clause boundaries.
/// Each batch is at most `MAX_BATCH_CHARS` characters and never blank.
fn split_into_batches(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if char_len(text) <= MAX_BATCH_CHARS {
        return vec![text.to_string()];
    }

    // Segments keep their trailing punctuation and whitespace so nothing is lost
    let mut segments = Vec::new();
    let mut last_end = 0;
    for mat in boundary_pattern().find_iter(text) {
        segments.push(&text[last_end..mat.end()]);
        last_end = mat.end();
    }
    if last_end < text.len() {
        segments.push(&text[last_end..]);
    }

    let mut batches = Vec::new();
    let mut current = String::new();

    for piece in segments.into_iter().flat_map(fit_segment) {
        if !current.is_empty() && char_len(&current) + char_len(&piece) > MAX_BATCH_CHARS {
            let batch = current.trim();
            if !batch.is_empty() {
                batches.push(batch.to_string());
            }
            current.clear();
        }
        current.push_str(&piece);
    }

    let batch = current.trim();
    if !batch.is_empty() {
        batches.push(batch.to_string());
    }

    batches
}

/// Google Translate TTS implementation of TTS repository.
///
/// The accent is chosen through the regional host (`translate.google.<tld>`) and slow
/// speech through the `ttsspeed` parameter. The endpoint exposes no pitch control.
pub struct GoogleTtsRepository {
    client: Client,
    language: String,
    base_url: Option<String>,
}

impl GoogleTtsRepository {
    pub fn new(client: Client, language: String) -> Self {
        Self {
            client,
            language,
            base_url: None,
        }
    }

    /// Send every request to `base_url` instead of the regional Google host
    pub fn with_base_url(client: Client, language: String, base_url: String) -> Self {
        Self {
            client,
            language,
            base_url: Some(base_url.trim_end_matches('/').to_string()),
        }
    }

    fn endpoint(&self, tld: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}/translate_tts", base),
            None => format!("https://translate.google.{}/translate_tts", tld),
        }
    }

    fn request_url(&self, text: &str, voice: &VoiceSettings, index: usize, total: usize) -> String {
        format!(
            "{}?ie=UTF-8&client=tw-ob&tl={}&q={}&total={}&idx={}&textlen={}&ttsspeed={}",
            self.endpoint(voice.tld),
            urlencoding::encode(&self.language),
            urlencoding::encode(text),
            total,
            index,
            char_len(text),
            if voice.slow { "0.3" } else { "1" },
        )
    }

    /// Call the TTS endpoint for a single text batch
    async fn call_google(
        &self,
        text: &str,
        voice: &VoiceSettings,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, String> {
        tracing::debug!(
            tld = voice.tld,
            slow = voice.slow,
            batch_index = index,
            text_length = text.len(),
            "Calling Google Translate TTS"
        );

        let response = self
            .client
            .get(self.request_url(text, voice, index, total))
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    tld = voice.tld,
                    batch_index = index,
                    "Google Translate TTS call failed"
                );
                format!("Speech synthesis error: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = %status.as_u16(),
                tld = voice.tld,
                batch_index = index,
                "Google Translate TTS returned an error status"
            );
            return Err(format!(
                "Speech synthesis error: backend returned status {}",
                status.as_u16()
            ));
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read audio from Google Translate TTS");
            format!("Failed to read audio stream: {}", e)
        })?;

        Ok(bytes.to_vec())
    }

    /// Synthesize multiple text batches and merge the audio results in order
    async fn synthesize_batches(
        &self,
        batches: &[String],
        voice: &VoiceSettings,
    ) -> Result<Vec<u8>, String> {
        let mut merged_audio = Vec::new();

        for (index, batch) in batches.iter().enumerate() {
            let audio_data = self.call_google(batch, voice, index, batches.len()).await?;
            merged_audio.extend(audio_data);
        }

        Ok(merged_audio)
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, voice: &VoiceSettings) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let batches = split_into_batches(text);
        if batches.is_empty() {
            return Err("Speech synthesis error: no text to speak".to_string());
        }

        tracing::info!(
            batch_count = batches.len(),
            text_length = text.len(),
            language = %self.language,
            tld = voice.tld,
            slow = voice.slow,
            "Text split into batches"
        );

        let audio_data = self.synthesize_batches(&batches, voice).await?;

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "google_translate",
            latency_ms = duration.as_millis(),
            characters_count = char_len(text),
            batch_count = batches.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
