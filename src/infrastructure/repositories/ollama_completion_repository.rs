use super::completion_repository::CompletionRepository;
use crate::domain::shared::SamplingOptions;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Body of Ollama's native `/api/generate` call
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

/// Ollama implementation of the completion repository
pub struct OllamaCompletionRepository {
    client: Client,
    host: String,
    model: String,
}

impl OllamaCompletionRepository {
    pub fn new(client: Client, host: String, model: String) -> Self {
        Self {
            client,
            host: host.trim_end_matches('/').to_string(),
            model,
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.host)
    }
}

#[async_trait]
impl CompletionRepository for OllamaCompletionRepository {
    async fn complete(&self, prompt: &str, options: &SamplingOptions) -> Result<String, String> {
        let start_time = std::time::Instant::now();
        let url = self.generate_url();

        tracing::info!(
            model = %self.model,
            prompt_length = prompt.len(),
            temperature = options.temperature,
            num_predict = options.max_tokens,
            "Calling Ollama generate"
        );

        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: options.temperature,
                num_predict: options.max_tokens,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_connect() {
                    "connection failed"
                } else if e.is_timeout() {
                    "request timed out"
                } else {
                    "request failed"
                };
                tracing::error!(error = %e, url = %url, reason, "Ollama generate call failed");
                format!("Ollama {}: {}", reason, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status.as_u16(),
                detail = %detail,
                "Ollama returned an error status"
            );
            return Err(format!("Ollama returned status {}: {}", status.as_u16(), detail));
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Ollama response");
            format!("Failed to parse Ollama response: {}", e)
        })?;

        let text = parsed
            .response
            .ok_or_else(|| "Ollama response has no 'response' field".to_string())?;

        tracing::info!(
            provider = "ollama",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            response_length = text.len(),
            "Completion finished"
        );

        Ok(text)
    }
}
