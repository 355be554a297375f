use super::normalizer::normalize_points;
use super::sections::{ReportSection, REPORT_SECTIONS};
use crate::domain::shared::SamplingOptions;
use crate::infrastructure::repositories::CompletionRepository;
use async_trait::async_trait;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

/// Stored in place of a section whose completion call failed
pub const FALLBACK_SECTION_TEXT: &str = "Error generating text.";

/// Generated report: section name to point-list text, in section order.
/// Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    sections: Vec<(&'static str, String)>,
}

impl Report {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(section, _)| *section == name)
            .map(|(_, text)| text.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.sections.iter().map(|(name, text)| (*name, text.as_str()))
    }

    fn insert(&mut self, name: &'static str, text: String) {
        self.sections.push((name, text));
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (name, text) in &self.sections {
            map.serialize_entry(name, text)?;
        }
        map.end()
    }
}

pub struct ReportService {
    completion_repo: Arc<dyn CompletionRepository>,
    sampling: SamplingOptions,
}

impl ReportService {
    pub fn new(completion_repo: Arc<dyn CompletionRepository>) -> Self {
        Self {
            completion_repo,
            sampling: SamplingOptions::STANDARD,
        }
    }
}

#[async_trait]
pub trait ReportServiceApi: Send + Sync {
    /// Generate every report section for a business idea
    ///
    /// Sections are generated one after another. A failed completion stores
    /// [`FALLBACK_SECTION_TEXT`] for that section and the remaining sections still run,
    /// so this never fails as a whole.
    async fn generate_report(&self, idea: &str) -> Report;
}

#[async_trait]
impl ReportServiceApi for ReportService {
    async fn generate_report(&self, idea: &str) -> Report {
        let start_time = std::time::Instant::now();
        tracing::info!(idea = %idea, "Processing report query");

        let mut report = Report::default();
        let mut failed_sections = 0;

        for section in REPORT_SECTIONS.iter() {
            let text = match self.generate_section(section, idea).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(
                        section = section.name,
                        error = %e,
                        "Error calling completion backend"
                    );
                    failed_sections += 1;
                    FALLBACK_SECTION_TEXT.to_string()
                }
            };
            report.insert(section.name, text);
        }

        tracing::info!(
            section_count = report.len(),
            failed_sections = failed_sections,
            latency_ms = start_time.elapsed().as_millis(),
            "Report generated"
        );

        report
    }
}

impl ReportService {
    async fn generate_section(&self, section: &ReportSection, idea: &str) -> Result<String, String> {
        let prompt = section.prompt(idea);
        let raw = self.completion_repo.complete(&prompt, &self.sampling).await?;

        tracing::debug!(
            section = section.name,
            raw_length = raw.len(),
            "Section completion received"
        );

        Ok(normalize_points(&raw))
    }
}
