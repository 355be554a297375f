use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Narration style for the insight clip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Insightful,
    Motivational,
    Serious,
    #[default]
    Default,
}

/// Synthesis parameters the speech backend honors.
///
/// `tld` selects the regional Google Translate host, which changes the accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceSettings {
    pub tld: &'static str,
    pub slow: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported emotion '{0}'. Expected one of: insightful, motivational, serious, default")]
pub struct UnknownEmotion(pub String);

impl Emotion {
    pub const ALL: [Emotion; 4] = [
        Emotion::Insightful,
        Emotion::Motivational,
        Emotion::Serious,
        Emotion::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Insightful => "insightful",
            Emotion::Motivational => "motivational",
            Emotion::Serious => "serious",
            Emotion::Default => "default",
        }
    }

    pub fn preset(&self) -> VoiceSettings {
        match self {
            Emotion::Insightful => VoiceSettings { tld: "com.au", slow: false },
            Emotion::Motivational => VoiceSettings { tld: "co.uk", slow: false },
            Emotion::Serious => VoiceSettings { tld: "us", slow: true },
            Emotion::Default => VoiceSettings { tld: "com.au", slow: false },
        }
    }

    /// Apply the emotion's text shaping before synthesis
    pub fn shape_text(&self, text: &str) -> String {
        match self {
            Emotion::Insightful => text.replace('.', ".\n\n"),
            Emotion::Motivational => text.to_uppercase().replace('!', "!!!"),
            Emotion::Serious => format!("⚠️ {}", text.replace(". ", ". \n\n")),
            Emotion::Default => text.to_string(),
        }
    }

    /// Suggested download name for the synthesized clip
    pub fn file_name(&self) -> String {
        format!("{}_insight.mp3", self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.as_str() == s)
            .ok_or_else(|| UnknownEmotion(s.to_string()))
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
