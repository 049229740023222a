// Request and response models for the summarizer API
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Word-count preset for the generated summary.
///
/// Wire values are the original interface's: `court`, `moyen`, `long`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthTier {
    #[serde(rename = "court")]
    Short,
    #[default]
    #[serde(rename = "moyen")]
    Medium,
    #[serde(rename = "long")]
    Long,
}

impl LengthTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthTier::Short => "court",
            LengthTier::Medium => "moyen",
            LengthTier::Long => "long",
        }
    }
}

/// Supported summary languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    /// Two-letter code, also the Wikipedia subdomain.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Spanish => "es",
        }
    }
}

/// Prompt-instruction preset selecting the summary's emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThematicMode {
    #[default]
    #[serde(rename = "general")]
    General,
    #[serde(rename = "historique")]
    Historical,
    #[serde(rename = "scientifique")]
    Scientific,
    #[serde(rename = "biographique")]
    Biographical,
    #[serde(rename = "scolaire")]
    Educational,
    #[serde(rename = "culture")]
    Cultural,
    #[serde(rename = "faits")]
    KeyFacts,
}

impl ThematicMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThematicMode::General => "general",
            ThematicMode::Historical => "historique",
            ThematicMode::Scientific => "scientifique",
            ThematicMode::Biographical => "biographique",
            ThematicMode::Educational => "scolaire",
            ThematicMode::Cultural => "culture",
            ThematicMode::KeyFacts => "faits",
        }
    }
}

/// Body of `POST /api/summarize`.
///
/// Only `theme` is required; the other fields fall back to their presets.
/// Unknown tier/language/mode values are rejected at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub theme: String,

    #[serde(default)]
    pub length_mode: LengthTier,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub mode: ThematicMode,
}

/// Provenance of the generated summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummarySource {
    /// Summarized from a located Wikipedia article.
    #[serde(rename = "wikipedia")]
    Wikipedia,
    /// Generated directly by the model, no article found.
    #[serde(rename = "mistral_only")]
    MistralOnly,
}

/// Successful response payload of `POST /api/summarize`.
///
/// This full payload is what the summary cache memoizes, so a cache hit
/// replays the original response verbatim (including `processing_time`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub success: bool,
    pub title: String,
    /// HTML-formatted summary body.
    pub summary: String,
    /// Source article URL; `null` for model-only answers.
    pub url: Option<String>,
    pub source: SummarySource,
    /// How the article was located (`direct`, `disambiguation`,
    /// `suggestion (<title>)`) or `direct_ai` for model-only answers.
    pub method: String,
    /// Seconds spent producing the summary, rounded to two decimals.
    pub processing_time: f64,
    pub length_mode: LengthTier,
    pub language: Language,
    pub mode: ThematicMode,
}

/// Payload of `GET /api/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub requests: u64,
    pub cache_hits: u64,
    pub wikipedia_success: u64,
    pub mistral_only: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: SummarizeRequest = serde_json::from_str(r#"{"theme": "Rust"}"#).unwrap();
        assert_eq!(req.theme, "Rust");
        assert_eq!(req.length_mode, LengthTier::Medium);
        assert_eq!(req.language, Language::English);
        assert_eq!(req.mode, ThematicMode::General);
    }

    #[test]
    fn test_request_wire_values() {
        let req: SummarizeRequest = serde_json::from_str(
            r#"{"theme": "Marie Curie", "length_mode": "long", "language": "fr", "mode": "biographique"}"#,
        )
        .unwrap();
        assert_eq!(req.length_mode, LengthTier::Long);
        assert_eq!(req.language, Language::French);
        assert_eq!(req.mode, ThematicMode::Biographical);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result: std::result::Result<SummarizeRequest, _> =
            serde_json::from_str(r#"{"theme": "Rust", "mode": "poetique"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_source_serialization() {
        assert_eq!(
            serde_json::to_value(SummarySource::Wikipedia).unwrap(),
            "wikipedia"
        );
        assert_eq!(
            serde_json::to_value(SummarySource::MistralOnly).unwrap(),
            "mistral_only"
        );
    }
}
