// Wire-format tests for the summarize API payloads
// Author: kelexine (https://github.com/kelexine)

use wiki2brief::summarizer::models::{
    Language, LengthTier, SummarizeRequest, SummarizeResponse, SummarySource, ThematicMode,
};

#[test]
fn test_minimal_request_uses_presets() {
    let request: SummarizeRequest = serde_json::from_str(r#"{"theme": "Mars"}"#).unwrap();
    assert_eq!(request.length_mode, LengthTier::Medium);
    assert_eq!(request.language, Language::English);
    assert_eq!(request.mode, ThematicMode::General);
}

#[test]
fn test_full_request_roundtrip() {
    let request: SummarizeRequest = serde_json::from_str(
        r#"{"theme": "Apollo 11", "length_mode": "court", "language": "es", "mode": "historique"}"#,
    )
    .unwrap();
    assert_eq!(request.length_mode, LengthTier::Short);
    assert_eq!(request.language, Language::Spanish);
    assert_eq!(request.mode, ThematicMode::Historical);
}

#[test]
fn test_unknown_length_mode_rejected() {
    let result: Result<SummarizeRequest, _> =
        serde_json::from_str(r#"{"theme": "Mars", "length_mode": "gigantesque"}"#);
    assert!(result.is_err());
}

#[test]
fn test_unknown_language_rejected() {
    let result: Result<SummarizeRequest, _> =
        serde_json::from_str(r#"{"theme": "Mars", "language": "de"}"#);
    assert!(result.is_err());
}

#[test]
fn test_missing_theme_rejected() {
    let result: Result<SummarizeRequest, _> = serde_json::from_str(r#"{"language": "en"}"#);
    assert!(result.is_err());
}

#[test]
fn test_response_wire_shape() {
    let response = SummarizeResponse {
        success: true,
        title: "Mars".to_string(),
        summary: "<p>The red planet.</p>".to_string(),
        url: Some("https://en.wikipedia.org/wiki/Mars".to_string()),
        source: SummarySource::Wikipedia,
        method: "direct".to_string(),
        processing_time: 2.31,
        length_mode: LengthTier::Medium,
        language: Language::English,
        mode: ThematicMode::General,
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["source"], "wikipedia");
    assert_eq!(json["method"], "direct");
    assert_eq!(json["length_mode"], "moyen");
    assert_eq!(json["language"], "en");
    assert_eq!(json["mode"], "general");
    assert_eq!(json["processing_time"], 2.31);
}

#[test]
fn test_response_url_is_null_for_model_only() {
    let response = SummarizeResponse {
        success: true,
        title: "About: warp drives".to_string(),
        summary: "<p>Speculative.</p>".to_string(),
        url: None,
        source: SummarySource::MistralOnly,
        method: "direct_ai".to_string(),
        processing_time: 1.02,
        length_mode: LengthTier::Short,
        language: Language::English,
        mode: ThematicMode::General,
    };

    let json = serde_json::to_value(&response).unwrap();
    // The field must be present and explicitly null, not omitted.
    assert!(json.as_object().unwrap().contains_key("url"));
    assert!(json["url"].is_null());
    assert_eq!(json["source"], "mistral_only");
}
