// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use wiki2brief::error::HubError;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        HubError::Config("missing keys".to_string()),
        HubError::InvalidRequest("bad request".to_string()),
        HubError::WikipediaApi("lookup failed".to_string()),
        HubError::MistralApi("API error".to_string()),
        HubError::CredentialsExhausted("all keys failed".to_string()),
        HubError::Internal("unexpected".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_invalid_request_error() {
    let error = HubError::InvalidRequest("Missing theme field".to_string());
    assert!(format!("{}", error).contains("Missing theme field"));
}

#[test]
fn test_credentials_exhausted_error() {
    let error = HubError::CredentialsExhausted("all 3 API keys failed".to_string());
    assert!(format!("{}", error).contains("all 3 API keys failed"));
}

#[test]
fn test_wikipedia_api_error() {
    let error = HubError::WikipediaApi("Connection refused".to_string());
    assert!(format!("{}", error).contains("Connection refused"));
}

#[test]
fn test_mistral_api_error() {
    let error = HubError::MistralApi("HTTP 429: rate limited".to_string());
    assert!(format!("{}", error).contains("rate limited"));
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: HubError = json_error.into();
    assert!(matches!(error, HubError::Json(_)));
}
