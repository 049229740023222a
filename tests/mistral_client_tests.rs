// Mistral client tests against a mock upstream
// Author: kelexine (https://github.com/kelexine)

use wiki2brief::config::MistralConfig;
use wiki2brief::error::HubError;
use wiki2brief::mistral::MistralClient;

fn config_for(server_url: &str, keys: &[&str]) -> MistralConfig {
    MistralConfig {
        api_base_url: format!("{server_url}/v1"),
        api_keys: keys.iter().map(|k| k.to_string()).collect(),
        ..MistralConfig::default()
    }
}

const COMPLETION_BODY: &str = r#"{
    "id": "cmpl-xyz",
    "choices": [{
        "index": 0,
        "message": {"role": "assistant", "content": "A concise summary."},
        "finish_reason": "stop"
    }],
    "usage": {"prompt_tokens": 100, "completion_tokens": 20, "total_tokens": 120}
}"#;

#[tokio::test]
async fn test_completion_with_first_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer key-a")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(COMPLETION_BODY)
        .create_async()
        .await;

    let client = MistralClient::new(&config_for(&server.url(), &["key-a", "key-b", "key-c"])).unwrap();
    let text = client.complete("Summarize Rust.", 0.2).await.unwrap();

    assert_eq!(text, "A concise summary.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_rotation_after_failure() {
    let mut server = mockito::Server::new_async().await;

    // First key is rejected; the failure penalty advances the cursor past
    // the second key, so the retry lands on the third.
    let rejected = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer key-a")
        .with_status(429)
        .with_body(r#"{"message": "rate limited"}"#)
        .create_async()
        .await;
    let accepted = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer key-c")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(COMPLETION_BODY)
        .create_async()
        .await;

    let client = MistralClient::new(&config_for(&server.url(), &["key-a", "key-b", "key-c"])).unwrap();
    let text = client.complete("Summarize Rust.", 0.2).await.unwrap();

    assert_eq!(text, "A concise summary.");
    rejected.assert_async().await;
    accepted.assert_async().await;
}

#[tokio::test]
async fn test_exhausted_pool_surfaces_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body(r#"{"message": "upstream down"}"#)
        .expect(3)
        .create_async()
        .await;

    let client = MistralClient::new(&config_for(&server.url(), &["key-a", "key-b", "key-c"])).unwrap();
    let error = client.complete("Summarize Rust.", 0.2).await.unwrap_err();

    assert!(matches!(error, HubError::CredentialsExhausted(_)));
    assert!(error.to_string().contains("all 3 API keys failed"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_completion_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": "  "}}]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = MistralClient::new(&config_for(&server.url(), &["only-key"])).unwrap();
    let error = client.complete("Summarize Rust.", 0.2).await.unwrap_err();

    assert!(matches!(error, HubError::CredentialsExhausted(_)));
    assert!(error.to_string().contains("empty completion"));
}

#[test]
fn test_client_requires_keys() {
    let config = MistralConfig::default();
    assert!(config.api_keys.is_empty());
    assert!(MistralClient::new(&config).is_err());
}
