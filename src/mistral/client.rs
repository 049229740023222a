// Mistral API client with linear key-rotation retry
// Author: kelexine (https://github.com/kelexine)

use super::keys::KeyPool;
use super::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::MistralConfig;
use crate::error::{HubError, Result};
use crate::metrics;
use crate::utils::logging::sanitize;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the Mistral chat-completions API.
///
/// Every completion walks the credential pool linearly: one attempt per key,
/// no backoff. The cursor advances on acquisition and again on failure, so
/// consecutive requests naturally spread across the pool.
pub struct MistralClient {
    http: Client,
    config: MistralConfig,
    keys: KeyPool,
}

impl MistralClient {
    pub fn new(config: &MistralConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .use_rustls_tls()
            .build()
            .map_err(|e| HubError::Internal(format!("Failed to create HTTP client: {e}")))?;

        // Move the keys into the zeroizing pool; the retained config copy
        // must not hold a second plaintext set.
        let mut config = config.clone();
        let keys = KeyPool::new(std::mem::take(&mut config.api_keys))?;
        debug!("Mistral client ready with {} API keys", keys.len());

        Ok(Self { http, config, keys })
    }

    /// Number of credentials in the pool.
    pub fn pool_size(&self) -> usize {
        self.keys.len()
    }

    /// Run a chat completion, rotating through the key pool on failure.
    ///
    /// At most one attempt is made per credential; once the pool is
    /// exhausted the last upstream error is surfaced.
    pub async fn complete(&self, prompt: &str, temperature: f32) -> Result<String> {
        let attempts = self.keys.len();
        let mut last_error: Option<HubError> = None;

        for attempt in 1..=attempts {
            let api_key = self.keys.acquire();
            debug!("chat completion attempt {attempt}/{attempts}");

            match self.try_complete(api_key, prompt, temperature).await {
                Ok(text) => {
                    if attempt > 1 {
                        debug!("chat completion succeeded on attempt {attempt}");
                    }
                    metrics::MISTRAL_API_CALLS.with_label_values(&["success"]).inc();
                    return Ok(text);
                }
                Err(e) => {
                    warn!("chat completion attempt {attempt} failed: {}", sanitize(&e.to_string()));
                    metrics::MISTRAL_API_CALLS.with_label_values(&["failure"]).inc();
                    self.keys.penalize();
                    last_error = Some(e);
                }
            }
        }

        let last = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempts made".to_string());
        Err(HubError::CredentialsExhausted(format!(
            "all {attempts} API keys failed; last error: {last}"
        )))
    }

    async fn try_complete(&self, api_key: &str, prompt: &str, temperature: f32) -> Result<String> {
        let url = format!("{}/chat/completions", self.config.api_base_url);
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| HubError::MistralApi(format!("HTTP error: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HubError::MistralApi(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(HubError::MistralApi(format!("HTTP {status}: {body}")));
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| HubError::MistralApi(format!("Response parsing error: {e}")))?;

        if let Some(usage) = &completion.usage {
            debug!(
                "completion used {} prompt + {} output tokens",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        let content = content.trim();
        if content.is_empty() {
            return Err(HubError::MistralApi("empty completion".to_string()));
        }

        Ok(content.to_string())
    }
}
