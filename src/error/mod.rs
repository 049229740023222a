// Error types for the wiki2brief hub
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Wikipedia API error: {0}")]
    WikipediaApi(String),

    #[error("Mistral API error: {0}")]
    MistralApi(String),

    #[error("All API keys exhausted: {0}")]
    CredentialsExhausted(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Convert HubError to HTTP responses for Axum.
// The wire shape is the summarizer's own: {"success": false, "error": "..."}
impl IntoResponse for HubError {
    fn into_response(self) -> Response {
        let status = match self {
            HubError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            HubError::WikipediaApi(_) | HubError::MistralApi(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = json!({
            "success": false,
            "error": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, HubError>;
