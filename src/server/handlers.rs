// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::HubError;
use crate::metrics;
use crate::summarizer::models::{StatsResponse, SummarizeRequest, SummarizeResponse};
use axum::http::header;
use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Check credential pool
    let pool_size = state.summarizer.credential_pool_size();
    let pool_check = if pool_size == 0 {
        overall_status = HealthStatus::Unhealthy;
        HealthCheck {
            status: "error".to_string(),
            message: "No API keys configured".to_string(),
        }
    } else if pool_size == 1 {
        overall_status = HealthStatus::Degraded;
        HealthCheck {
            status: "warning".to_string(),
            message: "Single API key, no rotation headroom".to_string(),
        }
    } else {
        HealthCheck {
            status: "ok".to_string(),
            message: format!("{pool_size} API keys in rotation"),
        }
    };
    checks.insert("credential_pool".to_string(), pool_check);

    // Check summary cache
    let cache_check = HealthCheck {
        status: "ok".to_string(),
        message: format!("{} responses cached", state.summarizer.cache().len()),
    };
    checks.insert("summary_cache".to_string(), cache_check);

    // Check configuration
    let config_check = HealthCheck {
        status: "ok".to_string(),
        message: format!(
            "Wikipedia: {}; Mistral: {}",
            state.config.wikipedia.api_base_url, state.config.mistral.api_base_url
        ),
    };
    checks.insert("configuration".to_string(), config_check);

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for the `POST /api/summarize` endpoint.
pub async fn summarize_handler(
    State(state): State<AppState>,
    body: String, // Get raw JSON as string first
) -> Result<Json<SummarizeResponse>, HubError> {
    // Manually deserialize to get better error messages
    let request: SummarizeRequest = serde_json::from_str(&body).map_err(|e| {
        debug!("failed to deserialize summarize request: {e}");
        HubError::InvalidRequest(format!("JSON deserialization error: {e}"))
    })?;

    let request_id = uuid::Uuid::new_v4().simple().to_string();
    info!(
        request_id = %request_id,
        theme = %request.theme,
        length_mode = %request.length_mode.as_str(),
        language = %request.language.code(),
        mode = %request.mode.as_str(),
        "received summarize request"
    );

    let response = state.summarizer.process(&request).await?;
    Ok(Json(response))
}

/// Handler for the `GET /api/stats` endpoint.
pub async fn stats_handler() -> Json<StatsResponse> {
    Json(metrics::snapshot())
}

/// Handler for the `GET /metrics` Prometheus exposition endpoint.
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::gather_metrics(),
    )
}
