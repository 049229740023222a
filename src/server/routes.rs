// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{health_handler, metrics_handler, stats_handler, summarize_handler};
use super::middleware::request_id_layers;
use super::pages::{hub_page, summarizer_page};
use crate::config::AppConfig;
use crate::error::Result;
use crate::summarizer::Summarizer;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub summarizer: Arc<Summarizer>,
}

pub fn create_router(config: AppConfig, summarizer: Summarizer) -> Result<Router> {
    let static_dir = config.server.static_dir.clone();
    let state = AppState {
        config,
        summarizer: Arc::new(summarizer),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        .route("/", get(hub_page))
        .route("/wikisummarizer", get(summarizer_page))
        .route("/api/summarize", post(summarize_handler))
        .route("/api/stats", get(stats_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id)
                .layer(propagate_request_id)
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                // Requests are small JSON bodies; anything larger is abuse
                .layer(tower_http::limit::RequestBodyLimitLayer::new(64 * 1024)),
        )
        .with_state(state);

    Ok(app)
}
