// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use crate::summarizer::models::StatsResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec_with_registry, register_int_counter_vec_with_registry,
    register_int_counter_with_registry, Encoder, HistogramVec, IntCounter, IntCounterVec, Opts,
    Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // PIPELINE COUNTERS (these four back /api/stats)
    // ============================================================================

    /// Total summarize requests received
    pub static ref SUMMARIZE_REQUESTS: IntCounter = register_int_counter_with_registry!(
        Opts::new("summarize_requests_total", "Total summarize requests received"),
        REGISTRY
    ).unwrap();

    /// Requests answered from the summary cache
    pub static ref CACHE_HITS: IntCounter = register_int_counter_with_registry!(
        Opts::new("cache_hits_total", "Requests answered from the summary cache"),
        REGISTRY
    ).unwrap();

    /// Summaries produced from a located Wikipedia article
    pub static ref WIKIPEDIA_SUCCESS: IntCounter = register_int_counter_with_registry!(
        Opts::new("wikipedia_success_total", "Summaries produced from a located Wikipedia article"),
        REGISTRY
    ).unwrap();

    /// Answers generated without an article
    pub static ref MISTRAL_ONLY: IntCounter = register_int_counter_with_registry!(
        Opts::new("mistral_only_total", "Answers generated without a Wikipedia article"),
        REGISTRY
    ).unwrap();

    // ============================================================================
    // UPSTREAM METRICS
    // ============================================================================

    /// Wikipedia lookup outcomes by resolution method
    pub static ref WIKIPEDIA_LOOKUPS: IntCounterVec = register_int_counter_vec_with_registry!(
        Opts::new("wikipedia_lookups_total", "Wikipedia lookup outcomes"),
        &["method"], // method: direct, disambiguation, suggestion, none
        REGISTRY
    ).unwrap();

    /// Mistral API call outcomes
    pub static ref MISTRAL_API_CALLS: IntCounterVec = register_int_counter_vec_with_registry!(
        Opts::new("mistral_api_calls_total", "Mistral API call outcomes"),
        &["status"], // status: success, failure
        REGISTRY
    ).unwrap();

    /// End-to-end pipeline duration
    pub static ref SUMMARIZE_DURATION: HistogramVec = register_histogram_vec_with_registry!(
        prometheus::HistogramOpts::new("summarize_duration_seconds", "Summarize pipeline duration")
            .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
        &["source"], // source: wikipedia, mistral_only
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Snapshot of the running counters served by `GET /api/stats`
pub fn snapshot() -> StatsResponse {
    StatsResponse {
        requests: SUMMARIZE_REQUESTS.get(),
        cache_hits: CACHE_HITS.get(),
        wikipedia_success: WIKIPEDIA_SUCCESS.get(),
        mistral_only: MISTRAL_ONLY.get(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        // Just verify metrics are registered without panicking
        let metrics = gather_metrics();
        assert!(metrics.contains("summarize_requests_total"));
        assert!(metrics.contains("cache_hits_total"));
        assert!(metrics.contains("wikipedia_success_total"));
        assert!(metrics.contains("mistral_only_total"));
    }

    #[test]
    fn test_snapshot_tracks_counters() {
        let before = snapshot();
        SUMMARIZE_REQUESTS.inc();
        CACHE_HITS.inc();
        let after = snapshot();
        // Other tests share the global registry, so compare lower bounds.
        assert!(after.requests >= before.requests + 1);
        assert!(after.cache_hits >= before.cache_hits + 1);
    }
}
