// The summarize pipeline: validate, cache, locate, generate, format
// Author: kelexine (https://github.com/kelexine)

use crate::config::AppConfig;
use crate::error::{HubError, Result};
use crate::metrics;
use crate::mistral::MistralClient;
use crate::summarizer::cache::SummaryCache;
use crate::summarizer::models::{SummarizeRequest, SummarizeResponse, SummarySource};
use crate::summarizer::{markdown, prompts};
use crate::wikipedia::WikipediaClient;
use std::time::Instant;
use tracing::{debug, info};

/// Temperature for article condensation.
const SUMMARY_TEMPERATURE: f32 = 0.2;
/// Temperature for direct answers, slightly higher since the model has no
/// source text to stay close to.
const DIRECT_TEMPERATURE: f32 = 0.3;

/// The summarizer engine. Owns the vendor clients, the summary cache, and
/// the running counters; one instance is shared across all requests.
pub struct Summarizer {
    wikipedia: WikipediaClient,
    mistral: MistralClient,
    cache: SummaryCache,
    cache_enabled: bool,
}

impl Summarizer {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            wikipedia: WikipediaClient::new(&config.wikipedia)?,
            mistral: MistralClient::new(&config.mistral)?,
            cache: SummaryCache::new(&config.cache),
            cache_enabled: config.cache.enabled,
        })
    }

    pub fn cache(&self) -> &SummaryCache {
        &self.cache
    }

    pub fn credential_pool_size(&self) -> usize {
        self.mistral.pool_size()
    }

    /// Process one summarize request end to end.
    ///
    /// Lookup failures never fail the request; they shift provenance to
    /// `mistral_only`. Only validation and full credential exhaustion
    /// surface as errors.
    pub async fn process(&self, request: &SummarizeRequest) -> Result<SummarizeResponse> {
        metrics::SUMMARIZE_REQUESTS.inc();

        let theme = request.theme.trim();
        if theme.chars().count() < 2 {
            return Err(HubError::InvalidRequest(
                "the topic must contain at least 2 characters".to_string(),
            ));
        }

        let started = Instant::now();
        let cache_key = SummaryCache::key(theme, request.length_mode, request.language, request.mode);

        if self.cache_enabled {
            if let Some(hit) = self.cache.get(&cache_key) {
                debug!("cache hit for '{theme}'");
                metrics::CACHE_HITS.inc();
                return Ok(hit);
            }
        }

        let response = match self.wikipedia.resolve(theme, request.language).await {
            Some(article) => {
                info!(
                    title = %article.title,
                    method = %article.method.label(),
                    "summarizing Wikipedia article"
                );
                metrics::WIKIPEDIA_LOOKUPS
                    .with_label_values(&[article.method.metric_label()])
                    .inc();

                let prompt = prompts::summary_prompt(
                    &article.title,
                    &article.extract,
                    request.length_mode,
                    request.language,
                    request.mode,
                );
                let text = self.mistral.complete(&prompt, SUMMARY_TEMPERATURE).await?;
                metrics::WIKIPEDIA_SUCCESS.inc();

                SummarizeResponse {
                    success: true,
                    title: article.title,
                    summary: markdown::to_html(&text),
                    url: Some(article.url),
                    source: SummarySource::Wikipedia,
                    method: article.method.label(),
                    processing_time: elapsed_seconds(started),
                    length_mode: request.length_mode,
                    language: request.language,
                    mode: request.mode,
                }
            }
            None => {
                info!("no article found for '{theme}', answering directly");
                metrics::WIKIPEDIA_LOOKUPS.with_label_values(&["none"]).inc();

                let prompt =
                    prompts::direct_prompt(theme, request.length_mode, request.language, request.mode);
                let text = self.mistral.complete(&prompt, DIRECT_TEMPERATURE).await?;
                metrics::MISTRAL_ONLY.inc();

                SummarizeResponse {
                    success: true,
                    title: prompts::fallback_title(request.language, theme),
                    summary: markdown::to_html(&text),
                    url: None,
                    source: SummarySource::MistralOnly,
                    method: "direct_ai".to_string(),
                    processing_time: elapsed_seconds(started),
                    length_mode: request.length_mode,
                    language: request.language,
                    mode: request.mode,
                }
            }
        };

        let source_label = match response.source {
            SummarySource::Wikipedia => "wikipedia",
            SummarySource::MistralOnly => "mistral_only",
        };
        metrics::SUMMARIZE_DURATION
            .with_label_values(&[source_label])
            .observe(started.elapsed().as_secs_f64());

        if self.cache_enabled {
            self.cache.insert(cache_key, response.clone());
        }

        info!(
            title = %response.title,
            processing_time = response.processing_time,
            "summarize pipeline finished"
        );
        Ok(response)
    }
}

/// Elapsed wall time in seconds, rounded to two decimals for the payload.
fn elapsed_seconds(started: Instant) -> f64 {
    round2(started.elapsed().as_secs_f64())
}

fn round2(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}
