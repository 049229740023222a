// Wikipedia lookup client with smart fallback resolution
// Author: kelexine (https://github.com/kelexine)

use super::models::{Page, QueryResponse};
use crate::config::WikipediaConfig;
use crate::error::{HubError, Result};
use crate::summarizer::models::Language;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// How an article was located by the resolution chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupMethod {
    /// Direct title match (possibly through a redirect).
    Direct,
    /// First option of a disambiguation page.
    Disambiguation,
    /// Search suggestion; carries the suggested title.
    Suggestion(String),
}

impl LookupMethod {
    /// Wire-format method tag carried in the response payload.
    pub fn label(&self) -> String {
        match self {
            LookupMethod::Direct => "direct".to_string(),
            LookupMethod::Disambiguation => "disambiguation".to_string(),
            LookupMethod::Suggestion(title) => format!("suggestion ({title})"),
        }
    }

    /// Fixed label for the lookup metrics counter.
    pub fn metric_label(&self) -> &'static str {
        match self {
            LookupMethod::Direct => "direct",
            LookupMethod::Disambiguation => "disambiguation",
            LookupMethod::Suggestion(_) => "suggestion",
        }
    }
}

/// An article located by the resolution chain, extract already truncated
/// to the configured maximum.
#[derive(Debug, Clone)]
pub struct ResolvedArticle {
    pub title: String,
    pub extract: String,
    pub url: String,
    pub method: LookupMethod,
}

/// Outcome of a single page fetch.
enum PageOutcome {
    Article { title: String, extract: String, url: String },
    Disambiguation { options: Vec<String> },
}

/// Client for the MediaWiki action API.
///
/// The endpoint is a template with a `{lang}` placeholder, so one client
/// serves every supported Wikipedia language edition.
pub struct WikipediaClient {
    http: Client,
    config: WikipediaConfig,
}

impl WikipediaClient {
    pub fn new(config: &WikipediaConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .use_rustls_tls()
            .build()
            .map_err(|e| HubError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    fn endpoint(&self, language: Language) -> String {
        self.config.api_base_url.replace("{lang}", language.code())
    }

    /// Best-effort article resolution for a free-text topic.
    ///
    /// Chain: direct title match, then the first disambiguation option,
    /// then up to `search_limit` search suggestions. Stage errors are
    /// logged and treated as misses; `None` means the whole chain came
    /// up empty and the caller should fall back to pure generation.
    pub async fn resolve(&self, topic: &str, language: Language) -> Option<ResolvedArticle> {
        let topic = topic.trim();
        debug!("resolving '{topic}' on {}.wikipedia.org", language.code());

        match self.fetch_page(topic, language).await {
            Ok(Some(PageOutcome::Article { title, extract, url })) => {
                debug!("direct match: {title}");
                return Some(ResolvedArticle {
                    title,
                    extract,
                    url,
                    method: LookupMethod::Direct,
                });
            }
            Ok(Some(PageOutcome::Disambiguation { options })) => {
                debug!("'{topic}' is a disambiguation page with {} options", options.len());
                if let Some(first) = options.first() {
                    if let Ok(Some(PageOutcome::Article { title, extract, url })) =
                        self.fetch_page(first, language).await
                    {
                        debug!("resolved via disambiguation: {title}");
                        return Some(ResolvedArticle {
                            title,
                            extract,
                            url,
                            method: LookupMethod::Disambiguation,
                        });
                    }
                }
            }
            Ok(None) => debug!("no direct page for '{topic}'"),
            Err(e) => warn!("direct lookup for '{topic}' failed: {e}"),
        }

        let suggestions = match self.search(topic, language).await {
            Ok(titles) => titles,
            Err(e) => {
                warn!("search for '{topic}' failed: {e}");
                return None;
            }
        };
        debug!("search suggestions: {suggestions:?}");

        for suggestion in suggestions {
            match self.fetch_page(&suggestion, language).await {
                Ok(Some(PageOutcome::Article { title, extract, url })) => {
                    debug!("resolved via suggestion '{suggestion}': {title}");
                    return Some(ResolvedArticle {
                        title,
                        extract,
                        url,
                        method: LookupMethod::Suggestion(suggestion),
                    });
                }
                Ok(_) => continue,
                Err(e) => {
                    warn!("fetching suggestion '{suggestion}' failed: {e}");
                    continue;
                }
            }
        }

        debug!("no Wikipedia article found for '{topic}'");
        None
    }

    /// Fetch a single page with extract, canonical URL, disambiguation
    /// marker, and outgoing links in one query.
    async fn fetch_page(&self, title: &str, language: Language) -> Result<Option<PageOutcome>> {
        let response = self
            .api_get(
                language,
                &[
                    ("action", "query"),
                    ("format", "json"),
                    ("formatversion", "2"),
                    ("redirects", "1"),
                    ("titles", title),
                    ("prop", "extracts|info|pageprops|links"),
                    ("explaintext", "1"),
                    ("exlimit", "1"),
                    ("inprop", "url"),
                    ("ppprop", "disambiguation"),
                    ("plnamespace", "0"),
                    ("pllimit", "20"),
                ],
            )
            .await?;

        let page = match response.query.and_then(|q| q.pages.into_iter().next()) {
            Some(page) => page,
            None => return Ok(None),
        };

        if page.missing || page.invalid {
            return Ok(None);
        }

        if page.is_disambiguation() {
            let options = page.links.into_iter().map(|link| link.title).collect();
            return Ok(Some(PageOutcome::Disambiguation { options }));
        }

        let url = page
            .full_url
            .clone()
            .unwrap_or_else(|| Self::article_url(language, &page.title));

        Ok(Some(PageOutcome::Article {
            extract: self.truncate_extract(page.extract.unwrap_or_default()),
            title: page.title,
            url,
        }))
    }

    /// Full-text search returning up to `search_limit` article titles.
    async fn search(&self, topic: &str, language: Language) -> Result<Vec<String>> {
        let limit = self.config.search_limit.to_string();
        let response = self
            .api_get(
                language,
                &[
                    ("action", "query"),
                    ("format", "json"),
                    ("formatversion", "2"),
                    ("list", "search"),
                    ("srsearch", topic),
                    ("srlimit", &limit),
                    ("srprop", ""),
                ],
            )
            .await?;

        Ok(response
            .query
            .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default())
    }

    async fn api_get(&self, language: Language, params: &[(&str, &str)]) -> Result<QueryResponse> {
        let response = self
            .http
            .get(self.endpoint(language))
            .query(params)
            .send()
            .await
            .map_err(|e| HubError::WikipediaApi(format!("HTTP error: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HubError::WikipediaApi(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(HubError::WikipediaApi(format!("HTTP {status}: {body}")));
        }

        serde_json::from_str(&body)
            .map_err(|e| HubError::WikipediaApi(format!("Response parsing error: {e}")))
    }

    fn truncate_extract(&self, extract: String) -> String {
        if extract.chars().count() > self.config.max_extract_chars {
            extract.chars().take(self.config.max_extract_chars).collect()
        } else {
            extract
        }
    }

    fn article_url(language: Language, title: &str) -> String {
        format!(
            "https://{}.wikipedia.org/wiki/{}",
            language.code(),
            urlencoding::encode(&title.replace(' ', "_"))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_method_labels() {
        assert_eq!(LookupMethod::Direct.label(), "direct");
        assert_eq!(LookupMethod::Disambiguation.label(), "disambiguation");
        assert_eq!(
            LookupMethod::Suggestion("Rust Belt".to_string()).label(),
            "suggestion (Rust Belt)"
        );
        assert_eq!(
            LookupMethod::Suggestion("Rust Belt".to_string()).metric_label(),
            "suggestion"
        );
    }

    #[test]
    fn test_article_url_encoding() {
        assert_eq!(
            WikipediaClient::article_url(Language::English, "Rust (programming language)"),
            "https://en.wikipedia.org/wiki/Rust_%28programming_language%29"
        );
        assert_eq!(
            WikipediaClient::article_url(Language::French, "Paris"),
            "https://fr.wikipedia.org/wiki/Paris"
        );
    }

    #[test]
    fn test_endpoint_language_substitution() {
        let client = WikipediaClient::new(&WikipediaConfig::default()).unwrap();
        assert_eq!(
            client.endpoint(Language::Spanish),
            "https://es.wikipedia.org/w/api.php"
        );
    }
}
