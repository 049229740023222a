//! Configuration data structures for the wiki2brief hub.
//!
//! This module defines the schema for the application settings, including
//! server parameters, upstream API endpoints, credential pools, and the
//! summary cache.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, static files).
    #[serde(default)]
    pub server: ServerConfig,

    /// Wikipedia (MediaWiki action API) settings.
    #[serde(default)]
    pub wikipedia: WikipediaConfig,

    /// Mistral AI chat API settings, including the credential pool.
    #[serde(default)]
    pub mistral: MistralConfig,

    /// In-memory summary cache settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `0.0.0.0`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `5000`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/static`.
    /// Default: `static`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// Settings for the upstream MediaWiki action API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikipediaConfig {
    /// Endpoint template; `{lang}` is replaced with the request language.
    /// Default: `https://{lang}.wikipedia.org/w/api.php`
    #[serde(default = "default_wikipedia_base_url")]
    pub api_base_url: String,

    /// Connection and request timeout in seconds.
    /// Default: `15`
    #[serde(default = "default_wikipedia_timeout")]
    pub timeout_seconds: u64,

    /// Number of search suggestions to try when direct lookup fails.
    /// Default: `3`
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Maximum number of characters of article extract carried forward.
    /// Default: `8000`
    #[serde(default = "default_max_extract_chars")]
    pub max_extract_chars: usize,

    /// User-Agent header sent to Wikimedia servers.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Settings for the upstream Mistral AI chat API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistralConfig {
    /// Base URL for the Mistral API.
    /// Default: `https://api.mistral.ai/v1`
    #[serde(default = "default_mistral_base_url")]
    pub api_base_url: String,

    /// Model used for summarization and direct answers.
    /// Default: `mistral-large-latest`
    #[serde(default = "default_model")]
    pub model: String,

    /// Connection and request timeout in seconds.
    /// Default: `60`
    #[serde(default = "default_mistral_timeout")]
    pub timeout_seconds: u64,

    /// Maximum tokens requested per completion.
    /// Default: `600`
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Ordered pool of API keys, rotated per call and on failure.
    /// There is no built-in default; configure via file or
    /// `WIKI2BRIEF__MISTRAL__API_KEYS` (comma-separated).
    #[serde(default)]
    pub api_keys: Vec<String>,
}

/// Settings for the in-memory summary cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether response memoization is enabled.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum number of memoized responses; least-recently-used entries
    /// are evicted beyond this. Default: `1024`
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default trait implementations linking to custom logic

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_wikipedia_base_url(),
            timeout_seconds: default_wikipedia_timeout(),
            search_limit: default_search_limit(),
            max_extract_chars: default_max_extract_chars(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for MistralConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_mistral_base_url(),
            model: default_model(),
            timeout_seconds: default_mistral_timeout(),
            max_tokens: default_max_tokens(),
            api_keys: Vec::new(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: default_max_entries(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults and shared constants

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_wikipedia_base_url() -> String {
    "https://{lang}.wikipedia.org/w/api.php".to_string()
}

fn default_wikipedia_timeout() -> u64 {
    15
}

fn default_search_limit() -> usize {
    3
}

fn default_max_extract_chars() -> usize {
    8000
}

fn default_user_agent() -> String {
    format!(
        "wiki2brief/{} (https://github.com/kelexine/wiki2brief)",
        env!("CARGO_PKG_VERSION")
    )
}

fn default_mistral_base_url() -> String {
    "https://api.mistral.ai/v1".to_string()
}

fn default_model() -> String {
    "mistral-large-latest".to_string()
}

fn default_mistral_timeout() -> u64 {
    60
}

fn default_max_tokens() -> u32 {
    600
}

fn default_true() -> bool {
    true
}

fn default_max_entries() -> usize {
    1024
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
