// Summary cache - bounded memoization of response payloads
// Author: kelexine (https://github.com/kelexine)

use crate::config::CacheConfig;
use crate::summarizer::models::{Language, LengthTier, SummarizeResponse, ThematicMode};
use lru::LruCache;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};
use std::num::NonZeroUsize;
use tracing::debug;

/// Bounded in-memory cache of full summarize responses, keyed by a digest of
/// the request parameters. Least-recently-used entries are evicted at the
/// configured capacity.
pub struct SummaryCache {
    entries: Mutex<LruCache<String, SummarizeResponse>>,
}

impl SummaryCache {
    pub fn new(config: &CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries.max(1)).unwrap();
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Generate the SHA-256 cache key from the request parameters.
    ///
    /// The topic is trimmed and lowercased so "Rust " and "rust" share an
    /// entry; tier, language, and mode each contribute to the digest.
    pub fn key(
        theme: &str,
        tier: LengthTier,
        language: Language,
        mode: ThematicMode,
    ) -> String {
        let mut hasher = Sha256::new();
        hasher.update(
            format!(
                "{}_{}_{}_{}",
                theme.trim().to_lowercase(),
                tier.as_str(),
                language.code(),
                mode.as_str()
            )
            .as_bytes(),
        );
        format!("{:x}", hasher.finalize())
    }

    pub fn get(&self, key: &str) -> Option<SummarizeResponse> {
        self.entries.lock().get(key).cloned()
    }

    pub fn insert(&self, key: String, response: SummarizeResponse) {
        debug!("caching response under key {}", &key[..16]);
        self.entries.lock().put(key, response);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
        debug!("cache cleared");
    }
}
