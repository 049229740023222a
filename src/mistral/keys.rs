// Rotating API key pool
// Author: kelexine (https://github.com/kelexine)

use crate::error::{HubError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use zeroize::Zeroizing;

/// Ordered pool of API keys with a rotating cursor.
///
/// The cursor advances on every acquisition, wrapping modulo pool size, and
/// `penalize` advances it once more so a failing key is skipped on the next
/// acquisition as well. Keys are zeroized when the pool is dropped.
pub struct KeyPool {
    keys: Vec<Zeroizing<String>>,
    cursor: AtomicUsize,
}

impl KeyPool {
    /// Build a pool from configured keys. An empty pool is a configuration
    /// error: the service has no built-in fallback credentials.
    pub fn new(keys: Vec<String>) -> Result<Self> {
        if keys.is_empty() {
            return Err(HubError::Config(
                "no Mistral API keys configured; set mistral.api_keys in the config file \
                 or WIKI2BRIEF__MISTRAL__API_KEYS in the environment"
                    .to_string(),
            ));
        }

        Ok(Self {
            keys: keys.into_iter().map(Zeroizing::new).collect(),
            cursor: AtomicUsize::new(0),
        })
    }

    /// Acquire the next key, advancing the cursor.
    pub fn acquire(&self) -> &str {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.keys.len();
        &self.keys[index]
    }

    /// Advance the cursor once more after a failed call.
    pub fn penalize(&self) {
        self.cursor.fetch_add(1, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
