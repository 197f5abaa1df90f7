// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config service, storage port, and the ring queue resize policy.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Smallest buffer any [`crate::RingQueue`] may hold.
///
/// Below four slots the reserved-slot empty/full encoding degenerates.
pub const MIN_QUEUE_CAPACITY: usize = 4;

/// Largest `min_capacity` a [`QueueConfig`] may ask for (2^20 slots).
pub const MAX_QUEUE_MIN_CAPACITY: usize = 1 << 20;

/// Largest accepted [`QueueConfig::growth_factor`].
pub const MAX_QUEUE_GROWTH_FACTOR: usize = 16;

/// Largest accepted [`QueueConfig::shrink_divisor`].
pub const MAX_QUEUE_SHRINK_DIVISOR: usize = 64;

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A value parsed but violates its own constraints.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Resize policy for [`crate::RingQueue`].
///
/// Growth multiplies capacity by `growth_factor` when one free slot remains.
/// Shrinking divides by `growth_factor` once the post-pop length drops under
/// `capacity / shrink_divisor`. Keeping `shrink_divisor > growth_factor`
/// gives the two thresholds a gap, so a queue hovering at a boundary does not
/// resize on every operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueueConfig {
    /// Capacity floor applied at construction and on every resize.
    pub min_capacity: usize,
    /// Multiplier on growth, divisor on shrink.
    pub growth_factor: usize,
    /// Occupancy fraction (`1 / shrink_divisor`) under which a pop shrinks.
    pub shrink_divisor: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            min_capacity: MIN_QUEUE_CAPACITY,
            growth_factor: 2,
            shrink_divisor: 3,
        }
    }
}

impl QueueConfig {
    /// Checks the policy invariants.
    ///
    /// Each field is bounded on both sides: `min_capacity` within
    /// `MIN_QUEUE_CAPACITY..=MAX_QUEUE_MIN_CAPACITY`, `growth_factor` within
    /// `2..=MAX_QUEUE_GROWTH_FACTOR`, and `shrink_divisor` above
    /// `growth_factor` but at most `MAX_QUEUE_SHRINK_DIVISOR`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_QUEUE_CAPACITY..=MAX_QUEUE_MIN_CAPACITY).contains(&self.min_capacity) {
            return Err(ConfigError::Invalid(format!(
                "min_capacity {} outside {MIN_QUEUE_CAPACITY}..={MAX_QUEUE_MIN_CAPACITY}",
                self.min_capacity
            )));
        }
        if !(2..=MAX_QUEUE_GROWTH_FACTOR).contains(&self.growth_factor) {
            return Err(ConfigError::Invalid(format!(
                "growth_factor {} outside 2..={MAX_QUEUE_GROWTH_FACTOR}",
                self.growth_factor
            )));
        }
        if self.shrink_divisor > MAX_QUEUE_SHRINK_DIVISOR {
            return Err(ConfigError::Invalid(format!(
                "shrink_divisor {} exceeds {MAX_QUEUE_SHRINK_DIVISOR}",
                self.shrink_divisor
            )));
        }
        if self.shrink_divisor <= self.growth_factor {
            return Err(ConfigError::Invalid(format!(
                "shrink_divisor {} must exceed growth_factor {}",
                self.shrink_divisor, self.growth_factor
            )));
        }
        Ok(())
    }
}

/// Thin service that serializes config values and delegates storage to a `ConfigStore`.
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize a config value for `key`. Returns `Ok(None)` if missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) => {
                if bytes.is_empty() {
                    debug!(key, "config blob empty");
                    return Ok(None);
                }
                let value = serde_json::from_slice(&bytes)?;
                debug!(key, bytes = bytes.len(), "config loaded");
                Ok(Some(value))
            }
            Err(ConfigError::NotFound) => {
                debug!(key, "config not found");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist a config value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)?;
        debug!(key, bytes = data.len(), "config saved");
        Ok(())
    }

    /// Load the queue policy stored under `key`, falling back to the default.
    ///
    /// A stored policy that fails [`QueueConfig::validate`] is an error, not a
    /// silent fallback.
    pub fn load_queue_config(&self, key: &str) -> Result<QueueConfig, ConfigError> {
        let Some(config) = self.load::<QueueConfig>(key)? else {
            return Ok(QueueConfig::default());
        };
        if let Err(err) = config.validate() {
            warn!(key, %err, "stored queue config rejected");
            return Err(err);
        }
        Ok(config)
    }
}

/// In-memory `ConfigStore`, handy for tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let blobs = self.blobs.read().unwrap_or_else(PoisonError::into_inner);
        blobs.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut blobs = self.blobs.write().unwrap_or_else(PoisonError::into_inner);
        blobs.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}
