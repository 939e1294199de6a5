// SPDX-License-Identifier: MPL-2.0
//! Memoized description parsing.
//!
//! Parsing is pure, so its output can be shared between renders and between
//! projects. The cache is keyed by a blake3 hash of the description text:
//! an unchanged description never gets parsed twice, while any edit yields a
//! new key and a fresh parse.
//!
//! # Design
//!
//! - **LRU eviction**: least recently viewed descriptions are evicted first
//! - **Content-keyed**: identical text shared by two projects hits one entry
//! - **Shared output**: blocks are handed out as `Arc<[Block]>`

use crate::domain::description::{parse, Block};
use crate::domain::ui::CacheCapacity;
use lru::LruCache;
use std::sync::Arc;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups answered from the cache.
    pub hits: u64,
    /// Number of lookups that had to parse.
    pub misses: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// LRU cache of parsed descriptions.
pub struct DescriptionCache {
    cache: LruCache<blake3::Hash, Arc<[Block]>>,
    stats: CacheStats,
}

impl DescriptionCache {
    #[must_use]
    pub fn new(capacity: CacheCapacity) -> Self {
        Self {
            cache: LruCache::new(capacity.as_non_zero()),
            stats: CacheStats::default(),
        }
    }

    /// Returns the blocks for `description`, parsing only on a cache miss.
    pub fn blocks(&mut self, description: &str) -> Arc<[Block]> {
        let key = blake3::hash(description.as_bytes());

        if let Some(blocks) = self.cache.get(&key) {
            self.stats.hits += 1;
            return Arc::clone(blocks);
        }

        self.stats.misses += 1;
        let blocks: Arc<[Block]> = parse(description).into();
        self.cache.put(key, Arc::clone(&blocks));
        log::debug!(
            "parsed description {} into {} block(s); {} cached, hit rate {:.0}%",
            key.to_hex().as_str().get(..12).unwrap_or_default(),
            blocks.len(),
            self.len(),
            self.stats.hit_rate()
        );
        blocks
    }

    /// Number of descriptions currently cached.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for DescriptionCache {
    fn default() -> Self {
        Self::new(CacheCapacity::default())
    }
}

impl std::fmt::Debug for DescriptionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptionCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .field("stats", &self.stats)
            .finish()
    }
}
