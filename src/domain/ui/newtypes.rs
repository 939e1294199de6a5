// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::num::NonZeroUsize;

// =============================================================================
// Thumbnail Bounds
// =============================================================================

/// Gallery thumbnail height bounds (in logical pixels).
pub mod thumbnail_bounds {
    /// Minimum thumbnail height.
    pub const MIN: f32 = 48.0;
    /// Maximum thumbnail height.
    pub const MAX: f32 = 480.0;
    /// Default thumbnail height.
    pub const DEFAULT: f32 = 140.0;
}

// =============================================================================
// ThumbnailHeight
// =============================================================================

/// Height of gallery thumbnails, guaranteed to be within 48–480 px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailHeight(f32);

impl ThumbnailHeight {
    /// Creates a new thumbnail height, clamping the value to the valid range.
    ///
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(height: f32) -> Self {
        if height.is_finite() {
            Self(height.clamp(thumbnail_bounds::MIN, thumbnail_bounds::MAX))
        } else {
            Self::default()
        }
    }

    /// Returns the raw height value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Height used for images in the side-by-side layout.
    #[must_use]
    pub fn enlarged(self) -> f32 {
        (self.0 * 2.0).min(thumbnail_bounds::MAX)
    }
}

impl Default for ThumbnailHeight {
    fn default() -> Self {
        Self(thumbnail_bounds::DEFAULT)
    }
}

// =============================================================================
// Cache Capacity Bounds
// =============================================================================

/// Parsed-description cache bounds (number of descriptions kept).
pub mod cache_bounds {
    /// Minimum number of cached descriptions.
    pub const MIN: usize = 1;
    /// Maximum number of cached descriptions.
    pub const MAX: usize = 256;
    /// Default number of cached descriptions.
    pub const DEFAULT: usize = 32;
}

// =============================================================================
// CacheCapacity
// =============================================================================

/// Number of parsed descriptions kept in memory (1–256).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheCapacity(usize);

impl CacheCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(entries: usize) -> Self {
        Self(entries.clamp(cache_bounds::MIN, cache_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns the capacity as a non-zero count for LRU construction.
    #[must_use]
    pub fn as_non_zero(self) -> NonZeroUsize {
        NonZeroUsize::new(self.0).unwrap_or(NonZeroUsize::MIN)
    }
}

impl Default for CacheCapacity {
    fn default() -> Self {
        Self(cache_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_height_clamps_to_bounds() {
        assert_eq!(ThumbnailHeight::new(1.0).value(), thumbnail_bounds::MIN);
        assert_eq!(ThumbnailHeight::new(9000.0).value(), thumbnail_bounds::MAX);
        assert_eq!(ThumbnailHeight::new(200.0).value(), 200.0);
    }

    #[test]
    fn thumbnail_height_rejects_nan() {
        assert_eq!(ThumbnailHeight::new(f32::NAN), ThumbnailHeight::default());
    }

    #[test]
    fn enlarged_height_never_exceeds_max() {
        assert_eq!(ThumbnailHeight::new(100.0).enlarged(), 200.0);
        assert_eq!(
            ThumbnailHeight::new(thumbnail_bounds::MAX).enlarged(),
            thumbnail_bounds::MAX
        );
    }

    #[test]
    fn cache_capacity_clamps_to_bounds() {
        assert_eq!(CacheCapacity::new(0).value(), cache_bounds::MIN);
        assert_eq!(CacheCapacity::new(10_000).value(), cache_bounds::MAX);
        assert_eq!(CacheCapacity::default().value(), cache_bounds::DEFAULT);
        assert_eq!(CacheCapacity::new(0).as_non_zero().get(), 1);
    }
}
