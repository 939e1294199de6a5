// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Bounds live next to their newtypes in
//! [`crate::domain::ui::newtypes`]; this module re-exposes them under the
//! names the config layer uses.

use crate::domain::ui::newtypes::{cache_bounds, thumbnail_bounds};

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default gallery thumbnail height in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = thumbnail_bounds::DEFAULT;

/// Minimum gallery thumbnail height.
pub const MIN_THUMBNAIL_HEIGHT: f32 = thumbnail_bounds::MIN;

/// Maximum gallery thumbnail height.
pub const MAX_THUMBNAIL_HEIGHT: f32 = thumbnail_bounds::MAX;

// ==========================================================================
// Description Cache Defaults
// ==========================================================================

/// Default number of parsed descriptions kept in memory.
pub const DEFAULT_CACHE_ENTRIES: usize = cache_bounds::DEFAULT;

/// Minimum number of cached descriptions.
pub const MIN_CACHE_ENTRIES: usize = cache_bounds::MIN;

/// Maximum number of cached descriptions.
pub const MAX_CACHE_ENTRIES: usize = cache_bounds::MAX;

const _: () = {
    assert!(MIN_THUMBNAIL_HEIGHT <= DEFAULT_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_HEIGHT);
    assert!(MIN_CACHE_ENTRIES >= 1);
    assert!(DEFAULT_CACHE_ENTRIES <= MAX_CACHE_ENTRIES);
};
