// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`description`]: Description blocks ([`Block`](description::Block)) and the
//!   [`parse`](description::parse) function
//! - [`gallery`]: Lightbox focus ([`GalleryFocus`](gallery::GalleryFocus)) and keys
//! - [`project`]: Project records ([`ProjectData`](project::ProjectData))
//! - [`ui`]: UI value objects ([`ThumbnailHeight`](ui::newtypes::ThumbnailHeight),
//!   [`CacheCapacity`](ui::newtypes::CacheCapacity))

pub mod description;
pub mod gallery;
pub mod project;
pub mod ui;
