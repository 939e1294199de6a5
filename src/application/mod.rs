// SPDX-License-Identifier: MPL-2.0
//! Application layer - Stateful services over the domain.
//!
//! - [`gallery`]: Lightbox navigation and its scoped keyboard binding
//! - [`description_cache`]: Memoized description parsing
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Presentation layer (`app`, `ui`) uses application layer services
//!
//! # Example
//!
//! ```
//! use iced_folio::application::description_cache::DescriptionCache;
//! use iced_folio::application::gallery::{GalleryNavigator, KeyBindings};
//!
//! let mut cache = DescriptionCache::default();
//! let blocks = cache.blocks("Features\n• fast");
//! assert_eq!(blocks.len(), 1);
//!
//! let mut navigator = GalleryNavigator::new(KeyBindings::new(), 3);
//! navigator.open(0).unwrap();
//! navigator.previous();
//! assert_eq!(navigator.focus().index(), Some(2));
//! ```

pub mod description_cache;
pub mod gallery;
