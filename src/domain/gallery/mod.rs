// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! - [`GalleryFocus`]: lightbox focus with wraparound transitions
//! - [`Counter`]: the `"position / total"` indicator
//! - [`GalleryKey`]: keys handled while an image is focused

pub mod focus;
pub mod key;

pub use focus::{Counter, GalleryFocus};
pub use key::GalleryKey;
