// SPDX-License-Identifier: MPL-2.0
//! Gallery lightbox services.
//!
//! - [`navigator`]: focus state machine (`GalleryNavigator`)
//! - [`binding`]: scoped keyboard bindings (`KeyBindings`, `KeyBinding`)

pub mod binding;
pub mod navigator;

pub use binding::{KeyBinding, KeyBindings};
pub use navigator::GalleryNavigator;
