// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`catalog_list`] - Project list the user picks from
//! - [`project_modal`] - Project details, gallery and lightbox
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod catalog_list;
pub mod design_tokens;
pub mod project_modal;
pub mod styles;
pub mod theming;
