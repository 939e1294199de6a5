// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a portfolio viewer built with the Iced GUI framework.
//!
//! It shows a catalog of projects; each project opens in a modal that turns
//! its free-form description into paragraphs, titled sections and bullet
//! lists, and presents its images in a gallery with a keyboard-driven
//! lightbox.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod application;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod ui;
