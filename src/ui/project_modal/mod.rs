// SPDX-License-Identifier: MPL-2.0
//! Project detail modal: title, parsed description, gallery and links, with
//! a lightbox layered on top while an image is enlarged.

pub mod component;
mod lightbox;
mod view;

pub use component::{Effect, Message, State, ViewEnv};
