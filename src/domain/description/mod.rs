// SPDX-License-Identifier: MPL-2.0
//! Project description domain: plain text to renderable blocks.

pub mod block;
pub mod parser;

pub use block::{Block, BULLET_MARKER};
pub use parser::parse;
