// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::catalog_list;
use crate::ui::project_modal;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Catalog(catalog_list::Message),
    ProjectModal(project_modal::Message),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Catalog file overriding the configured location.
    pub catalog: Option<PathBuf>,
    /// Project id to open at startup.
    pub project: Option<String>,
}
