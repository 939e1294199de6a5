// SPDX-License-Identifier: MPL-2.0
//! Project catalog loaded from a `projects.toml` file.
//!
//! The catalog is the external store that hands [`ProjectData`] records to
//! the project view. It is read once at startup and never written back.
//!
//! # File Format
//!
//! ```toml
//! [[project]]
//! id = "tiny-dungeon"
//! title = "Tiny Dungeon"
//! layout = "side"
//! description = """
//! A roguelike built for a game jam.
//!
//! Highlights
//! • procedural levels
//! • 8-bit soundtrack
//! """
//!
//! [[project.images]]
//! src = "shots/dungeon-1.png"
//! alt = "First floor"
//!
//! [[project.links]]
//! id = 1
//! name = "Play"
//! link = "https://example.org/tiny-dungeon"
//! ```
//!
//! Relative image paths are resolved against the catalog file's directory.

use crate::domain::project::{Layout, ProjectData, ProjectImage, ProjectLink};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog file name looked up in the config directory by default.
pub const CATALOG_FILE: &str = "projects.toml";

// =============================================================================
// File Representation
// =============================================================================

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "project")]
    projects: Vec<ProjectEntry>,
}

#[derive(Debug, Deserialize)]
struct ProjectEntry {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    layout: LayoutEntry,
    #[serde(default)]
    images: Vec<ImageEntry>,
    #[serde(default)]
    links: Vec<LinkEntry>,
}

#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
enum LayoutEntry {
    #[default]
    Default,
    Side,
}

#[derive(Debug, Deserialize)]
struct ImageEntry {
    src: PathBuf,
    #[serde(default)]
    alt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LinkEntry {
    id: u32,
    name: String,
    link: String,
}

impl From<LayoutEntry> for Layout {
    fn from(entry: LayoutEntry) -> Self {
        match entry {
            LayoutEntry::Default => Layout::Default,
            LayoutEntry::Side => Layout::Side,
        }
    }
}

impl ProjectEntry {
    fn into_project(self, base_dir: Option<&Path>) -> CatalogEntry {
        let images = self
            .images
            .into_iter()
            .map(|image| ProjectImage {
                src: resolve_src(base_dir, image.src),
                alt: image.alt.filter(|alt| !alt.trim().is_empty()),
            })
            .collect();
        let links = self
            .links
            .into_iter()
            .map(|link| ProjectLink {
                id: link.id,
                name: link.name,
                link: link.link,
            })
            .collect();

        CatalogEntry {
            id: self.id,
            project: ProjectData {
                title: self.title,
                description: self.description,
                images,
                links,
                layout: self.layout.into(),
            },
        }
    }
}

fn resolve_src(base_dir: Option<&Path>, src: PathBuf) -> PathBuf {
    match base_dir {
        Some(base) if src.is_relative() => base.join(src),
        _ => src,
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A project together with its catalog identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: String,
    pub project: ProjectData,
}

/// Ordered collection of portfolio projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog from entries, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if two entries share an id.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(Error::Catalog(format!("duplicate project id '{}'", entry.id)));
            }
        }
        Ok(Self { entries })
    }

    /// Parses catalog TOML, resolving relative image paths against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the TOML is malformed or ids are duplicated.
    pub fn from_toml_str(content: &str, base_dir: Option<&Path>) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| Error::Catalog(e.to_string()))?;
        let entries = file
            .projects
            .into_iter()
            .map(|entry| entry.into_project(base_dir))
            .collect();
        Self::from_entries(entries)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Catalog`]
    /// if its content is invalid.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content, path.parent())
    }

    /// Finds a project by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Returns the entry at `index` in catalog order.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loads the catalog, never failing.
///
/// Returns a tuple of (catalog, optional_warning). A missing file yields an
/// empty catalog with a hint; an unreadable or invalid file yields an empty
/// catalog with the error message.
pub fn load(path: Option<&Path>) -> (Catalog, Option<String>) {
    let Some(path) = path else {
        return (
            Catalog::default(),
            Some("No catalog location could be determined.".to_string()),
        );
    };

    if !path.exists() {
        log::warn!("catalog {} not found", path.display());
        return (
            Catalog::default(),
            Some(format!("No catalog found at {}.", path.display())),
        );
    }

    match Catalog::load_from_path(path) {
        Ok(catalog) => {
            log::info!(
                "loaded {} project(s) from {}",
                catalog.len(),
                path.display()
            );
            (catalog, None)
        }
        Err(err) => {
            log::warn!("failed to load catalog {}: {}", path.display(), err);
            (Catalog::default(), Some(err.to_string()))
        }
    }
}
