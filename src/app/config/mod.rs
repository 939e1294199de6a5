// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file. The application never writes it back.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Theme mode and catalog location
//! - `[gallery]` - Thumbnail sizing
//! - `[description]` - Parsed-description cache size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let height = config.thumbnail_height().value();
//! assert!(height > 0.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::catalog::CATALOG_FILE;
use crate::domain::ui::{CacheCapacity, ThumbnailHeight};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// Location of the project catalog; relative paths are resolved
    /// against the config directory.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            catalog: None,
        }
    }
}

/// Gallery display settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Thumbnail height in logical pixels.
    #[serde(default = "default_thumbnail_height")]
    pub thumbnail_height: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumbnail_height: default_thumbnail_height(),
        }
    }
}

/// Description parsing settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DescriptionConfig {
    /// Number of parsed descriptions kept in memory.
    #[serde(default = "default_cache_entries")]
    pub cache_entries: Option<usize>,
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self {
            cache_entries: default_cache_entries(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery display settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Description parsing settings.
    #[serde(default)]
    pub description: DescriptionConfig,
}

impl Config {
    /// Thumbnail height, clamped to the supported range.
    #[must_use]
    pub fn thumbnail_height(&self) -> ThumbnailHeight {
        self.gallery
            .thumbnail_height
            .map(ThumbnailHeight::new)
            .unwrap_or_default()
    }

    /// Description cache capacity, clamped to the supported range.
    #[must_use]
    pub fn cache_capacity(&self) -> CacheCapacity {
        self.description
            .cache_entries
            .map(CacheCapacity::new)
            .unwrap_or_default()
    }

    /// Resolves the catalog location.
    ///
    /// Priority: explicit CLI path, then `[general] catalog` (relative to
    /// `config_dir`), then `projects.toml` inside `config_dir`.
    #[must_use]
    pub fn catalog_path(&self, cli: Option<PathBuf>, config_dir: Option<&Path>) -> Option<PathBuf> {
        if cli.is_some() {
            return cli;
        }
        match (&self.general.catalog, config_dir) {
            (Some(path), Some(dir)) if path.is_relative() => Some(dir.join(path)),
            (Some(path), _) => Some(path.clone()),
            (None, Some(dir)) => Some(dir.join(CATALOG_FILE)),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_thumbnail_height() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_HEIGHT)
}

fn default_cache_entries() -> Option<usize> {
    Some(DEFAULT_CACHE_ENTRIES)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some(format!("Settings could not be loaded: {}", err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
