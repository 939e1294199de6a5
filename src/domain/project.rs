// SPDX-License-Identifier: MPL-2.0
//! Portfolio project records.
//!
//! A [`ProjectData`] is supplied by the catalog whenever the user selects a
//! project. The view treats it as read-only input.

use std::path::PathBuf;

/// How the project modal arranges its text and gallery.
///
/// Affects rendering only; parsing never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Text above a thumbnail grid.
    #[default]
    Default,
    /// Text and gallery side by side, with larger images.
    Side,
}

/// One gallery entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectImage {
    /// Location of the image file.
    pub src: PathBuf,
    /// Optional caption, also used as the accessible description.
    pub alt: Option<String>,
}

impl ProjectImage {
    /// Returns the alt text, falling back to the project title.
    #[must_use]
    pub fn alt_or<'a>(&'a self, title: &'a str) -> &'a str {
        self.alt.as_deref().unwrap_or(title)
    }
}

/// An external link rendered as a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub id: u32,
    pub name: String,
    pub link: String,
}

/// Everything the project view needs to render one project.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectData {
    pub title: String,
    /// Free-form text; lines separated by `\n`, bullets prefixed with `"• "`.
    pub description: String,
    pub images: Vec<ProjectImage>,
    pub links: Vec<ProjectLink>,
    pub layout: Layout,
}

impl ProjectData {
    /// Number of images in the gallery.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Returns the image at `index`, if any.
    #[must_use]
    pub fn image(&self, index: usize) -> Option<&ProjectImage> {
        self.images.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_falls_back_to_title() {
        let with_alt = ProjectImage {
            src: PathBuf::from("a.png"),
            alt: Some("Title screen".to_string()),
        };
        let without_alt = ProjectImage {
            src: PathBuf::from("b.png"),
            alt: None,
        };

        assert_eq!(with_alt.alt_or("Game"), "Title screen");
        assert_eq!(without_alt.alt_or("Game"), "Game");
    }

    #[test]
    fn image_lookup_is_bounds_checked() {
        let project = ProjectData {
            images: vec![ProjectImage {
                src: PathBuf::from("a.png"),
                alt: None,
            }],
            ..ProjectData::default()
        };

        assert_eq!(project.image_count(), 1);
        assert!(project.image(0).is_some());
        assert!(project.image(1).is_none());
    }
}
