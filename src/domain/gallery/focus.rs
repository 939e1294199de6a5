// SPDX-License-Identifier: MPL-2.0
//! Lightbox focus over a gallery of a known length.

use std::fmt;

/// Which image, if any, is enlarged in the lightbox.
///
/// `Focused` stores an index rather than a reference so the focus never
/// aliases image data; the view looks the image up on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryFocus {
    #[default]
    None,
    Focused(usize),
}

impl GalleryFocus {
    /// Returns the focused index, if any.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            GalleryFocus::None => None,
            GalleryFocus::Focused(index) => Some(index),
        }
    }

    #[must_use]
    pub fn is_focused(self) -> bool {
        matches!(self, GalleryFocus::Focused(_))
    }

    /// Focus on the following image, wrapping from the last to the first.
    ///
    /// Unchanged when nothing is focused or the gallery is empty.
    #[must_use]
    pub fn next(self, len: usize) -> Self {
        match self {
            GalleryFocus::Focused(index) if len > 0 => GalleryFocus::Focused((index + 1) % len),
            other => other,
        }
    }

    /// Focus on the preceding image, wrapping from the first to the last.
    ///
    /// Unchanged when nothing is focused or the gallery is empty.
    #[must_use]
    pub fn previous(self, len: usize) -> Self {
        match self {
            GalleryFocus::Focused(index) if len > 0 => {
                GalleryFocus::Focused((index % len + len - 1) % len)
            }
            other => other,
        }
    }

    /// Brings the focus back in range after the gallery changed length.
    ///
    /// An empty gallery drops the focus; an index past the end is clamped to
    /// the last image.
    #[must_use]
    pub fn reconcile(self, len: usize) -> Self {
        match self {
            GalleryFocus::Focused(_) if len == 0 => GalleryFocus::None,
            GalleryFocus::Focused(index) if index >= len => GalleryFocus::Focused(len - 1),
            other => other,
        }
    }

    /// Returns the position counter for the lightbox, e.g. `"2 / 5"`.
    ///
    /// `None` when nothing is focused or the index is out of range.
    #[must_use]
    pub fn counter(self, len: usize) -> Option<Counter> {
        match self {
            GalleryFocus::Focused(index) if index < len => Some(Counter {
                position: index + 1,
                total: len,
            }),
            _ => None,
        }
    }
}

/// 1-indexed position of the focused image within the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub position: usize,
    pub total: usize,
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.position, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unfocused() {
        assert_eq!(GalleryFocus::default(), GalleryFocus::None);
        assert_eq!(GalleryFocus::default().index(), None);
    }

    #[test]
    fn next_wraps_to_first() {
        assert_eq!(GalleryFocus::Focused(2).next(3), GalleryFocus::Focused(0));
        assert_eq!(GalleryFocus::Focused(0).next(3), GalleryFocus::Focused(1));
    }

    #[test]
    fn previous_wraps_to_last() {
        assert_eq!(
            GalleryFocus::Focused(0).previous(4),
            GalleryFocus::Focused(3)
        );
        assert_eq!(
            GalleryFocus::Focused(3).previous(4),
            GalleryFocus::Focused(2)
        );
    }

    #[test]
    fn single_image_stays_in_place() {
        assert_eq!(GalleryFocus::Focused(0).next(1), GalleryFocus::Focused(0));
        assert_eq!(
            GalleryFocus::Focused(0).previous(1),
            GalleryFocus::Focused(0)
        );
    }

    #[test]
    fn unfocused_or_empty_is_a_no_op() {
        assert_eq!(GalleryFocus::None.next(5), GalleryFocus::None);
        assert_eq!(GalleryFocus::None.previous(5), GalleryFocus::None);
        assert_eq!(GalleryFocus::Focused(0).next(0), GalleryFocus::Focused(0));
    }

    #[test]
    fn reconcile_resets_on_empty_and_clamps_overflow() {
        assert_eq!(GalleryFocus::Focused(2).reconcile(0), GalleryFocus::None);
        assert_eq!(
            GalleryFocus::Focused(7).reconcile(3),
            GalleryFocus::Focused(2)
        );
        assert_eq!(
            GalleryFocus::Focused(1).reconcile(3),
            GalleryFocus::Focused(1)
        );
        assert_eq!(GalleryFocus::None.reconcile(0), GalleryFocus::None);
    }

    #[test]
    fn counter_is_one_indexed() {
        let counter = GalleryFocus::Focused(1).counter(5).expect("in range");
        assert_eq!(counter.to_string(), "2 / 5");
        assert!(GalleryFocus::None.counter(5).is_none());
        assert!(GalleryFocus::Focused(5).counter(5).is_none());
    }
}
