// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation over a project's image gallery.
//!
//! The navigator is a two-state machine: nothing focused, or one image
//! focused by index. It owns the keyboard binding for as long as an image is
//! focused and releases it on every exit path, including being dropped while
//! focused.

use super::binding::{KeyBinding, KeyBindings};
use crate::domain::gallery::{Counter, GalleryFocus, GalleryKey};
use crate::error::NavigationError;

/// Tracks which gallery image, if any, is enlarged.
///
/// The navigator only knows how many images exist. The view resolves the
/// focused index against its current image list on every render.
#[derive(Debug)]
pub struct GalleryNavigator {
    focus: GalleryFocus,
    image_count: usize,
    bindings: KeyBindings,
    /// Present exactly while `focus` is `Focused`.
    binding: Option<KeyBinding>,
}

impl GalleryNavigator {
    /// Creates an unfocused navigator for a gallery of `image_count` images.
    #[must_use]
    pub fn new(bindings: KeyBindings, image_count: usize) -> Self {
        Self {
            focus: GalleryFocus::None,
            image_count,
            bindings,
            binding: None,
        }
    }

    /// Current focus.
    #[must_use]
    pub fn focus(&self) -> GalleryFocus {
        self.focus
    }

    /// Number of images the navigator moves over.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Returns `true` while this navigator holds the keyboard binding.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.binding.is_some()
    }

    /// Position counter for the focused image, e.g. `"2 / 5"`.
    #[must_use]
    pub fn counter(&self) -> Option<Counter> {
        self.focus.counter(self.image_count)
    }

    /// Focuses the image at `index`, typically after a thumbnail click.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::InvalidIndex`] if `index` is not a valid
    /// image position. The focus is left unchanged in that case.
    pub fn open(&mut self, index: usize) -> Result<(), NavigationError> {
        if index >= self.image_count {
            return Err(NavigationError::InvalidIndex {
                index,
                len: self.image_count,
            });
        }
        self.set_focus(GalleryFocus::Focused(index));
        Ok(())
    }

    /// Clears the focus. Calling it while unfocused does nothing.
    pub fn close(&mut self) {
        self.set_focus(GalleryFocus::None);
    }

    /// Moves to the next image, wrapping past the last one.
    pub fn next(&mut self) {
        self.set_focus(self.focus.next(self.image_count));
    }

    /// Moves to the previous image, wrapping past the first one.
    pub fn previous(&mut self) {
        self.set_focus(self.focus.previous(self.image_count));
    }

    /// Applies a lightbox key.
    ///
    /// Returns `true` if the key was consumed. Keys are ignored while
    /// nothing is focused, since no binding is installed then.
    pub fn handle_key(&mut self, key: GalleryKey) -> bool {
        if !self.is_listening() {
            return false;
        }
        match key {
            GalleryKey::Escape => self.close(),
            GalleryKey::ArrowLeft => self.previous(),
            GalleryKey::ArrowRight => self.next(),
        }
        true
    }

    /// Adopts a new gallery length after the image list changed.
    ///
    /// An empty gallery drops the focus; an index past the end is clamped
    /// to the last image.
    pub fn set_image_count(&mut self, image_count: usize) {
        self.image_count = image_count;
        self.set_focus(self.focus.reconcile(image_count));
    }

    /// Releases the focus and the keyboard binding ahead of view teardown.
    pub fn teardown(&mut self) {
        self.close();
    }

    fn set_focus(&mut self, focus: GalleryFocus) {
        if focus != self.focus {
            log::debug!("gallery focus {:?} -> {:?}", self.focus, focus);
        }
        self.focus = focus;

        match (focus.is_focused(), self.binding.is_some()) {
            (true, false) => self.binding = Some(self.bindings.install()),
            (false, true) => self.binding = None,
            _ => {}
        }
    }
}
