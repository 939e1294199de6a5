// SPDX-License-Identifier: MPL-2.0
//! Keys understood by the lightbox while an image is focused.

/// Framework-independent lightbox key.
///
/// The presentation layer maps native keyboard events onto these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    /// Closes the lightbox.
    Escape,
    /// Shows the previous image.
    ArrowLeft,
    /// Shows the next image.
    ArrowRight,
}
