// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events are only listened to while the lightbox holds its key
//! binding; otherwise no native listener is registered at all.

use super::Message;
use crate::domain::gallery::GalleryKey;
use crate::ui::project_modal;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Creates the lightbox keyboard subscription.
pub fn create_event_subscription(listening: bool) -> Subscription<Message> {
    if !listening {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => gallery_key(&key)
                .map(|key| Message::ProjectModal(project_modal::Message::Key(key))),
            _ => None,
        }
    })
}

/// Maps a native key onto a lightbox key.
pub fn gallery_key(key: &Key) -> Option<GalleryKey> {
    match key {
        Key::Named(Named::Escape) => Some(GalleryKey::Escape),
        Key::Named(Named::ArrowLeft) => Some(GalleryKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(GalleryKey::ArrowRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightbox_keys_are_mapped() {
        assert_eq!(
            gallery_key(&Key::Named(Named::Escape)),
            Some(GalleryKey::Escape)
        );
        assert_eq!(
            gallery_key(&Key::Named(Named::ArrowLeft)),
            Some(GalleryKey::ArrowLeft)
        );
        assert_eq!(
            gallery_key(&Key::Named(Named::ArrowRight)),
            Some(GalleryKey::ArrowRight)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(gallery_key(&Key::Named(Named::Space)), None);
        assert_eq!(gallery_key(&Key::Character("a".into())), None);
    }
}
