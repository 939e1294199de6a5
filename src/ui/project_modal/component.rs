// SPDX-License-Identifier: MPL-2.0
//! Project modal component encapsulating state and update logic.

use crate::application::gallery::{GalleryNavigator, KeyBindings};
use crate::domain::description::Block;
use crate::domain::gallery::GalleryKey;
use crate::domain::project::ProjectData;
use crate::domain::ui::ThumbnailHeight;
use iced::Element;
use std::sync::Arc;

/// Messages emitted by the project modal widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A thumbnail was clicked.
    OpenImage(usize),
    /// Backdrop click or lightbox close button.
    CloseLightbox,
    NextImage,
    PreviousImage,
    /// Lightbox key forwarded by the application subscription.
    Key(GalleryKey),
    /// A link button was pressed.
    OpenLink(String),
    /// The modal close button was pressed.
    Close,
}

/// Side effects the application should perform after handling a modal message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Dismiss the modal.
    Close,
    /// Open the URL with the platform handler.
    OpenLink(String),
}

/// Rendering inputs owned by the application rather than the modal.
#[derive(Debug, Clone, Copy)]
pub struct ViewEnv {
    pub thumbnail_height: ThumbnailHeight,
}

/// State of an open project modal.
#[derive(Debug)]
pub struct State {
    project: ProjectData,
    blocks: Arc<[Block]>,
    gallery: GalleryNavigator,
}

impl State {
    /// Opens the modal for `project` with its already parsed description.
    #[must_use]
    pub fn new(project: ProjectData, blocks: Arc<[Block]>, bindings: KeyBindings) -> Self {
        let gallery = GalleryNavigator::new(bindings, project.image_count());
        Self {
            project,
            blocks,
            gallery,
        }
    }

    #[must_use]
    pub fn project(&self) -> &ProjectData {
        &self.project
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryNavigator {
        &self.gallery
    }

    /// Replaces the displayed project in place.
    ///
    /// The lightbox focus survives when the new gallery still has an image at
    /// that index; otherwise it is clamped or cleared.
    pub fn set_project(&mut self, project: ProjectData, blocks: Arc<[Block]>) {
        self.gallery.set_image_count(project.image_count());
        self.project = project;
        self.blocks = blocks;
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::OpenImage(index) => {
                if let Err(err) = self.gallery.open(index) {
                    log::warn!("ignoring thumbnail click: {err}");
                }
                Effect::None
            }
            Message::CloseLightbox => {
                self.gallery.close();
                Effect::None
            }
            Message::NextImage => {
                self.gallery.next();
                Effect::None
            }
            Message::PreviousImage => {
                self.gallery.previous();
                Effect::None
            }
            Message::Key(key) => {
                self.gallery.handle_key(key);
                Effect::None
            }
            Message::OpenLink(url) => Effect::OpenLink(url),
            Message::Close => {
                self.gallery.teardown();
                Effect::Close
            }
        }
    }

    pub fn view(&self, env: ViewEnv) -> Element<'_, Message> {
        super::view::view(self, env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::description::parse;
    use crate::domain::gallery::GalleryFocus;
    use crate::domain::project::{ProjectImage, ProjectLink};
    use std::path::PathBuf;

    fn project(images: usize) -> ProjectData {
        ProjectData {
            title: "Orbit".to_string(),
            description: "Features\n• fast\n• small".to_string(),
            images: (0..images)
                .map(|i| ProjectImage {
                    src: PathBuf::from(format!("shot-{i}.png")),
                    alt: None,
                })
                .collect(),
            links: vec![ProjectLink {
                id: 1,
                name: "Source".to_string(),
                link: "https://example.com/orbit".to_string(),
            }],
            ..ProjectData::default()
        }
    }

    fn state(images: usize, bindings: &KeyBindings) -> State {
        let project = project(images);
        let blocks: Arc<[Block]> = parse(&project.description).into();
        State::new(project, blocks, bindings.clone())
    }

    #[test]
    fn thumbnail_click_opens_lightbox() {
        let bindings = KeyBindings::new();
        let mut state = state(3, &bindings);

        let effect = state.handle_message(Message::OpenImage(1));

        assert_eq!(effect, Effect::None);
        assert_eq!(state.gallery().focus(), GalleryFocus::Focused(1));
        assert!(bindings.is_listening());
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let bindings = KeyBindings::new();
        let mut state = state(2, &bindings);

        state.handle_message(Message::OpenImage(5));

        assert_eq!(state.gallery().focus(), GalleryFocus::None);
        assert!(!bindings.is_listening());
    }

    #[test]
    fn keys_drive_the_lightbox() {
        let bindings = KeyBindings::new();
        let mut state = state(3, &bindings);
        state.handle_message(Message::OpenImage(0));

        state.handle_message(Message::Key(GalleryKey::ArrowLeft));
        assert_eq!(state.gallery().focus(), GalleryFocus::Focused(2));

        state.handle_message(Message::Key(GalleryKey::Escape));
        assert_eq!(state.gallery().focus(), GalleryFocus::None);
        assert!(!bindings.is_listening());
    }

    #[test]
    fn link_press_requests_open() {
        let bindings = KeyBindings::new();
        let mut state = state(0, &bindings);

        let effect = state.handle_message(Message::OpenLink("https://example.com".into()));

        assert_eq!(effect, Effect::OpenLink("https://example.com".into()));
    }

    #[test]
    fn close_releases_binding() {
        let bindings = KeyBindings::new();
        let mut state = state(2, &bindings);
        state.handle_message(Message::OpenImage(1));

        let effect = state.handle_message(Message::Close);

        assert_eq!(effect, Effect::Close);
        assert!(!bindings.is_listening());
    }

    #[test]
    fn dropping_focused_modal_releases_binding() {
        let bindings = KeyBindings::new();
        let mut state = state(2, &bindings);
        state.handle_message(Message::OpenImage(0));
        assert!(bindings.is_listening());

        drop(state);

        assert_eq!(bindings.active_count(), 0);
    }

    #[test]
    fn shrinking_gallery_clamps_focus() {
        let bindings = KeyBindings::new();
        let mut state = state(4, &bindings);
        state.handle_message(Message::OpenImage(3));

        let smaller = project(2);
        let blocks: Arc<[Block]> = parse(&smaller.description).into();
        state.set_project(smaller, blocks);

        assert_eq!(state.gallery().focus(), GalleryFocus::Focused(1));
        assert_eq!(state.gallery().image_count(), 2);
    }

    #[test]
    fn emptied_gallery_drops_focus() {
        let bindings = KeyBindings::new();
        let mut state = state(2, &bindings);
        state.handle_message(Message::OpenImage(1));

        let empty = project(0);
        let blocks: Arc<[Block]> = parse(&empty.description).into();
        state.set_project(empty, blocks);

        assert_eq!(state.gallery().focus(), GalleryFocus::None);
        assert!(!bindings.is_listening());
    }
}
