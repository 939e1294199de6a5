// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog list and the
//! project modal.
//!
//! The `App` struct wires together the catalog, the description cache and
//! the lightbox key bindings, and translates messages into side effects like
//! opening links. Startup policy (config precedence, catalog fallback) stays
//! here, close to the main update loop.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::description_cache::DescriptionCache;
use crate::application::gallery::KeyBindings;
use crate::catalog::{self, Catalog};
use crate::domain::ui::ThumbnailHeight;
use crate::ui::project_modal;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    theme_mode: ThemeMode,
    catalog: Catalog,
    /// Startup problems shown above the project list.
    warnings: Vec<String>,
    cache: DescriptionCache,
    key_bindings: KeyBindings,
    modal: Option<project_modal::State>,
    thumbnail_height: ThumbnailHeight,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("projects", &self.catalog.len())
            .field("modal_open", &self.modal.is_some())
            .field("listening", &self.key_bindings.is_listening())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            catalog: Catalog::default(),
            warnings: Vec::new(),
            cache: DescriptionCache::default(),
            key_bindings: KeyBindings::new(),
            modal: None,
            thumbnail_height: ThumbnailHeight::default(),
        }
    }
}

impl App {
    /// Loads settings and the catalog, then opens the project requested on
    /// the command line, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let config_dir = paths::get_app_config_dir();
        let catalog_path = config.catalog_path(flags.catalog, config_dir.as_deref());
        let (catalog, catalog_warning) = catalog::load(catalog_path.as_deref());

        let mut app = App {
            theme_mode: config.general.theme_mode,
            catalog,
            warnings: config_warning.into_iter().chain(catalog_warning).collect(),
            cache: DescriptionCache::new(config.cache_capacity()),
            thumbnail_height: config.thumbnail_height(),
            ..Self::default()
        };

        if let Some(id) = flags.project {
            update::open_project(&mut app.update_context(), &id);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        const APP_NAME: &str = "IcedFolio";

        match &self.modal {
            Some(modal) => format!("{} - {APP_NAME}", modal.project().title),
            None => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.key_bindings.is_listening())
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            catalog: &self.catalog,
            cache: &mut self.cache,
            key_bindings: &self.key_bindings,
            modal: &mut self.modal,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Catalog(catalog_message) => {
                update::handle_catalog_message(&mut ctx, catalog_message)
            }
            Message::ProjectModal(modal_message) => {
                update::handle_modal_message(&mut ctx, modal_message)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            catalog: &self.catalog,
            warnings: &self.warnings,
            modal: self.modal.as_ref(),
            thumbnail_height: self.thumbnail_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::GalleryKey;

    #[test]
    fn title_follows_open_project() {
        let mut app = App {
            catalog: Catalog::from_toml_str(
                "[[project]]\nid = \"orbit\"\ntitle = \"Orbit\"\n",
                None,
            )
            .expect("valid catalog"),
            ..App::default()
        };
        assert_eq!(app.title(), "IcedFolio");

        let _ = app.update(Message::Catalog(crate::ui::catalog_list::Message::Select(
            "orbit".into(),
        )));

        assert_eq!(app.title(), "Orbit - IcedFolio");
    }

    #[test]
    fn keys_reach_lightbox_only_while_focused() {
        let mut app = App {
            catalog: Catalog::from_toml_str(
                "[[project]]\nid = \"orbit\"\ntitle = \"Orbit\"\n\n\
                 [[project.images]]\nsrc = \"/a.png\"\n\n\
                 [[project.images]]\nsrc = \"/b.png\"\n",
                None,
            )
            .expect("valid catalog"),
            ..App::default()
        };
        let _ = app.update(Message::Catalog(crate::ui::catalog_list::Message::Select(
            "orbit".into(),
        )));
        assert!(!app.key_bindings.is_listening());

        let _ = app.update(Message::ProjectModal(project_modal::Message::OpenImage(0)));
        assert!(app.key_bindings.is_listening());

        let _ = app.update(Message::ProjectModal(project_modal::Message::Key(
            GalleryKey::Escape,
        )));
        assert!(!app.key_bindings.is_listening());
        assert!(app.modal.is_some());
    }

    fn two_project_app() -> App {
        App {
            catalog: Catalog::from_toml_str(
                "[[project]]\nid = \"alpha\"\ntitle = \"Alpha\"\n\n\
                 [[project]]\nid = \"beta\"\ntitle = \"Beta\"\n",
                None,
            )
            .expect("valid catalog"),
            ..App::default()
        }
    }

    fn click(app: &App, label: &str) -> Vec<Message> {
        let mut ui = iced_test::simulator(app.view());
        let _ = ui.click(label).expect("label is rendered");
        ui.into_messages().collect()
    }

    #[test]
    fn catalog_entries_are_clickable_without_modal() {
        let app = two_project_app();

        let messages = click(&app, "Beta");

        assert!(messages.iter().any(|message| matches!(
            message,
            Message::Catalog(crate::ui::catalog_list::Message::Select(id)) if id == "beta"
        )));
    }

    #[test]
    fn open_modal_blocks_clicks_on_catalog_below() {
        let mut app = two_project_app();
        let _ = app.update(Message::Catalog(crate::ui::catalog_list::Message::Select(
            "alpha".into(),
        )));

        let messages = click(&app, "Beta");
        assert!(
            !messages
                .iter()
                .any(|message| matches!(message, Message::Catalog(_))),
            "catalog reacted through the modal: {messages:?}"
        );
        for message in messages {
            let _ = app.update(message);
        }

        let title = app.modal.as_ref().map(|modal| modal.project().title.as_str());
        assert_eq!(title, Some("Alpha"));
    }
}
