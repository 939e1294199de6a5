// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::application::description_cache::DescriptionCache;
use crate::application::gallery::KeyBindings;
use crate::catalog::Catalog;
use crate::ui::catalog_list;
use crate::ui::project_modal::{self, Effect};
use iced::Task;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub catalog: &'a Catalog,
    pub cache: &'a mut DescriptionCache,
    pub key_bindings: &'a KeyBindings,
    pub modal: &'a mut Option<project_modal::State>,
}

pub fn handle_catalog_message(
    ctx: &mut UpdateContext<'_>,
    message: catalog_list::Message,
) -> Task<Message> {
    match message {
        catalog_list::Message::Select(id) => open_project(ctx, &id),
    }
    Task::none()
}

pub fn handle_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: project_modal::Message,
) -> Task<Message> {
    let Some(modal) = ctx.modal.as_mut() else {
        return Task::none();
    };

    match modal.handle_message(message) {
        Effect::None => {}
        Effect::Close => *ctx.modal = None,
        Effect::OpenLink(url) => open_link(&url),
    }
    Task::none()
}

/// Shows the project with catalog id `id`.
///
/// An already open modal is updated in place so its lightbox focus is
/// reconciled against the new gallery instead of being reset.
pub fn open_project(ctx: &mut UpdateContext<'_>, id: &str) {
    let Some(entry) = ctx.catalog.get(id) else {
        log::warn!("no project with id '{id}' in catalog");
        return;
    };

    let project = entry.project.clone();
    let blocks = ctx.cache.blocks(&project.description);

    match ctx.modal.as_mut() {
        Some(modal) => modal.set_project(project, blocks),
        None => {
            *ctx.modal = Some(project_modal::State::new(
                project,
                blocks,
                ctx.key_bindings.clone(),
            ));
        }
    }
}

fn open_link(url: &str) {
    match open::that_detached(url) {
        Ok(()) => log::info!("opened {url}"),
        Err(err) => log::warn!("failed to open {url}: {err}"),
    }
}
