// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The catalog list is always rendered; an open project modal is stacked on
//! top of it and captures every event over its bounds.

use super::Message;
use crate::catalog::Catalog;
use crate::domain::ui::ThumbnailHeight;
use crate::ui::catalog_list;
use crate::ui::project_modal;
use iced::widget::{opaque, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub warnings: &'a [String],
    pub modal: Option<&'a project_modal::State>,
    pub thumbnail_height: ThumbnailHeight,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let list = catalog_list::view(catalog_list::ViewContext {
        catalog: ctx.catalog,
        warnings: ctx.warnings,
    })
    .map(Message::Catalog);

    let content: Element<'_, Message> = match ctx.modal {
        Some(modal) => Stack::new()
            .push(list)
            .push(opaque(
                modal
                    .view(project_modal::ViewEnv {
                        thumbnail_height: ctx.thumbnail_height,
                    })
                    .map(Message::ProjectModal),
            ))
            .into(),
        None => list,
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
