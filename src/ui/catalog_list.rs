// SPDX-License-Identifier: MPL-2.0
//! Project list shown behind the project modal.

use crate::catalog::Catalog;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Scrollable, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Opens the project with this catalog id.
    Select(String),
}

/// Contextual data needed to render the list.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    /// Startup problems (unreadable settings or catalog), shown above the list.
    pub warnings: &'a [String],
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .push(Text::new("Projects").size(typography::TITLE_MD))
        .spacing(spacing::SM);

    for warning in ctx.warnings {
        content = content.push(Text::new(warning.as_str()).size(typography::CAPTION));
    }

    if ctx.catalog.is_empty() {
        content = content.push(Text::new("No projects to show.").size(typography::BODY));
    }

    let content = ctx.catalog.iter().fold(content, |column, entry| {
        column.push(
            button(Text::new(entry.project.title.as_str()).size(typography::BODY))
                .on_press(Message::Select(entry.id.clone()))
                .width(Length::Fill)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
    });

    Container::new(Scrollable::new(
        Container::new(content)
            .max_width(sizing::CATALOG_WIDTH)
            .padding(spacing::LG),
    ))
    .center_x(Length::Fill)
    .height(Length::Fill)
    .into()
}
