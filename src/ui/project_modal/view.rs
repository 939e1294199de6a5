// SPDX-License-Identifier: MPL-2.0
//! Project modal rendering.

use super::component::{Message, State, ViewEnv};
use super::lightbox;
use crate::domain::description::{Block, BULLET_MARKER};
use crate::domain::project::{Layout, ProjectData, ProjectImage, ProjectLink};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{ContentFit, Element, Length};

pub fn view(state: &State, env: ViewEnv) -> Element<'_, Message> {
    let project = state.project();

    let header = Row::new()
        .push(
            Text::new(project.title.as_str())
                .size(typography::TITLE_LG)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("Close").size(typography::BODY))
                .on_press(Message::Close)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::secondary),
        )
        .spacing(spacing::MD);

    let text = Column::new()
        .push(description(state.blocks()))
        .push(links(&project.links))
        .spacing(spacing::LG);

    let body: Element<'_, Message> = match project.layout {
        Layout::Default => Column::new()
            .push(text)
            .push(gallery(project, env.thumbnail_height.value()))
            .spacing(spacing::LG)
            .into(),
        Layout::Side => Row::new()
            .push(Container::new(text).width(Length::Fixed(sizing::SIDE_TEXT_WIDTH)))
            .push(gallery(project, env.thumbnail_height.enlarged()))
            .spacing(spacing::LG)
            .into(),
    };

    let card = Container::new(Scrollable::new(
        Column::new()
            .push(header)
            .push(body)
            .spacing(spacing::LG)
            .padding(spacing::LG),
    ))
    .max_width(sizing::MODAL_MAX_WIDTH)
    .style(styles::container::panel);

    let modal = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .style(styles::container::scrim);

    let focused = state
        .gallery()
        .focus()
        .index()
        .and_then(|index| project.image(index));

    match (focused, state.gallery().counter()) {
        (Some(image), Some(counter)) => Stack::new()
            .push(modal)
            .push(lightbox::view(image, &project.title, counter))
            .into(),
        _ => modal.into(),
    }
}

fn description(blocks: &[Block]) -> Element<'_, Message> {
    blocks
        .iter()
        .fold(Column::new().spacing(spacing::MD), |column, block| {
            column.push(block_view(block))
        })
        .into()
}

fn block_view(block: &Block) -> Element<'_, Message> {
    match block {
        Block::Paragraph { text } => Text::new(text.as_str()).size(typography::BODY).into(),
        Block::Section { heading, items } => Column::new()
            .push(Text::new(heading.as_str()).size(typography::TITLE_SM))
            .push(bullets(items))
            .spacing(spacing::XS)
            .into(),
        Block::List { items } => bullets(items),
    }
}

fn bullets(items: &[String]) -> Element<'_, Message> {
    items
        .iter()
        .fold(
            Column::new().spacing(spacing::XXS).padding([0.0, spacing::SM]),
            |column, item| {
                column.push(Text::new(format!("{BULLET_MARKER}{item}")).size(typography::BODY))
            },
        )
        .into()
}

fn gallery(project: &ProjectData, height: f32) -> Element<'_, Message> {
    project
        .images
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::SM), |row, (index, image)| {
            row.push(thumbnail(index, image, height))
        })
        .wrap()
        .into()
}

fn thumbnail(index: usize, image: &ProjectImage, height: f32) -> Element<'_, Message> {
    let picture = button(
        Image::new(Handle::from_path(&image.src))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Contain),
    )
    .on_press(Message::OpenImage(index))
    .padding(spacing::XXS)
    .style(styles::button::thumbnail);

    let figure = Column::new().push(picture).spacing(spacing::XXS);
    match image.alt.as_deref() {
        Some(alt) => figure
            .push(Text::new(alt).size(typography::CAPTION))
            .into(),
        None => figure.into(),
    }
}

fn links(links: &[ProjectLink]) -> Element<'_, Message> {
    if links.is_empty() {
        return Space::new().height(Length::Shrink).into();
    }
    links
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, link| {
            row.push(
                button(Text::new(link.name.as_str()).size(typography::BODY))
                    .on_press(Message::OpenLink(link.link.clone()))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::primary),
            )
        })
        .wrap()
        .into()
}
