// SPDX-License-Identifier: MPL-2.0
//! Enlarged image overlay.
//!
//! Clicking the backdrop closes the lightbox; clicks on the image panel and
//! its controls are captured by `opaque` and never reach the backdrop.

use super::component::Message;
use crate::domain::gallery::Counter;
use crate::domain::project::ProjectImage;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, opaque, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};

pub fn view<'a>(image: &'a ProjectImage, title: &'a str, counter: Counter) -> Element<'a, Message> {
    let picture = Image::new(Handle::from_path(&image.src))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain);

    let close = nav_button("✕", Message::CloseLightbox);
    let previous = nav_button("‹", Message::PreviousImage);
    let next = nav_button("›", Message::NextImage);

    let indicator = Container::new(Text::new(counter.to_string()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::FULL));

    let caption = Text::new(image.alt_or(title)).size(typography::BODY);

    let panel = Column::new()
        .push(
            Row::new()
                .push(indicator)
                .push(Container::new(close).align_right(Length::Fill))
                .align_y(Vertical::Center),
        )
        .push(
            Row::new()
                .push(previous)
                .push(picture)
                .push(next)
                .spacing(spacing::MD)
                .align_y(Vertical::Center)
                .height(Length::Fill),
        )
        .push(Container::new(caption).center_x(Length::Fill))
        .spacing(spacing::SM)
        .padding(spacing::LG);

    mouse_area(
        Container::new(opaque(
            Container::new(panel).max_width(sizing::MODAL_MAX_WIDTH),
        ))
        .center_x(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .style(styles::overlay::backdrop),
    )
    .on_press(Message::CloseLightbox)
    .into()
}

fn nav_button(glyph: &str, message: Message) -> Element<'_, Message> {
    button(
        Container::new(Text::new(glyph).size(typography::BODY_LG))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(message)
    .width(Length::Fixed(sizing::LIGHTBOX_NAV))
    .height(Length::Fixed(sizing::LIGHTBOX_NAV))
    .style(styles::button::overlay(
        WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .into()
}
