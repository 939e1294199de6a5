// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (project links).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border) = match status {
        button::Status::Hovered => (palette::ACCENT_400, palette::ACCENT_500),
        button::Status::Disabled => (palette::GRAY_400, palette::GRAY_400),
        button::Status::Active | button::Status::Pressed => {
            (palette::ACCENT_500, palette::ACCENT_600)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_900,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Secondary action button (modal close, catalog entries).
/// Adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };
    let border_color = match status {
        button::Status::Hovered => palette::ACCENT_500,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(bg_color)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Lightbox buttons (previous, next, close) drawn over the image.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Gallery thumbnails: no chrome, accent outline on hover.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_500,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}
