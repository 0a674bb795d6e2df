// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Border, Color, Theme};

/// Style for the top navigation bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let base_palette = theme.extended_palette();

    container::Style {
        background: Some(base_palette.background.weak.color.into()),
        border: Border {
            color: base_palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Style for video cells that have no decodable thumbnail.
pub fn video_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            }
            .into(),
        ),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
