// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Border, Theme};

/// Style for clickable text labels (navbar name, theme toggle).
///
/// Transparent at rest, brand accent on hover so the label reads as
/// interactive without looking like a conventional button.
pub fn label(theme: &Theme, status: button::Status) -> button::Style {
    let base_palette = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: None,
            text_color: palette::PRIMARY_400,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: base_palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}
