// SPDX-License-Identifier: MPL-2.0
//! Responsive media grid.
//!
//! Renders the gallery's thumbnails in a column layout that adapts to the
//! available width: narrow windows get a single column, medium windows up to
//! two, and wider windows grow toward the configured items-per-row ceiling
//! (2, 3, or 4; anything else behaves like 4). Each cell shows a thumbnail
//! and a shortened file name, and clicking a cell reports the item's position
//! in the input sequence through [`Event::MediaActivated`]. The input order
//! is the activation identity, so it is preserved exactly.

use crate::config::MAX_ITEMS_PER_ROW;
use crate::i18n::fluent::I18n;
use crate::media::{MediaItem, MediaKind};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::mouse;
use iced::widget::image::{Handle, Image};
use iced::widget::{mouse_area, responsive, Column, Container, Row, Scrollable, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Size,
};

/// Width below which the grid collapses to a single column.
const BREAKPOINT_SM: f32 = 640.0;
/// Width from which a third column may appear.
const BREAKPOINT_MD: f32 = 768.0;
/// Width from which a fourth column may appear.
const BREAKPOINT_LG: f32 = 1024.0;

/// Messages emitted by the grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// The cell at this position in the input sequence was clicked.
    MediaClicked(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The item at this position should be opened in a viewer.
    MediaActivated(usize),
}

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Process a grid message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::MediaClicked(index) => Event::MediaActivated(index),
    }
}

/// Clamps the configured items-per-row to the recognized set.
///
/// Values outside {2, 3, 4} behave like the maximum-column layout.
fn effective_items_per_row(items_per_row: u8) -> u8 {
    if (2..=MAX_ITEMS_PER_ROW).contains(&items_per_row) {
        items_per_row
    } else {
        MAX_ITEMS_PER_ROW
    }
}

/// Number of columns for the given width and items-per-row setting.
///
/// The small tier is always one column; the medium tier allows two; larger
/// tiers allow three and four, always capped by the configured ceiling.
fn column_count(available_width: f32, items_per_row: u8) -> usize {
    let ceiling = usize::from(effective_items_per_row(items_per_row));

    let tier = if available_width >= BREAKPOINT_LG {
        4
    } else if available_width >= BREAKPOINT_MD {
        3
    } else if available_width >= BREAKPOINT_SM {
        2
    } else {
        1
    };

    tier.min(ceiling)
}

/// Derives the label shown under a thumbnail from its path-like title.
///
/// The title is reduced to its final path segment (either separator style),
/// and long base names are truncated to 15 characters followed by `...` and
/// the extension. The extension is removed from the base name by its first
/// occurrence, not as a suffix; base names that contain `.<extension>` early
/// keep that historical behavior.
pub fn display_name(title: &str) -> String {
    let file_name = title
        .rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .unwrap_or("");

    let (base_name, extension) = match file_name.rfind('.') {
        Some(_) => {
            let extension = file_name.rsplit('.').next().unwrap_or("");
            let base_name = file_name.replacen(&format!(".{}", extension), "", 1);
            (base_name, extension)
        }
        None => (file_name.to_string(), ""),
    };

    if base_name.chars().count() > 15 {
        let prefix: String = base_name.chars().take(15).collect();
        format!("{}...{}", prefix, extension)
    } else {
        file_name.to_string()
    }
}

/// Render the media grid, or the empty-state placeholder when there is
/// nothing to show.
pub fn view<'a>(
    ctx: ViewContext<'a>,
    items: &'a [MediaItem],
    items_per_row: u8,
) -> Element<'a, Message> {
    if items.is_empty() {
        return empty_state(ctx.i18n);
    }

    responsive(move |available_size: Size| {
        let columns = column_count(available_size.width, items_per_row);
        grid(items, columns)
    })
    .into()
}

/// Fixed-size placeholder shown when the media list is empty.
fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("media-grid-empty"))
        .size(typography::TITLE_LG)
        .color(palette::GRAY_400);

    Container::new(title)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::EMPTY_STATE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Builds the scrollable column-of-rows layout for a fixed column count.
fn grid(items: &[MediaItem], columns: usize) -> Element<'_, Message> {
    let mut content = Column::new().spacing(spacing::MD).padding(spacing::MD);

    for (row_index, chunk) in items.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(spacing::MD);

        for (col_index, item) in chunk.iter().enumerate() {
            let index = row_index * columns + col_index;
            row = row.push(media_cell(index, item));
        }

        // Pad the final row so cells keep equal widths.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }

        content = content.push(row);
    }

    Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// A single activatable cell: thumbnail plus shortened label.
fn media_cell(index: usize, item: &MediaItem) -> Element<'_, Message> {
    let thumbnail: Element<'_, Message> = match item.kind {
        MediaKind::Image => Image::new(Handle::from_path(&item.title))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        MediaKind::Video => Container::new(Text::new("▶").size(typography::TITLE_LG))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::video_placeholder)
            .into(),
    };

    let label = Text::new(display_name(&item.title))
        .size(typography::BODY)
        .width(Length::Fill)
        .center();

    let card = Column::new()
        .spacing(spacing::XXS)
        .push(thumbnail)
        .push(label);

    Container::new(
        mouse_area(card)
            .on_press(Message::MediaClicked(index))
            .interaction(mouse::Interaction::Pointer),
    )
    .width(Length::FillPortion(1))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<MediaItem> {
        (0..count)
            .map(|i| MediaItem::new(format!("photo_{}.png", i), MediaKind::Image))
            .collect()
    }

    #[test]
    fn activation_maps_click_to_same_index() {
        for index in [0usize, 1, 7, 42] {
            let event = update(Message::MediaClicked(index));
            assert_eq!(event, Event::MediaActivated(index));
        }
    }

    #[test]
    fn narrow_width_always_uses_one_column() {
        for items_per_row in [2, 3, 4, 7] {
            assert_eq!(column_count(500.0, items_per_row), 1);
        }
    }

    #[test]
    fn medium_width_caps_at_two_columns() {
        assert_eq!(column_count(700.0, 2), 2);
        assert_eq!(column_count(700.0, 3), 2);
        assert_eq!(column_count(700.0, 4), 2);
    }

    #[test]
    fn wide_tiers_grow_to_configured_ceiling() {
        assert_eq!(column_count(800.0, 3), 3);
        assert_eq!(column_count(1200.0, 3), 3);
        assert_eq!(column_count(800.0, 4), 3);
        assert_eq!(column_count(1200.0, 4), 4);
        assert_eq!(column_count(1200.0, 2), 2);
    }

    #[test]
    fn unrecognized_items_per_row_behaves_like_four() {
        for width in [500.0, 700.0, 800.0, 1200.0] {
            assert_eq!(column_count(width, 7), column_count(width, 4));
            assert_eq!(column_count(width, 0), column_count(width, 4));
            assert_eq!(column_count(width, 1), column_count(width, 4));
        }
    }

    #[test]
    fn display_name_shortens_long_base_names() {
        assert_eq!(
            display_name("C:\\Users\\me\\a_very_long_filename_example.png"),
            "a_very_long_fil...png"
        );
    }

    #[test]
    fn display_name_keeps_short_names_unchanged() {
        assert_eq!(display_name("short.png"), "short.png");
        assert_eq!(display_name("photos/short.png"), "short.png");
    }

    #[test]
    fn display_name_of_empty_title_is_empty() {
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn display_name_handles_both_separator_styles() {
        assert_eq!(display_name("a/b/c/photo.jpg"), "photo.jpg");
        assert_eq!(display_name("a\\b\\c\\photo.jpg"), "photo.jpg");
        assert_eq!(display_name("a/b\\c/photo.jpg"), "photo.jpg");
    }

    #[test]
    fn display_name_without_extension_appends_bare_dots() {
        assert_eq!(
            display_name("averyverylongbarefilename"),
            "averyverylongba..."
        );
    }

    #[test]
    fn display_name_removes_first_extension_occurrence() {
        // The extension is removed by first occurrence, not as a suffix;
        // the resulting base drops the early ".png", keeping the historical
        // shortening output for such names.
        assert_eq!(
            display_name("gallery_export.png_final_edit.png"),
            "gallery_export_...png"
        );
    }

    #[test]
    fn display_name_keeps_dotfiles_intact() {
        assert_eq!(display_name(".gitignore"), ".gitignore");
    }

    #[test]
    fn grid_view_renders_with_items() {
        let i18n = I18n::default();
        let media = items(5);
        let _element = view(ViewContext { i18n: &i18n }, &media, 3);
    }

    #[test]
    fn grid_view_renders_empty_state() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n }, &[], 4);
    }
}
