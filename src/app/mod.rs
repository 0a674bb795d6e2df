// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the navbar and the grid.
//!
//! The `App` struct wires together the gallery domains (media list,
//! localization, identity, theming) and translates component events into
//! side effects like config persistence or opening an activated item. This
//! file intentionally keeps policy decisions (window sizing, persistence
//! format, viewer dispatch) close to the main update loop so it is easy to
//! audit user-facing behavior.

mod message;
pub mod paths;
pub mod storage;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::media::{scanner, MediaItem};
use crate::ui::media_grid;
use crate::ui::navbar;
use crate::ui::theming::ThemeMode;
use iced::widget::{mouse_area, Column};
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::Path;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    navbar: navbar::State,
    /// Ordered media list; positions double as activation identities.
    media_items: Vec<MediaItem>,
    items_per_row: u8,
    theme_mode: ThemeMode,
    store: storage::FileStore,
    /// Last committed display name, mirrored here for the window title.
    username: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("media_count", &self.media_items.len())
            .field("items_per_row", &self.items_per_row)
            .finish()
    }
}

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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Non-empty committed name, if the navbar holds one.
fn committed_username(navbar: &navbar::State) -> Option<String> {
    match navbar.name() {
        "" => None,
        name => Some(name.to_string()),
    }
}

impl Default for App {
    fn default() -> Self {
        let (store, _) = storage::FileStore::load();
        let navbar = navbar::State::new(None, &store);
        Self {
            i18n: I18n::default(),
            username: committed_username(&navbar),
            navbar,
            media_items: Vec::new(),
            items_per_row: config::DEFAULT_ITEMS_PER_ROW,
            theme_mode: ThemeMode::System,
            store,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher:
    /// loads preferences and the persisted identity, then scans the requested
    /// directory for media.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let (store, state_warning) = storage::FileStore::load();
        let navbar = navbar::State::new(flags.user.as_deref(), &store);

        let media_items = match &flags.directory {
            Some(dir) => match scanner::scan_directory(Path::new(dir)) {
                Ok(items) => items,
                Err(error) => {
                    eprintln!("Failed to scan {}: {}", dir, error);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        if let Some(warning) = config_warning {
            eprintln!("Config warning: {}", warning);
        }
        if let Some(warning) = state_warning {
            eprintln!("State warning: {}", warning);
        }

        let app = App {
            i18n,
            username: committed_username(&navbar),
            navbar,
            media_items,
            items_per_row: config
                .gallery
                .items_per_row
                .unwrap_or(config::DEFAULT_ITEMS_PER_ROW),
            theme_mode: config.general.theme_mode,
            store,
        };

        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(msg) => {
                match navbar::update(&mut self.navbar, msg, &mut self.store) {
                    navbar::Event::None => {}
                    navbar::Event::NameCommitted(name) => {
                        self.username = Some(name);
                    }
                    navbar::Event::ToggleTheme => {
                        self.theme_mode = self.theme_mode.toggled();
                        persist_theme_mode(self.theme_mode);
                    }
                }
                Task::none()
            }
            Message::Grid(msg) => {
                match media_grid::update(msg) {
                    media_grid::Event::MediaActivated(index) => self.open_media(index),
                }
                Task::none()
            }
        }
    }

    /// Opens the activated item with the system handler. Out-of-range
    /// indices are ignored.
    fn open_media(&self, index: usize) {
        if let Some(item) = self.media_items.get(index) {
            if let Err(error) = open::that(Path::new(&item.title)) {
                eprintln!("Failed to open {}: {}", item.title, error);
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let navbar_view =
            navbar::view(&self.navbar, navbar::ViewContext { i18n: &self.i18n })
                .map(Message::Navbar);

        let grid_view = media_grid::view(
            media_grid::ViewContext { i18n: &self.i18n },
            &self.media_items,
            self.items_per_row,
        )
        .map(Message::Grid);

        // While the name input is up, a click anywhere in the gallery area
        // counts as the input losing focus.
        let content: Element<'_, Message> = if self.navbar.input_shown() {
            mouse_area(grid_view)
                .on_press(Message::Navbar(navbar::Message::InputBlurred))
                .into()
        } else {
            grid_view
        };

        Column::new().push(navbar_view).push(content).into()
    }

    fn title(&self) -> String {
        match &self.username {
            Some(name) => format!("PictoPy - {}", name),
            None => String::from("PictoPy"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }
}

/// Persists the selected theme mode to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the toggle
/// logic directly rather than through the saved file.
fn persist_theme_mode(theme_mode: ThemeMode) {
    if cfg!(test) {
        return;
    }

    let (mut cfg, _) = config::load();
    cfg.general.theme_mode = theme_mode;

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    #[test]
    fn title_reflects_committed_name() {
        let mut app = App::default();
        app.username = None;
        assert_eq!(app.title(), "PictoPy");

        app.username = Some("Alice".to_string());
        assert_eq!(app.title(), "PictoPy - Alice");
    }

    #[test]
    fn toggle_theme_event_flips_mode() {
        let mut app = App::default();
        app.theme_mode = ThemeMode::Light;

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn app_view_renders_without_media() {
        let app = App::default();
        let _element = app.view();
    }

    #[test]
    fn app_view_renders_with_media() {
        let mut app = App::default();
        app.media_items = vec![
            MediaItem::new("photos/one.png", MediaKind::Image),
            MediaItem::new("photos/two.mp4", MediaKind::Video),
        ];
        let _element = app.view();
    }
}
