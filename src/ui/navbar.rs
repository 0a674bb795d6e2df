// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the editable, persisted display name.
//!
//! The bar shows the brand label on the left and a "Welcome <name>" block on
//! the right. The name is a small state machine: until a name has ever been
//! committed the text input is shown unconditionally (placeholder state);
//! once committed, a clickable label replaces it and clicking re-enters edit
//! mode. Committed names are written to the injected [`KeyValueStore`] under
//! [`USERNAME_KEY`] and surfaced to the parent through [`Event::NameCommitted`].

use crate::app::storage::KeyValueStore;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Container, Row, Space, Text},
    Element, Length,
};

/// Storage key for the committed display name.
pub const USERNAME_KEY: &str = "pictopy-username";

/// Which control the identity block is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No name has ever been committed; the input is always shown.
    Placeholder,
    /// A committed name is shown as a clickable label.
    Display,
    /// The input is shown with the current name pre-filled.
    /// `from_placeholder` records which state an abandoned edit returns to.
    Editing { from_placeholder: bool },
}

/// Identity state owned by the navbar.
#[derive(Debug, Clone)]
pub struct State {
    name: String,
    draft: String,
    mode: Mode,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    /// The static name label was clicked.
    NameClicked,
    /// The text input content changed.
    DraftChanged(String),
    /// Enter was pressed in the text input.
    DraftSubmitted,
    /// The text input lost focus.
    InputBlurred,
    /// The theme toggle button was pressed.
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A trimmed, non-empty name was committed and persisted.
    NameCommitted(String),
    ToggleTheme,
}

impl State {
    /// Initializes the identity state.
    ///
    /// The persisted name takes priority over a caller-supplied initial
    /// title; with neither present the state starts in placeholder mode.
    /// An empty stored string counts as absent.
    pub fn new(initial_title: Option<&str>, store: &dyn KeyValueStore) -> Self {
        let stored = store.get(USERNAME_KEY).filter(|name| !name.is_empty());
        let initial = stored.or_else(|| {
            initial_title
                .map(str::to_owned)
                .filter(|name| !name.is_empty())
        });

        match initial {
            Some(name) => Self {
                draft: name.clone(),
                name,
                mode: Mode::Display,
            },
            None => Self {
                name: String::new(),
                draft: String::new(),
                mode: Mode::Placeholder,
            },
        }
    }

    /// The committed display name. Empty until a name has been committed
    /// or seeded from the store / initial title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current content of the text input.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the text input is currently rendered instead of the label.
    pub fn input_shown(&self) -> bool {
        matches!(self.mode, Mode::Placeholder | Mode::Editing { .. })
    }

    /// Commits the trimmed draft: updates the in-memory name, persists it,
    /// and reports the committed value.
    fn commit(&mut self, trimmed: &str, store: &mut dyn KeyValueStore) -> Event {
        self.name = trimmed.to_string();
        self.draft = self.name.clone();
        self.mode = Mode::Display;
        store.set(USERNAME_KEY, &self.name);
        Event::NameCommitted(self.name.clone())
    }
}

/// Process a navbar message and return the corresponding event.
pub fn update(state: &mut State, message: Message, store: &mut dyn KeyValueStore) -> Event {
    match message {
        Message::NameClicked => {
            if state.mode == Mode::Display {
                state.draft = state.name.clone();
                state.mode = Mode::Editing {
                    from_placeholder: false,
                };
            }
            Event::None
        }
        Message::DraftChanged(value) => {
            if state.input_shown() {
                state.draft = value;
            }
            Event::None
        }
        Message::DraftSubmitted => {
            if !state.input_shown() {
                return Event::None;
            }
            let trimmed = state.draft.trim().to_string();
            if trimmed.is_empty() {
                // Whitespace-only submissions are silently ignored; the
                // input stays up so the user can try again.
                return Event::None;
            }
            state.commit(&trimmed, store)
        }
        Message::InputBlurred => {
            if !state.input_shown() {
                return Event::None;
            }
            let trimmed = state.draft.trim().to_string();
            if !trimmed.is_empty() {
                return state.commit(&trimmed, store);
            }
            // Abandoned edit: exit without committing, back to whichever
            // state reflects the prior committed name.
            if let Mode::Editing { from_placeholder } = state.mode {
                state.draft = state.name.clone();
                state.mode = if from_placeholder {
                    Mode::Placeholder
                } else {
                    Mode::Display
                };
            }
            Event::None
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new("PictoPy").size(typography::TITLE_MD);

    let welcome = Text::new(ctx.i18n.tr("navbar-welcome")).size(typography::BODY_LG);

    let identity: Element<'a, Message> = if state.input_shown() {
        let placeholder = ctx.i18n.tr("navbar-name-placeholder");
        text_input(&placeholder, state.draft())
            .on_input(Message::DraftChanged)
            .on_submit(Message::DraftSubmitted)
            .padding([spacing::XXS, spacing::XS])
            .size(typography::BODY)
            .width(Length::Fixed(sizing::NAME_INPUT_WIDTH))
            .into()
    } else {
        let label = if state.name().is_empty() {
            ctx.i18n.tr("navbar-default-name")
        } else {
            state.name().to_string()
        };
        button(Text::new(label).size(typography::BODY_LG))
            .on_press(Message::NameClicked)
            .style(styles::button::label)
            .padding([spacing::XXS, spacing::XS])
            .into()
    };

    let theme_toggle = button(Text::new(ctx.i18n.tr("navbar-theme-toggle")).size(typography::BODY))
        .on_press(Message::ToggleTheme)
        .style(styles::button::label)
        .padding([spacing::XXS, spacing::XS]);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(welcome)
        .push(identity)
        .push(theme_toggle);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::storage::MemoryStore;

    fn seeded_store(name: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(USERNAME_KEY, name);
        store
    }

    #[test]
    fn fresh_mount_starts_in_placeholder_with_input_shown() {
        let store = MemoryStore::new();
        let state = State::new(None, &store);
        assert_eq!(state.mode(), Mode::Placeholder);
        assert!(state.input_shown());
        assert_eq!(state.name(), "");
    }

    #[test]
    fn initial_title_starts_in_display() {
        let store = MemoryStore::new();
        let state = State::new(Some("Alice"), &store);
        assert_eq!(state.mode(), Mode::Display);
        assert_eq!(state.name(), "Alice");
    }

    #[test]
    fn stored_name_overrides_initial_title() {
        let store = seeded_store("Stored");
        let state = State::new(Some("Prop"), &store);
        assert_eq!(state.mode(), Mode::Display);
        assert_eq!(state.name(), "Stored");
    }

    #[test]
    fn empty_stored_name_counts_as_absent() {
        let store = seeded_store("");
        let state = State::new(None, &store);
        assert_eq!(state.mode(), Mode::Placeholder);
    }

    #[test]
    fn clicking_label_enters_editing_prefilled() {
        let mut store = seeded_store("Alice");
        let mut state = State::new(None, &store);

        let event = update(&mut state, Message::NameClicked, &mut store);
        assert_eq!(event, Event::None);
        assert_eq!(
            state.mode(),
            Mode::Editing {
                from_placeholder: false
            }
        );
        assert_eq!(state.draft(), "Alice");
    }

    #[test]
    fn submit_trims_commits_and_persists() {
        let mut store = MemoryStore::new();
        let mut state = State::new(None, &store);

        update(
            &mut state,
            Message::DraftChanged("  Alice  ".to_string()),
            &mut store,
        );
        let event = update(&mut state, Message::DraftSubmitted, &mut store);

        assert_eq!(event, Event::NameCommitted("Alice".to_string()));
        assert_eq!(state.mode(), Mode::Display);
        assert_eq!(state.name(), "Alice");
        assert_eq!(store.get(USERNAME_KEY), Some("Alice".to_string()));
    }

    #[test]
    fn blank_submit_is_ignored_and_stays_editing() {
        let mut store = seeded_store("Alice");
        let mut state = State::new(None, &store);
        update(&mut state, Message::NameClicked, &mut store);
        update(
            &mut state,
            Message::DraftChanged("   ".to_string()),
            &mut store,
        );

        let event = update(&mut state, Message::DraftSubmitted, &mut store);

        assert_eq!(event, Event::None);
        assert_eq!(
            state.mode(),
            Mode::Editing {
                from_placeholder: false
            }
        );
        assert_eq!(state.name(), "Alice");
        assert_eq!(store.get(USERNAME_KEY), Some("Alice".to_string()));
    }

    #[test]
    fn blur_with_value_commits_like_submit() {
        let mut store = seeded_store("Alice");
        let mut state = State::new(None, &store);
        update(&mut state, Message::NameClicked, &mut store);
        update(
            &mut state,
            Message::DraftChanged(" Bob ".to_string()),
            &mut store,
        );

        let event = update(&mut state, Message::InputBlurred, &mut store);

        assert_eq!(event, Event::NameCommitted("Bob".to_string()));
        assert_eq!(state.mode(), Mode::Display);
        assert_eq!(store.get(USERNAME_KEY), Some("Bob".to_string()));
    }

    #[test]
    fn blank_blur_returns_to_display_without_commit() {
        let mut store = seeded_store("Alice");
        let mut state = State::new(None, &store);
        update(&mut state, Message::NameClicked, &mut store);
        update(
            &mut state,
            Message::DraftChanged(String::new()),
            &mut store,
        );

        let event = update(&mut state, Message::InputBlurred, &mut store);

        assert_eq!(event, Event::None);
        assert_eq!(state.mode(), Mode::Display);
        assert_eq!(state.name(), "Alice");
    }

    #[test]
    fn blank_blur_keeps_placeholder_when_never_committed() {
        let mut store = MemoryStore::new();
        let mut state = State::new(None, &store);
        update(
            &mut state,
            Message::DraftChanged("   ".to_string()),
            &mut store,
        );

        let event = update(&mut state, Message::InputBlurred, &mut store);

        assert_eq!(event, Event::None);
        assert_eq!(state.mode(), Mode::Placeholder);
        assert!(state.input_shown());
        assert_eq!(store.get(USERNAME_KEY), None);
    }

    #[test]
    fn submit_from_placeholder_commits_directly() {
        let mut store = MemoryStore::new();
        let mut state = State::new(None, &store);
        update(
            &mut state,
            Message::DraftChanged("Carol".to_string()),
            &mut store,
        );

        let event = update(&mut state, Message::DraftSubmitted, &mut store);

        assert_eq!(event, Event::NameCommitted("Carol".to_string()));
        assert_eq!(state.mode(), Mode::Display);
    }

    #[test]
    fn click_while_editing_is_a_no_op() {
        let mut store = seeded_store("Alice");
        let mut state = State::new(None, &store);
        update(&mut state, Message::NameClicked, &mut store);
        update(
            &mut state,
            Message::DraftChanged("partial".to_string()),
            &mut store,
        );

        update(&mut state, Message::NameClicked, &mut store);

        assert_eq!(
            state.mode(),
            Mode::Editing {
                from_placeholder: false
            }
        );
        assert_eq!(state.draft(), "partial");
    }

    #[test]
    fn toggle_theme_emits_event() {
        let mut store = MemoryStore::new();
        let mut state = State::new(Some("Alice"), &store);
        let event = update(&mut state, Message::ToggleTheme, &mut store);
        assert_eq!(event, Event::ToggleTheme);
    }

    #[test]
    fn navbar_view_renders_in_placeholder() {
        let i18n = I18n::default();
        let store = MemoryStore::new();
        let state = State::new(None, &store);
        let _element = view(&state, ViewContext { i18n: &i18n });
    }

    #[test]
    fn navbar_view_renders_with_name() {
        let i18n = I18n::default();
        let store = seeded_store("Alice");
        let state = State::new(None, &store);
        let _element = view(&state, ViewContext { i18n: &i18n });
    }
}
