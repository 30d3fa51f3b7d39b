//! Keyboard bindings.
//!
//! The plugin shim converts Zellij's `BareKey` into [`Key`] and asks
//! [`map_key`] for the event, so every binding can be exercised from host
//! tests.
//!
//! Search never locks out the toolbar: while browsing search results the sort,
//! category and favorites keys work as they do in the plain grid, and the
//! query stays applied.

use super::handler::Event;
use super::modes::{InputMode, SearchFocus, ViewMode};

/// Keys StyleHub reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Left,
    Right,
    Up,
    Down,
}

/// Event bound to `key` in the current modes, if any.
#[must_use]
pub fn map_key(view_mode: ViewMode, input_mode: InputMode, key: Key) -> Option<Event> {
    if matches!(view_mode, ViewMode::Detail(_)) {
        return match key {
            Key::Char('f') => Some(Event::ToggleFavorite),
            Key::Enter => Some(Event::AddToCart),
            Key::Esc | Key::Char('q') => Some(Event::CloseDetail),
            _ => None,
        };
    }

    match input_mode {
        InputMode::Search(SearchFocus::Typing) => match key {
            Key::Enter => Some(Event::FocusResults),
            Key::Esc => Some(Event::ExitSearch),
            Key::Backspace => Some(Event::Backspace),
            Key::Char(c) => Some(Event::Char(c)),
            _ => None,
        },
        InputMode::Search(SearchFocus::Navigating) => match key {
            Key::Char('/') => Some(Event::FocusSearchBar),
            Key::Esc => Some(Event::ExitSearch),
            _ => browse_key(key),
        },
        InputMode::Normal => match key {
            Key::Char('/') => Some(Event::SearchMode),
            Key::Char('q') => Some(Event::CloseFocus),
            Key::Esc => Some(Event::Escape),
            _ => browse_key(key),
        },
    }
}

/// Grid bindings shared by the plain grid and search results.
fn browse_key(key: Key) -> Option<Event> {
    Some(match key {
        Key::Enter => Event::OpenDetail,
        Key::Char('f') => Event::ToggleFavorite,
        Key::Char('s') => Event::ToggleSort,
        Key::Char('c') => Event::NextCategory,
        Key::Char('C') => Event::PrevCategory,
        Key::Char('v') => Event::ToggleFavoritesView,
        Key::Char('a') => Event::BrowseAll,
        Key::Left | Key::Char('h') => Event::MoveLeft,
        Key::Down | Key::Char('j') => Event::MoveDown,
        Key::Up | Key::Char('k') => Event::MoveUp,
        Key::Right | Key::Char('l') => Event::MoveRight,
        _ => return None,
    })
}
