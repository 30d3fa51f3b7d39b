//! Event handling and state transitions.
//!
//! Every key press and network result is turned into an [`Event`] by the plugin
//! runtime and applied here synchronously. [`handle_event`] mutates the
//! [`AppState`] and returns whether a re-render is needed together with the
//! side effects to run.
//!
//! Once a load has failed, only [`Event::CloseFocus`] has any effect.
//!
//! ```
//! use stylehub::app::{handle_event, Action, AppState, Event};
//! use stylehub::catalog::CatalogStore;
//! use stylehub::storage::MemoryStorage;
//! use stylehub::ui::Theme;
//!
//! let mut state = AppState::new(CatalogStore::new(Box::new(MemoryStorage::new())), Theme::default(), 32);
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert_eq!(actions.len(), 2);
//! # Ok::<(), stylehub::StyleHubError>(())
//! ```

use super::modes::{InputMode, SearchFocus, ViewMode};
use crate::api::{decode_response, Endpoint, Payload};
use crate::app::{Action, AppState};
use crate::domain::error::{Result, StyleHubError};

/// Discrete occurrences the handler reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Opens the detail overlay for the selected card.
    OpenDetail,
    CloseDetail,
    /// Toggles the favorite flag of the detail product, or of the selected
    /// card when no overlay is open.
    ToggleFavorite,
    ToggleSort,
    NextCategory,
    PrevCategory,
    ToggleFavoritesView,
    /// Leaves the favorites-only view.
    BrowseAll,
    /// Placeholder purchase control in the detail overlay.
    AddToCart,
    /// Enters search mode with typing focus and an empty query.
    SearchMode,
    /// Returns from result navigation to editing the query.
    FocusSearchBar,
    /// Stops editing and navigates the results, keeping the query.
    FocusResults,
    /// Clears the query and leaves search mode.
    ExitSearch,
    Char(char),
    Backspace,
    Escape,
    CloseFocus,

    /// Outcome of the web access permission request.
    PermissionsResult { granted: bool },

    /// A `web_request` result routed by its endpoint context.
    Response {
        endpoint: Endpoint,
        status: u16,
        body: Vec<u8>,
    },
}

impl Event {
    /// Events that still apply after a terminal load failure.
    const fn survives_failure(&self) -> bool {
        matches!(self, Self::CloseFocus | Self::Response { .. } | Self::PermissionsResult { .. })
    }
}

/// Applies `event` to `state`.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Does not currently return an error.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    if state.catalog.is_failed() && !event.survives_failure() {
        return Ok((false, vec![]));
    }

    match event {
        Event::MoveUp => {
            state.move_up();
            Ok((true, vec![]))
        }
        Event::MoveDown => {
            state.move_down();
            Ok((true, vec![]))
        }
        Event::MoveLeft => {
            state.move_left();
            Ok((true, vec![]))
        }
        Event::MoveRight => {
            state.move_right();
            Ok((true, vec![]))
        }
        Event::OpenDetail => Ok((state.open_detail(), vec![])),
        Event::CloseDetail => {
            state.close_detail();
            Ok((true, vec![]))
        }
        Event::ToggleFavorite => {
            let target = match state.view_mode {
                ViewMode::Detail(id) => Some(id),
                ViewMode::Grid => state.selected_product().map(|product| product.id),
            };

            let Some(id) = target else {
                tracing::debug!("no product selected to favorite");
                return Ok((false, vec![]));
            };

            state.catalog.toggle_favorite(id);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::ToggleSort => {
            state.catalog.toggle_sort_order();
            Ok((true, vec![]))
        }
        Event::NextCategory => {
            state.cycle_category(true);
            Ok((true, vec![]))
        }
        Event::PrevCategory => {
            state.cycle_category(false);
            Ok((true, vec![]))
        }
        Event::ToggleFavoritesView => {
            let enabled = !state.catalog.filter().show_favorites_only;
            state.catalog.set_show_favorites_only(enabled);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::BrowseAll => {
            if !state.catalog.filter().show_favorites_only {
                return Ok((false, vec![]));
            }
            state.catalog.set_show_favorites_only(false);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::AddToCart => {
            if let Some(product) = state.detail_product() {
                tracing::info!(product_id = product.id, title = %product.title, "add to cart is not available");
            }
            Ok((false, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.catalog.set_search_query("");
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.catalog.filter().search_query.is_empty() {
                state.input_mode = InputMode::Normal;
            } else {
                state.input_mode = InputMode::Search(SearchFocus::Navigating);
            }
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.catalog.filter().search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.catalog.set_search_query("");
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }

            let mut query = state.catalog.filter().search_query.clone();
            query.push(*c);
            tracing::trace!(query = %query, char = %c, "search query updated");

            state.catalog.set_search_query(&query);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }

            let mut query = state.catalog.filter().search_query.clone();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }

            state.catalog.set_search_query(&query);
            state.clamp_selection();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::PermissionsResult { granted } => {
            if *granted {
                tracing::info!("web access granted, fetching catalog");
                Ok((false, Endpoint::ALL.into_iter().map(Action::Fetch).collect()))
            } else {
                state.catalog.fail_load(&StyleHubError::load_failure(
                    "catalog",
                    "Web access permission was denied",
                ));
                Ok((true, vec![]))
            }
        }
        Event::Response { endpoint, status, body } => {
            match decode_response(*endpoint, *status, body) {
                Ok(Payload::Products(products)) => {
                    state.catalog.load(products);
                    state.clamp_selection();
                }
                Ok(Payload::Categories(categories)) => state.catalog.load_categories(categories),
                Err(e) => state.catalog.fail_load(&e),
            }
            Ok((true, vec![]))
        }
    }
}

/// Logs events without dumping response bodies.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::Response { endpoint, status, body } => f
                .debug_struct("Response")
                .field("endpoint", endpoint)
                .field("status", status)
                .field("body_len", &body.len())
                .finish(),
            other => std::fmt::Debug::fmt(other, f),
        }
    }
}
