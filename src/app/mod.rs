//! Application layer between the plugin runtime and the catalog.
//!
//! ```text
//! Key / WebRequestResult → Event → handle_event → AppState mutations → Actions
//!                                                        ↓
//!                                               compute_viewmodel → ui::render
//! ```
//!
//! - [`actions`]: side effects returned by the handler
//! - [`handler`]: the event reducer
//! - [`keys`]: key bindings per mode
//! - [`modes`]: input and view modes
//! - [`state`]: [`AppState`] and view model computation

pub mod actions;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keys::{map_key, Key};
pub use modes::{InputMode, SearchFocus, ViewMode};
pub use state::AppState;
