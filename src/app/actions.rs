//! Side effects produced by the event handler.
//!
//! The handler never talks to Zellij directly; it returns a `Vec<Action>` and
//! the plugin runtime executes each one in order.
//!
//! ```
//! use stylehub::api::Endpoint;
//! use stylehub::app::Action;
//!
//! let startup: Vec<Action> = Endpoint::ALL.into_iter().map(Action::Fetch).collect();
//! assert_eq!(startup.len(), 2);
//! ```

use crate::api::Endpoint;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues a GET for the endpoint through `web_request`.
    ///
    /// Fire and forget: the result comes back later as an
    /// [`Event::Response`](crate::app::Event::Response).
    Fetch(Endpoint),
}
