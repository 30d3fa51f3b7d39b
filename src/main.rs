//! Zellij plugin entry point.
//!
//! Thin layer between the StyleHub library and the Zellij runtime: it turns
//! key presses, permission results and web request results into library
//! events and carries out the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, install tracing, open storage, build `AppState`
//! 2. **Permissions**: request `WebAccess`; the grant triggers both fetches
//! 3. **Update**: translate Zellij events and delegate to `handle_event`
//! 4. **Render**: record the viewport and draw the current frame
//!
//! # Event Mapping
//!
//! - `Key` → navigation, search and overlay events (see below)
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//! - `WebRequestResult` → `Event::Response`, routed by the request context
//!
//! # Keybindings
//!
//! Grid:
//! - `h`/`j`/`k`/`l` or arrows: Move selection
//! - `Enter`: Open detail
//! - `f`: Toggle favorite
//! - `s`: Toggle price sort
//! - `c` / `C`: Next / previous category
//! - `v`: Toggle favorites-only view
//! - `a`: Browse all products
//! - `/`: Search
//! - `q`: Close plugin
//!
//! Search (typing): characters edit the query, `Backspace` deletes, `Enter`
//! moves to the results, `Esc` clears and exits.
//!
//! Search (results): every grid key except `q`, plus `/` to edit the query
//! again. Sort, category and favorites keys keep the query applied.
//!
//! Detail overlay: `f` favorite, `Enter` add to cart, `Esc`/`q` close.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use stylehub::api::Endpoint;
use stylehub::app::{map_key, Key};
use stylehub::{handle_event, Action, Config, Event};

register_plugin!(State);

struct State {
    app: stylehub::AppState,

    /// Base URL requests are issued against.
    api_base_url: String,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: stylehub::initialize(&config, Box::new(stylehub::storage::MemoryStorage::new())),
            api_base_url: config.api_base_url,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the application state, requests web
    /// access and subscribes to events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        stylehub::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(api_base_url = %config.api_base_url, card_width = config.card_width, "parsed configuration");
        self.app = stylehub::initialize(&config, stylehub::storage::open_default());
        self.api_base_url.clone_from(&config.api_base_url);

        request_permission(&[PermissionType::WebAccess, PermissionType::ReadApplicationState]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Returns `true` when the plugin should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        stylehub::ui::render(&self.app);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        let key = match key.bare_key {
            BareKey::Char(c) => Key::Char(c),
            BareKey::Enter => Key::Enter,
            BareKey::Esc => Key::Esc,
            BareKey::Backspace => Key::Backspace,
            BareKey::Left => Key::Left,
            BareKey::Right => Key::Right,
            BareKey::Up => Key::Up,
            BareKey::Down => Key::Down,
            _ => return None,
        };
        map_key(self.app.view_mode, self.app.input_mode, key)
    }

    fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(endpoint) = Endpoint::from_context(context) else {
            tracing::debug!(?context, "ignoring web request result without a known endpoint");
            return None;
        };

        tracing::debug!(%endpoint, status, body_len = body.len(), "web request result");
        Some(Event::Response { endpoint, status, body })
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(endpoint) => {
                let url = endpoint.url(&self.api_base_url);
                tracing::debug!(%endpoint, url = %url, "fetching");
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], endpoint.context());
            }
        }
    }
}
