//! StyleHub: a product catalog browser for the terminal, packaged as a Zellij
//! plugin.
//!
//! StyleHub fetches a product list and a category list from a REST API and
//! presents them as a card grid with:
//! - Live title search with match highlighting
//! - Category filtering and price sorting
//! - Favorites persisted across sessions, with a favorites-only view
//! - A detail overlay for the selected product

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, web requests
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event reducer                                    │
//! │  - Selection, modes, detail overlay                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Store │   │ API Layer     │
//! │ (ui/)         │   │ (catalog/)    │   │ (api/)        │
//! │ - Card grid   │   │ - Filter/sort │   │ - Endpoints   │
//! │ - Overlay     │   │ - Favorites   │   │ - Decoding    │
//! │ - Theming     │   │ - Derived view│   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage (storage/), Domain (domain/), Paths        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`api`]: endpoint URLs and response decoding
//! - [`app`]: event reducer and application state
//! - [`catalog`]: product store, filters, favorites and the derived view
//! - [`domain`]: `Product` and the crate error type
//! - [`infrastructure`]: sandbox paths
//! - [`storage`]: key/value persistence backends
//! - [`ui`]: ANSI rendering and themes
//! - `observability`: span export to a local file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/stylehub.wasm" {
//!         api_base_url "https://fakestoreapi.com"
//!         theme "catppuccin-latte"
//!         card_width "36"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Startup
//!
//! 1. `load` parses [`Config`], installs tracing, opens storage (restoring
//!    favorites) and requests web access.
//! 2. Once permission is granted, both endpoints are fetched.
//! 3. The product response moves the store to ready; any failure shows the
//!    blocking error screen.
//!
//! # Library Usage
//!
//! ```rust
//! use stylehub::storage::MemoryStorage;
//! use stylehub::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default(), Box::new(MemoryStorage::new()));
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert_eq!(actions.len(), 2);
//! # Ok::<(), stylehub::StyleHubError>(())
//! ```

pub mod api;
pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, ViewMode};
pub use domain::{Product, ProductId, Rating, Result, StyleHubError};
pub use ui::Theme;

use app::state::{DEFAULT_CARD_WIDTH, MAX_CARD_WIDTH, MIN_CARD_WIDTH};
use catalog::CatalogStore;
use std::collections::BTreeMap;
use storage::Storage;

/// Plugin configuration parsed from the Zellij plugin block.
///
/// ```kdl
/// plugin location="file:/path/to/stylehub.wasm" {
///     api_base_url "http://localhost:8080/"
///     theme "catppuccin-frappe"
///     theme_file "~/.config/stylehub/theme.toml"
///     trace_level "stylehub=debug"
///     card_width "40"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// REST base URL without a trailing slash.
    pub api_base_url: String,

    /// Built-in theme name. Ignored when `theme_file` is set.
    pub theme_name: Option<String>,

    /// Custom theme path, already mapped onto the `/host` mount.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for span export. Default: `"info"`
    pub trace_level: String,

    /// Card width in columns, within 20–60.
    pub card_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: api::DEFAULT_API_BASE_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
            card_width: DEFAULT_CARD_WIDTH,
        }
    }
}

impl Config {
    /// Parses the Zellij configuration map.
    ///
    /// Unknown keys are ignored and invalid values fall back to defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use stylehub::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base_url".to_string(), "http://localhost:3000/".to_string());
    /// map.insert("card_width".to_string(), "100".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_base_url, "http://localhost:3000");
    /// assert_eq!(config.card_width, 60);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let api_base_url = config
            .get("api_base_url")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let card_width = config.get("card_width").map_or(defaults.card_width, |raw| {
            parse_card_width(raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring card_width");
                defaults.card_width
            })
        });

        let trace_level = config
            .get("trace_level")
            .map(|level| level.trim().to_string())
            .filter(|level| !level.is_empty())
            .unwrap_or(defaults.trace_level);

        Self {
            api_base_url,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").map(|path| infrastructure::expand_tilde(path)),
            trace_level,
            card_width,
        }
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    ///
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

fn parse_card_width(raw: &str) -> Result<usize> {
    let width = raw
        .trim()
        .parse::<usize>()
        .map_err(|e| StyleHubError::Config(format!("card_width {raw:?}: {e}")))?;
    Ok(width.clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH))
}

/// Builds the initial application state.
///
/// The catalog store restores favorites from `storage` and starts in the
/// loading state; nothing is fetched until the plugin runtime grants web
/// access.
pub fn initialize(config: &Config, storage: Box<dyn Storage>) -> AppState {
    tracing::debug!(backend = storage.backend_name(), "initializing stylehub");

    let catalog = CatalogStore::new(storage);
    AppState::new(catalog, config.resolve_theme(), config.card_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("api_base_url", " http://localhost:8080// "),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/themes/mine.toml"),
            ("trace_level", "stylehub=debug"),
            ("card_width", "24"),
        ]));

        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/host/themes/mine.toml"));
        assert_eq!(config.trace_level, "stylehub=debug");
        assert_eq!(config.card_width, 24);
    }

    #[test]
    fn card_width_is_clamped_or_defaulted() {
        assert_eq!(Config::from_zellij(&map(&[("card_width", "5")])).card_width, MIN_CARD_WIDTH);
        assert_eq!(Config::from_zellij(&map(&[("card_width", "wide")])).card_width, DEFAULT_CARD_WIDTH);
        assert!(matches!(parse_card_width("-3"), Err(StyleHubError::Config(_))));
    }

    #[test]
    fn blank_values_fall_back() {
        let config = Config::from_zellij(&map(&[("api_base_url", "  "), ("trace_level", "")]));
        assert_eq!(config.api_base_url, api::DEFAULT_API_BASE_URL);
        assert_eq!(config.trace_level, "info");
    }

    #[test]
    fn theme_resolution_order() {
        let named = Config {
            theme_name: Some("catppuccin-macchiato".to_string()),
            ..Config::default()
        };
        assert_eq!(named.resolve_theme().name, "catppuccin-macchiato");

        let unknown = Config {
            theme_name: Some("gruvbox".to_string()),
            ..Config::default()
        };
        assert_eq!(unknown.resolve_theme(), Theme::default());

        let mut custom = Theme::from_name("catppuccin-latte").unwrap();
        custom.name = "mine".to_string();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes()).unwrap();

        let from_file = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert_eq!(from_file.resolve_theme().name, "mine");

        let missing_file = Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(missing_file.resolve_theme(), Theme::default());
    }

    #[test]
    fn initialize_restores_favorites_and_starts_loading() {
        let storage = MemoryStorage::with_entry(catalog::FAVORITES_KEY, "[3,1]");
        let config = Config {
            card_width: 40,
            ..Config::default()
        };

        let state = initialize(&config, Box::new(storage));

        assert_eq!(state.card_width, 40);
        assert!(state.catalog.is_favorite(3));
        assert!(state.catalog.is_favorite(1));
        assert_eq!(*state.catalog.load_state(), catalog::LoadState::Loading);
    }
}
