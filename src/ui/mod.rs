//! Terminal UI.
//!
//! - [`viewmodel`]: display-ready view model types
//! - [`renderer`]: frame rendering entry points
//! - [`components`]: per-region renderers
//! - [`helpers`]: canvas and text utilities
//! - [`theme`]: color themes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    CardInfo, DetailInfo, EmptyState, FooterInfo, GridInfo, HeaderInfo, SearchBarInfo, StatusScreen, TextLine,
    ToolbarInfo, UIViewModel,
};
