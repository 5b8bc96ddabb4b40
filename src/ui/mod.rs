//! Terminal UI.
//!
//! - [`viewmodel`]: display-ready types computed from application state
//! - [`renderer`]: entry point turning state into ANSI output
//! - [`components`]: header, filter bar, search box, table, notice, footer
//! - [`helpers`]: character-safe text utilities and price formatting
//! - [`theme`]: color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Columns, DisplayItem, EmptyState, FilterBarInfo, FilterEntry, FooterInfo, HeaderInfo,
    SearchBarInfo, UIViewModel,
};
