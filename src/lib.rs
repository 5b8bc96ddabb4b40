//! propsift: a Zellij plugin for browsing and filtering property listings.
//!
//! Listings are read from a JSON catalog and narrowed by four controls, all
//! combined with AND: property type, bedroom label, price range and a
//! case-insensitive free-text search over title and location. When nothing
//! matches, a single empty-state notice is shown in place of the table.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, one filter pass per change       │
//! │  - Listing board and filter controls                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON catalog│   │ - Catalog I/O │
//! │ - Theming     │   │ - Lenient     │   │ - IPC bridge  │
//! │ - Components  │   │   decoding    │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and Infrastructure                │
//! │  - Listing model, criteria, filter engine           │
//! │  - Empty-state indicator sync                       │
//! │  - Sandbox paths                                    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing + OpenTelemetry file export              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/propsift.wasm" {
//!         listings_file "~/.config/propsift/listings.json"
//!         price_ranges "all,0-300000,300000-"
//!         theme "light"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Library usage
//!
//! ```
//! use propsift::{handle_event, initialize, Config, Event, Listing, WorkerResponse};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let listings = vec![Listing::new("house", "3", 420_000, "Oak Villa", "Hillside")];
//! handle_event(
//!     &mut state,
//!     &Event::WorkerResponse(WorkerResponse::ListingsLoaded {
//!         path: config.catalog_path(),
//!         listings,
//!     }),
//! )?;
//! assert_eq!(state.visible_count(), 1);
//! # Ok::<(), propsift::PropsiftError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, FilterControl, InputMode, SearchFocus};
pub use domain::{evaluate, FilterCriteria, FilterResult, Listing, PropsiftError, Result};
pub use ui::Theme;
pub use worker::{ListingWorker, WorkerMessage, WorkerResponse};

use std::collections::BTreeMap;

/// Catalog location used when `listings_file` is not configured.
pub const DEFAULT_LISTINGS_FILE: &str = "~/.config/propsift/listings.json";

/// Filter directive used when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog path as configured; `~` maps onto the sandbox's `/host`.
    pub listings_file: String,

    /// Options of the price control, wildcard first.
    pub price_ranges: Vec<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: String,

    /// Path to a custom TOML theme.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive, e.g. `debug` or `propsift=trace`.
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listings_file: DEFAULT_LISTINGS_FILE.to_string(),
            price_ranges: default_price_ranges(),
            theme_name: ui::theme::DEFAULT_THEME.to_string(),
            theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
        }
    }
}

fn default_price_ranges() -> Vec<String> {
    app::DEFAULT_PRICE_RANGES
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Returns the trimmed value of `key` unless it is missing or blank.
fn non_blank<'a>(config: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    config
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

impl Config {
    /// Parses Zellij's configuration map. Missing, blank or unusable values
    /// fall back to their defaults.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use propsift::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("price_ranges".to_string(), "0-100000, 100000-".to_string());
    /// map.insert("theme".to_string(), "light".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.price_ranges, vec!["all", "0-100000", "100000-"]);
    /// assert_eq!(config.theme_name, "light");
    /// assert_eq!(config.listings_file, "~/.config/propsift/listings.json");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let price_ranges = non_blank(config, "price_ranges")
            .map(|raw| {
                let mut ranges: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|range| !range.is_empty())
                    .map(String::from)
                    .collect();
                if ranges.first().map(String::as_str) != Some(domain::WILDCARD) {
                    ranges.retain(|range| range != domain::WILDCARD);
                    ranges.insert(0, domain::WILDCARD.to_string());
                }
                ranges
            })
            .filter(|ranges| ranges.len() > 1)
            .unwrap_or(defaults.price_ranges);

        Self {
            listings_file: non_blank(config, "listings_file")
                .map_or(defaults.listings_file, String::from),
            price_ranges,
            theme_name: non_blank(config, "theme").map_or(defaults.theme_name, String::from),
            theme_file: non_blank(config, "theme_file").map(String::from),
            trace_level: non_blank(config, "trace_level").map_or(defaults.trace_level, String::from),
        }
    }

    /// Catalog path inside the sandbox.
    #[must_use]
    pub fn catalog_path(&self) -> String {
        infrastructure::expand_tilde(&self.listings_file)
    }

    /// Resolves the theme: `theme_file` first, then `theme_name`, then the
    /// default. Failures are logged and fall through.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(infrastructure::expand_tilde(theme_file)) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, falling back");
                }
            }
        }

        Theme::from_name(&self.theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %self.theme_name, "unknown theme, using default");
            Theme::default()
        })
    }
}

/// Builds the initial state for `config`. The board is empty until the
/// worker delivers the catalog, so the empty-state notice starts attached.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        catalog = %config.catalog_path(),
        price_options = config.price_ranges.len(),
        "initializing propsift plugin"
    );

    AppState::new(config.catalog_path(), &config.price_ranges, config.load_theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn blank_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("listings_file", "  "),
            ("theme", ""),
            ("trace_level", " "),
            ("price_ranges", " , ,"),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn catalog_path_maps_home_to_host() {
        let config = Config::from_zellij(&map(&[("listings_file", "~/homes.json")]));
        assert_eq!(config.catalog_path(), "/host/homes.json");
    }

    #[test]
    fn wildcard_is_moved_to_the_front() {
        let config = Config::from_zellij(&map(&[("price_ranges", "0-10, all, 10-")]));
        assert_eq!(config.price_ranges, vec!["all", "0-10", "10-"]);
    }

    #[test]
    fn unknown_theme_uses_default() {
        let config = Config::from_zellij(&map(&[("theme", "neon")]));
        assert_eq!(config.load_theme(), Theme::default());
    }

    #[test]
    fn missing_theme_file_falls_back_to_theme_name() {
        let config = Config::from_zellij(&map(&[
            ("theme", "light"),
            ("theme_file", "/definitely/not/here.toml"),
        ]));
        assert_eq!(config.load_theme().name, "light");
    }

    #[test]
    fn initialize_starts_with_the_notice_attached() {
        let state = initialize(&Config::default());
        assert_eq!(state.catalog_path, "/host/.config/propsift/listings.json");
        assert!(state.board.notice().is_some());
        assert_eq!(state.visible_count(), 0);
    }
}
