//! Domain layer for the propsift plugin.
//!
//! Holds the listing model and the filter engine, independent of Zellij APIs,
//! storage and rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: The `Listing` record and lenient attribute parsing
//! - [`criteria`]: Filter criteria snapshots built from control values
//! - [`filter`]: The pure predicate, `FilterResult`, and applying a pass
//! - [`indicator`]: Visibility and empty-state seams for presentations
//!
//! # Examples
//!
//! ```
//! use propsift::domain::{evaluate, FilterCriteria, Listing};
//!
//! let listings = vec![Listing::new("apartment", "2", 250_000, "Sunny Flat", "Riverside")];
//! let result = evaluate(&listings, &FilterCriteria::from_controls("house", "all", "all", ""));
//! assert!(!result.has_any_visible());
//! ```

pub mod criteria;
pub mod error;
pub mod filter;
pub mod indicator;
pub mod listing;

#[cfg(test)]
mod scenarios;

pub use criteria::{Choice, FilterCriteria, PriceRange, WILDCARD};
pub use error::{PropsiftError, Result};
pub use filter::{apply, evaluate, first_rejection, matches, Clause, FilterResult};
pub use indicator::{
    sync_indicator, IndicatorChange, IndicatorHost, IndicatorState, VisibilityRenderer,
    EMPTY_RESULTS_MESSAGE,
};
pub use listing::Listing;
