//! Application layer coordinating state, events and actions.
//!
//! ```text
//! User Input → Events → Event Handler → Filter Pass → Actions → Side Effects
//!                           ↑                                      ↓
//!                           └────────── Worker Responses ──────────┘
//! ```
//!
//! - [`actions`]: side effects emitted by the event handler
//! - [`handler`]: event processing
//! - [`modes`]: input modes and filter control identifiers
//! - [`state`]: application state, listing board and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{FilterControl, InputMode, SearchFocus};
pub use state::{AppState, FilterControls, ListingBoard, DEFAULT_PRICE_RANGES};
