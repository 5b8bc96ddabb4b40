//! Listing catalog layer.
//!
//! - [`backend`]: the [`ListingSource`] trait
//! - [`json`]: JSON catalog file implementation
//! - [`models`]: serialized catalog types and their lenient conversion

pub mod backend;
pub mod json;
pub mod models;

pub use backend::ListingSource;
pub use json::{parse_catalog, JsonCatalog};
pub use models::{CatalogFile, RawListing, RawValue};
