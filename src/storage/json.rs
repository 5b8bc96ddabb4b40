//! JSON catalog listing source.
//!
//! Reads listings from a hand-editable JSON file. The whole file is parsed on
//! every load; catalogs are human-scale, so there is no caching.
//!
//! # File Format
//!
//! ```json
//! {
//!   "listings": [
//!     {
//!       "type": "apartment",
//!       "bedrooms": "2",
//!       "price": 250000,
//!       "title": "Sunny Flat",
//!       "location": "Riverside"
//!     }
//!   ]
//! }
//! ```
//!
//! A bare top-level array of listing objects is accepted as well.

use crate::domain::error::{PropsiftError, Result};
use crate::domain::Listing;
use crate::storage::backend::ListingSource;
use crate::storage::models::{CatalogFile, RawListing};
use std::path::{Path, PathBuf};

/// Listing source backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    /// Path to the catalog file.
    file_path: PathBuf,
}

impl JsonCatalog {
    /// Creates a catalog for the given path. No I/O happens until
    /// [`ListingSource::load_listings`] is called.
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Path of the catalog file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

/// Parses catalog contents into listings.
///
/// # Errors
///
/// Returns [`PropsiftError::Catalog`] if `contents` is not valid JSON, or is
/// neither an object with a `listings` array nor a bare array. Individual
/// entries never fail the parse.
///
/// # Examples
///
/// ```
/// use propsift::storage::parse_catalog;
///
/// let listings = parse_catalog(r#"[{"type": "house", "price": "450000", "title": "Oak Villa"}]"#)?;
/// assert_eq!(listings[0].price, 450_000);
/// assert_eq!(listings[0].location, "");
/// # Ok::<(), propsift::PropsiftError>(())
/// ```
pub fn parse_catalog(contents: &str) -> Result<Vec<Listing>> {
    let value: serde_json::Value = serde_json::from_str(contents)
        .map_err(|e| PropsiftError::Catalog(format!("failed to parse JSON: {e}")))?;

    let file = CatalogFile::from_value(value).ok_or_else(|| {
        PropsiftError::Catalog(
            "expected an object with a `listings` array or a bare array of listings".to_string(),
        )
    })?;

    Ok(file
        .into_entries()
        .into_iter()
        .map(RawListing::into_listing)
        .collect())
}

impl ListingSource for JsonCatalog {
    fn load_listings(&self) -> Result<Vec<Listing>> {
        let _span = tracing::debug_span!("json_load_listings", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let listings = parse_catalog(&contents)?;

        tracing::debug!(count = listings.len(), "catalog loaded");
        Ok(listings)
    }

    fn location(&self) -> String {
        self.file_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_wrapped_catalog_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("listings.json");
        fs::write(
            &path,
            r#"{
                "listings": [
                    {"type": "apartment", "bedrooms": "2", "price": 250000, "title": "Sunny Flat", "location": "Riverside"},
                    {"type": "house", "bedrooms": "4+", "price": "1,200,000", "title": "Oak Villa", "location": "Hillside"}
                ]
            }"#,
        )
        .unwrap();

        let listings = JsonCatalog::new(&path).load_listings().unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(
            listings[0],
            Listing::new("apartment", "2", 250_000, "Sunny Flat", "Riverside")
        );
        // Lenient parsing stops at the first separator.
        assert_eq!(listings[1].price, 1);
        assert_eq!(listings[1].bedrooms, "4+");
    }

    #[test]
    fn numeric_bedrooms_are_stringified() {
        let listings = parse_catalog(r#"[{"bedrooms": 3}]"#).unwrap();
        assert_eq!(listings[0].bedrooms, "3");
    }

    #[test]
    fn odd_attribute_types_degrade_to_defaults() {
        let listings =
            parse_catalog(r#"[{"type": null, "price": -40, "title": true, "location": ["x"]}]"#).unwrap();
        assert_eq!(listings[0], Listing::new("", "", 0, "", ""));
    }

    #[test]
    fn float_prices_keep_their_integer_part() {
        let listings = parse_catalog(r#"[{"price": 199999.99}]"#).unwrap();
        assert_eq!(listings[0].price, 199_999);
    }

    #[test]
    fn kind_alias_is_accepted() {
        let listings = parse_catalog(r#"{"listings": [{"kind": "villa"}]}"#).unwrap();
        assert_eq!(listings[0].kind, "villa");
    }

    #[test]
    fn empty_object_is_an_empty_catalog() {
        assert!(parse_catalog("{}").unwrap().is_empty());
    }

    #[test]
    fn non_object_entries_degrade_without_losing_the_rest() {
        let listings = parse_catalog(
            r#"{"listings": [{"type": "house", "price": 420000, "title": "Oak Villa"}, null, 5, "loft"]}"#,
        )
        .unwrap();

        assert_eq!(listings.len(), 4);
        assert_eq!(listings[0], Listing::new("house", "", 420_000, "Oak Villa", ""));
        for listing in &listings[1..] {
            assert_eq!(listing, &Listing::new("", "", 0, "", ""));
        }
    }

    #[test]
    fn bare_array_with_null_entry_keeps_valid_listings() {
        let listings = parse_catalog(r#"[null, {"title": "Sunny Flat"}]"#).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[1].title, "Sunny Flat");
    }

    #[test]
    fn null_listings_is_an_empty_catalog() {
        assert!(parse_catalog(r#"{"listings": null}"#).unwrap().is_empty());
    }

    #[test]
    fn single_null_entry_is_one_blank_listing() {
        assert_eq!(parse_catalog("[null]").unwrap(), vec![Listing::new("", "", 0, "", "")]);
    }

    #[test]
    fn unsupported_layout_names_the_expected_shape() {
        let err = parse_catalog(r#"{"listings": 5}"#).unwrap_err();
        assert!(matches!(&err, PropsiftError::Catalog(message) if message.contains("listings")));
    }

    #[test]
    fn invalid_json_is_a_catalog_error() {
        let err = parse_catalog("{ listings: ").unwrap_err();
        assert!(matches!(err, PropsiftError::Catalog(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let err = JsonCatalog::new(temp.path().join("absent.json"))
            .load_listings()
            .unwrap_err();
        assert!(matches!(err, PropsiftError::Io(_)));
    }
}
