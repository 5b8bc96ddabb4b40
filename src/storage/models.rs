//! Serialized catalog models.
//!
//! These types mirror the catalog file exactly as written by hand or exported
//! from a site, which means every attribute may be missing or carry the wrong
//! JSON type. They are converted to the domain [`Listing`] with
//! [`RawListing::into_listing`], which never fails.

use crate::domain::Listing;
use serde::{Deserialize, Serialize};

/// A single attribute value as found in the catalog.
///
/// Strings and numbers are usable; anything else (booleans, arrays, objects)
/// is kept only so deserialization does not fail, and reads as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl RawValue {
    /// Returns the value as text, or `None` when it has no textual form.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(number) => Some(number.to_string()),
            Self::Other(_) => None,
        }
    }
}

/// A listing entry in the catalog file.
///
/// The type attribute is written `type` in the file; `kind` is accepted too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(default, rename = "type", alias = "kind")]
    pub kind: Option<RawValue>,
    #[serde(default)]
    pub bedrooms: Option<RawValue>,
    #[serde(default)]
    pub price: Option<RawValue>,
    #[serde(default)]
    pub title: Option<RawValue>,
    #[serde(default)]
    pub location: Option<RawValue>,
}

impl RawListing {
    /// Converts the raw entry into a domain listing.
    #[must_use]
    pub fn into_listing(self) -> Listing {
        let text = |value: Option<RawValue>| value.as_ref().and_then(RawValue::as_text);

        let kind = text(self.kind);
        let bedrooms = text(self.bedrooms);
        let price = text(self.price);
        let title = text(self.title);
        let location = text(self.location);

        Listing::from_raw(
            kind.as_deref(),
            bedrooms.as_deref(),
            price.as_deref(),
            title.as_deref(),
            location.as_deref(),
        )
    }
}

/// Top-level catalog layout.
///
/// Either `{ "listings": [...] }` or a bare array of listings. Entries are
/// kept as untyped JSON so one bad entry cannot fail the whole file.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogFile {
    Wrapped { listings: Vec<serde_json::Value> },
    Bare(Vec<serde_json::Value>),
}

impl CatalogFile {
    /// Recognizes the top-level layout. A missing or `null` listings array
    /// reads as empty; any other shape is `None`.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Array(entries) => Some(Self::Bare(entries)),
            serde_json::Value::Object(mut fields) => match fields.remove("listings") {
                None | Some(serde_json::Value::Null) => Some(Self::Wrapped { listings: Vec::new() }),
                Some(serde_json::Value::Array(entries)) => Some(Self::Wrapped { listings: entries }),
                Some(_) => None,
            },
            _ => None,
        }
    }

    /// Consumes the file and returns its raw entries in order. Entries that
    /// are not JSON objects become listings with every attribute absent.
    #[must_use]
    pub fn into_entries(self) -> Vec<RawListing> {
        let entries = match self {
            Self::Wrapped { listings } | Self::Bare(listings) => listings,
        };

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| RawListing::from_entry(index, entry))
            .collect()
    }
}

impl RawListing {
    /// Decodes one catalog entry, degrading anything that is not an object.
    fn from_entry(index: usize, entry: serde_json::Value) -> Self {
        if !entry.is_object() {
            tracing::debug!(index, entry = %entry, "catalog entry is not an object, using defaults");
            return Self::default();
        }

        serde_json::from_value(entry).unwrap_or_else(|e| {
            tracing::debug!(index, error = %e, "malformed catalog entry, using defaults");
            Self::default()
        })
    }
}
