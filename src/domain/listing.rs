//! Property listing domain model.
//!
//! A [`Listing`] is one record of the catalog with the attributes the filter
//! engine looks at. Listings are immutable for the duration of a filter pass;
//! the application owns them in its [`ListingBoard`](crate::app::ListingBoard)
//! and replaces the whole collection when the catalog is reloaded.

use serde::{Deserialize, Serialize};

/// One property listing.
///
/// # Fields
///
/// - `kind`: category label such as `"apartment"` or `"house"`, compared exactly
/// - `bedrooms`: bedroom label, not necessarily numeric (`"4+"`)
/// - `price`: asking price in whole currency units
/// - `title`: headline shown in the listing table
/// - `location`: neighbourhood or address text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub kind: String,
    pub bedrooms: String,
    pub price: u64,
    pub title: String,
    pub location: String,
}

impl Listing {
    /// Creates a listing from already-typed attributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use propsift::domain::Listing;
    ///
    /// let listing = Listing::new("apartment", "2", 250_000, "Sunny Flat", "Riverside");
    /// assert_eq!(listing.kind, "apartment");
    /// assert_eq!(listing.price, 250_000);
    /// ```
    #[must_use]
    pub fn new(
        kind: impl Into<String>,
        bedrooms: impl Into<String>,
        price: u64,
        title: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            bedrooms: bedrooms.into(),
            price,
            title: title.into(),
            location: location.into(),
        }
    }

    /// Creates a listing from raw, untyped attribute values.
    ///
    /// Absent text attributes become empty strings. The price is parsed with
    /// [`lenient_integer`]; an absent or unparseable price becomes `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use propsift::domain::Listing;
    ///
    /// let listing = Listing::from_raw(Some("house"), None, Some("450000 USD"), Some("Oak Villa"), None);
    /// assert_eq!(listing.price, 450_000);
    /// assert_eq!(listing.bedrooms, "");
    ///
    /// let unpriced = Listing::from_raw(None, None, Some("on request"), None, None);
    /// assert_eq!(unpriced.price, 0);
    /// ```
    #[must_use]
    pub fn from_raw(
        kind: Option<&str>,
        bedrooms: Option<&str>,
        price: Option<&str>,
        title: Option<&str>,
        location: Option<&str>,
    ) -> Self {
        Self {
            kind: kind.unwrap_or_default().to_string(),
            bedrooms: bedrooms.unwrap_or_default().to_string(),
            price: price.and_then(lenient_integer).unwrap_or(0),
            title: title.unwrap_or_default().to_string(),
            location: location.unwrap_or_default().to_string(),
        }
    }
}

/// Parses the leading decimal digits of `raw` as a non-negative integer.
///
/// Leading whitespace and a single `+` sign are skipped, and parsing stops at
/// the first non-digit, so `"250000"`, `" 250000 "` and `"250000abc"` all give
/// `250000`. Returns `None` when no digit leads the value (including negative
/// numbers). Values too large for `u64` saturate.
///
/// # Examples
///
/// ```
/// use propsift::domain::listing::lenient_integer;
///
/// assert_eq!(lenient_integer("300000"), Some(300_000));
/// assert_eq!(lenient_integer("  42 beds"), Some(42));
/// assert_eq!(lenient_integer(""), None);
/// assert_eq!(lenient_integer("-5"), None);
/// assert_eq!(lenient_integer("n/a"), None);
/// ```
#[must_use]
pub fn lenient_integer(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let mut digits = unsigned.bytes().take_while(u8::is_ascii_digit).peekable();
    digits.peek()?;

    Some(digits.fold(0_u64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_integer_stops_at_first_non_digit() {
        assert_eq!(lenient_integer("1000000+"), Some(1_000_000));
        assert_eq!(lenient_integer("+7"), Some(7));
        assert_eq!(lenient_integer("7.5"), Some(7));
    }

    #[test]
    fn lenient_integer_rejects_values_without_leading_digit() {
        assert_eq!(lenient_integer("$250000"), None);
        assert_eq!(lenient_integer("   "), None);
        assert_eq!(lenient_integer("+"), None);
    }

    #[test]
    fn lenient_integer_saturates_on_overflow() {
        assert_eq!(lenient_integer("99999999999999999999999"), Some(u64::MAX));
    }

    #[test]
    fn from_raw_fills_missing_fields_with_defaults() {
        let listing = Listing::from_raw(None, None, None, None, None);
        assert_eq!(listing, Listing::new("", "", 0, "", ""));
    }
}
