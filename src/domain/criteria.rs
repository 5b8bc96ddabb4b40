//! Filter criteria snapshots.
//!
//! A [`FilterCriteria`] is built fresh for every filter pass from the current
//! values of the four filter controls and discarded afterwards. Control values
//! arrive as plain strings; parsing them never fails. A blank value or the
//! wildcard token [`WILDCARD`] means "no constraint", and an unparseable price
//! bound is treated as unbounded.

use super::listing::lenient_integer;

/// Control value that imposes no constraint on its field.
pub const WILDCARD: &str = "all";

/// Exact-match constraint on a label attribute (type or bedrooms).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Choice {
    /// No constraint.
    #[default]
    Any,
    /// The attribute must equal this label exactly (case-sensitive).
    Exactly(String),
}

impl Choice {
    /// Parses a select-style control value.
    ///
    /// # Examples
    ///
    /// ```
    /// use propsift::domain::Choice;
    ///
    /// assert_eq!(Choice::parse("all"), Choice::Any);
    /// assert_eq!(Choice::parse(""), Choice::Any);
    /// assert_eq!(Choice::parse("4+"), Choice::Exactly("4+".to_string()));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == WILDCARD {
            Self::Any
        } else {
            Self::Exactly(raw.to_string())
        }
    }

    /// Returns whether `value` satisfies this constraint.
    #[must_use]
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(expected) => expected == value,
        }
    }

    /// Returns `true` for [`Choice::Any`].
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

/// Inclusive price interval with an optional upper bound.
///
/// `max == None` means the range is unbounded above. The lower bound defaults
/// to `0` when the control value omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceRange {
    /// Parses a `"min-max"` control value.
    ///
    /// Returns `None` for a blank value or the wildcard. Otherwise the value is
    /// split on `-` and the first two pieces are read as bounds; a missing or
    /// unparseable bound is unbounded on its side.
    ///
    /// # Examples
    ///
    /// ```
    /// use propsift::domain::PriceRange;
    ///
    /// let range = PriceRange::parse("200000-300000").unwrap();
    /// assert_eq!((range.min, range.max), (200_000, Some(300_000)));
    ///
    /// let capped = PriceRange::parse("-300000").unwrap();
    /// assert_eq!((capped.min, capped.max), (0, Some(300_000)));
    ///
    /// let floor = PriceRange::parse("1000000-").unwrap();
    /// assert_eq!((floor.min, floor.max), (1_000_000, None));
    ///
    /// assert!(PriceRange::parse("all").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw == WILDCARD {
            return None;
        }

        let mut bounds = raw.split('-');
        let min = bounds.next().and_then(lenient_integer).unwrap_or(0);
        let max = bounds.next().and_then(lenient_integer);

        Some(Self { min, max })
    }

    /// Returns whether `price` lies within the range (both ends inclusive).
    #[must_use]
    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

/// Immutable snapshot of the active filter controls for one pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Exact listing type, or any.
    pub kind: Choice,
    /// Exact bedroom label, or any.
    pub bedrooms: Choice,
    /// Price interval, `None` for no constraint.
    pub price: Option<PriceRange>,
    /// Lower-cased search term; empty means no constraint.
    pub search: String,
}

impl FilterCriteria {
    /// Builds criteria from raw control values.
    ///
    /// The search term is lower-cased here so every record comparison in the
    /// pass reuses it.
    ///
    /// # Examples
    ///
    /// ```
    /// use propsift::domain::{Choice, FilterCriteria};
    ///
    /// let criteria = FilterCriteria::from_controls("house", "all", "garbage", "RIVER");
    /// assert_eq!(criteria.kind, Choice::Exactly("house".to_string()));
    /// assert!(criteria.bedrooms.is_any());
    /// assert_eq!(criteria.search, "river");
    /// ```
    #[must_use]
    pub fn from_controls(kind: &str, bedrooms: &str, price: &str, search: &str) -> Self {
        Self {
            kind: Choice::parse(kind),
            bedrooms: Choice::parse(bedrooms),
            price: PriceRange::parse(price),
            search: search.to_lowercase(),
        }
    }

    /// Criteria that admit every listing.
    #[must_use]
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Returns whether no clause constrains anything.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.kind.is_any() && self.bedrooms.is_any() && self.price.is_none() && self.search.is_empty()
    }
}
