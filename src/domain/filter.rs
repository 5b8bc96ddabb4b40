//! The filter engine.
//!
//! [`evaluate`] is a pure function from listings and a [`FilterCriteria`]
//! snapshot to a [`FilterResult`]. [`apply`] pushes a result onto a
//! presentation: one visibility flag per listing, then the empty-state
//! indicator sync. The two are kept apart so the predicate can be tested
//! without any rendering.
//!
//! # Predicate
//!
//! A listing is visible iff every constrained clause holds. Clauses are
//! checked in a fixed order and the first failure decides the rejection:
//!
//! 1. [`Clause::Kind`]: exact, case-sensitive type label
//! 2. [`Clause::Bedrooms`]: exact bedroom label
//! 3. [`Clause::Price`]: inclusive price range
//! 4. [`Clause::Search`]: lower-cased term inside the title or location
//!
//! `has_any_visible` is the OR of the per-listing flags, never something read
//! back from a presentation.

use super::criteria::FilterCriteria;
use super::indicator::{sync_indicator, IndicatorChange, IndicatorHost, VisibilityRenderer};
use super::listing::Listing;

/// A single predicate clause, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause {
    Kind,
    Bedrooms,
    Price,
    Search,
}

/// Returns the first clause `listing` fails under `criteria`, if any.
///
/// # Examples
///
/// ```
/// use propsift::domain::{first_rejection, Clause, FilterCriteria, Listing};
///
/// let listing = Listing::new("house", "3", 900_000, "Oak Villa", "Hillside");
/// let criteria = FilterCriteria::from_controls("apartment", "2", "all", "");
/// assert_eq!(first_rejection(&listing, &criteria), Some(Clause::Kind));
/// ```
#[must_use]
pub fn first_rejection(listing: &Listing, criteria: &FilterCriteria) -> Option<Clause> {
    if !criteria.kind.admits(&listing.kind) {
        return Some(Clause::Kind);
    }
    if !criteria.bedrooms.admits(&listing.bedrooms) {
        return Some(Clause::Bedrooms);
    }
    if let Some(range) = &criteria.price {
        if !range.contains(listing.price) {
            return Some(Clause::Price);
        }
    }
    if !criteria.search.is_empty() && !mentions(listing, &criteria.search) {
        return Some(Clause::Search);
    }
    None
}

/// Returns whether `listing` passes every clause of `criteria`.
#[must_use]
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    first_rejection(listing, criteria).is_none()
}

fn mentions(listing: &Listing, needle: &str) -> bool {
    listing.title.to_lowercase().contains(needle) || listing.location.to_lowercase().contains(needle)
}

/// Visibility computed by one filter pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterResult {
    visibility: Vec<bool>,
    has_any_visible: bool,
}

impl FilterResult {
    /// Builds a result from per-listing flags.
    #[must_use]
    pub fn from_flags(visibility: Vec<bool>) -> Self {
        let has_any_visible = visibility.iter().any(|&visible| visible);
        Self {
            visibility,
            has_any_visible,
        }
    }

    /// Per-listing flags, index-aligned with the evaluated listings.
    #[must_use]
    pub fn flags(&self) -> &[bool] {
        &self.visibility
    }

    /// Whether the listing at `index` is visible. Out-of-range is `false`.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visibility.get(index).copied().unwrap_or(false)
    }

    /// Whether at least one listing is visible.
    #[must_use]
    pub const fn has_any_visible(&self) -> bool {
        self.has_any_visible
    }

    /// Number of visible listings.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visibility.iter().filter(|&&visible| visible).count()
    }

    /// Number of evaluated listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visibility.len()
    }

    /// Returns `true` when no listings were evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visibility.is_empty()
    }

    /// Indices of visible listings in ascending order.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.visibility
            .iter()
            .enumerate()
            .filter_map(|(index, &visible)| visible.then_some(index))
    }
}

/// Evaluates `criteria` against every listing.
///
/// Deterministic and side-effect free apart from tracing.
///
/// # Examples
///
/// ```
/// use propsift::domain::{evaluate, FilterCriteria, Listing};
///
/// let listings = vec![
///     Listing::new("apartment", "2", 250_000, "Sunny Flat", "Riverside"),
///     Listing::new("house", "4+", 900_000, "Oak Villa", "Hillside"),
/// ];
/// let result = evaluate(&listings, &FilterCriteria::from_controls("all", "all", "all", "river"));
/// assert_eq!(result.flags(), &[true, false]);
/// assert!(result.has_any_visible());
/// ```
#[must_use]
pub fn evaluate(listings: &[Listing], criteria: &FilterCriteria) -> FilterResult {
    let _span = tracing::debug_span!("evaluate",
        listing_count = listings.len(),
        unconstrained = criteria.is_unconstrained()
    ).entered();

    let result = FilterResult::from_flags(
        listings
            .iter()
            .map(|listing| matches(listing, criteria))
            .collect(),
    );

    tracing::debug!(
        visible_count = result.visible_count(),
        has_any_visible = result.has_any_visible(),
        "filter evaluated"
    );

    result
}

/// Applies a result to a presentation.
///
/// Every listing's flag is pushed to the renderer one-to-one, then the
/// empty-state indicator is synchronized with `has_any_visible`.
pub fn apply<S>(surface: &mut S, result: &FilterResult) -> IndicatorChange
where
    S: VisibilityRenderer + IndicatorHost + ?Sized,
{
    for (index, &visible) in result.flags().iter().enumerate() {
        surface.set_visible(index, visible);
    }

    let change = sync_indicator(surface, result.has_any_visible());
    tracing::trace!(change = ?change, "empty-state indicator synchronized");
    change
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Listing> {
        vec![
            Listing::new("apartment", "2", 250_000, "Sunny Flat", "Riverside"),
            Listing::new("house", "4+", 350_000, "Family Home", "Hillside"),
            Listing::new("house", "3", 100_000, "Starter Cottage", "Old Town"),
            Listing::new("villa", "4+", 1_200_000, "Riverfront Villa", "Marina"),
        ]
    }

    fn flags(criteria: &FilterCriteria) -> Vec<bool> {
        evaluate(&catalog(), criteria).flags().to_vec()
    }

    #[test]
    fn unconstrained_criteria_show_everything() {
        assert_eq!(flags(&FilterCriteria::unconstrained()), vec![true; 4]);
    }

    #[test]
    fn bedroom_labels_compare_as_strings() {
        let criteria = FilterCriteria::from_controls("all", "4+", "all", "");
        assert_eq!(flags(&criteria), vec![false, true, false, true]);

        let numeric = FilterCriteria::from_controls("all", "4", "all", "");
        assert_eq!(flags(&numeric), vec![false; 4]);
    }

    #[test]
    fn clauses_combine_with_and() {
        let criteria = FilterCriteria::from_controls("house", "4+", "300000-400000", "home");
        assert_eq!(flags(&criteria), vec![false, true, false, false]);

        let too_cheap = FilterCriteria::from_controls("house", "4+", "400000-", "home");
        assert_eq!(flags(&too_cheap), vec![false; 4]);
    }

    #[test]
    fn search_matches_title_or_location_case_insensitively() {
        let criteria = FilterCriteria::from_controls("all", "all", "all", "RIVER");
        assert_eq!(flags(&criteria), vec![true, false, false, true]);
    }

    #[test]
    fn rejection_order_is_fixed() {
        let listing = Listing::new("house", "3", 100_000, "Starter Cottage", "Old Town");
        let everything_wrong = FilterCriteria::from_controls("villa", "5", "500000-", "marina");
        assert_eq!(first_rejection(&listing, &everything_wrong), Some(Clause::Kind));

        let kind_ok = FilterCriteria::from_controls("house", "5", "500000-", "marina");
        assert_eq!(first_rejection(&listing, &kind_ok), Some(Clause::Bedrooms));

        let beds_ok = FilterCriteria::from_controls("house", "3", "500000-", "marina");
        assert_eq!(first_rejection(&listing, &beds_ok), Some(Clause::Price));

        let price_ok = FilterCriteria::from_controls("house", "3", "-500000", "marina");
        assert_eq!(first_rejection(&listing, &price_ok), Some(Clause::Search));
    }

    #[test]
    fn unpriced_listing_counts_as_zero() {
        let listings = vec![Listing::from_raw(Some("land"), None, Some("POA"), None, None)];
        let floor = FilterCriteria::from_controls("all", "all", "1-", "");
        assert!(!evaluate(&listings, &floor).has_any_visible());

        let capped = FilterCriteria::from_controls("all", "all", "-100", "");
        assert!(evaluate(&listings, &capped).has_any_visible());
    }

    #[test]
    fn evaluation_is_deterministic() {
        let criteria = FilterCriteria::from_controls("house", "all", "0-400000", "o");
        assert_eq!(evaluate(&catalog(), &criteria), evaluate(&catalog(), &criteria));
    }

    #[test]
    fn visible_indices_follow_flags() {
        let result = FilterResult::from_flags(vec![false, true, true, false]);
        assert_eq!(result.visible_indices().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(result.visible_count(), 2);
        assert!(!result.is_visible(9));
    }

    #[derive(Default)]
    struct RecordingSurface {
        shown: Vec<Option<bool>>,
        notices: usize,
    }

    impl VisibilityRenderer for RecordingSurface {
        fn set_visible(&mut self, index: usize, visible: bool) {
            if self.shown.len() <= index {
                self.shown.resize(index + 1, None);
            }
            self.shown[index] = Some(visible);
        }
    }

    impl IndicatorHost for RecordingSurface {
        fn indicator_present(&self) -> bool {
            self.notices > 0
        }

        fn attach_indicator(&mut self, _message: &str) {
            self.notices += 1;
        }

        fn detach_indicator(&mut self) {
            self.notices -= 1;
        }
    }

    #[test]
    fn apply_drives_every_flag_and_the_indicator() {
        let mut surface = RecordingSurface::default();
        let hidden_all = evaluate(&catalog(), &FilterCriteria::from_controls("castle", "all", "all", ""));

        assert_eq!(apply(&mut surface, &hidden_all), IndicatorChange::Attached);
        assert_eq!(apply(&mut surface, &hidden_all), IndicatorChange::Unchanged);
        assert_eq!(surface.shown, vec![Some(false); 4]);
        assert_eq!(surface.notices, 1);

        let shown_all = evaluate(&catalog(), &FilterCriteria::unconstrained());
        assert_eq!(apply(&mut surface, &shown_all), IndicatorChange::Detached);
        assert_eq!(surface.shown, vec![Some(true); 4]);
        assert_eq!(surface.notices, 0);
    }
}
