//! End-to-end filter passes: evaluating criteria, applying results to a
//! listing board, and keeping the empty-state notice in sync.

use crate::app::ListingBoard;
use crate::domain::{
    apply, evaluate, FilterCriteria, IndicatorChange, IndicatorHost, Listing, EMPTY_RESULTS_MESSAGE,
};
use crate::storage::parse_catalog;

fn sunny_flat() -> Listing {
    Listing::new("apartment", "2", 250_000, "Sunny Flat", "Riverside")
}

fn criteria(kind: &str, bedrooms: &str, price: &str, search: &str) -> FilterCriteria {
    FilterCriteria::from_controls(kind, bedrooms, price, search)
}

#[test]
fn matching_type_shows_listing_without_notice() {
    let listings = vec![sunny_flat()];
    let mut board = ListingBoard::new(listings.clone());

    let result = evaluate(&listings, &criteria("apartment", "all", "all", ""));
    assert_eq!(result.flags(), &[true]);
    assert!(result.has_any_visible());

    assert_eq!(apply(&mut board, &result), IndicatorChange::Unchanged);
    assert!(board.is_shown(0));
    assert_eq!(board.notice(), None);
}

#[test]
fn mismatched_type_hides_listing_and_shows_notice() {
    let listings = vec![sunny_flat()];
    let mut board = ListingBoard::new(listings.clone());

    let result = evaluate(&listings, &criteria("house", "all", "all", ""));
    assert_eq!(result.flags(), &[false]);
    assert!(!result.has_any_visible());

    assert_eq!(apply(&mut board, &result), IndicatorChange::Attached);
    assert!(!board.is_shown(0));
    assert_eq!(board.notice(), Some(EMPTY_RESULTS_MESSAGE));
}

#[test]
fn price_range_is_inclusive_on_both_ends() {
    let listings = vec![
        Listing::new("apartment", "2", 250_000, "Sunny Flat", "Riverside"),
        Listing::new("house", "3", 350_000, "Oak Villa", "Hillside"),
        Listing::new("house", "3", 300_000, "Edge Case", "Boundary"),
        Listing::new("house", "3", 200_000, "Low Edge", "Boundary"),
    ];

    let result = evaluate(&listings, &criteria("all", "all", "200000-300000", ""));
    assert_eq!(result.flags(), &[true, false, true, true]);
}

#[test]
fn missing_minimum_price_means_zero() {
    let listings = vec![
        Listing::new("studio", "1", 100_000, "Tiny", "Docks"),
        Listing::new("house", "3", 350_000, "Oak Villa", "Hillside"),
        Listing::new("studio", "1", 0, "Unpriced", "Nowhere"),
    ];

    let result = evaluate(&listings, &criteria("all", "all", "-300000", ""));
    assert_eq!(result.flags(), &[true, false, true]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let listings = vec![
        sunny_flat(),
        Listing::new("house", "4+", 900_000, "Oak Villa", "Hillside"),
    ];

    let result = evaluate(&listings, &criteria("all", "all", "all", "river"));
    assert_eq!(result.flags(), &[true, false]);

    let shouted = evaluate(&listings, &criteria("all", "all", "all", "RIVER"));
    assert_eq!(shouted, result);
}

#[test]
fn empty_catalog_keeps_a_single_notice() {
    let listings: Vec<Listing> = Vec::new();
    let mut board = ListingBoard::new(listings.clone());
    let snapshot = criteria("house", "3", "0-100", "villa");

    let first = evaluate(&listings, &snapshot);
    assert!(!first.has_any_visible());
    assert_eq!(apply(&mut board, &first), IndicatorChange::Attached);

    let second = evaluate(&listings, &snapshot);
    assert_eq!(second, first);
    assert_eq!(apply(&mut board, &second), IndicatorChange::Unchanged);
    assert!(board.indicator_present());
    assert_eq!(board.notice(), Some(EMPTY_RESULTS_MESSAGE));
}

#[test]
fn notice_is_removed_once_results_return() {
    let listings = vec![sunny_flat()];
    let mut board = ListingBoard::new(listings.clone());

    apply(&mut board, &evaluate(&listings, &criteria("house", "all", "all", "")));
    assert!(board.indicator_present());

    let change = apply(&mut board, &evaluate(&listings, &FilterCriteria::unconstrained()));
    assert_eq!(change, IndicatorChange::Detached);
    assert!(board.is_shown(0));
    assert!(!board.indicator_present());
}

#[test]
fn decoded_catalog_degrades_gracefully() {
    let listings = parse_catalog(
        r#"{"listings": [
            {"type": "apartment", "bedrooms": 2, "price": "250000 USD", "title": "Sunny Flat", "location": "Riverside"},
            {"type": "house", "price": "call us", "title": "Mystery", "location": "Hillside"},
            {"title": "Bare"}
        ]}"#,
    )
    .unwrap();

    assert_eq!(listings[0], sunny_flat());
    assert_eq!(listings[1].price, 0);
    assert_eq!(listings[2].kind, "");

    // Unpriced listings fall inside any range starting at zero.
    let result = evaluate(&listings, &criteria("all", "all", "0-1000", ""));
    assert_eq!(result.flags(), &[false, true, true]);

    // An unparseable range bound still filters with its usable half.
    let result = evaluate(&listings, &criteria("all", "all", "abc-300000", ""));
    assert_eq!(result.flags(), &[true, true, true]);
}
