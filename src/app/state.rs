//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin. It owns:
//!
//! - the [`ListingBoard`]: the listings as presented, with their shown/hidden
//!   flags and the singleton empty-state notice
//! - the [`FilterControls`]: the current value of each select-style control
//! - the search term, the last [`FilterResult`], the selection and the modes
//!
//! # Filter passes
//!
//! Every control change runs [`AppState::refilter`], which is one complete
//! pass: snapshot the controls into a [`FilterCriteria`], evaluate it, apply
//! the result to the board. Passes are never coalesced; the latest pass is
//! the one on screen.

use super::modes::{FilterControl, InputMode, SearchFocus};
use crate::domain::listing::lenient_integer;
use crate::domain::{
    apply, evaluate, FilterCriteria, FilterResult, IndicatorHost, Listing, VisibilityRenderer,
    WILDCARD,
};
use crate::ui::helpers::{format_price, match_ranges, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Columns, DisplayItem, EmptyState, FilterBarInfo, FilterEntry, FooterInfo, HeaderInfo,
    SearchBarInfo, UIViewModel,
};

/// Default price control options.
pub const DEFAULT_PRICE_RANGES: &[&str] = &[
    WILDCARD,
    "0-250000",
    "250000-500000",
    "500000-1000000",
    "1000000-",
];

/// The listings as presented: each with a shown flag, plus the empty-state
/// notice when one is attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingBoard {
    listings: Vec<Listing>,
    shown: Vec<bool>,
    notice: Option<String>,
}

impl ListingBoard {
    /// Creates a board with every listing shown and no notice.
    #[must_use]
    pub fn new(listings: Vec<Listing>) -> Self {
        let shown = vec![true; listings.len()];
        Self {
            listings,
            shown,
            notice: None,
        }
    }

    /// Replaces the listings. Flags reset to shown until the next pass.
    pub fn replace(&mut self, listings: Vec<Listing>) {
        self.shown = vec![true; listings.len()];
        self.listings = listings;
    }

    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Whether the listing at `index` is currently shown.
    #[must_use]
    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.get(index).copied().unwrap_or(false)
    }

    /// Shown listings with their board indices, in catalog order.
    pub fn shown_listings(&self) -> impl Iterator<Item = (usize, &Listing)> + '_ {
        self.listings
            .iter()
            .enumerate()
            .filter(|(index, _)| self.is_shown(*index))
    }

    /// Text of the attached empty-state notice.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

impl VisibilityRenderer for ListingBoard {
    fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(flag) = self.shown.get_mut(index) {
            *flag = visible;
        }
    }
}

impl IndicatorHost for ListingBoard {
    fn indicator_present(&self) -> bool {
        self.notice.is_some()
    }

    fn attach_indicator(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }

    fn detach_indicator(&mut self) {
        self.notice = None;
    }
}

/// Option list of one select-style control.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OptionList {
    options: Vec<String>,
    selected: usize,
}

impl OptionList {
    /// Builds a list that always starts with the wildcard.
    fn new(values: impl IntoIterator<Item = String>) -> Self {
        let mut options = vec![WILDCARD.to_string()];
        options.extend(values.into_iter().filter(|v| !v.is_empty() && v != WILDCARD));
        Self {
            options,
            selected: 0,
        }
    }

    fn value(&self) -> &str {
        self.options
            .get(self.selected)
            .map_or(WILDCARD, String::as_str)
    }

    fn cycle(&mut self, forward: bool) {
        let len = self.options.len();
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }

    /// Swaps in new options, keeping the current value when it still exists.
    fn refresh(&mut self, replacement: Self) {
        let current = self.value().to_string();
        self.options = replacement.options;
        self.selected = self
            .options
            .iter()
            .position(|option| *option == current)
            .unwrap_or(0);
    }
}

/// Current values of the type, bedrooms and price controls.
///
/// Type and bedroom options are the distinct labels present in the catalog;
/// price options come from configuration. Every list starts with the
/// wildcard, which is also the initial value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControls {
    kind: OptionList,
    bedrooms: OptionList,
    price: OptionList,
}

impl FilterControls {
    /// Builds controls for `listings` with the given price options.
    #[must_use]
    pub fn new(listings: &[Listing], price_ranges: &[String]) -> Self {
        Self {
            kind: Self::kind_options(listings),
            bedrooms: Self::bedroom_options(listings),
            price: OptionList::new(price_ranges.iter().cloned()),
        }
    }

    fn kind_options(listings: &[Listing]) -> OptionList {
        let mut kinds: Vec<String> = listings.iter().map(|l| l.kind.clone()).collect();
        kinds.sort();
        kinds.dedup();
        OptionList::new(kinds)
    }

    fn bedroom_options(listings: &[Listing]) -> OptionList {
        let mut labels: Vec<String> = listings.iter().map(|l| l.bedrooms.clone()).collect();
        labels.sort_by(|a, b| {
            let key = |label: &str| lenient_integer(label).unwrap_or(u64::MAX);
            key(a).cmp(&key(b)).then_with(|| a.cmp(b))
        });
        labels.dedup();
        OptionList::new(labels)
    }

    /// Rebuilds the catalog-derived options after the listings changed.
    pub fn refresh_options(&mut self, listings: &[Listing]) {
        self.kind.refresh(Self::kind_options(listings));
        self.bedrooms.refresh(Self::bedroom_options(listings));
    }

    fn list(&self, control: FilterControl) -> &OptionList {
        match control {
            FilterControl::Kind => &self.kind,
            FilterControl::Bedrooms => &self.bedrooms,
            FilterControl::Price => &self.price,
        }
    }

    fn list_mut(&mut self, control: FilterControl) -> &mut OptionList {
        match control {
            FilterControl::Kind => &mut self.kind,
            FilterControl::Bedrooms => &mut self.bedrooms,
            FilterControl::Price => &mut self.price,
        }
    }

    /// Current value of `control`.
    #[must_use]
    pub fn value(&self, control: FilterControl) -> &str {
        self.list(control).value()
    }

    /// Available options of `control`, wildcard first.
    #[must_use]
    pub fn options(&self, control: FilterControl) -> &[String] {
        &self.list(control).options
    }

    /// Moves `control` to its next (or previous) option, wrapping around.
    pub fn cycle(&mut self, control: FilterControl, forward: bool) {
        self.list_mut(control).cycle(forward);
    }

    /// Sets every control back to the wildcard.
    pub fn reset(&mut self) {
        self.kind.selected = 0;
        self.bedrooms.selected = 0;
        self.price.selected = 0;
    }

    /// Snapshots the controls and `search` into criteria for one pass.
    #[must_use]
    pub fn criteria(&self, search: &str) -> FilterCriteria {
        FilterCriteria::from_controls(
            self.kind.value(),
            self.bedrooms.value(),
            self.price.value(),
            search,
        )
    }
}

/// Central application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Listings as presented.
    pub board: ListingBoard,

    /// Select-style filter controls.
    pub controls: FilterControls,

    /// Free-text search control.
    pub search_query: String,

    /// Result of the latest filter pass.
    pub result: FilterResult,

    /// Selection as a position among the shown listings.
    pub selected_index: usize,

    pub input_mode: InputMode,

    pub theme: Theme,

    /// Sandbox path of the listing catalog.
    pub catalog_path: String,

    /// Last worker error, cleared by the next successful load.
    pub last_error: Option<String>,
}

impl AppState {
    /// Creates state for the given catalog path and runs an initial pass.
    ///
    /// The board starts empty, so the empty-state notice is attached until the
    /// worker delivers listings.
    #[must_use]
    pub fn new(catalog_path: String, price_ranges: &[String], theme: Theme) -> Self {
        let mut state = Self {
            board: ListingBoard::default(),
            controls: FilterControls::new(&[], price_ranges),
            search_query: String::new(),
            result: FilterResult::default(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            theme,
            catalog_path,
            last_error: None,
        };
        state.refilter();
        state
    }

    /// Runs one full filter pass over the board.
    pub fn refilter(&mut self) {
        let criteria = self.controls.criteria(&self.search_query);

        let _span = tracing::debug_span!("refilter",
            total_listings = self.board.listings().len(),
            query_len = self.search_query.len(),
            kind = self.controls.value(FilterControl::Kind),
            bedrooms = self.controls.value(FilterControl::Bedrooms),
            price = self.controls.value(FilterControl::Price)
        ).entered();

        let result = evaluate(self.board.listings(), &criteria);
        let change = apply(&mut self.board, &result);
        self.result = result;

        let visible = self.result.visible_count();
        if visible == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(visible - 1);
        }

        tracing::debug!(visible_count = visible, indicator = ?change, "filter pass applied");
    }

    /// Installs freshly loaded listings and refilters.
    ///
    /// Returns `false` when the listings are unchanged and nothing was done.
    pub fn load_listings(&mut self, listings: Vec<Listing>) -> bool {
        self.last_error = None;
        if self.board.listings() == listings.as_slice() {
            return false;
        }

        self.board.replace(listings);
        self.controls.refresh_options(self.board.listings());
        self.refilter();
        true
    }

    /// Number of shown listings.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.result.visible_count()
    }

    pub fn move_selection_down(&mut self) {
        let visible = self.visible_count();
        if visible == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % visible;
    }

    pub fn move_selection_up(&mut self) {
        let visible = self.visible_count();
        if visible == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            visible - 1
        } else {
            self.selected_index - 1
        };
    }

    /// The selected listing, if any listing is shown.
    #[must_use]
    pub fn selected_listing(&self) -> Option<&Listing> {
        self.board
            .shown_listings()
            .nth(self.selected_index)
            .map(|(_, listing)| listing)
    }

    /// Computes a renderable view model for a `rows` × `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let columns = Columns::fit(cols);
        let available_rows = self.calculate_available_rows(rows);
        let visible = self.visible_count();

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(visible);
        if visible_end - visible_start < available_rows && visible >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items = self
            .board
            .shown_listings()
            .enumerate()
            .skip(visible_start)
            .take(visible_end - visible_start)
            .map(|(position, (_, listing))| {
                self.compute_display_item(listing, position == self.selected_index, &columns)
            })
            .collect();

        UIViewModel {
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            columns,
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            search_bar: self.compute_search_bar(),
        }
    }

    fn compute_display_item(&self, listing: &Listing, is_selected: bool, columns: &Columns) -> DisplayItem {
        let title = truncate_text(&listing.title, columns.title);
        let location = truncate_text(&listing.location, columns.location);
        let needle = self.search_query.to_lowercase();

        DisplayItem {
            title_highlights: match_ranges(&title, &needle),
            location_highlights: match_ranges(&location, &needle),
            title,
            location,
            kind: truncate_text(&listing.kind, columns.kind),
            bedrooms: truncate_text(&listing.bedrooms, columns.bedrooms),
            price: format_price(listing.price),
            is_selected,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " Listings ({} of {}) ",
                self.visible_count(),
                self.board.listings().len()
            ),
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let entries = [FilterControl::Kind, FilterControl::Bedrooms, FilterControl::Price]
            .into_iter()
            .map(|control| FilterEntry {
                label: control.label().to_string(),
                value: self.controls.value(control).to_string(),
                is_active: self.controls.value(control) != WILDCARD,
            })
            .collect();

        FilterBarInfo {
            entries,
            search: self.search_query.clone(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: browse results  Ctrl+n/p: navigate  Type to filter"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit term  j/k: navigate"
            }
            InputMode::Normal => {
                "j/k: navigate  t/b/p: type/beds/price  /: search  x: reset  r: reload  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        let message = self.board.notice()?;

        let subtitle = if let Some(error) = &self.last_error {
            error.clone()
        } else if self.board.listings().is_empty() {
            format!(
                "No listings loaded from {}  (r: reload)",
                crate::infrastructure::strip_host_prefix(&self.catalog_path)
            )
        } else {
            "x: reset filters".to_string()
        };

        Some(EmptyState {
            message: message.to_string(),
            subtitle,
        })
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        matches!(self.input_mode, InputMode::Search(_)).then(|| SearchBarInfo {
            query: self.search_query.clone(),
        })
    }

    /// Rows left for listing rows after header, filter bar, table header,
    /// borders and footer (plus the search box in search mode).
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(7),
            InputMode::Search(_) => total_rows.saturating_sub(10),
        }
    }
}
