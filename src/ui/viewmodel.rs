//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: truncated text, formatted
//! prices, highlight ranges and selection flags.

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Shown listings inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected item within `display_items`.
    pub selected_index: usize,

    /// Column widths for the pane.
    pub columns: Columns,

    pub header: HeaderInfo,

    pub filter_bar: FilterBarInfo,

    pub footer: FooterInfo,

    /// The empty-state notice, when one is attached.
    pub empty_state: Option<EmptyState>,

    /// Search box contents, present in search mode.
    pub search_bar: Option<SearchBarInfo>,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub location: String,
    pub kind: String,
    pub bedrooms: String,

    /// Formatted price, e.g. `$250,000`.
    pub price: String,

    pub is_selected: bool,

    /// Character ranges of search matches in `title`, `(start, end)` exclusive.
    pub title_highlights: Vec<(usize, usize)>,

    /// Character ranges of search matches in `location`.
    pub location_highlights: Vec<(usize, usize)>,
}

/// Widths of the table columns, in characters.
///
/// Fixed columns keep their width; the title column takes what is left, down
/// to [`Columns::MIN_TITLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub title: usize,
    pub location: usize,
    pub kind: usize,
    pub bedrooms: usize,
    pub price: usize,
}

impl Columns {
    pub const MIN_TITLE: usize = 10;
    pub const GAP: usize = 2;
    const LOCATION: usize = 20;
    const KIND: usize = 12;
    const BEDROOMS: usize = 6;
    const PRICE: usize = 14;

    /// Lays out the columns for a pane `cols` characters wide.
    #[must_use]
    pub fn fit(cols: usize) -> Self {
        let fixed = Self::LOCATION + Self::KIND + Self::BEDROOMS + Self::PRICE + 4 * Self::GAP;
        Self {
            title: cols.saturating_sub(fixed).max(Self::MIN_TITLE),
            location: Self::LOCATION,
            kind: Self::KIND,
            bedrooms: Self::BEDROOMS,
            price: Self::PRICE,
        }
    }
}

/// Title bar text, e.g. ` Listings (3 of 12) `.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Current control values shown under the header.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    pub entries: Vec<FilterEntry>,

    /// Current search term, possibly empty.
    pub search: String,
}

/// One select-style control in the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    pub label: String,
    pub value: String,

    /// Whether the control is narrowed past its wildcard.
    pub is_active: bool,
}

/// Keybinding hints for the current mode.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// The empty-state notice and a hint line beneath it.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search box contents.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_takes_remaining_width() {
        let columns = Columns::fit(100);
        assert_eq!(columns.title, 40);
        assert_eq!(columns.location, 20);
    }

    #[test]
    fn title_never_shrinks_below_minimum() {
        assert_eq!(Columns::fit(30).title, Columns::MIN_TITLE);
    }
}
