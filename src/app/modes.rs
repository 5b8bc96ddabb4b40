//! Input mode and filter control identifiers.
//!
//! The plugin is either in normal mode, where single keys cycle filter
//! controls and move the selection, or in search mode, where keys edit the
//! search term.

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys are appended to the search term.
    Typing,

    /// The search term is kept; j/k move through the results.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and filter-cycling keys are active.
    Normal,

    /// The search box is shown, with the given focus.
    Search(SearchFocus),
}

/// One of the select-style filter controls.
///
/// The fourth control, free-text search, is edited through [`InputMode::Search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterControl {
    /// Listing type.
    Kind,
    /// Bedroom label.
    Bedrooms,
    /// Price range.
    Price,
}

impl FilterControl {
    /// Label shown in the filter bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Kind => "Type",
            Self::Bedrooms => "Beds",
            Self::Price => "Price",
        }
    }
}
