//! Filter bar renderer.
//!
//! Shows each select-style control as `Label: value`, with values narrowed
//! past their wildcard in the active color, followed by the search term.

use crate::ui::helpers::{display_width, position_cursor, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

const SEPARATOR: &str = "   ";

/// Renders the filter bar at `row`.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed)
/// * `bar` - Control labels, their values, and the search term
/// * `theme` - Active color theme
/// * `cols` - Pane width in columns
///
/// # Returns
///
/// The next available row (`row + 1`).
///
/// # Layout
///
/// ```text
///  Type: house   Beds: all   Price: 0-250000   Search: "river"
/// ```
///
/// The search segment is omitted while the term is empty.
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 1;
    print!(" ");

    for entry in &bar.entries {
        let label = format!("{}: ", entry.label);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{label}");

        if entry.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.filter_active_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}", entry.value);
        print!("{}", Theme::reset());
        print!("{SEPARATOR}");

        used += display_width(&label) + display_width(&entry.value) + SEPARATOR.len();
    }

    if !bar.search.is_empty() {
        let label = "Search: ";
        let room = cols.saturating_sub(used + label.len() + 2);
        let term = truncate_text(&bar.search, room);

        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{label}");
        print!("{}", Theme::fg(&theme.colors.filter_active_fg));
        print!("\"{term}\"");
        print!("{}", Theme::reset());

        used += label.len() + display_width(&term) + 2;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
