//! UI component renderers.
//!
//! - [`header`]: title with visible/total counts
//! - [`filter_bar`]: current control values
//! - [`search`]: search input box
//! - [`table`]: listing table (TITLE, LOCATION, TYPE, BEDS, PRICE)
//! - [`empty`]: the empty-state notice, drawn in the table area
//! - [`footer`]: keybinding hints
//!
//! Layout, top to bottom:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Filter bar]
//! [Search box, 3 lines, search mode only]
//! [Table headers]
//! [Table rows | empty-state notice]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod filter_bar;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use filter_bar::render_filter_bar;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row`.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed)
/// * `color` - Hex color for the rule
/// * `cols` - Pane width in columns
///
/// # Returns
///
/// The next available row (`row + 1`).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout for `vm` into a `rows` × `cols` pane.
///
/// # Parameters
///
/// * `vm` - Pre-computed view model
/// * `theme` - Active color theme
/// * `cols` - Pane width in columns
/// * `rows` - Pane height in rows
///
/// The table body and the empty-state notice share the same area; the
/// border and footer are pinned to the last two rows.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_table_headers(current_row, &vm.columns, theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.display_items, &vm.columns, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
