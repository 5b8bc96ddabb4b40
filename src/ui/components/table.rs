//! Table component renderer.
//!
//! Draws the visible listings as a five-column table (TITLE, LOCATION, TYPE,
//! BEDS, PRICE) with selection styling and search-match highlights.

use crate::ui::helpers::{self, display_width, pad_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Columns, DisplayItem};

/// Renders the column headers at `row`.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed)
/// * `columns` - Column widths fitted to the pane
/// * `theme` - Active color theme
///
/// # Returns
///
/// The next available row (`row + 1`).
///
/// # Layout
///
/// ```text
/// TITLE…  LOCATION  TYPE  BEDS  PRICE
/// ```
///
/// PRICE is right-aligned to match the formatted amounts below it.
pub fn render_table_headers(row: usize, columns: &Columns, theme: &Theme) -> usize {
    let gap = " ".repeat(Columns::GAP);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}{gap}", pad_right("TITLE", columns.title));
    print!("{}{gap}", pad_right("LOCATION", columns.location));
    print!("{}{gap}", pad_right("TYPE", columns.kind));
    print!("{}{gap}", pad_right("BEDS", columns.bedrooms));
    print!("{:>width$}", "PRICE", width = columns.price);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the table rows starting at `row`, one listing per line.
///
/// # Parameters
///
/// * `row` - First row of the table body (1-indexed)
/// * `items` - Display items for the visible window
/// * `columns` - Column widths fitted to the pane
/// * `theme` - Active color theme
/// * `cols` - Pane width in columns
///
/// # Returns
///
/// The row after the last rendered item.
pub fn render_table_rows(
    row: usize,
    items: &[DisplayItem],
    columns: &Columns,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, columns, theme, cols);
    }
    current_row
}

fn base_style(item: &DisplayItem, theme: &Theme) {
    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
}

fn render_cell(text: &str, highlights: &[(usize, usize)], width: usize, item: &DisplayItem, theme: &Theme) {
    helpers::render_highlighted_text(text, highlights, theme, item.is_selected);
    print!("{}", " ".repeat(width.saturating_sub(display_width(text)) + Columns::GAP));
}

/// Renders one listing. The selected row is padded to the full pane width so
/// its background spans the line.
fn render_table_row(row: usize, item: &DisplayItem, columns: &Columns, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    base_style(item, theme);

    render_cell(&item.title, &item.title_highlights, columns.title, item, theme);
    render_cell(&item.location, &item.location_highlights, columns.location, item, theme);
    render_cell(&item.kind, &[], columns.kind, item, theme);
    render_cell(&item.bedrooms, &[], columns.bedrooms, item, theme);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{:>width$}", item.price, width = columns.price);

    let line_len = columns.title
        + columns.location
        + columns.kind
        + columns.bedrooms
        + columns.price
        + 4 * Columns::GAP;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
