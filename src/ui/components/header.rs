//! Header component renderer.
//!
//! Draws the title bar, which carries how many listings are visible out of
//! the loaded total.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at `row`.
///
/// The title is bold and centered; the line is padded to the full width so
/// an optional `header_bg` spans it.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed)
/// * `header` - Title text, e.g. ` Listings (3 of 12) `
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
/// [left padding] Listings (3 of 12) [right padding]
/// ```
///
/// When the padding cannot be split evenly the extra column goes to the right.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = display_width(&header.title);
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}
