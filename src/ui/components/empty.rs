//! Empty state component renderer.
//!
//! Draws the empty-results notice in place of the table body.

use crate::ui::helpers::{display_width, position_cursor, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

fn render_centered(row: usize, text: &str, cols: usize) {
    let text = truncate_text(text, cols);
    let len = display_width(&text);
    let padding = (cols.saturating_sub(len)) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}

/// Renders the empty-results notice.
///
/// # Parameters
///
/// * `row` - Row of the message (1-indexed); the hint goes on `row + 1`
/// * `empty` - Message and hint text
/// * `theme` - Active color theme
/// * `cols` - Pane width in columns
///
/// # Layout
///
/// ```text
/// [left padding] No properties found matching your criteria. ... [right padding]
/// [left padding] x: reset filters [right padding]
/// ```
///
/// The message uses `empty_state_fg`; the hint is dimmed `text_dim`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    render_centered(row, &empty.message, cols);
    print!("{}", Theme::reset());

    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    render_centered(row + 1, &empty.subtitle, cols);
    print!("{}", Theme::reset());
}
