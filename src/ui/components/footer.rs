//! Footer component renderer.
//!
//! Draws the keybinding hints for the current input mode.

use crate::ui::helpers::{display_width, position_cursor, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at `row`.
///
/// Hints are dimmed and centered, and the line is padded to the full width.
///
/// # Parameters
///
/// * `row` - Row to draw on (1-indexed)
/// * `footer` - Keybinding hints for the current mode
/// * `theme` - Active color theme
/// * `cols` - Pane width in columns
///
/// # Returns
///
/// The next available row (`row + 1`).
///
/// # Truncation
///
/// Hints longer than the pane are cut with `…` so narrow panes keep their
/// layout.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate_text(&footer.keybindings, cols);

    let text_len = display_width(&help_text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
