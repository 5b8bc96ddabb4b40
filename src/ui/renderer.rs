//! Top-level rendering coordinator.
//!
//! Rendering happens in two steps:
//!
//! 1. **View model computation**: `AppState` becomes a `UIViewModel`
//! 2. **Component rendering**: the view model is handed to the components
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI output
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Pane height in rows
/// * `cols` - Pane width in columns
///
/// # Output
///
/// Prints ANSI-styled text with `print!`. Does not clear the screen; Zellij
/// hands the plugin a fresh buffer per render call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
