//! Event handling and state transitions.
//!
//! [`handle_event`] is the only place that mutates [`AppState`] in response to
//! input. Events flow in one direction:
//!
//! 1. the plugin shim maps a Zellij event to an [`Event`]
//! 2. `handle_event` mutates the state, running a filter pass when a control
//!    changed
//! 3. it returns whether to re-render plus the [`Action`]s to execute
//!
//! Every control change runs exactly one full filter pass, including no-op
//! changes such as a backspace on an empty search term.

use crate::app::modes::{FilterControl, InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection down (wraps to the top).
    KeyDown,
    /// Moves the selection up (wraps to the bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Enters search mode with typing focus, keeping the current term.
    SearchMode,
    /// Returns focus to the search box from the results.
    FocusSearchBar,
    /// Moves focus from the search box to the results.
    FocusResults,
    /// Leaves search mode and clears the term.
    ExitSearch,
    /// Appends a character to the search term.
    Char(char),
    /// Removes the last character of the search term.
    Backspace,
    /// `Esc` outside search. Nothing is dismissed in normal mode, so this is
    /// a no-op there; in search mode it behaves like [`Event::ExitSearch`].
    Escape,
    /// Selects the next option of a filter control.
    NextOption(FilterControl),
    /// Selects the previous option of a filter control.
    PreviousOption(FilterControl),
    /// Sets every control, search included, back to its wildcard.
    ResetFilters,
    /// Asks the worker to read the catalog again.
    ReloadListings,
    /// A response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event and returns `(should_render, actions)`.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for handlers that talk to
/// fallible state.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => Ok(exit_search(state)),
        Event::Escape => {
            if state.input_mode == InputMode::Normal {
                return Ok((false, vec![]));
            }
            Ok(exit_search(state))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search term updated");
            state.refilter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(SearchFocus::Typing)) {
                return Ok((false, vec![]));
            }

            state.search_query.pop();
            state.refilter();
            Ok((true, vec![]))
        }
        Event::NextOption(control) | Event::PreviousOption(control) => {
            let forward = matches!(event, Event::NextOption(_));
            state.controls.cycle(*control, forward);
            tracing::debug!(
                control = control.label(),
                value = state.controls.value(*control),
                "filter control changed"
            );
            state.refilter();
            Ok((true, vec![]))
        }
        Event::ResetFilters => {
            state.controls.reset();
            state.search_query.clear();
            state.refilter();
            Ok((true, vec![]))
        }
        Event::ReloadListings => {
            tracing::debug!(path = %state.catalog_path, "reloading listings");
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::load_listings(
                    state.catalog_path.clone(),
                ))],
            ))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::ListingsLoaded { path, listings } => {
                if path != &state.catalog_path {
                    tracing::debug!(path = %path, "ignoring listings for a stale catalog path");
                    return Ok((false, vec![]));
                }

                let had_error = state.last_error.is_some();
                if state.load_listings(listings.clone()) {
                    Ok((true, vec![]))
                } else {
                    tracing::debug!("listings unchanged, skipping render");
                    Ok((had_error, vec![]))
                }
            }
            WorkerResponse::Error { message } => {
                tracing::error!("Worker error: {}", message);
                state.last_error = Some(message.clone());
                Ok((true, vec![]))
            }
        },
    }
}

fn exit_search(state: &mut AppState) -> (bool, Vec<Action>) {
    tracing::debug!(query = %state.search_query, "exiting search mode");
    state.input_mode = InputMode::Normal;
    state.search_query.clear();
    state.refilter();
    (true, vec![])
}
