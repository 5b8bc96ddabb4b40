//! Zellij plugin shim.
//!
//! Implements `ZellijPlugin` for the UI thread and `ZellijWorker` for the
//! catalog worker, translating Zellij events into library [`Event`]s and
//! library [`Action`]s into Zellij calls.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← filter controls, rendering
//! │  └──────────────────┘   │
//! │          │ IPC (JSON)   │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  ListingsWorker  │   │  ← catalog file reads
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! Global: `Ctrl+n` / `Ctrl+p` move the selection.
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: move the selection
//! - `t`/`T`, `b`/`B`, `p`/`P`: next/previous type, bedrooms, price option
//! - `/`: search
//! - `x`: reset all filters
//! - `r`: reload the catalog
//! - `q`: hide the plugin
//!
//! Search mode, typing: characters edit the term, `Enter` moves focus to the
//! results, `Esc` leaves search and clears the term.
//!
//! Search mode, navigating: normal-mode keys apply, `/` returns to the term,
//! `Esc` leaves search.

#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use zellij_tile::prelude::*;
use zellij_tile::shim::{post_message_to, post_message_to_plugin};

use propsift::worker::{ListingWorker, WorkerMessage, WorkerResponse};
use propsift::{handle_event, Action, AppState, Config, Event, FilterControl, InputMode, SearchFocus};

register_plugin!(State);
register_worker!(ListingsWorker, listings_worker, LISTINGS_WORKER);

/// Name the worker is registered under; also the IPC message name.
const WORKER_NAME: &str = "listings";

/// Plugin-side state.
struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: propsift::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        propsift::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(
            listings_file = %config.listings_file,
            theme = %config.theme_name,
            "parsed configuration"
        );
        self.app = propsift::initialize(&config);

        request_permission(&[PermissionType::FullHdAccess]);
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
            EventType::FileSystemCreate,
            EventType::FileSystemUpdate,
            EventType::FileSystemDelete,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::FileSystemCreate(_)
            | zellij_tile::prelude::Event::FileSystemUpdate(_)
            | zellij_tile::prelude::Event::FileSystemDelete(_) => {
                tracing::debug!("filesystem change detected - reloading catalog");
                Event::ReloadListings
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => {
                        tracing::debug!("permissions granted - loading catalog");
                        Event::ReloadListings
                    }
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - catalog cannot be read");
                        return false;
                    }
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        propsift::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            zellij_tile::prelude::Event::FileSystemCreate(..)
            | zellij_tile::prelude::Event::FileSystemUpdate(..)
            | zellij_tile::prelude::Event::FileSystemDelete(..) => "FileSystemChange".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Search(SearchFocus::Typing) => Self::map_typing_key(&key.bare_key),
            InputMode::Search(SearchFocus::Navigating) => match key.bare_key {
                BareKey::Esc => Some(Event::ExitSearch),
                BareKey::Char('/') => Some(Event::FocusSearchBar),
                _ => Self::map_normal_key(&key.bare_key),
            },
            InputMode::Normal => Self::map_normal_key(&key.bare_key),
        }
    }

    fn map_typing_key(bare_key: &BareKey) -> Option<Event> {
        Some(match bare_key {
            BareKey::Esc => Event::ExitSearch,
            BareKey::Enter => Event::FocusResults,
            BareKey::Backspace => Event::Backspace,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char(c) => Event::Char(*c),
            _ => return None,
        })
    }

    fn map_normal_key(bare_key: &BareKey) -> Option<Event> {
        Some(match bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('t') => Event::NextOption(FilterControl::Kind),
            BareKey::Char('T') => Event::PreviousOption(FilterControl::Kind),
            BareKey::Char('b') => Event::NextOption(FilterControl::Bedrooms),
            BareKey::Char('B') => Event::PreviousOption(FilterControl::Bedrooms),
            BareKey::Char('p') => Event::NextOption(FilterControl::Price),
            BareKey::Char('P') => Event::PreviousOption(FilterControl::Price),
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('x') => Event::ResetFilters,
            BareKey::Char('r') => Event::ReloadListings,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => Self::post_worker_message(message),
        }
    }
}

/// Tracks whether this worker thread has installed its subscriber.
static WORKER_TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Worker-thread state registered with Zellij.
#[derive(Default, Serialize, Deserialize)]
struct ListingsWorker {
    #[serde(skip)]
    inner: ListingWorker,
}

impl ZellijWorker<'_> for ListingsWorker {
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            propsift::observability::init_tracing(&Config::default());
        }

        let response = self.inner.handle_payload(&payload).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "rejecting worker payload");
            WorkerResponse::Error {
                message: e.to_string(),
            }
        });

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }
}
