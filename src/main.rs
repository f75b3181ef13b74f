//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the Zontacts library and the
//! Zellij plugin system. It implements `ZellijPlugin`, registers the worker,
//! translates host events into library events and library actions into host
//! calls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │     │ IPC        │ HTTP │
//! │     ▼            ▼      │
//! │  ┌────────────┐ ┌─────┐ │
//! │  │ Contacts   │ │ web │ │  ← one-shot read, file or URL
//! │  │ Worker     │ │ req │ │
//! │  └────────────┘ └─────┘ │
//! └─────────────────────────┘
//! ```
//!
//! # Event Mapping
//!
//! - `Key(Char)` / `Key(Backspace)` → `Event::FilterTextChanged` with the full new text
//! - `Key(Esc)` → clears the filter, or `Event::CloseFocus` when already empty
//! - `Key(Ctrl+u)` → clears the filter
//! - `PermissionRequestResult` → `Event::PermissionsGranted` / `Event::PermissionsDenied`
//! - `WebRequestResult` → `Event::ContactsFetched`
//! - `CustomMessage` from the worker → `Event::WorkerResponse`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use zontacts::app::SearchInput;
use zontacts::storage::decode_http_response;
use zontacts::worker::{ContactsWorker, WorkerMessage, WorkerResponse};
use zontacts::{handle_event, Action, Config, Event};

register_plugin!(State);
register_worker!(ContactsWorker, contacts_worker, CONTACTS_WORKER);

/// Context key identifying the contact web request in `WebRequestResult`.
const REQUEST_CONTEXT_KEY: &str = "request";
const REQUEST_CONTEXT_VALUE: &str = "contacts";

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: zontacts::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zontacts::initialize(&Config::default()),
            worker_name: "contacts".to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes state, and asks for the permission
    /// the configured source needs. The read itself waits for the grant.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zontacts::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = zontacts::initialize(&config);
        tracing::debug!(source = %self.app.source, "app state initialized");

        request_permission(&self.app.source.required_permissions());

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a host event, delegates to `handle_event`, and executes the
    /// resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key),
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                self.map_custom_message_event(&message, &payload)
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                Self::map_web_request_result(status, &body, &context)
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Some(Self::map_permission_result(permissions))
            }
            _ => None,
        };

        let Some(our_event) = our_event else {
            return false;
        };

        let (should_render, actions) = handle_event(&mut self.app, &our_event);
        tracing::debug!(
            action_count = actions.len(),
            should_render = should_render,
            "event handled"
        );
        for a in actions {
            self.execute_action(&a);
        }
        should_render
    }

    fn render(&mut self, rows: usize, cols: usize) {
        zontacts::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to search field edits.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");
        SearchInput::map_key(&self.app.filter_text, key.bare_key, &key.key_modifiers)
    }

    fn map_permission_result(permissions: PermissionStatus) -> Event {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                Event::PermissionsGranted
            }
            PermissionStatus::Denied => Event::PermissionsDenied,
        }
    }

    /// Maps the contact web request's result to a fetch outcome.
    ///
    /// Results of requests this plugin did not tag are ignored.
    fn map_web_request_result(
        status: u16,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        if context.get(REQUEST_CONTEXT_KEY).map(String::as_str) != Some(REQUEST_CONTEXT_VALUE) {
            tracing::debug!(context = ?context, "ignoring untagged web request result");
            return None;
        }

        tracing::debug!(status = status, body_len = body.len(), "contact web request completed");
        Some(Event::ContactsFetched(decode_http_response(status, body)))
    }

    /// Maps custom message events from the worker to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::error!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes `message` as JSON and posts it to the worker thread.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                self.post_worker_message(message);
            }
            Action::WebRequest { ref url } => {
                let context = BTreeMap::from([(
                    REQUEST_CONTEXT_KEY.to_string(),
                    REQUEST_CONTEXT_VALUE.to_string(),
                )]);
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
        }
    }
}
