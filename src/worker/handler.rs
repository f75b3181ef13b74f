//! Worker thread implementation for file-backed contact reads.
//!
//! This module implements the Zellij worker thread interface. Reading the
//! contact file happens here so the plugin's render loop is never blocked on
//! file I/O. It includes distributed tracing support for cross-thread
//! observability.

use crate::storage::{ContactStore, JsonFileStore};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// The worker is stateless between messages: each `LoadContacts` message
/// performs one read through a fresh [`JsonFileStore`].
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ContactsWorker {}

impl ContactsWorker {
    /// Reads contacts through `store` and wraps the outcome as a response.
    ///
    /// Failures are logged here and travel back to the plugin as
    /// [`WorkerResponse::LoadFailed`].
    pub fn load_from(store: &dyn ContactStore) -> WorkerResponse {
        let _span = tracing::debug_span!("worker_load_contacts", source = %store.describe()).entered();

        match store.fetch() {
            Ok(contacts) => {
                tracing::debug!(count = contacts.len(), "contacts loaded by worker");
                WorkerResponse::ContactsLoaded { contacts }
            }
            Err(failure) => {
                tracing::error!(error = %failure, "worker failed to load contacts");
                WorkerResponse::LoadFailed { failure }
            }
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Returns a context guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the appropriate response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadContacts { path, .. } => {
                let store = JsonFileStore::new(PathBuf::from(path));
                Self::load_from(&store)
            }
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Only messages from a traced plugin carry a trace context, so the worker
/// enables its own export on the first such message and stays silent otherwise.
fn init_worker_tracing(message: &WorkerMessage) {
    if message.trace_context().is_none() {
        return;
    }
    if WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        return;
    }

    let config = crate::Config {
        trace_level: Some("debug".to_string()),
        ..crate::Config::default()
    };
    crate::observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for ContactsWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// Deserializes the payload, performs the read and posts the serialized
    /// [`WorkerResponse`] back under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };
        init_worker_tracing(&worker_message);

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Contact, FetchFailure, FetchOutcome};

    struct FixedStore(FetchOutcome);

    impl ContactStore for FixedStore {
        fn fetch(&self) -> FetchOutcome {
            self.0.clone()
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    #[test]
    fn successful_read_becomes_contacts_loaded() {
        let store = FixedStore(Ok(vec![Contact::new("Alice Smith", "a@x.com")]));
        assert_eq!(
            ContactsWorker::load_from(&store),
            WorkerResponse::ContactsLoaded {
                contacts: vec![Contact::new("Alice Smith", "a@x.com")],
            }
        );
    }

    #[test]
    fn failed_read_becomes_load_failed() {
        let store = FixedStore(Err(FetchFailure::Decode("eof".to_string())));
        assert_eq!(
            ContactsWorker::load_from(&store),
            WorkerResponse::LoadFailed {
                failure: FetchFailure::Decode("eof".to_string()),
            }
        );
    }

    #[test]
    fn load_contacts_message_reads_the_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, r#"[{"name": "Bob Jones", "email": "b@x.com"}]"#).unwrap();

        let mut worker = ContactsWorker::default();
        let response = worker.handle_message(WorkerMessage::LoadContacts {
            path: path.to_string_lossy().to_string(),
            trace_context: None,
        });

        assert_eq!(
            response,
            WorkerResponse::ContactsLoaded {
                contacts: vec![Contact::new("Bob Jones", "b@x.com")],
            }
        );
    }

    #[test]
    fn load_contacts_message_for_missing_file_fails_softly() {
        let mut worker = ContactsWorker::default();
        let response = worker.handle_message(WorkerMessage::LoadContacts {
            path: "/definitely/not/here/contacts.json".to_string(),
            trace_context: None,
        });

        assert!(matches!(
            response,
            WorkerResponse::LoadFailed { failure: FetchFailure::Unreachable(_) }
        ));
    }
}
