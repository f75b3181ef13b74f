//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main plugin
//! thread and the background worker thread that reads file-backed contact
//! lists. It also implements distributed tracing context propagation across
//! thread boundaries.

use crate::domain::{Contact, FetchFailure};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid or not sampled,
    /// which is always the case when no OpenTelemetry layer is installed.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id_str = format!("{:032x}", span_context.trace_id());
            let parent_span_id_str = format!("{:016x}", span_context.span_id());

            tracing::debug!(
                trace_id = %trace_id_str,
                parent_span_id = %parent_span_id_str,
                "capturing trace context"
            );

            Some(Self {
                trace_id: trace_id_str,
                parent_span_id: parent_span_id_str,
            })
        } else {
            tracing::trace!("span context is not valid");
            None
        }
    }
}

/// Messages sent from the main thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read and decode the contact file at `path`.
    LoadContacts {
        /// Sandbox path of the JSON contact file.
        path: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Creates a `LoadContacts` message with the current trace context.
    ///
    /// # Examples
    ///
    /// ```
    /// use zontacts::worker::WorkerMessage;
    ///
    /// let message = WorkerMessage::load_contacts("/host/contacts.json");
    /// assert!(matches!(message, WorkerMessage::LoadContacts { .. }));
    /// ```
    pub fn load_contacts(path: impl Into<String>) -> Self {
        Self::LoadContacts {
            path: path.into(),
            trace_context: TraceContext::from_current(),
        }
    }

    /// Returns the trace context attached to this message, if any.
    #[must_use]
    pub fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadContacts { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The contact file was read and decoded.
    ContactsLoaded {
        /// Contacts in file order.
        contacts: Vec<Contact>,
    },

    /// The contact file could not be read or decoded.
    LoadFailed {
        /// Reason for the failure.
        failure: FetchFailure,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_without_trace_context_omits_the_field() {
        let message = WorkerMessage::LoadContacts {
            path: "/host/contacts.json".to_string(),
            trace_context: None,
        };
        let payload = serde_json::to_string(&message).unwrap();
        assert!(!payload.contains("trace_context"));

        let decoded: WorkerMessage = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn load_contacts_has_no_trace_context_without_otel_layer() {
        let message = WorkerMessage::load_contacts("/host/contacts.json");
        assert!(message.trace_context().is_none());
    }
}
