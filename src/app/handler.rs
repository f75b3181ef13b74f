//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Lifecycle**: `PermissionsGranted`, `PermissionsDenied`, `CloseFocus`
//! - **Input**: `FilterTextChanged`
//! - **Read outcome**: `ContactsFetched` (HTTP) and `WorkerResponse` (file)
//!
//! # Example
//!
//! ```rust
//! use zontacts::app::{handle_event, Action, AppState, Event};
//! use zontacts::storage::ContactSource;
//! use zontacts::ui::Theme;
//!
//! let source = ContactSource::parse("https://example.com/contacts.json");
//! let mut state = AppState::new(source, Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted);
//! assert!(matches!(actions[..], [Action::WebRequest { .. }]));
//! ```

use crate::app::{Action, AppState};
use crate::domain::{FetchFailure, FetchOutcome};
use crate::worker::WorkerResponse;

/// Events triggered by user input, host callbacks, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The host granted the permissions needed to read the contacts.
    ///
    /// Issues the one-shot read unless it has already been issued.
    PermissionsGranted,

    /// The host denied the permissions needed to read the contacts.
    ///
    /// Settles the read as failed; the list stays empty.
    PermissionsDenied,

    /// The search field content changed to this text.
    FilterTextChanged(String),

    /// Outcome of the HTTP read.
    ContactsFetched(FetchOutcome),

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),

    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// Whether the UI needs re-rendering, and the actions to execute in sequence.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::PermissionsGranted => {
            let actions: Vec<Action> = state.request_contacts().into_iter().collect();
            (!actions.is_empty(), actions)
        }
        Event::PermissionsDenied => {
            tracing::warn!(source = %state.source, "permissions denied, contacts will not be read");
            let changed = state.apply_fetch_outcome(Err(FetchFailure::PermissionDenied));
            (changed, vec![])
        }
        Event::FilterTextChanged(text) => {
            let changed = state.set_filter_text(text.clone());
            (changed, vec![])
        }
        Event::ContactsFetched(outcome) => {
            let changed = state.apply_fetch_outcome(outcome.clone());
            (changed, vec![])
        }
        Event::WorkerResponse(response) => {
            let outcome = match response {
                WorkerResponse::ContactsLoaded { contacts } => Ok(contacts.clone()),
                WorkerResponse::LoadFailed { failure } => Err(failure.clone()),
            };
            let changed = state.apply_fetch_outcome(outcome);
            (changed, vec![])
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LoadStatus;
    use crate::domain::Contact;
    use crate::storage::ContactSource;
    use crate::ui::Theme;
    use crate::worker::WorkerMessage;

    fn sample() -> Vec<Contact> {
        vec![
            Contact::new("Alice Smith", "a@x.com"),
            Contact::new("Bob Jones", "b@x.com"),
            Contact::new("Carol Smithers", "c@x.com"),
        ]
    }

    fn url_state() -> AppState {
        AppState::new(
            ContactSource::parse("https://example.com/contacts.json"),
            Theme::default(),
        )
    }

    fn loaded_state() -> AppState {
        let mut state = url_state();
        handle_event(&mut state, &Event::PermissionsGranted);
        handle_event(&mut state, &Event::ContactsFetched(Ok(sample())));
        state
    }

    fn visible_names(state: &AppState) -> Vec<String> {
        state
            .compute_viewmodel(40, 100)
            .rows
            .into_iter()
            .map(|row| row.name)
            .collect()
    }

    #[test]
    fn permissions_granted_twice_issues_one_read() {
        let mut state = url_state();

        let (_, first) = handle_event(&mut state, &Event::PermissionsGranted);
        let (render, second) = handle_event(&mut state, &Event::PermissionsGranted);

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert!(!render);
    }

    #[test]
    fn file_source_reads_through_worker() {
        let mut state = AppState::new(ContactSource::default(), Theme::default());

        let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted);

        assert!(matches!(
            actions[..],
            [Action::PostToWorker(WorkerMessage::LoadContacts { .. })]
        ));
    }

    #[test]
    fn empty_filter_shows_every_contact_in_order() {
        let state = loaded_state();
        assert_eq!(
            visible_names(&state),
            vec!["Alice Smith", "Bob Jones", "Carol Smithers"]
        );
    }

    #[test]
    fn substring_filter_keeps_matching_contacts() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::FilterTextChanged("Smith".to_string()));

        assert_eq!(visible_names(&state), vec!["Alice Smith", "Carol Smithers"]);
    }

    #[test]
    fn filter_is_case_sensitive() {
        let mut state = loaded_state();

        handle_event(&mut state, &Event::FilterTextChanged("smith".to_string()));

        assert!(visible_names(&state).is_empty());
    }

    #[test]
    fn clearing_filter_restores_full_list() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::FilterTextChanged("Bob".to_string()));
        assert_eq!(visible_names(&state), vec!["Bob Jones"]);

        handle_event(&mut state, &Event::FilterTextChanged(String::new()));

        assert_eq!(visible_names(&state).len(), 3);
    }

    #[test]
    fn filter_typed_before_load_applies_once_contacts_arrive() {
        let mut state = url_state();
        handle_event(&mut state, &Event::PermissionsGranted);
        handle_event(&mut state, &Event::FilterTextChanged("Jo".to_string()));

        handle_event(&mut state, &Event::ContactsFetched(Ok(sample())));

        assert_eq!(visible_names(&state), vec!["Bob Jones"]);
    }

    #[test]
    fn fetch_failure_leaves_list_empty_for_any_filter() {
        let mut state = url_state();
        handle_event(&mut state, &Event::PermissionsGranted);

        let (render, _) = handle_event(
            &mut state,
            &Event::ContactsFetched(Err(FetchFailure::Status(404))),
        );
        handle_event(&mut state, &Event::FilterTextChanged("A".to_string()));

        assert!(render);
        assert!(visible_names(&state).is_empty());
        assert_eq!(state.load_status, LoadStatus::Failed(FetchFailure::Status(404)));
    }

    #[test]
    fn late_outcome_is_ignored() {
        let mut state = loaded_state();

        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::LoadFailed {
                failure: FetchFailure::Unreachable("late".to_string()),
            }),
        );

        assert!(!render);
        assert_eq!(state.load_status, LoadStatus::Loaded { count: 3 });
    }

    #[test]
    fn worker_response_publishes_contacts() {
        let mut state = AppState::new(ContactSource::default(), Theme::default());
        handle_event(&mut state, &Event::PermissionsGranted);

        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::ContactsLoaded { contacts: sample() }),
        );

        assert_eq!(state.contacts, sample());
    }

    #[test]
    fn denied_permissions_settle_as_failed() {
        let mut state = url_state();

        let (_, actions) = handle_event(&mut state, &Event::PermissionsDenied);
        let (_, retry) = handle_event(&mut state, &Event::PermissionsGranted);

        assert!(actions.is_empty());
        assert!(retry.is_empty());
        assert_eq!(state.load_status, LoadStatus::Failed(FetchFailure::PermissionDenied));
    }

    #[test]
    fn close_focus_emits_action_without_render() {
        let mut state = url_state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus);
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
