//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of the two pieces of
//! mutable state in the plugin: the fetched `contacts` and the `filter_text`.
//! It is the only place where the two are joined.
//!
//! # State Components
//!
//! - **Contacts**: Published once by the one-shot read, never mutated after
//! - **Filter Text**: Replaced wholesale on every search field edit
//! - **Load Status**: Inspectable outcome of the read, never rendered
//!
//! The filtered list is deliberately absent: it is recomputed from
//! `(contacts, filter_text)` by [`AppState::visible_contacts`] on every render.
//!
//! # Example
//!
//! ```rust
//! use zontacts::app::AppState;
//! use zontacts::domain::Contact;
//! use zontacts::storage::ContactSource;
//! use zontacts::ui::Theme;
//!
//! let mut state = AppState::new(ContactSource::default(), Theme::default());
//! state.apply_fetch_outcome(Ok(vec![Contact::new("Alice Smith", "a@x.com")]));
//! state.set_filter_text("Alice".to_string());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.rows.len(), 1);
//! ```

use super::actions::Action;
use super::status::LoadStatus;
use crate::domain::{filter_contacts, match_range, Contact, FetchOutcome};
use crate::storage::ContactSource;
use crate::ui::components::{list_capacity, NAME_COLUMN_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ContactRow, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
use crate::worker::WorkerMessage;

/// Longest name shown without truncation.
const MAX_NAME_CHARS: usize = 35;

/// Central application state container.
///
/// Mutated only by the event handler, one event at a time on the plugin's
/// event loop.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Contacts published by the read, in resource order.
    ///
    /// Empty until the read succeeds; empty for the whole session if it fails.
    pub contacts: Vec<Contact>,

    /// Current content of the search field.
    pub filter_text: String,

    /// Progress and outcome of the one-shot read.
    pub load_status: LoadStatus,

    /// Where the contacts are read from.
    pub source: ContactSource,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state waiting for its contact read.
    #[must_use]
    pub fn new(source: ContactSource, theme: Theme) -> Self {
        Self {
            contacts: vec![],
            filter_text: String::new(),
            load_status: LoadStatus::Idle,
            source,
            theme,
        }
    }

    /// Marks the read as issued and returns the action that performs it.
    ///
    /// Returns `None` once a read has been requested or settled, which makes
    /// the read happen at most once per session no matter how often this is
    /// called.
    pub fn request_contacts(&mut self) -> Option<Action> {
        if !self.load_status.can_request() {
            tracing::debug!(status = ?self.load_status, "contact read already requested, not issuing another");
            return None;
        }

        self.load_status = LoadStatus::InFlight;
        tracing::info!(source = %self.source, "requesting contacts");

        Some(match &self.source {
            ContactSource::Url(url) => Action::WebRequest { url: url.clone() },
            ContactSource::File(path) => Action::PostToWorker(WorkerMessage::load_contacts(
                path.to_string_lossy().to_string(),
            )),
        })
    }

    /// Publishes the outcome of the read.
    ///
    /// On success the contacts become the session's contact list. On failure
    /// the failure is logged and kept in [`LoadStatus::Failed`]; the contact
    /// list stays empty. Outcomes arriving after the read has settled are
    /// ignored.
    ///
    /// Returns `true` if the state changed.
    pub fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) -> bool {
        if self.load_status.is_settled() {
            tracing::warn!(status = ?self.load_status, "ignoring contact read outcome after load settled");
            return false;
        }

        match outcome {
            Ok(contacts) => {
                tracing::info!(count = contacts.len(), source = %self.source, "contacts loaded");
                self.load_status = LoadStatus::Loaded { count: contacts.len() };
                self.contacts = contacts;
            }
            Err(failure) => {
                tracing::error!(error = %failure, source = %self.source, "error fetching and parsing contacts");
                self.load_status = LoadStatus::Failed(failure);
            }
        }
        true
    }

    /// Replaces the filter text.
    ///
    /// Returns `true` if the text changed.
    pub fn set_filter_text(&mut self, text: String) -> bool {
        if self.filter_text == text {
            return false;
        }
        tracing::trace!(filter = %text, "filter text replaced");
        self.filter_text = text;
        true
    }

    /// Contacts matching the current filter text, in resource order.
    #[must_use]
    pub fn visible_contacts(&self) -> Vec<Contact> {
        filter_contacts(&self.contacts, &self.filter_text)
    }

    /// Computes a renderable UI view model from current state and pane size.
    ///
    /// Rows that do not fit below the search box are clipped; their number is
    /// reported in the footer. Nothing computed here is stored back in state.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows = rows, cols = cols).entered();

        let visible = self.visible_contacts();
        let available_rows = list_capacity(rows);
        let shown = visible.len().min(available_rows);
        let hidden_count = visible.len() - shown;

        let contact_rows: Vec<ContactRow> = visible[..shown]
            .iter()
            .map(|contact| self.compute_row(contact, cols))
            .collect();

        UIViewModel {
            rows: contact_rows,
            hidden_count,
            header: HeaderInfo {
                title: format!(" Contacts ({}) ", visible.len()),
            },
            footer: Self::compute_footer(hidden_count),
            empty_state: self.compute_empty_state(visible.is_empty()),
            search_bar: SearchBarInfo {
                query: self.filter_text.clone(),
            },
        }
    }

    /// Computes one list row, truncating long values to the pane width.
    fn compute_row(&self, contact: &Contact, cols: usize) -> ContactRow {
        let max_email_width = cols.saturating_sub(NAME_COLUMN_WIDTH + 2);

        let name_chars = contact.name.chars().count();
        let (name, visible_name_chars) = if name_chars > MAX_NAME_CHARS {
            let kept: String = contact.name.chars().take(MAX_NAME_CHARS - 3).collect();
            (format!("{kept}..."), MAX_NAME_CHARS - 3)
        } else {
            (contact.name.clone(), name_chars)
        };

        let highlight_ranges = match_range(&contact.name, &self.filter_text)
            .filter(|&(start, _)| start < visible_name_chars)
            .map(|(start, end)| vec![(start, end.min(visible_name_chars))])
            .unwrap_or_default();

        ContactRow {
            key: contact.row_key().to_string(),
            name,
            email: Self::format_email(&contact.email, max_email_width),
            highlight_ranges,
        }
    }

    /// Truncates an email to `max_width` characters, marking the cut with "...".
    fn format_email(email: &str, max_width: usize) -> String {
        if email.chars().count() > max_width {
            let kept: String = email.chars().take(max_width.saturating_sub(3)).collect();
            format!("{kept}...")
        } else {
            email.to_string()
        }
    }

    fn compute_footer(hidden_count: usize) -> FooterInfo {
        let hints = "Type to filter  Backspace: delete  Esc: clear  Esc on empty: close";
        let keybindings = if hidden_count > 0 {
            format!("+{hidden_count} more  {hints}")
        } else {
            hints.to_string()
        };
        FooterInfo { keybindings }
    }

    /// Picks the message shown in place of an empty list.
    ///
    /// A failed read and an empty contact list produce the same message.
    fn compute_empty_state(&self, nothing_visible: bool) -> Option<EmptyState> {
        if !nothing_visible {
            return None;
        }

        let state = if !self.load_status.is_settled() {
            EmptyState {
                message: "Loading contacts...".to_string(),
                subtitle: String::new(),
            }
        } else if self.contacts.is_empty() {
            EmptyState {
                message: "No contacts".to_string(),
                subtitle: "The contact list is empty".to_string(),
            }
        } else {
            EmptyState {
                message: "No matching contacts".to_string(),
                subtitle: format!("No name contains \"{}\"", self.filter_text),
            }
        };
        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FetchFailure;
    use std::path::PathBuf;

    fn state_with(contacts: Vec<Contact>) -> AppState {
        let mut state = AppState::new(ContactSource::default(), Theme::default());
        state.request_contacts();
        state.apply_fetch_outcome(Ok(contacts));
        state
    }

    #[test]
    fn file_source_requests_through_worker_once() {
        let mut state = AppState::new(
            ContactSource::File(PathBuf::from("/host/contacts.json")),
            Theme::default(),
        );

        let first = state.request_contacts();
        assert!(matches!(
            first,
            Some(Action::PostToWorker(WorkerMessage::LoadContacts { ref path, .. })) if path == "/host/contacts.json"
        ));
        assert_eq!(state.load_status, LoadStatus::InFlight);
        assert_eq!(state.request_contacts(), None);
    }

    #[test]
    fn url_source_requests_through_web_request() {
        let mut state = AppState::new(
            ContactSource::parse("https://example.com/contacts.json"),
            Theme::default(),
        );
        assert_eq!(
            state.request_contacts(),
            Some(Action::WebRequest {
                url: "https://example.com/contacts.json".to_string()
            })
        );
    }

    #[test]
    fn contacts_are_published_only_once() {
        let mut state = state_with(vec![Contact::new("Alice Smith", "a@x.com")]);

        let changed = state.apply_fetch_outcome(Ok(vec![Contact::new("Mallory", "m@x.com")]));

        assert!(!changed);
        assert_eq!(state.contacts, vec![Contact::new("Alice Smith", "a@x.com")]);
        assert_eq!(state.load_status, LoadStatus::Loaded { count: 1 });
    }

    #[test]
    fn failure_keeps_contacts_empty_and_is_inspectable() {
        let mut state = AppState::new(ContactSource::default(), Theme::default());
        state.request_contacts();

        assert!(state.apply_fetch_outcome(Err(FetchFailure::Unreachable("offline".to_string()))));

        assert!(state.contacts.is_empty());
        assert_eq!(
            state.load_status,
            LoadStatus::Failed(FetchFailure::Unreachable("offline".to_string()))
        );
        assert_eq!(state.request_contacts(), None);
    }

    #[test]
    fn failure_looks_the_same_as_an_empty_list() {
        let mut failed = AppState::new(ContactSource::default(), Theme::default());
        failed.apply_fetch_outcome(Err(FetchFailure::Status(503)));
        let empty = state_with(vec![]);

        let failed_vm = failed.compute_viewmodel(24, 80);
        let empty_vm = empty.compute_viewmodel(24, 80);

        assert!(failed_vm.rows.is_empty());
        assert_eq!(failed_vm.empty_state, empty_vm.empty_state);
        assert_eq!(failed_vm.header, empty_vm.header);
    }

    #[test]
    fn setting_same_filter_text_reports_no_change() {
        let mut state = state_with(vec![]);
        assert!(state.set_filter_text("Bo".to_string()));
        assert!(!state.set_filter_text("Bo".to_string()));
    }

    #[test]
    fn rows_are_keyed_by_email_and_highlight_the_match() {
        let mut state = state_with(vec![
            Contact::new("Alice Smith", "a@x.com"),
            Contact::new("Bob Jones", "b@x.com"),
        ]);
        state.set_filter_text("Smith".to_string());

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].key, "a@x.com");
        assert_eq!(vm.rows[0].highlight_ranges, vec![(6, 11)]);
        assert_eq!(vm.header.title, " Contacts (1) ");
    }

    #[test]
    fn rows_beyond_the_pane_are_clipped_and_counted() {
        let contacts: Vec<Contact> = (0..20)
            .map(|i| Contact::new(format!("Person {i}"), format!("p{i}@x.com")))
            .collect();
        let state = state_with(contacts);

        let vm = state.compute_viewmodel(14, 80);

        assert_eq!(vm.rows.len(), 4);
        assert_eq!(vm.hidden_count, 16);
        assert!(vm.footer.keybindings.starts_with("+16 more"));
        assert_eq!(vm.rows[0].name, "Person 0");
    }

    #[test]
    fn clipped_rows_stop_above_the_bottom_border() {
        use crate::ui::components::{bottom_border_row, LIST_START_ROW};

        let contacts: Vec<Contact> = (0..50)
            .map(|i| Contact::new(format!("Person {i}"), format!("p{i}@x.com")))
            .collect();
        let state = state_with(contacts);

        for rows in 11..40 {
            let vm = state.compute_viewmodel(rows, 80);
            let last_contact_row = LIST_START_ROW + vm.rows.len() - 1;
            assert!(last_contact_row < bottom_border_row(rows), "rows={rows}");
            assert_eq!(vm.rows.len() + vm.hidden_count, 50);
        }
    }

    #[test]
    fn long_emails_fit_beside_the_name_column() {
        let email = format!("{}@example.com", "m".repeat(60));
        let state = state_with(vec![Contact::new("Mia", email)]);

        let vm = state.compute_viewmodel(24, 60);

        assert!(NAME_COLUMN_WIDTH + vm.rows[0].email.chars().count() <= 60);
        assert!(vm.rows[0].email.ends_with("..."));
    }

    #[test]
    fn long_names_are_truncated_and_highlights_clipped() {
        let long_name = format!("{}Tail", "x".repeat(40));
        let mut state = state_with(vec![Contact::new(long_name, "l@x.com")]);

        state.set_filter_text("Tail".to_string());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.rows[0].name.chars().count(), MAX_NAME_CHARS);
        assert!(vm.rows[0].highlight_ranges.is_empty());

        state.set_filter_text("xxxxT".to_string());
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.rows[0].highlight_ranges.is_empty());

        state.set_filter_text(format!("{}T", "x".repeat(35)));
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.rows[0].highlight_ranges, vec![(5, 32)]);
    }

    #[test]
    fn duplicate_emails_still_render_every_row() {
        let state = state_with(vec![
            Contact::new("Alice Smith", "same@x.com"),
            Contact::new("Alice Smithson", "same@x.com"),
        ]);

        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].key, vm.rows[1].key);
    }

    #[test]
    fn loading_message_until_read_settles() {
        let mut state = AppState::new(ContactSource::default(), Theme::default());
        state.request_contacts();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(
            vm.empty_state.map(|e| e.message),
            Some("Loading contacts...".to_string())
        );
    }

    #[test]
    fn no_match_message_names_the_filter() {
        let mut state = state_with(vec![Contact::new("Alice Smith", "a@x.com")]);
        state.set_filter_text("smith".to_string());

        let vm = state.compute_viewmodel(24, 80);

        assert!(vm.rows.is_empty());
        assert_eq!(
            vm.empty_state.map(|e| e.subtitle),
            Some("No name contains \"smith\"".to_string())
        );
    }
}
