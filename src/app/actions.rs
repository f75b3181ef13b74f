//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim (`main.rs`) translates each action into Zellij API calls, which
//! keeps everything in the library testable without a host.
//!
//! # Example
//!
//! ```rust
//! use zontacts::app::Action;
//! use zontacts::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::load_contacts("/host/contacts.json")),
//! ];
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Posts a message to the background worker thread.
    ///
    /// Used for the file-backed contact read.
    PostToWorker(WorkerMessage),

    /// Issues a single HTTP GET for the contact resource.
    ///
    /// The answer arrives later as a `WebRequestResult` host event.
    WebRequest {
        /// URL of the contact resource.
        url: String,
    },
}
