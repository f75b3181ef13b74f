//! Load status of the one-shot contact read.
//!
//! The read moves through a small state machine that only ever advances:
//!
//! ```text
//! Idle ──request──▶ InFlight ──ok──▶ Loaded { count }
//!                      │
//!                      └────err───▶ Failed(FetchFailure)
//! ```
//!
//! `Loaded` and `Failed` are terminal. The status is never rendered; it exists
//! so the outcome of the read can be inspected without capturing logs.

use crate::domain::FetchFailure;

/// Progress of the contact read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No read has been requested yet (waiting for permissions).
    #[default]
    Idle,

    /// The read has been issued and has not completed.
    InFlight,

    /// The read succeeded and published `count` contacts.
    Loaded {
        /// Number of contacts published.
        count: usize,
    },

    /// The read failed; the contact list stays empty for the session.
    Failed(FetchFailure),
}

impl LoadStatus {
    /// Whether the read has completed, successfully or not.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded { .. } | Self::Failed(_))
    }

    /// Whether a read may still be issued.
    #[must_use]
    pub const fn can_request(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_idle_may_request() {
        assert!(LoadStatus::Idle.can_request());
        assert!(!LoadStatus::InFlight.can_request());
        assert!(!LoadStatus::Loaded { count: 0 }.can_request());
        assert!(!LoadStatus::Failed(FetchFailure::PermissionDenied).can_request());
    }

    #[test]
    fn loaded_and_failed_are_terminal() {
        assert!(!LoadStatus::Idle.is_settled());
        assert!(!LoadStatus::InFlight.is_settled());
        assert!(LoadStatus::Loaded { count: 3 }.is_settled());
        assert!(LoadStatus::Failed(FetchFailure::Status(500)).is_settled());
    }
}
