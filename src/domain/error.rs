//! Error types for the Zontacts plugin.
//!
//! This module defines [`FetchFailure`], the single failure kind of the
//! one-shot contact read, and [`ZontactsError`], the error type for theme
//! loading and I/O. Both are implemented using the `thiserror` crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the one-shot contact read did not produce a contact list.
///
/// Every failure of the read (network, file access, decoding, permissions)
/// collapses into this type. It is logged and kept in
/// [`LoadStatus::Failed`](crate::app::LoadStatus::Failed), never shown to the
/// user. The type is serializable so the worker thread can report it back to
/// the plugin.
///
/// # Examples
///
/// ```
/// use zontacts::domain::FetchFailure;
///
/// let failure = FetchFailure::Status(404);
/// assert_eq!(failure.to_string(), "resource returned HTTP status 404");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FetchFailure {
    /// The resource could not be reached or read.
    ///
    /// Covers missing files, I/O errors and transport errors reported by the
    /// host.
    #[error("resource unreachable: {0}")]
    Unreachable(String),

    /// The HTTP request completed with a non-success status.
    #[error("resource returned HTTP status {0}")]
    Status(u16),

    /// The resource was read but is not a JSON array of contact records.
    #[error("malformed contact list: {0}")]
    Decode(String),

    /// The user denied the permission needed to read the resource.
    #[error("permission to read the contact resource was denied")]
    PermissionDenied,
}

/// The main error type for Zontacts plugin operations.
///
/// Consolidates error conditions from theming and I/O. Contact read failures
/// are not errors of this kind; they settle the load status as
/// [`FetchFailure`] values.
///
/// # Examples
///
/// ```
/// use std::io;
/// use zontacts::domain::ZontactsError;
///
/// let err: ZontactsError = io::Error::new(io::ErrorKind::NotFound, "theme.toml").into();
/// assert!(matches!(err, ZontactsError::Io(_)));
/// ```
#[derive(Debug, Error)]
pub enum ZontactsError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for Zontacts operations.
pub type Result<T> = std::result::Result<T, ZontactsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failure_survives_json_round_trip_across_worker_boundary() {
        let failure = FetchFailure::Decode("expected a sequence".to_string());
        let payload = serde_json::to_string(&failure).unwrap();
        let decoded: FetchFailure = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, failure);
    }

    #[test]
    fn theme_error_message_includes_parser_reason() {
        let err = ZontactsError::Theme("missing field `header_fg`".to_string());
        assert_eq!(err.to_string(), "Theme error: missing field `header_fg`");
    }
}
