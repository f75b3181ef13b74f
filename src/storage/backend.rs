//! Contact store abstraction.
//!
//! This module defines the [`ContactStore`] trait that abstracts over where a
//! contact list is read from. The worker thread only depends on this trait, so
//! the read path can be exercised without a Zellij host.

use crate::domain::FetchOutcome;

/// A one-shot source of contact records.
///
/// Implementations perform a single read each time [`fetch`](Self::fetch) is
/// called; callers are responsible for calling it once per session.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): reads a JSON file
///
/// # Examples
///
/// ```no_run
/// use zontacts::storage::{ContactStore, JsonFileStore};
/// use std::path::PathBuf;
///
/// let store = JsonFileStore::new(PathBuf::from("/host/contacts.json"));
/// match store.fetch() {
///     Ok(contacts) => println!("{} contacts", contacts.len()),
///     Err(failure) => eprintln!("{failure}"),
/// }
/// ```
pub trait ContactStore: Send {
    /// Reads and decodes the contact resource.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchFailure`](crate::domain::FetchFailure) if the resource
    /// cannot be read or decoded.
    fn fetch(&self) -> FetchOutcome;

    /// Human-readable description of the resource, used in logs.
    fn describe(&self) -> String;
}
