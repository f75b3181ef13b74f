//! JSON file contact store.
//!
//! Reads a contact list from a JSON file inside the plugin sandbox. The file is
//! read in full on every [`fetch`](ContactStore::fetch); nothing is cached.
//!
//! # File Format
//!
//! ```json
//! [
//!   { "name": "Alice Smith", "email": "a@x.com" },
//!   { "name": "Bob Jones", "email": "b@x.com" }
//! ]
//! ```

use crate::domain::{FetchFailure, FetchOutcome};
use crate::storage::backend::ContactStore;
use crate::storage::decode::decode_contacts;
use std::path::PathBuf;

/// Contact store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the given file. The file is not touched until
    /// [`fetch`](ContactStore::fetch) is called.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl ContactStore for JsonFileStore {
    fn fetch(&self) -> FetchOutcome {
        let _span = tracing::debug_span!("json_fetch_contacts", path = ?self.file_path).entered();

        let bytes = std::fs::read(&self.file_path).map_err(|e| {
            tracing::debug!(error = %e, "failed to read contact file");
            FetchFailure::Unreachable(format!("{}: {e}", self.file_path.display()))
        })?;

        tracing::debug!(bytes = bytes.len(), "contact file read");
        decode_contacts(&bytes)
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Contact;
    use std::io::Write;

    #[test]
    fn reads_contacts_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Alice Smith", "email": "a@x.com"}}, {{"name": "Bob Jones", "email": "b@x.com"}}]"#
        )
        .unwrap();

        let store = JsonFileStore::new(file.path().to_path_buf());
        let contacts = store.fetch().unwrap();

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1], Contact::new("Bob Jones", "b@x.com"));
    }

    #[test]
    fn missing_file_is_unreachable() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));

        assert!(matches!(store.fetch(), Err(FetchFailure::Unreachable(_))));
    }

    #[test]
    fn malformed_file_is_a_decode_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{\"name\": ").unwrap();

        let store = JsonFileStore::new(file.path().to_path_buf());
        assert!(matches!(store.fetch(), Err(FetchFailure::Decode(_))));
    }
}
