//! Contact domain model.
//!
//! A [`Contact`] is one entry of the fetched contact list. Contacts are
//! immutable once decoded: the plugin never creates, edits or deletes them.

use serde::{Deserialize, Serialize};

/// A single contact record.
///
/// Decoded from one object of the contact resource. Both fields are required;
/// any additional fields in the source object are ignored.
///
/// `email` is used as the identity key of the contact's row in the list. The
/// data set is assumed not to contain duplicate emails, but duplicates never
/// cause a failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Contact {
    /// Creates a contact from a name and an email address.
    ///
    /// # Examples
    ///
    /// ```
    /// use zontacts::domain::Contact;
    ///
    /// let contact = Contact::new("Alice Smith", "a@x.com");
    /// assert_eq!(contact.name, "Alice Smith");
    /// assert_eq!(contact.row_key(), "a@x.com");
    /// ```
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the stable key identifying this contact's row.
    #[must_use]
    pub fn row_key(&self) -> &str {
        &self.email
    }
}
