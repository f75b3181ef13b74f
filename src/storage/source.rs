//! Location of the contact resource.
//!
//! The plugin reads its contacts from exactly one resource, named by the
//! `contacts` configuration option. HTTP(S) locations are fetched through the
//! host's web request facility; everything else is treated as a file and read
//! by the worker thread.

use crate::infrastructure::paths::{display_path, resolve_resource_path};
use std::fmt;
use std::path::PathBuf;
use zellij_tile::prelude::PermissionType;

/// Default resource location, relative to the directory Zellij was started from.
pub const DEFAULT_CONTACTS_LOCATION: &str = "contacts.json";

/// Where the contact list is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSource {
    /// Fetched with a single HTTP GET.
    Url(String),

    /// Read from a file inside the plugin sandbox.
    File(PathBuf),
}

impl ContactSource {
    /// Parses a configured location.
    ///
    /// `http://` and `https://` locations become [`ContactSource::Url`]; any other
    /// value is resolved as a sandbox path.
    ///
    /// # Examples
    ///
    /// ```
    /// use zontacts::storage::ContactSource;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(
    ///     ContactSource::parse("https://example.com/contacts.json"),
    ///     ContactSource::Url("https://example.com/contacts.json".to_string())
    /// );
    /// assert_eq!(
    ///     ContactSource::parse("contacts.json"),
    ///     ContactSource::File(PathBuf::from("/host/contacts.json"))
    /// );
    /// ```
    #[must_use]
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(resolve_resource_path(location))
        }
    }

    /// Permissions the plugin must hold before the resource can be read.
    #[must_use]
    pub fn required_permissions(&self) -> Vec<PermissionType> {
        match self {
            Self::Url(_) => vec![PermissionType::WebAccess],
            Self::File(_) => vec![PermissionType::FullHdAccess],
        }
    }
}

impl Default for ContactSource {
    fn default() -> Self {
        Self::parse(DEFAULT_CONTACTS_LOCATION)
    }
}

impl fmt::Display for ContactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", display_path(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_is_contacts_json_in_start_directory() {
        assert_eq!(
            ContactSource::default(),
            ContactSource::File(PathBuf::from("/host/contacts.json"))
        );
    }

    #[test]
    fn plain_http_is_a_url() {
        assert!(matches!(
            ContactSource::parse("  http://localhost:8080/contacts.json "),
            ContactSource::Url(ref url) if url == "http://localhost:8080/contacts.json"
        ));
    }

    #[test]
    fn permissions_follow_source_kind() {
        assert_eq!(
            ContactSource::parse("https://example.com/c.json").required_permissions(),
            vec![PermissionType::WebAccess]
        );
        assert_eq!(
            ContactSource::parse("c.json").required_permissions(),
            vec![PermissionType::FullHdAccess]
        );
    }

    #[test]
    fn file_sources_display_relative_to_home() {
        assert_eq!(ContactSource::parse("~/people/c.json").to_string(), "~/people/c.json");
        assert_eq!(ContactSource::parse("contacts.json").to_string(), "~/contacts.json");
    }

    #[test]
    fn absolute_file_sources_display_unchanged() {
        assert_eq!(
            ContactSource::parse("/srv/contacts.json").to_string(),
            "/srv/contacts.json"
        );
        assert_eq!(
            ContactSource::parse("/hosted/contacts.json").to_string(),
            "/hosted/contacts.json"
        );
    }
}
