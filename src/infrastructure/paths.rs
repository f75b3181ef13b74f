//! Path manipulation utilities for Zellij sandbox environment.
//!
//! This module provides functions for working with filesystem paths in the Zellij
//! plugin sandbox, where the host filesystem is mounted under `/host`. It handles
//! tilde expansion, resource path resolution and the plugin data directory.

use std::path::{Path, PathBuf};

/// Returns the data directory for Zontacts trace files.
///
/// The directory is located at `/host/.local/share/zellij/zontacts` in the Zellij
/// sandbox. `/host` points to the folder Zellij was started from, which is
/// typically the user's home directory.
///
/// # Examples
///
/// ```
/// use zontacts::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/zontacts");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zontacts")
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// # Examples
///
/// ```
/// use zontacts::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/contacts.json"), "/host/contacts.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Resolves a configured resource location to a path readable from the sandbox.
///
/// Tilde paths are expanded, relative paths are anchored at `/host` (the
/// directory Zellij was started from) and absolute paths are kept as-is.
///
/// # Examples
///
/// ```
/// use zontacts::infrastructure::resolve_resource_path;
/// use std::path::PathBuf;
///
/// assert_eq!(resolve_resource_path("contacts.json"), PathBuf::from("/host/contacts.json"));
/// assert_eq!(resolve_resource_path("./data/contacts.json"), PathBuf::from("/host/data/contacts.json"));
/// assert_eq!(resolve_resource_path("~/contacts.json"), PathBuf::from("/host/contacts.json"));
/// assert_eq!(resolve_resource_path("/srv/contacts.json"), PathBuf::from("/srv/contacts.json"));
/// ```
#[must_use]
pub fn resolve_resource_path(location: &str) -> PathBuf {
    let expanded = expand_tilde(location.trim());
    if expanded.starts_with('/') {
        PathBuf::from(expanded)
    } else {
        let relative = expanded.strip_prefix("./").unwrap_or(&expanded);
        PathBuf::from("/host").join(relative)
    }
}

/// Formats a sandbox path for display.
///
/// Paths under `/host` are shown relative to `~`; any other path is shown
/// unchanged.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use zontacts::infrastructure::display_path;
///
/// assert_eq!(display_path(Path::new("/host/contacts.json")), "~/contacts.json");
/// assert_eq!(display_path(Path::new("/srv/contacts.json")), "/srv/contacts.json");
/// assert_eq!(display_path(Path::new("/hosted/contacts.json")), "/hosted/contacts.json");
/// ```
#[must_use]
pub fn display_path(path: &Path) -> String {
    match path.strip_prefix("/host") {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.display()),
        Err(_) => path.display().to_string(),
    }
}
