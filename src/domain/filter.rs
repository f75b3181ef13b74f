//! Name filtering for the contact list.
//!
//! [`filter_contacts`] is the single filtering rule of the plugin: a contact is
//! visible iff its name contains the filter text as a case-sensitive
//! substring. It is a pure function and is re-run on every render, so the
//! visible list can never go stale.

use super::contact::Contact;

/// Returns the contacts whose name contains `needle`, in their original order.
///
/// Matching is case-sensitive and position-independent. An empty needle
/// matches every contact.
///
/// # Examples
///
/// ```
/// use zontacts::domain::{filter_contacts, Contact};
///
/// let contacts = vec![
///     Contact::new("Alice Smith", "a@x.com"),
///     Contact::new("Bob Jones", "b@x.com"),
/// ];
///
/// assert_eq!(filter_contacts(&contacts, "Smith"), vec![contacts[0].clone()]);
/// assert!(filter_contacts(&contacts, "smith").is_empty());
/// assert_eq!(filter_contacts(&contacts, ""), contacts);
/// ```
#[must_use]
pub fn filter_contacts(records: &[Contact], needle: &str) -> Vec<Contact> {
    let _span = tracing::trace_span!(
        "filter_contacts",
        total = records.len(),
        needle_len = needle.len()
    )
    .entered();

    let matched: Vec<Contact> = records
        .iter()
        .filter(|contact| contact.name.contains(needle))
        .cloned()
        .collect();

    tracing::trace!(matched = matched.len(), "contacts filtered");
    matched
}

/// Locates the first occurrence of `needle` in `name` for highlighting.
///
/// Returns a `(start, end)` range in character indices (exclusive end), or
/// `None` when the needle is empty or absent.
///
/// # Examples
///
/// ```
/// use zontacts::domain::match_range;
///
/// assert_eq!(match_range("Alice Smith", "Smith"), Some((6, 11)));
/// assert_eq!(match_range("Zoë Brown", "Brown"), Some((4, 9)));
/// assert_eq!(match_range("Alice Smith", ""), None);
/// ```
#[must_use]
pub fn match_range(name: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }

    let byte_start = name.find(needle)?;
    let start = name[..byte_start].chars().count();
    let end = start + needle.chars().count();
    Some((start, end))
}
