//! Decoding of the contact resource.
//!
//! Both read paths (HTTP response body and file contents) end here, so a
//! resource is accepted or rejected by the same rules regardless of where it
//! came from.

use crate::domain::{Contact, FetchFailure, FetchOutcome};

/// Decodes a JSON document into a list of contacts.
///
/// The document must be a JSON array whose elements are objects with string
/// `name` and `email` fields. Unknown fields are ignored. Any other shape is a
/// [`FetchFailure::Decode`] for the whole document.
///
/// # Examples
///
/// ```
/// use zontacts::storage::decode_contacts;
///
/// let body = br#"[{"name": "Alice Smith", "email": "a@x.com"}]"#;
/// let contacts = decode_contacts(body).unwrap();
/// assert_eq!(contacts[0].name, "Alice Smith");
///
/// assert!(decode_contacts(b"{not json").is_err());
/// ```
///
/// # Errors
///
/// Returns [`FetchFailure::Decode`] if the bytes are not a JSON array of
/// contact objects.
pub fn decode_contacts(bytes: &[u8]) -> FetchOutcome {
    let contacts: Vec<Contact> = serde_json::from_slice(bytes)
        .map_err(|e| FetchFailure::Decode(e.to_string()))?;

    tracing::debug!(count = contacts.len(), "decoded contact list");
    Ok(contacts)
}

/// Turns the host's answer to the contact web request into a fetch outcome.
///
/// # Errors
///
/// Returns [`FetchFailure::Status`] for non-2xx statuses, otherwise whatever
/// [`decode_contacts`] reports for the body.
pub fn decode_http_response(status: u16, body: &[u8]) -> FetchOutcome {
    if !(200..300).contains(&status) {
        tracing::debug!(
            status = status,
            body = %String::from_utf8_lossy(body),
            "contact request returned non-success status"
        );
        return Err(FetchFailure::Status(status));
    }

    decode_contacts(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CONTACTS: &[u8] = br#"[
        {"name": "Alice Smith", "email": "a@x.com"},
        {"name": "Bob Jones", "email": "b@x.com"}
    ]"#;

    #[test]
    fn decodes_contacts_in_document_order() {
        let contacts = decode_contacts(TWO_CONTACTS).unwrap();
        assert_eq!(
            contacts,
            vec![
                Contact::new("Alice Smith", "a@x.com"),
                Contact::new("Bob Jones", "b@x.com"),
            ]
        );
    }

    #[test]
    fn empty_array_is_an_empty_list() {
        assert_eq!(decode_contacts(b"[]").unwrap(), vec![]);
    }

    #[test]
    fn object_document_is_a_decode_failure() {
        let outcome = decode_contacts(br#"{"contacts": []}"#);
        assert!(matches!(outcome, Err(FetchFailure::Decode(_))));
    }

    #[test]
    fn record_without_name_fails_the_whole_document() {
        let outcome = decode_contacts(br#"[{"name": "A", "email": "a@x.com"}, {"email": "b@x.com"}]"#);
        assert!(matches!(outcome, Err(FetchFailure::Decode(_))));
    }

    #[test]
    fn non_success_status_is_reported_before_decoding() {
        assert_eq!(
            decode_http_response(404, b"not found"),
            Err(FetchFailure::Status(404))
        );
        assert_eq!(
            decode_http_response(500, TWO_CONTACTS),
            Err(FetchFailure::Status(500))
        );
    }

    #[test]
    fn success_status_decodes_body() {
        assert_eq!(decode_http_response(200, TWO_CONTACTS).unwrap().len(), 2);
    }
}
