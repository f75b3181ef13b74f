//! Contact store: where the contact list comes from and how it is decoded.
//!
//! The plugin performs exactly one read per session. This layer only knows how
//! to perform that read; deciding when to perform it belongs to the
//! application layer.
//!
//! # Modules
//!
//! - `source`: Parsing of the configured resource location
//! - `backend`: Store trait abstraction
//! - `json`: JSON file store used by the worker thread
//! - `decode`: Shared decoding for file contents and HTTP responses

pub mod backend;
pub mod decode;
pub mod json;
pub mod source;

pub use backend::ContactStore;
pub use decode::{decode_contacts, decode_http_response};
pub use json::JsonFileStore;
pub use source::{ContactSource, DEFAULT_CONTACTS_LOCATION};
