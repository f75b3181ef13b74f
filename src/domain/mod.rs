//! Domain layer for the Zontacts plugin.
//!
//! This module contains the core domain types and the filtering rule,
//! independent of Zellij-specific APIs or infrastructure concerns.
//!
//! # Organization
//!
//! - [`contact`]: Contact record model
//! - [`filter`]: Case-sensitive name filtering
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use zontacts::domain::{filter_contacts, Contact};
//!
//! let contacts = vec![Contact::new("Alice Smith", "a@x.com")];
//! assert_eq!(filter_contacts(&contacts, "Alice").len(), 1);
//! ```

pub mod contact;
pub mod error;
pub mod filter;

pub use contact::Contact;
pub use error::{FetchFailure, Result, ZontactsError};
pub use filter::{filter_contacts, match_range};

/// Outcome of the one-shot contact read.
pub type FetchOutcome = std::result::Result<Vec<Contact>, FetchFailure>;
