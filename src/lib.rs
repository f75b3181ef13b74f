//! Zontacts: a Zellij plugin that shows a searchable contact list.
//!
//! Zontacts reads a JSON list of contacts once per session and renders it as
//! a table that narrows as you type:
//! - One-shot read from a local file (via a worker) or an HTTP(S) URL
//! - Case-sensitive substring filter on contact names
//! - Matches highlighted in place, rows clipped to the pane
//! - Catppuccin themes or a custom TOML theme

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Sources     │   │ - File read   │
//! │ - Theming     │   │ - JSON decode │   │ - IPC bridge  │
//! │ - Components  │   │ - Store trait │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Contact model and filter (domain/)               │
//! │  - Error types (domain/error)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zontacts.wasm" {
//!         contacts "https://example.com/contacts.json"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState`, request permissions for the configured source.
//! 2. **Permissions Granted**: the handler issues the one-shot read, either
//!    a web request or a `LoadContacts` message to the worker.
//! 3. **Read Completes**: the outcome is published into state exactly once.
//! 4. **Typing**: each key becomes the full new filter text; the visible
//!    list is recomputed on render.
//!
//! # Example
//!
//! ```rust
//! use zontacts::{handle_event, initialize, Config, Event};
//! use zontacts::domain::Contact;
//!
//! let config = Config {
//!     contacts: "https://example.com/contacts.json".to_string(),
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! handle_event(&mut state, &Event::PermissionsGranted);
//! handle_event(
//!     &mut state,
//!     &Event::ContactsFetched(Ok(vec![Contact::new("Alice Smith", "a@x.com")])),
//! );
//! handle_event(&mut state, &Event::FilterTextChanged("Ali".to_string()));
//!
//! assert_eq!(state.visible_contacts().len(), 1);
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, LoadStatus};
pub use domain::{Contact, FetchFailure, Result, ZontactsError};
pub use ui::Theme;

use std::collections::BTreeMap;
use storage::{ContactSource, DEFAULT_CONTACTS_LOCATION};

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/zontacts.wasm" {
///     contacts "~/contacts.json"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location of the contact list: an `http(s)://` URL or a file path.
    ///
    /// Relative paths resolve against the host filesystem root the plugin
    /// was launched from. Default: `contacts.json`
    pub contacts: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Tracing is off
    /// when unset.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contacts: DEFAULT_CONTACTS_LOCATION.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values are treated as absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zontacts::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("contacts".to_string(), "https://example.com/c.json".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.contacts, "https://example.com/c.json");
    /// assert_eq!(config.theme_name, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Self {
            contacts: value("contacts").unwrap_or_else(|| DEFAULT_CONTACTS_LOCATION.to_string()),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }
}

/// Initializes the plugin state from configuration.
///
/// Resolves the contact source and theme. No read is issued here; it waits
/// for [`Event::PermissionsGranted`].
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(contacts = %config.contacts, "initializing zontacts plugin");

    let source = ContactSource::parse(&config.contacts);
    let theme = Theme::resolve(config.theme_name.as_deref(), config.theme_file.as_deref());

    AppState::new(source, theme)
}
