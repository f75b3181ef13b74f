//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data: rows already clipped to the
//! pane, names already truncated, highlight ranges already in character
//! indices.
//!
//! # Example
//!
//! ```rust
//! use zontacts::ui::viewmodel::{ContactRow, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     rows: vec![ContactRow {
//!         key: "alice@example.com".to_string(),
//!         name: "Alice Smith".to_string(),
//!         email: "alice@example.com".to_string(),
//!         highlight_ranges: vec![(0, 5)],
//!     }],
//!     hidden_count: 0,
//!     header: HeaderInfo { title: " Contacts (1) ".to_string() },
//!     footer: FooterInfo { keybindings: "Esc: clear".to_string() },
//!     empty_state: None,
//!     search_bar: SearchBarInfo { query: "Alice".to_string() },
//! };
//! assert_eq!(vm.rows[0].key, "alice@example.com");
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Rows that fit in the pane, in resource order.
    pub rows: Vec<ContactRow>,

    /// Matching contacts that did not fit in the pane.
    pub hidden_count: usize,

    /// Header information (title with match count).
    pub header: HeaderInfo,

    /// Footer information (keybindings, hidden row count).
    pub footer: FooterInfo,

    /// Message shown in place of the list when no row is visible.
    pub empty_state: Option<EmptyState>,

    /// The search field, always present.
    pub search_bar: SearchBarInfo,
}

/// Display information for one contact row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    /// Identity of the row. The contact's email.
    pub key: String,

    /// Display name, truncated to the name column.
    pub name: String,

    /// Display email, truncated to the remaining width.
    pub email: String,

    /// Character ranges of `name` matching the filter text.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, already
    /// clipped to the displayed name.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text, prefixed with the hidden row count when rows are clipped.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No contacts").
    pub message: String,

    /// Secondary explanatory text. May be empty.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current filter text, exactly as held in state.
    pub query: String,
}
