//! The search field's editing rules.
//!
//! The field is controlled: it never stores text of its own and always
//! displays `AppState::filter_text`. A key press is turned into the complete
//! new field content, which the caller forwards to the state owner as
//! [`Event::FilterTextChanged`](crate::app::Event::FilterTextChanged).

use std::collections::BTreeSet;
use zellij_tile::prelude::{BareKey, KeyModifier};

use crate::app::Event;

/// An edit applied to the search field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    /// Appends a character at the end of the field.
    Char(char),
    /// Removes the last character.
    Backspace,
    /// Empties the field.
    Clear,
}

/// Stateless editor for the search field.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchInput;

impl SearchInput {
    /// Applies `key` to the displayed text and returns the new content.
    ///
    /// Returns `None` when the key leaves the content unchanged (backspace or
    /// clear on an empty field), so no change is emitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use zontacts::app::{SearchInput, SearchKey};
    ///
    /// assert_eq!(SearchInput::on_key("Smi", SearchKey::Char('t')), Some("Smit".to_string()));
    /// assert_eq!(SearchInput::on_key("Smit", SearchKey::Backspace), Some("Smi".to_string()));
    /// assert_eq!(SearchInput::on_key("", SearchKey::Backspace), None);
    /// ```
    #[must_use]
    pub fn on_key(current: &str, key: SearchKey) -> Option<String> {
        match key {
            SearchKey::Char(c) => {
                let mut next = String::with_capacity(current.len() + c.len_utf8());
                next.push_str(current);
                next.push(c);
                Some(next)
            }
            SearchKey::Backspace => {
                let mut chars = current.chars();
                chars.next_back()?;
                Some(chars.as_str().to_string())
            }
            SearchKey::Clear => {
                if current.is_empty() {
                    None
                } else {
                    Some(String::new())
                }
            }
        }
    }

    /// Maps a key press on the always-focused field to an application event.
    ///
    /// `Ctrl+u` clears the field. Other chords are ignored, except plain
    /// `Shift` which only changes the typed character. `Esc` clears a
    /// non-empty field and closes the pane when the field is already empty.
    /// Keys that leave the text unchanged produce no event.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use zellij_tile::prelude::BareKey;
    /// use zontacts::app::{Event, SearchInput};
    ///
    /// let event = SearchInput::map_key("Bo", BareKey::Char('b'), &BTreeSet::new());
    /// assert_eq!(event, Some(Event::FilterTextChanged("Bob".to_string())));
    /// ```
    #[must_use]
    pub fn map_key(
        current: &str,
        bare_key: BareKey,
        modifiers: &BTreeSet<KeyModifier>,
    ) -> Option<Event> {
        let ctrl_only = modifiers.len() == 1 && modifiers.contains(&KeyModifier::Ctrl);

        let key = if ctrl_only && bare_key == BareKey::Char('u') {
            SearchKey::Clear
        } else if modifiers.iter().any(|m| *m != KeyModifier::Shift) {
            return None;
        } else {
            match bare_key {
                BareKey::Esc if current.is_empty() => return Some(Event::CloseFocus),
                BareKey::Esc => SearchKey::Clear,
                BareKey::Backspace => SearchKey::Backspace,
                BareKey::Char(c) => SearchKey::Char(c),
                _ => return None,
            }
        };

        Self::on_key(current, key).map(Event::FilterTextChanged)
    }
}
