//! Contact list component renderer.
//!
//! Renders the visible contacts as a two-column table with NAME and EMAIL
//! columns, highlighting the part of each name that matches the filter.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ContactRow;

use super::NAME_COLUMN_WIDTH;

/// Renders the column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_list_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{:<width$}{}", "NAME", "EMAIL", width = NAME_COLUMN_WIDTH);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at the specified row, one line per contact.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_list_rows(row: usize, rows: &[ContactRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for contact in rows {
        current_row = render_list_row(current_row, contact, theme, cols);
    }
    current_row
}

/// Renders one contact, padded to the full pane width.
///
/// ```text
/// NAME (up to 35 chars) [padding to col 37] EMAIL [padding to fill line]
/// ```
fn render_list_row(row: usize, contact: &ContactRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    print!("{}", Theme::fg(&theme.colors.text_normal));
    helpers::render_highlighted_text(
        &contact.name,
        &contact.highlight_ranges,
        theme,
        &theme.colors.text_normal,
    );

    let name_len = contact.name.chars().count();
    print!("{}", " ".repeat(NAME_COLUMN_WIDTH.saturating_sub(name_len)));

    print!("{}", Theme::fg(&theme.colors.email_fg));
    print!("{}", contact.email);

    let line_len = NAME_COLUMN_WIDTH.max(name_len) + contact.email.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
