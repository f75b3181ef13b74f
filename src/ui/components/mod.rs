//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and
//! returns the next free row, so the layout reads top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar with the match count
//! - [`search`]: Search input box, always visible
//! - [`list`]: Contact list with columns (NAME, EMAIL)
//! - [`empty`]: Message shown in place of an empty list
//! - [`footer`]: Keybinding hints and hidden row count
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Column Headers]
//! [Contact Rows | Empty State]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod list;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::{render_list_headers, render_list_rows};
use search::render_search_bar;

/// First row of the contact list: blank line, header, border, search box (3
/// lines) and column headers sit above it.
pub const LIST_START_ROW: usize = 8;

/// Width of the NAME column including the gap before EMAIL.
pub const NAME_COLUMN_WIDTH: usize = 37;

/// Row of the border drawn above the footer, which takes the row after it.
#[must_use]
pub const fn bottom_border_row(rows: usize) -> usize {
    rows.saturating_sub(2)
}

/// Number of contact rows that fit between the column headers and the
/// bottom border.
#[must_use]
pub const fn list_capacity(rows: usize) -> usize {
    bottom_border_row(rows).saturating_sub(LIST_START_ROW)
}

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full plugin layout.
///
/// The view model has already clipped its rows to [`list_capacity`], so the
/// last contact lands above [`bottom_border_row`].
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_list_headers(current_row, theme);
    debug_assert_eq!(current_row, LIST_START_ROW);

    let _current_row = match &vm.empty_state {
        Some(empty) => render_empty_state(current_row, empty, theme, cols),
        None => render_list_rows(current_row, &vm.rows, theme, cols),
    };

    let border_row = bottom_border_row(rows);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(border_row + 1, &vm.footer, theme, cols);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipped_list_never_reaches_bottom_border() {
        for rows in 0..60 {
            let capacity = list_capacity(rows);
            if capacity > 0 {
                let last_contact_row = LIST_START_ROW + capacity - 1;
                assert!(
                    last_contact_row < bottom_border_row(rows),
                    "rows={rows} capacity={capacity} last={last_contact_row}"
                );
            }
        }
    }

    #[test]
    fn list_capacity_fills_space_above_border() {
        assert_eq!(list_capacity(14), 4);
        assert_eq!(list_capacity(10), 0);
        assert_eq!(list_capacity(11), 1);
        assert_eq!(list_capacity(0), 0);
    }
}
