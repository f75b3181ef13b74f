//! Shared rendering utilities and helpers.
//!
//! Cursor positioning, centering, and match highlighting used by the
//! components. All text measurements are in characters, not bytes.
//!
//! # Example
//!
//! ```rust
//! use zontacts::ui::helpers::render_highlighted_text;
//! use zontacts::ui::Theme;
//!
//! let theme = Theme::default();
//! // Highlights "Smith"
//! render_highlighted_text("Alice Smith", &[(6, 11)], &theme, &theme.colors.text_normal);
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
///
/// # Parameters
///
/// * `row` - Target row (1-indexed)
/// * `col` - Target column (1-indexed, typically 1 for start of line)
///
/// # Example
///
/// ```rust
/// use zontacts::ui::helpers::position_cursor;
///
/// position_cursor(5, 1); // Move to start of row 5
/// print!("Content at row 5");
/// ```
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for filter matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Normal sections are printed in whatever color is active;
/// after each highlighted section `resume_fg` is restored.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)` (inclusive start, exclusive end)
/// * `theme` - Active color theme for highlight colors
/// * `resume_fg` - Hex color re-applied after each highlight
///
/// Ranges reaching past the end of `text` are clipped.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, resume_fg: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len()).max(start);

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(resume_fg));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Pads `text` on both sides to center it in `cols` columns.
///
/// Width is measured in characters. Text wider than `cols` is cut.
#[must_use]
pub fn center(text: &str, cols: usize) -> String {
    let shown: String = text.chars().take(cols).collect();
    let len = shown.chars().count();
    let left = (cols - len) / 2;
    format!("{}{shown}{}", " ".repeat(left), " ".repeat(cols - len - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_pads_both_sides() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
    }

    #[test]
    fn center_counts_characters_not_bytes() {
        assert_eq!(center("Zoë", 5), " Zoë ");
    }

    #[test]
    fn center_cuts_overlong_text() {
        assert_eq!(center("abcdef", 3), "abc");
    }
}
