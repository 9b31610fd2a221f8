//! Output serializers for the character cell stream.
//!
//! The pipeline produces one `(glyph, source color)` cell per grid
//! position; the serializers here turn that stream into plain text, an
//! inline-colored HTML fragment, or a rasterized PNG.

mod html;
mod png;

pub use html::render_html;
pub use png::{render_to_png, PngOptions};

use crate::ascii::Cell;

/// Serialize cells to plain text: rows joined with `\n`.
///
/// Every row is exactly `width` characters; nothing is trimmed, so runs of
/// trailing spaces survive. The output always has `cells.len() / width`
/// lines.
pub fn render_text(cells: &[Cell], width: usize) -> String {
    if width == 0 || cells.is_empty() {
        return String::new();
    }

    let height = cells.len() / width;
    let mut text = String::with_capacity((width + 1) * height);

    for (i, cell) in cells.iter().enumerate() {
        if i > 0 && i % width == 0 {
            text.push('\n');
        }
        text.push(cell.glyph);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(glyph: char) -> Cell {
        Cell {
            glyph,
            rgb: [0, 0, 0],
        }
    }

    #[test]
    fn test_rows_joined_with_newlines() {
        let cells: Vec<Cell> = "abcdef".chars().map(cell).collect();
        assert_eq!(render_text(&cells, 3), "abc\ndef");
    }

    #[test]
    fn test_trailing_spaces_preserved() {
        let cells = vec![cell('@'), cell(' '), cell(' '), cell(' ')];
        let text = render_text(&cells, 2);
        assert_eq!(text, "@ \n  ");
        for line in text.lines() {
            assert_eq!(line.chars().count(), 2);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_text(&[], 10), "");
        assert_eq!(render_text(&[cell('x')], 0), "");
    }
}
