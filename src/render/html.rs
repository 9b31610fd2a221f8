//! Color HTML serializer.

use crate::ascii::Cell;

/// Serialize cells to an HTML fragment with per-character source colors.
///
/// Each glyph is wrapped in a span colored with the cell's original
/// (pre-grayscale) RGB. `<`, `>`, and `&` are escaped; spaces become
/// `&nbsp;` so runs of blank cells don't collapse. The fragment is wrapped
/// in a `<pre>` with a black background, monospace font, line-height 1,
/// and a fixed small font size.
pub fn render_html(cells: &[Cell], width: usize) -> String {
    let mut html = String::with_capacity(cells.len() * 40);
    html.push_str(
        "<pre style=\"background:#000;font-family:monospace;font-size:8px;line-height:1;margin:0\">",
    );

    for (i, cell) in cells.iter().enumerate() {
        if i > 0 && width > 0 && i % width == 0 {
            html.push('\n');
        }

        let [r, g, b] = cell.rgb;
        html.push_str(&format!("<span style=\"color:rgb({},{},{})\">", r, g, b));
        match cell.glyph {
            '<' => html.push_str("&lt;"),
            '>' => html.push_str("&gt;"),
            '&' => html.push_str("&amp;"),
            ' ' => html.push_str("&nbsp;"),
            c => html.push(c),
        }
        html.push_str("</span>");
    }

    html.push_str("</pre>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(glyph: char, rgb: [u8; 3]) -> Cell {
        Cell { glyph, rgb }
    }

    #[test]
    fn test_span_per_cell_with_source_color() {
        let html = render_html(&[cell('@', [200, 100, 50])], 1);
        assert!(html.contains("<span style=\"color:rgb(200,100,50)\">@</span>"));
        assert!(html.starts_with("<pre"));
        assert!(html.ends_with("</pre>"));
    }

    #[test]
    fn test_markup_characters_escaped() {
        let cells = vec![
            cell('<', [0, 0, 0]),
            cell('>', [0, 0, 0]),
            cell('&', [0, 0, 0]),
            cell(' ', [0, 0, 0]),
        ];
        let html = render_html(&cells, 4);
        assert!(html.contains("&lt;"));
        assert!(html.contains("&gt;"));
        assert!(html.contains("&amp;"));
        assert!(html.contains("&nbsp;"));
        // No raw angle brackets outside tags
        assert!(!html.contains(">&</span>") || html.contains("&amp;"));
    }

    #[test]
    fn test_rows_separated_by_newline() {
        let cells = vec![
            cell('a', [0, 0, 0]),
            cell('b', [0, 0, 0]),
            cell('c', [0, 0, 0]),
            cell('d', [0, 0, 0]),
        ];
        let html = render_html(&cells, 2);
        assert_eq!(html.matches('\n').count(), 1);
    }

    #[test]
    fn test_pre_styling() {
        let html = render_html(&[cell('x', [1, 2, 3])], 1);
        assert!(html.contains("background:#000"));
        assert!(html.contains("font-family:monospace"));
        assert!(html.contains("line-height:1"));
    }
}
