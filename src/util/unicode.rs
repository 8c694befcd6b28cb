use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `max_cells` terminal cells, appending `…` when
/// anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for grapheme in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(grapheme);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary before `offset` (0 if already at
/// the start).
pub fn prev_boundary(s: &str, offset: usize) -> usize {
    s.grapheme_indices(true)
        .map(|(i, _)| i)
        .take_while(|&i| i < offset)
        .last()
        .unwrap_or(0)
}

/// Byte offset of the grapheme boundary after `offset` (`s.len()` if
/// already at the end).
pub fn next_boundary(s: &str, offset: usize) -> usize {
    s.grapheme_indices(true)
        .map(|(i, g)| i + g.len())
        .find(|&end| end > offset)
        .unwrap_or(s.len())
}

/// Display width of the text before byte `offset` (used to place the
/// terminal cursor on a line).
pub fn width_before(s: &str, offset: usize) -> usize {
    display_width(&s[..offset.min(s.len())])
}

/// Byte offset within `s` whose leading width is closest to (but not past)
/// `col` display cells. Lands on a grapheme boundary.
pub fn byte_at_width(s: &str, col: usize) -> usize {
    let mut width = 0;
    for (i, grapheme) in s.grapheme_indices(true) {
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > col {
            return i;
        }
        width += gw;
    }
    s.len()
}
