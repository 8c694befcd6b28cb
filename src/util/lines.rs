/// Byte range of each line of `text`, excluding the terminating newline. A
/// trailing newline yields a final empty line, which is where the cursor
/// lives after pressing enter at the end of the text.
pub fn line_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (i, b) in text.bytes().enumerate() {
        if b == b'\n' {
            spans.push((start, i));
            start = i + 1;
        }
    }
    spans.push((start, text.len()));
    spans
}

/// Index of the line containing byte offset `at`. An offset equal to a
/// line's end (just before its newline) belongs to that line.
pub fn line_of(spans: &[(usize, usize)], at: usize) -> usize {
    spans
        .iter()
        .position(|&(_, end)| at <= end)
        .unwrap_or(spans.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spans_track_trailing_newline() {
        assert_eq!(line_spans("ab\ncd"), [(0, 2), (3, 5)]);
        assert_eq!(line_spans("ab\n"), [(0, 2), (3, 3)]);
        assert_eq!(line_spans(""), [(0, 0)]);
    }

    #[test]
    fn line_of_assigns_boundaries_to_the_earlier_line() {
        let spans = line_spans("ab\ncd");
        assert_eq!(line_of(&spans, 0), 0);
        assert_eq!(line_of(&spans, 2), 0);
        assert_eq!(line_of(&spans, 3), 1);
        assert_eq!(line_of(&spans, 5), 1);
    }
}
