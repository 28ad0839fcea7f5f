//! Word wrapping for the transcript.
//!
//! The transcript is wrapped here and rendered without ratatui's `Wrap`, so
//! the row count used for scrolling is exactly the number of rows drawn.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Split one line (no `\n`) into rows of at most `max_width` columns.
///
/// Breaks at whitespace where possible. Words wider than a row are broken
/// between characters. Leading indentation is kept on the first row and the
/// whitespace at a break is dropped. Always returns at least one row.
pub fn wrap_line(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || UnicodeWidthStr::width(text) <= max_width {
        return vec![text.to_string()];
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for segment in segments(text) {
        let segment_width = UnicodeWidthStr::width(segment);
        let is_space = segment.starts_with(char::is_whitespace);

        if current_width + segment_width <= max_width {
            current.push_str(segment);
            current_width += segment_width;
            continue;
        }

        if is_space {
            // Break here; the spaces themselves are not carried over.
            if !current.trim().is_empty() {
                rows.push(current.trim_end().to_string());
            }
            current.clear();
            current_width = 0;
            continue;
        }

        if !current.trim().is_empty() {
            rows.push(current.trim_end().to_string());
        }
        current.clear();
        current_width = 0;

        if segment_width <= max_width {
            current.push_str(segment);
            current_width = segment_width;
            continue;
        }

        for ch in segment.chars() {
            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
            if current_width + ch_width > max_width && current_width > 0 {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.trim().is_empty() || rows.is_empty() {
        rows.push(current.trim_end().to_string());
    }
    rows
}

/// Alternating runs of whitespace and non-whitespace.
fn segments(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let in_space = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|(_, ch)| ch.is_whitespace() != in_space)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (segment, tail) = rest.split_at(end);
        rest = tail;
        Some(segment)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(wrap_line("", 10), vec![""]);
        assert_eq!(wrap_line("  indented", 10), vec!["  indented"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(
            wrap_line("word boundary test", 8),
            vec!["word", "boundary", "test"]
        );
        assert_eq!(
            wrap_line("abcdef abcdef abcdef", 12),
            vec!["abcdef", "abcdef", "abcdef"]
        );
    }

    #[test]
    fn keeps_indentation_on_first_row() {
        assert_eq!(
            wrap_line("  - strict liability", 12),
            vec!["  - strict", "liability"]
        );
    }

    #[test]
    fn hard_breaks_words_wider_than_a_row() {
        assert_eq!(wrap_line("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn wide_characters_count_by_display_width() {
        assert_eq!(wrap_line("契約書契約書", 4), vec!["契約", "書契", "約書"]);
    }

    #[test]
    fn rows_never_exceed_width() {
        let text = "Under the doctrine of  respondeat superior, an employer is liable.";
        for width in 1..30 {
            for row in wrap_line(text, width) {
                assert!(UnicodeWidthStr::width(row.as_str()) <= width, "{row:?} > {width}");
            }
        }
    }
}
