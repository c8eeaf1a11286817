//! Display-width text helpers.
//!
//! Everything here measures in terminal columns via `unicode-width`, so
//! padding, horizontal scrolling and wrapping line up with what the terminal
//! actually paints.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Right-pad `s` with spaces to `width` columns. Strings already at least
/// that wide are returned unchanged.
pub fn pad(s: &str, width: usize) -> String {
    let w = display_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}

/// The part of `s` covering columns `start..start + width`.
///
/// A wide character straddling either edge is left out, so the result is
/// never wider than `width`.
pub fn slice_columns(s: &str, start: usize, width: usize) -> String {
    let end = start.saturating_add(width);
    let mut col = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = char_width(c);
        if col >= start && col + w <= end {
            out.push(c);
        }
        col += w;
        if col >= end {
            break;
        }
    }
    out
}

/// Truncate `s` to at most `width` columns.
pub fn truncate(s: &str, width: usize) -> String {
    slice_columns(s, 0, width)
}

/// Word-wrap one line of text to `width` columns.
///
/// Breaks at spaces; a word longer than `width` is split hard. An empty
/// input yields a single empty line so blank lines in panel text survive.
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0;

    for word in line.split(' ') {
        let mut word_w = display_width(word);
        let gap = usize::from(!current.is_empty());
        if current_w + gap + word_w <= width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_w += gap + word_w;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        let mut rest = word.to_string();
        while word_w > width {
            let head = slice_columns(&rest, 0, width);
            let head_len = head.len();
            if head_len == 0 {
                // A single character wider than the line; drop it.
                rest = rest.chars().skip(1).collect();
                word_w = display_width(&rest);
                continue;
            }
            lines.push(head);
            rest = rest[head_len..].to_string();
            word_w = display_width(&rest);
        }
        current = rest;
        current_w = word_w;
    }
    lines.push(current);
    lines
}

/// Column at which `s` starts when centered on a `cols`-wide line.
pub fn center_column(s: &str, cols: u16) -> u16 {
    let w = display_width(s);
    (usize::from(cols).saturating_sub(w) / 2) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcd", 2), "abcd");
        assert_eq!(pad("", 3), "   ");
    }

    #[test]
    fn pad_counts_wide_characters() {
        assert_eq!(pad("日", 3), "日 ");
    }

    #[test]
    fn slice_columns_windows_ascii() {
        assert_eq!(slice_columns("abcdef", 2, 3), "cde");
        assert_eq!(slice_columns("abc", 2, 10), "c");
        assert_eq!(slice_columns("abc", 5, 2), "");
    }

    #[test]
    fn slice_columns_skips_split_wide_chars() {
        // "日本" occupies columns 0-1 and 2-3.
        assert_eq!(slice_columns("日本", 1, 3), "本");
        assert_eq!(slice_columns("日本", 0, 3), "日");
    }

    #[test]
    fn wrap_breaks_at_spaces() {
        assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("go abcdefgh", 4), vec!["go", "abcd", "efgh"]);
    }

    #[test]
    fn wrap_keeps_blank_line() {
        assert_eq!(wrap("", 5), vec![""]);
        assert!(wrap("text", 0).is_empty());
    }

    #[test]
    fn wrap_never_exceeds_width() {
        let text = "Use arrow keys to navigate and press ENTER to set up mounting";
        for width in 1..20 {
            for line in wrap(text, width) {
                assert!(display_width(&line) <= width, "{line:?} > {width}");
            }
        }
    }

    #[test]
    fn center_column_halves_the_slack() {
        assert_eq!(center_column("abcd", 10), 3);
        assert_eq!(center_column("too long for it", 4), 0);
    }
}
