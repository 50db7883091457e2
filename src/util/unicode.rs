use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_display_width).sum()
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
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
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
}

/// Convert byte offset to display column (terminal cells).
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    display_width(&s[..byte_offset.min(s.len())])
}

/// Word boundary to the left (grapheme-aware, whitespace-delimited).
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    if byte_offset == 0 {
        return 0;
    }
    let graphemes: Vec<(usize, &str)> = s[..byte_offset].grapheme_indices(true).collect();
    if graphemes.is_empty() {
        return 0;
    }

    let mut idx = graphemes.len() - 1;

    // Skip trailing whitespace
    while idx > 0 && is_blank(graphemes[idx].1) {
        idx -= 1;
    }

    // Skip word characters
    while idx > 0 && !is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }

    graphemes[idx].0
}

/// Word boundary to the right (grapheme-aware, whitespace-delimited).
pub fn word_boundary_right(s: &str, byte_offset: usize) -> usize {
    if byte_offset >= s.len() {
        return s.len();
    }
    let graphemes: Vec<(usize, &str)> = s[byte_offset..].grapheme_indices(true).collect();

    let mut idx = 0;

    // Skip current word
    while idx < graphemes.len() && !is_blank(graphemes[idx].1) {
        idx += 1;
    }

    // Skip whitespace
    while idx < graphemes.len() && is_blank(graphemes[idx].1) {
        idx += 1;
    }

    graphemes
        .get(idx)
        .map_or(s.len(), |(i, _)| byte_offset + i)
}

/// Text safe to draw on one terminal row: control characters (newlines,
/// tabs, escapes) become spaces. Borrows when there is nothing to replace.
pub fn single_line(s: &str) -> Cow<'_, str> {
    if s.chars().any(char::is_control) {
        Cow::Owned(
            s.chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(s)
    }
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

/// Display width of a grapheme cluster.
fn grapheme_display_width(g: &str) -> usize {
    if g == "\t" {
        return 4;
    }
    UnicodeWidthStr::width(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_replaces_control_characters() {
        assert_eq!(single_line("buy\nmilk\r\tnow\u{1b}[2J"), "buy milk  now [2J");
        assert!(matches!(single_line("plain text"), Cow::Borrowed("plain text")));
        assert_eq!(single_line(""), "");
    }

    #[test]
    fn display_width_ascii_and_wide() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width("🎉"), 2);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn display_width_combining_and_tab() {
        assert_eq!(display_width("cafe\u{0301}"), 4);
        assert_eq!(display_width("a\tb"), 6);
    }

    #[test]
    fn truncate_fits_untouched() {
        assert_eq!(truncate_to_width("milk", 4), "milk");
        assert_eq!(truncate_to_width("milk", 10), "milk");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("buy milk today", 8), "buy mil\u{2026}");
        assert_eq!(truncate_to_width("abc", 1), "\u{2026}");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn truncate_never_splits_wide_chars() {
        // 你(2) 好(2) 世(2): budget 4 fits 你 only before the ellipsis
        assert_eq!(truncate_to_width("你好世", 5), "你好\u{2026}");
        assert_eq!(truncate_to_width("你好世", 4), "你\u{2026}");
    }

    #[test]
    fn grapheme_boundaries_ascii() {
        assert_eq!(next_grapheme_boundary("abc", 0), Some(1));
        assert_eq!(next_grapheme_boundary("abc", 2), Some(3));
        assert_eq!(next_grapheme_boundary("abc", 3), None);
        assert_eq!(prev_grapheme_boundary("abc", 3), Some(2));
        assert_eq!(prev_grapheme_boundary("abc", 0), None);
    }

    #[test]
    fn grapheme_boundaries_skip_whole_clusters() {
        let s = "e\u{0301}x"; // é as e + combining accent, 3 bytes
        assert_eq!(next_grapheme_boundary(s, 0), Some(3));
        assert_eq!(prev_grapheme_boundary(s, 3), Some(0));

        let emoji = "🎉a";
        assert_eq!(next_grapheme_boundary(emoji, 0), Some(4));
        assert_eq!(prev_grapheme_boundary(emoji, 4), Some(0));
    }

    #[test]
    fn display_col_counts_cells() {
        assert_eq!(byte_offset_to_display_col("abc", 2), 2);
        assert_eq!(byte_offset_to_display_col("你好", 3), 2);
        assert_eq!(byte_offset_to_display_col("abc", 99), 3);
    }

    #[test]
    fn word_boundaries() {
        let s = "water the plants";
        assert_eq!(word_boundary_left(s, s.len()), 10);
        assert_eq!(word_boundary_left(s, 10), 6);
        assert_eq!(word_boundary_left(s, 3), 0);
        assert_eq!(word_boundary_left(s, 0), 0);

        assert_eq!(word_boundary_right(s, 0), 6);
        assert_eq!(word_boundary_right(s, 6), 10);
        assert_eq!(word_boundary_right(s, 10), s.len());
    }
}
