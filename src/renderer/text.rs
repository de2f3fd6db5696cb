//! Text measurement and shaping in terminal cells.
//!
//! Widths come from `unicode-width`, so CJK and most emoji count as two
//! cells and zero-width combining marks count as none.

use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn string_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Word-wrap text to a given width.
///
/// Breaks on whitespace where possible, mid-word when a single word is
/// wider than the line. Explicit newlines are honored. Returns one
/// entry per line; empty input yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0;

        for word in raw_line.split(' ') {
            let word_width = string_width(word);

            if current_width > 0 && current_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }

            if word_width <= width {
                current.push_str(word);
                current_width += word_width;
            } else {
                // Word wider than the line: hard-break it
                for c in word.chars() {
                    let w = string_width(&c.to_string());
                    if current_width + w > width && current_width > 0 {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += w;
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// Truncate text to fit within a given width.
///
/// If text is longer than width, it's truncated and an ellipsis is added.
pub fn truncate_text(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    if string_width(text) <= width {
        return text.to_string();
    }

    // Need to truncate - leave room for the ellipsis
    let target = width.saturating_sub(1);
    let mut result = String::new();
    let mut current_width = 0;

    for c in text.chars() {
        let w = string_width(&c.to_string());
        if current_width + w > target {
            break;
        }
        result.push(c);
        current_width += w;
    }

    result.push('…');
    result
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn test_string_width_cjk() {
        // Fullwidth characters are two cells each
        assert_eq!(string_width("日本"), 4);
    }

    #[test]
    fn test_wrap_text_words() {
        let lines = wrap_text("check the fuel level", 10);
        assert_eq!(lines, vec!["check the", "fuel level"]);
    }

    #[test]
    fn test_wrap_text_long_word() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_newlines() {
        let lines = wrap_text("a\nb", 10);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 6), "hello…");
        assert_eq!(truncate_text("hello", 5), "hello");
        assert_eq!(truncate_text("hello", 4), "hel…");
    }
}
