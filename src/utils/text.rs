// src/utils/text.rs

/// Collapses every run of whitespace (newlines and tabs included) into a single
/// space and trims both ends, so regexes see one stable line of text.
///
/// The ASCII separators `\x1c`..=`\x1f` count as whitespace too.
pub fn clean_text(text: &str) -> String {
    text.split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Returns the first `max_chars` characters of `text` without splitting a code point.
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        let raw = "  Jane   Doe\n\n\tSenior Engineer\r\n  Python  ";
        assert_eq!(clean_text(raw), "Jane Doe Senior Engineer Python");
    }

    #[test]
    fn test_clean_text_empty_and_blank() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \n\t "), "");
    }

    #[test]
    fn test_clean_text_unicode_whitespace() {
        // NBSP and ideographic space are whitespace for split_whitespace
        let raw = "Jos\u{e9}\u{a0}Garc\u{ed}a\u{3000}SQL";
        assert_eq!(clean_text(raw), "Jos\u{e9} Garc\u{ed}a SQL");
    }

    #[test]
    fn test_clean_text_ascii_separators() {
        let raw = "Jane\u{1c}Doe\u{1d}\u{1e} Python\u{1f}";
        assert_eq!(clean_text(raw), "Jane Doe Python");
        assert_eq!(clean_text("\u{1c}\u{1f}"), "");
    }

    #[test]
    fn test_char_prefix_respects_code_points() {
        let text = "\u{e9}t\u{e9} r\u{e9}sum\u{e9}";
        assert_eq!(char_prefix(text, 3), "\u{e9}t\u{e9}");
        assert_eq!(char_prefix(text, 100), text);
        assert_eq!(char_prefix("", 5), "");
    }
}
