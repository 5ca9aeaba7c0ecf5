//! Greedy word wrapping against measured text widths

use super::metrics::text_width;
use super::types::TextStyle;

/// Break `text` into lines no wider than `max_width` millimetres
///
/// Explicit newlines always start a new line. A single word wider than the
/// limit is split between characters. Empty input yields no lines.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if text_width(&candidate, style) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if text_width(word, style) <= max_width {
                current = word.to_string();
            } else {
                let mut pieces = break_word(word, style, max_width);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

fn break_word(word: &str, style: &TextStyle, max_width: f64) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for ch in word.chars() {
        piece.push(ch);
        // Always keep at least one char per piece so narrow columns terminate
        if text_width(&piece, style) > max_width && piece.chars().count() > 1 {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(ch);
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::metrics::text_width;
    use crate::layout::types::Color;

    fn style() -> TextStyle {
        TextStyle::regular(10.0, Color::BLACK)
    }

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(wrap_text("hello world", &style(), 170.0), vec!["hello world"]);
    }

    #[test]
    fn test_wraps_at_width() {
        let text = "the quick brown fox jumps over the lazy dog again and again";
        let lines = wrap_text(text, &style(), 40.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, &style()) <= 40.0, "line too wide: {}", line);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_explicit_newlines() {
        assert_eq!(wrap_text("one\ntwo", &style(), 170.0), vec!["one", "two"]);
    }

    #[test]
    fn test_long_word_is_broken() {
        let word = "x".repeat(200);
        let lines = wrap_text(&word, &style(), 20.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
    }

    #[test]
    fn test_empty_input() {
        assert!(wrap_text("", &style(), 100.0).is_empty());
        assert!(wrap_text("   ", &style(), 100.0).is_empty());
    }
}
