//! Text helpers shared by the widgets

use ratatui::{style::Style, text::Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::search::match_ranges;

/// Truncate string to fit within max_width, adding ellipsis if needed
pub fn truncate(s: &str, max_width: usize) -> String {
    let width = s.width();
    if width <= max_width {
        s.to_string()
    } else if max_width == 0 {
        String::new()
    } else if max_width == 1 {
        "…".to_string()
    } else {
        let mut result = String::new();
        let mut current_width = 0;

        for c in s.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width + char_width + 1 > max_width {
                result.push('…');
                break;
            }
            result.push(c);
            current_width += char_width;
        }

        result
    }
}

/// Split `text` into spans, styling every occurrence of `query` with `hit`
pub fn highlight_spans<'a>(text: &'a str, query: &str, base: Style, hit: Style) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for range in match_ranges(text, query) {
        if range.start > cursor {
            spans.push(Span::styled(&text[cursor..range.start], base));
        }
        spans.push(Span::styled(&text[range.clone()], hit));
        cursor = range.end;
    }
    if cursor < text.len() || spans.is_empty() {
        spans.push(Span::styled(&text[cursor..], base));
    }
    spans
}

/// Greedy word wrap by display width; words wider than a line are truncated
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.width()
        } else {
            line.width() + 1 + word.width()
        };

        if needed <= width {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        } else {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            line = truncate(word, width);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w…");
        assert_eq!(truncate("hi", 2), "hi");
        assert_eq!(truncate("hello", 1), "…");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_highlight_spans() {
        let base = Style::default();
        let hit = Style::default().add_modifier(Modifier::BOLD);

        let spans = highlight_spans("Helm charts and helm", "HELM", base, hit);
        let parts: Vec<_> = spans.iter().map(|s| (s.content.as_ref(), s.style == hit)).collect();
        assert_eq!(
            parts,
            vec![("Helm", true), (" charts and ", false), ("helm", true)]
        );

        let spans = highlight_spans("plain", "", base, hit);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "plain");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(
            wrap("Core Linux and system administration expertise.", 16),
            vec!["Core Linux and", "system", "administration", "expertise."]
        );
        assert!(wrap("", 10).is_empty());
        assert_eq!(wrap("supercalifragilistic", 6), vec!["super…"]);
    }
}
