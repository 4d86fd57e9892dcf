//! Line-level heuristics shared by the analyzers: bullet detection and marker handling

use regex::Regex;
use std::sync::LazyLock;

static GLYPH_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[•\-\*]").expect("Invalid glyph regex"));
static INDENTED_GLYPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+[•\-\*]").expect("Invalid indented glyph regex"));
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\d+\.").expect("Invalid numbered regex"));
static DEEP_INDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s{4,}").expect("Invalid indent regex"));
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.?\s+").expect("Invalid numbered item regex"));
static LETTERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*[a-z]\.?\s+").expect("Invalid lettered item regex"));
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([•\-\*\d][\.:]?\s*)").expect("Invalid marker regex"));
static LEADING_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*").expect("Invalid whitespace regex"));
static LIST_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s•\-\*\d]+\.?\s*").expect("Invalid list prefix regex"));
static GLYPH_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[•\-\*\s]+").expect("Invalid glyph prefix regex"));

/// Bullet-style line for layout checks: glyph, number, or a deep indent
pub fn is_layout_bullet(line: &str) -> bool {
    let trimmed = line.trim();
    GLYPH_START.is_match(trimmed)
        || INDENTED_GLYPH.is_match(line)
        || NUMBERED.is_match(trimmed)
        || DEEP_INDENT.is_match(line)
}

/// List item for content checks: glyph, numbered, or lettered entry
pub fn is_list_item(line: &str) -> bool {
    let trimmed = line.trim();
    GLYPH_START.is_match(trimmed)
        || INDENTED_GLYPH.is_match(line)
        || NUMBERED_ITEM.is_match(trimmed)
        || LETTERED_ITEM.is_match(trimmed)
}

/// Leading marker token (glyph or digit, optional separator, trailing whitespace)
pub fn marker(line: &str) -> &str {
    MARKER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}

/// Width of the leading whitespace in characters
pub fn indentation(line: &str) -> usize {
    LEADING_WS.find(line).map_or(0, |m| m.as_str().chars().count())
}

/// Strip bullets, numbers and spacing from the front of a list item
pub fn strip_list_prefix(line: &str) -> &str {
    match LIST_PREFIX.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line.trim(),
    }
}

/// Strip bullet glyphs and spacing from the front of a line
pub fn strip_glyphs(line: &str) -> &str {
    match GLYPH_PREFIX.find(line) {
        Some(m) => line[m.end()..].trim(),
        None => line.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_bullets() {
        assert!(is_layout_bullet("• Led the team"));
        assert!(is_layout_bullet("  - Built a thing"));
        assert!(is_layout_bullet("3. Third item"));
        assert!(is_layout_bullet("    Deeply indented text"));
        assert!(!is_layout_bullet("Acme Corp, 2019"));
        assert!(!is_layout_bullet("  Lightly indented"));
    }

    #[test]
    fn test_list_items() {
        assert!(is_list_item("* Shipped"));
        assert!(is_list_item("12 Features"));
        assert!(is_list_item("b. Second point"));
        assert!(is_list_item("I led the team"));
        assert!(!is_list_item("Led the team"));
        assert!(!is_list_item("    Deeply indented text"));
    }

    #[test]
    fn test_marker_extraction() {
        assert_eq!(marker("• Led"), "• ");
        assert_eq!(marker("  - Led"), "- ");
        assert_eq!(marker("1. Led"), "1. ");
        assert_eq!(marker("2: Led"), "2: ");
        assert_eq!(marker("    Led"), "");
    }

    #[test]
    fn test_indentation() {
        assert_eq!(indentation("• a"), 0);
        assert_eq!(indentation("    • a"), 4);
        assert_eq!(indentation("\t- a"), 1);
    }

    #[test]
    fn test_prefix_stripping() {
        assert_eq!(strip_list_prefix("  • Led a team"), "Led a team");
        assert_eq!(strip_list_prefix("10. Reduced costs"), "Reduced costs");
        assert_eq!(strip_list_prefix("- 40% faster builds"), "% faster builds");
        assert_eq!(strip_glyphs(" - * increased sales."), "increased sales.");
        assert_eq!(strip_glyphs("Plain line"), "Plain line");
    }
}
