//! Grammar heuristics: sentence endings, capitalization, mechanical mistakes

use crate::analysis::bullets;
use crate::analysis::rules::{self, Rule};
use crate::analysis::sections::SectionMap;
use crate::config::AnalysisConfig;
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

pub const INCONSISTENT_ENDINGS: &str =
    "Inconsistent sentence endings - some lines end with periods while others don't";
pub const USE_PERIODS: &str = "Use consistent punctuation (periods recommended) for sentence endings";
pub const CAPITALIZE_SENTENCES: &str = "Start sentences with capital letters";
pub const MULTIPLE_SPACES: &str = "Multiple consecutive spaces detected";
pub const REPEATED_PUNCTUATION: &str = "Multiple consecutive punctuation marks detected";
pub const CONFUSED_WORDS: &str = "Review usage of commonly confused words";
pub const CONJUNCTION_PUNCTUATION: &str = "Incorrect punctuation with conjunctions";

static TITLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+\s+[A-Z]").expect("Invalid title regex"));
static TERMINAL_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]$").expect("Invalid terminal punctuation regex"));
static CAPITALIZED_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[A-Z0-9"]"#).expect("Invalid capitalized start regex"));
static LOWERCASE_BRANDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:iOS|iPhone|iPad|macOS|e-commerce|m-commerce)").expect("Invalid brand regex")
});

/// Scans over the whole resume text; each contributes its message once
static MECHANICAL_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new("double-space", r"\s\s+", MULTIPLE_SPACES),
        Rule::new("repeated-punctuation", r"[,.]{2,}", REPEATED_PUNCTUATION),
        Rule::new(
            "confused-words",
            r"(?i)\b(its|it's|their|there|they're|your|you're|whose|who's)\b",
            CONFUSED_WORDS,
        ),
        Rule::new(
            "conjunction-punctuation",
            r"(?i)\b(and|but|or|nor|for|yet|so)\s*[,;]",
            CONJUNCTION_PUNCTUATION,
        ),
    ]
});

pub fn check_grammar(text: &str, sections: &SectionMap, config: &AnalysisConfig) -> Vec<String> {
    let content_lines: Vec<&str> = sections
        .content_sections()
        .flat_map(|section| section.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    debug!("Grammar analysis over {} content lines", content_lines.len());

    let mut issues = Vec::new();
    issues.extend(check_sentence_endings(&content_lines, config));
    issues.extend(check_capitalization(&content_lines));
    issues.extend(rules::triggered(&MECHANICAL_RULES, text).map(|rule| {
        trace!("Grammar rule '{}' matched", rule.name);
        rule.message.to_string()
    }));

    rules::dedup(issues)
}

/// A sentence line is long, has no colon, and does not look like a job title
fn is_sentence_line(line: &str, config: &AnalysisConfig) -> bool {
    line.chars().count() > config.sentence_min_length && !line.contains(':') && !TITLE_LINE.is_match(line)
}

fn check_sentence_endings(lines: &[&str], config: &AnalysisConfig) -> Vec<String> {
    let sentences: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| is_sentence_line(line, config))
        .collect();

    let mut issues = Vec::new();
    let with_period = sentences.iter().filter(|line| line.ends_with('.')).count();
    if with_period > 0 && with_period < sentences.len() {
        issues.push(INCONSISTENT_ENDINGS.to_string());
    }
    if sentences.iter().any(|line| line.ends_with(['!', '?', ';'])) {
        issues.push(USE_PERIODS.to_string());
    }
    issues
}

fn check_capitalization(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|line| bullets::strip_glyphs(line))
        .filter(|line| {
            !line.is_empty()
                && TERMINAL_PUNCTUATION.is_match(line)
                && !CAPITALIZED_START.is_match(line)
                && !LOWERCASE_BRANDS.is_match(line)
        })
        .map(|_| CAPITALIZE_SENTENCES.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<String> {
        check_grammar(text, &SectionMap::segment(text), &AnalysisConfig::default())
    }

    #[test]
    fn test_confused_words_always_flagged() {
        assert!(run("It's a fine resume").contains(&CONFUSED_WORDS.to_string()));
        assert!(run("The team and its goals").contains(&CONFUSED_WORDS.to_string()));
        assert!(!run("The team and the goals").contains(&CONFUSED_WORDS.to_string()));
    }

    #[test]
    fn test_mixed_sentence_endings() {
        let text = "EXPERIENCE\n• Shipped the payments platform rewrite.\n• Migrated every service to containers\n";
        let issues = run(text);
        assert!(issues.contains(&INCONSISTENT_ENDINGS.to_string()));
        assert!(!issues.contains(&USE_PERIODS.to_string()));
    }

    #[test]
    fn test_exclamation_endings() {
        let text = "EXPERIENCE\n• Shipped the payments platform rewrite!\n";
        let issues = run(text);
        assert!(issues.contains(&USE_PERIODS.to_string()));
        assert!(!issues.contains(&INCONSISTENT_ENDINGS.to_string()));
    }

    #[test]
    fn test_titles_and_labels_are_not_sentences() {
        let text = "EXPERIENCE\nSenior Developer at Acme Corporation.\nTools used: Rust and Go daily\n";
        let issues = run(text);
        assert!(!issues.contains(&INCONSISTENT_ENDINGS.to_string()));
    }

    #[test]
    fn test_capitalization() {
        let issues = run("PROJECTS\n• shipped a compiler.\n");
        assert!(issues.contains(&CAPITALIZE_SENTENCES.to_string()));

        let issues = run("PROJECTS\n• iPhone app with offline sync.\n• \"Quoted\" launch.\n");
        assert!(!issues.contains(&CAPITALIZE_SENTENCES.to_string()));
    }

    #[test]
    fn test_mechanical_rules() {
        let issues = run("Jane  Roe\nDone.. mostly\nRust and, Go");
        assert!(issues.contains(&MULTIPLE_SPACES.to_string()));
        assert!(issues.contains(&REPEATED_PUNCTUATION.to_string()));
        assert!(issues.contains(&CONJUNCTION_PUNCTUATION.to_string()));
    }

    #[test]
    fn test_clean_text_has_no_issues() {
        let text = "Jane Roe\nEXPERIENCE\n• Built a compiler in Rust.\n• Reduced build times by 40%.\n";
        assert!(run(text).is_empty(), "unexpected issues: {:?}", run(text));
    }

    #[test]
    fn test_results_are_deduplicated() {
        let issues = run("PROJECTS\n• shipped a compiler.\n• wrote the docs.\n");
        let count = issues.iter().filter(|i| *i == CAPITALIZE_SENTENCES).count();
        assert_eq!(count, 1);
    }
}
