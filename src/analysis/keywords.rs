//! Keyword extraction and skill classification

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("Invalid non-word regex"));

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "and", "the", "or", "a", "an", "in", "on", "at", "to", "for",
        "of", "with", "by", "from", "up", "about", "into", "over", "after",
    ]
    .into_iter()
    .collect()
});

static TECH_SKILLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "python", "java", "javascript", "react", "angular", "vue", "node",
        "aws", "azure", "docker", "kubernetes", "sql", "nosql", "mongodb",
        "api", "rest", "graphql", "ci/cd", "git", "agile", "scrum",
    ]
    .into_iter()
    .collect()
});

static SOFT_SKILLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "leadership", "communication", "teamwork", "collaboration", "problem-solving",
        "analytical", "creative", "initiative", "organized", "detail-oriented",
    ]
    .into_iter()
    .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeywordCategory {
    Technical,
    SoftSkill,
    Domain,
}

/// Extract keywords in order of appearance. Duplicates are kept.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .split(&lowered)
        .filter(|word| {
            word.len() > 2
                && !STOP_WORDS.contains(word)
                && !word.chars().all(|c| c.is_ascii_digit())
        })
        .map(str::to_string)
        .collect()
}

pub fn is_technical_term(word: &str) -> bool {
    TECH_SKILLS.contains(word.to_lowercase().as_str())
}

pub fn is_soft_skill(word: &str) -> bool {
    SOFT_SKILLS.contains(word.to_lowercase().as_str())
}

pub fn classify(word: &str) -> KeywordCategory {
    if is_technical_term(word) {
        KeywordCategory::Technical
    } else if is_soft_skill(word) {
        KeywordCategory::SoftSkill
    } else {
        KeywordCategory::Domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keywords_filters_short_stop_and_numeric() {
        let keywords = extract_keywords("The API and 2024 of a Kubernetes-based go stack");
        assert_eq!(keywords, vec!["api", "kubernetes", "based", "stack"]);
    }

    #[test]
    fn test_extract_keywords_keeps_duplicates() {
        let keywords = extract_keywords("Python, python; PYTHON");
        assert_eq!(keywords, vec!["python", "python", "python"]);
    }

    #[test]
    fn test_extract_keywords_empty_input() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("a an the 12345").is_empty());
    }

    #[test]
    fn test_classification() {
        assert_eq!(classify("Kubernetes"), KeywordCategory::Technical);
        assert_eq!(classify("leadership"), KeywordCategory::SoftSkill);
        assert_eq!(classify("fintech"), KeywordCategory::Domain);
        assert!(is_technical_term("sql"));
        assert!(!is_soft_skill("sql"));
    }
}
