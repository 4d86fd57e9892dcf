//! Pattern → message rule tables

use regex::Regex;

/// A single regex heuristic that reports a fixed message when it matches
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    pub message: &'static str,
}

impl Rule {
    /// Build a rule from a pattern known at compile time
    pub fn new(name: &'static str, pattern: &str, message: &'static str) -> Self {
        let pattern = Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid regex for rule {}: {}", name, e));
        Self { name, pattern, message }
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Every rule in `rules` that matches `text`, in table order
pub fn triggered<'a>(rules: &'a [Rule], text: &'a str) -> impl Iterator<Item = &'a Rule> + 'a {
    rules.iter().filter(move |rule| rule.matches(text))
}

/// Order-preserving de-duplication of issue messages
pub fn dedup(issues: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    issues.into_iter().filter(|issue| seen.insert(issue.clone())).collect()
}
