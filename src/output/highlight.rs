//! Map fragments of resume text to the issue they most likely illustrate.
//!
//! This is a display heuristic only: a fragment is tied to an issue when they
//! share a word, or when a longer fragment word and an issue word contain one
//! another. The first category with a match wins.

use crate::analysis::report::{AnalysisReport, IssueCategory};
use serde::{Deserialize, Serialize};

const CATEGORY_ORDER: [IssueCategory; 3] = [
    IssueCategory::Formatting,
    IssueCategory::Clarity,
    IssueCategory::Grammar,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub category: IssueCategory,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedLine {
    /// 1-based line number in the resume text
    pub line_number: usize,
    pub text: String,
    pub highlight: Highlight,
}

/// Positive notes added to an all-clear report are not issues
fn is_positive_note(message: &str) -> bool {
    message.starts_with('✓')
}

fn words_overlap(fragment_words: &[String], issue: &str) -> bool {
    let issue_lower = issue.to_lowercase();
    let issue_words: Vec<&str> = issue_lower.split_whitespace().collect();

    fragment_words.iter().any(|word| {
        issue_words.iter().any(|issue_word| {
            word == issue_word
                || (word.chars().count() > 4 && (word.contains(issue_word) || issue_word.contains(word.as_str())))
        })
    })
}

/// The issue to show for a text fragment, if any
pub fn issue_for_text(fragment: &str, report: &AnalysisReport) -> Option<Highlight> {
    let trimmed = fragment.trim();
    let fragment_words: Vec<String> = trimmed.to_lowercase().split_whitespace().map(str::to_string).collect();

    CATEGORY_ORDER.iter().find_map(|&category| {
        let mut issues = report
            .issues(category)
            .iter()
            .filter(|issue| !is_positive_note(issue));

        let bullet_issue = if category == IssueCategory::Formatting
            && (trimmed.starts_with('•') || trimmed.starts_with('-'))
        {
            issues.clone().find(|issue| issue.to_lowercase().contains("bullet point"))
        } else {
            None
        };

        bullet_issue
            .or_else(|| issues.find(|issue| words_overlap(&fragment_words, issue)))
            .map(|message| Highlight {
                category,
                message: message.clone(),
            })
    })
}

/// Highlight every non-blank resume line that maps to an issue
pub fn annotate_lines(text: &str, report: &AnalysisReport) -> Vec<AnnotatedLine> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| {
            issue_for_text(line, report).map(|highlight| AnnotatedLine {
                line_number: idx + 1,
                text: line.to_string(),
                highlight,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> AnalysisReport {
        AnalysisReport::new(
            vec!["Inconsistent bullet point formatting - use the same style throughout".to_string()],
            vec!["Add specific metrics or quantifiable achievements to demonstrate impact".to_string()],
            vec!["Review usage of commonly confused words".to_string()],
            None,
        )
    }

    #[test]
    fn test_bullet_lines_map_to_bullet_issue() {
        let hit = issue_for_text("• Shipped a thing", &report()).unwrap();
        assert_eq!(hit.category, IssueCategory::Formatting);
        assert!(hit.message.contains("bullet point"));
    }

    #[test]
    fn test_word_overlap_across_categories() {
        let hit = issue_for_text("Notable achievements", &report()).unwrap();
        assert_eq!(hit.category, IssueCategory::Clarity);

        let hit = issue_for_text("Usage notes", &report()).unwrap();
        assert_eq!(hit.category, IssueCategory::Grammar);
    }

    #[test]
    fn test_short_words_need_exact_match() {
        assert!(issue_for_text("Zzz qq", &report()).is_none());
        assert!(issue_for_text("", &report()).is_none());
    }

    #[test]
    fn test_positive_notes_are_not_highlighted() {
        let clear = AnalysisReport::default().finalize(70);
        assert!(issue_for_text("Resume formatting", &clear).is_none());
    }

    #[test]
    fn test_annotate_lines_numbers_from_one() {
        let text = "Jane Roe\n\n• Led the launch\nZzz";
        let lines = annotate_lines(text, &report());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line_number, 3);
        assert_eq!(lines[0].highlight.category, IssueCategory::Formatting);
    }
}
