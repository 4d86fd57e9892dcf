//! Analysis report and the suggestion pass that finalizes it

use crate::analysis::job_fit::JobFit;
use serde::{Deserialize, Serialize};

pub const FIX_FORMATTING: &str = "Consider fixing formatting issues for better readability";
pub const IMPROVE_CLARITY: &str = "Improve clarity by using more specific and action-oriented language";
pub const FIX_GRAMMAR: &str = "Fix grammar issues to maintain professionalism";
pub const DETAILED_JOB_DESCRIPTION: &str =
    "Provide a more detailed job description to assess keyword fit";

pub const FORMATTING_OK: &str = "✓ Resume formatting is excellent";
pub const CLARITY_OK: &str = "✓ Content is clear and well-structured";
pub const GRAMMAR_OK: &str = "✓ No grammar issues detected";
pub const OVERALL_OK: &str = "Your resume is well-formatted and professionally written";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Formatting,
    Clarity,
    Grammar,
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueCategory::Formatting => write!(f, "Formatting"),
            IssueCategory::Clarity => write!(f, "Clarity"),
            IssueCategory::Grammar => write!(f, "Grammar"),
        }
    }
}

/// Result of one analysis run, owned by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub formatting: Vec<String>,
    pub clarity: Vec<String>,
    pub grammar: Vec<String>,
    pub job_fit: Option<JobFit>,
    pub suggestions: Vec<String>,
}

impl AnalysisReport {
    /// Raw analyzer output with no suggestions yet
    pub fn new(
        formatting: Vec<String>,
        clarity: Vec<String>,
        grammar: Vec<String>,
        job_fit: Option<JobFit>,
    ) -> Self {
        Self {
            formatting,
            clarity,
            grammar,
            job_fit,
            suggestions: Vec::new(),
        }
    }

    pub fn issues(&self, category: IssueCategory) -> &[String] {
        match category {
            IssueCategory::Formatting => &self.formatting,
            IssueCategory::Clarity => &self.clarity,
            IssueCategory::Grammar => &self.grammar,
        }
    }

    pub fn issue_count(&self) -> usize {
        self.formatting.len() + self.clarity.len() + self.grammar.len()
    }

    /// Derive suggestions from the issue lists.
    ///
    /// When nothing needs attention, each issue list gets a positive note and
    /// the suggestions get an overall one.
    pub fn finalize(self, job_fit_threshold: u8) -> Self {
        let mut suggestions = Vec::new();

        if !self.formatting.is_empty() {
            suggestions.push(FIX_FORMATTING.to_string());
        }
        if !self.clarity.is_empty() {
            suggestions.push(IMPROVE_CLARITY.to_string());
        }
        if !self.grammar.is_empty() {
            suggestions.push(FIX_GRAMMAR.to_string());
        }

        let weak_fit = self.job_fit.as_ref().filter(|fit| fit.score < job_fit_threshold);
        if let Some(fit) = weak_fit {
            if fit.is_empty_job() {
                suggestions.push(DETAILED_JOB_DESCRIPTION.to_string());
            } else {
                suggestions.push(format!(
                    "Consider adding keywords related to: {}",
                    fit.missing_keywords.join(", ")
                ));
            }
        }

        if self.issue_count() == 0 && weak_fit.is_none() {
            return Self {
                formatting: vec![FORMATTING_OK.to_string()],
                clarity: vec![CLARITY_OK.to_string()],
                grammar: vec![GRAMMAR_OK.to_string()],
                suggestions: vec![OVERALL_OK.to_string()],
                ..self
            };
        }

        Self { suggestions, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(score: u8, missing: &[&str]) -> JobFit {
        JobFit {
            score,
            missing_keywords: missing.iter().map(|s| s.to_string()).collect(),
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn test_suggestion_per_category() {
        let report = AnalysisReport::new(vec!["f".into()], vec![], vec!["g".into()], None).finalize(70);
        assert_eq!(report.suggestions, vec![FIX_FORMATTING, FIX_GRAMMAR]);
        assert_eq!(report.formatting, vec!["f"]);
    }

    #[test]
    fn test_low_job_fit_names_missing_keywords() {
        let report = AnalysisReport::new(vec![], vec![], vec![], Some(fit(40, &["kotlin", "aws"]))).finalize(70);
        assert_eq!(report.suggestions, vec!["Consider adding keywords related to: kotlin, aws"]);
        assert!(report.formatting.is_empty());
    }

    #[test]
    fn test_all_clear_injects_positive_messages() {
        let report = AnalysisReport::new(vec![], vec![], vec![], Some(fit(85, &["go"]))).finalize(70);
        assert_eq!(report.formatting, vec![FORMATTING_OK]);
        assert_eq!(report.clarity, vec![CLARITY_OK]);
        assert_eq!(report.grammar, vec![GRAMMAR_OK]);
        assert_eq!(report.suggestions, vec![OVERALL_OK]);
        assert_eq!(report.job_fit.unwrap().score, 85);

        let no_job = AnalysisReport::default().finalize(70);
        assert_eq!(no_job.suggestions, vec![OVERALL_OK]);
    }

    #[test]
    fn test_threshold_boundary() {
        let at = AnalysisReport::new(vec![], vec![], vec![], Some(fit(70, &["x"]))).finalize(70);
        assert_eq!(at.suggestions, vec![OVERALL_OK]);
        let below = AnalysisReport::new(vec![], vec![], vec![], Some(fit(69, &["x"]))).finalize(70);
        assert_eq!(below.suggestions, vec!["Consider adding keywords related to: x"]);
    }

    #[test]
    fn test_empty_job_description_suggestion() {
        let report = AnalysisReport::new(vec![], vec![], vec![], Some(fit(0, &[]))).finalize(70);
        assert_eq!(report.suggestions, vec![DETAILED_JOB_DESCRIPTION]);
    }

    #[test]
    fn test_serialized_shape() {
        let report = AnalysisReport::new(vec![], vec!["c".into()], vec![], Some(fit(50, &["go"]))).finalize(70);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["jobFit"]["missingKeywords"][0], "go");
        assert_eq!(json["clarity"][0], "c");
        assert!(json["suggestions"].is_array());
    }
}
