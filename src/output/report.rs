//! Report document: an analysis report plus what the renderers need around it

use crate::analysis::report::AnalysisReport;
use crate::output::highlight::{self, AnnotatedLine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a formatter renders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub metadata: ReportMetadata,
    pub report: AnalysisReport,

    /// Resume lines tied to an issue, empty unless annotation was requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotatedLine>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the analyzer used
    pub analyzer_version: String,

    /// Resume file analyzed
    pub resume_file: String,

    /// Job description file, if one was given
    pub job_file: Option<String>,

    /// Number of sections found in the resume
    pub section_count: usize,
}

impl ReportMetadata {
    pub fn new(resume_file: impl Into<String>, job_file: Option<String>, section_count: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file: resume_file.into(),
            job_file,
            section_count,
        }
    }
}

impl ReportDocument {
    pub fn new(report: AnalysisReport, metadata: ReportMetadata) -> Self {
        Self {
            metadata,
            report,
            annotations: Vec::new(),
        }
    }

    /// Attach per-line highlights computed against `resume_text`
    pub fn with_annotations(mut self, resume_text: &str) -> Self {
        self.annotations = highlight::annotate_lines(resume_text, &self.report);
        self
    }

    /// Job-fit score, when a job description was analyzed
    pub fn job_fit_score(&self) -> Option<u8> {
        self.report.job_fit.as_ref().map(|fit| fit.score)
    }

    /// One-line verdict for summaries
    pub fn verdict(&self) -> &'static str {
        let issues = self
            .report
            .formatting
            .iter()
            .chain(&self.report.clarity)
            .chain(&self.report.grammar)
            .filter(|issue| !issue.starts_with('✓'))
            .count();

        match (issues, self.job_fit_score()) {
            (0, Some(score)) if score < 50 => "Well written, but a weak match for this job",
            (0, _) => "Ready to send",
            (1..=3, _) => "A few fixes will polish this resume",
            _ => "Needs revision before sending",
        }
    }
}
