//! Resume analyzer: owns the resume text and its sections, runs every check

use crate::analysis::clarity::check_clarity;
use crate::analysis::formatting::check_formatting;
use crate::analysis::grammar::check_grammar;
use crate::analysis::job_fit::{analyze_job_fit, JobFit};
use crate::analysis::report::AnalysisReport;
use crate::analysis::sections::SectionMap;
use crate::config::AnalysisConfig;
use log::{debug, info};

/// Main analysis entry point for a single resume
#[derive(Debug, Clone)]
pub struct ResumeAnalyzer {
    resume: String,
    sections: SectionMap,
    config: AnalysisConfig,
}

impl ResumeAnalyzer {
    pub fn new(resume_text: impl Into<String>) -> Self {
        Self::with_config(resume_text, AnalysisConfig::default())
    }

    pub fn with_config(resume_text: impl Into<String>, config: AnalysisConfig) -> Self {
        let resume = resume_text.into();
        let sections = SectionMap::segment(&resume);
        Self {
            resume,
            sections,
            config,
        }
    }

    pub fn resume(&self) -> &str {
        &self.resume
    }

    pub fn sections(&self) -> &SectionMap {
        &self.sections
    }

    pub fn check_formatting(&self) -> Vec<String> {
        check_formatting(&self.resume, &self.sections, &self.config)
    }

    pub fn check_clarity(&self) -> Vec<String> {
        check_clarity(&self.sections, &self.config)
    }

    pub fn check_grammar(&self) -> Vec<String> {
        check_grammar(&self.resume, &self.sections, &self.config)
    }

    pub fn analyze_job_fit(&self, job_description: &str) -> JobFit {
        analyze_job_fit(job_description, &self.resume)
    }

    /// Run all analyzers and assemble a fresh report.
    ///
    /// The checks are pure computation; the await points only hand control
    /// back to the runtime between stages.
    pub async fn analyze(&self, job_description: Option<&str>) -> AnalysisReport {
        info!("Analyzing resume ({} sections)", self.sections.len());

        let formatting = self.check_formatting();
        tokio::task::yield_now().await;
        let clarity = self.check_clarity();
        tokio::task::yield_now().await;
        let grammar = self.check_grammar();
        tokio::task::yield_now().await;
        let job_fit = job_description.map(|job| self.analyze_job_fit(job));

        debug!(
            "Raw analysis: {} formatting, {} clarity, {} grammar issues, job fit {:?}",
            formatting.len(),
            clarity.len(),
            grammar.len(),
            job_fit.as_ref().map(|fit| fit.score)
        );

        AnalysisReport::new(formatting, clarity, grammar, job_fit).finalize(self.config.job_fit_threshold)
    }
}
