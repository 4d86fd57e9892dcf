//! Heuristic resume analysis pipeline

pub mod analyzer;
pub mod bullets;
pub mod clarity;
pub mod formatting;
pub mod grammar;
pub mod job_fit;
pub mod keywords;
pub mod report;
pub mod rules;
pub mod sections;

pub use analyzer::ResumeAnalyzer;
pub use job_fit::JobFit;
pub use report::{AnalysisReport, IssueCategory};
pub use sections::{Section, SectionMap};
