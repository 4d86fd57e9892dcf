//! Resume analyzer library
//!
//! Heuristic checks of a resume's formatting, clarity and grammar, plus a
//! keyword-overlap score against a job description.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use analysis::{AnalysisReport, JobFit, ResumeAnalyzer};
pub use config::Config;
pub use error::{Result, ResumeAnalyzerError};
