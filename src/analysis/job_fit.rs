//! Keyword overlap between a job description and the resume

use crate::analysis::keywords::{self, KeywordCategory};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFit {
    /// Share of job keywords found in the resume, 0-100
    pub score: u8,
    /// Job keywords absent from the resume, in job-description order; repeats are kept
    pub missing_keywords: Vec<String>,
    #[serde(skip)]
    pub recommendations: Vec<String>,
}

impl JobFit {
    /// True when the job description produced no keywords to compare against
    pub fn is_empty_job(&self) -> bool {
        self.score == 0 && self.missing_keywords.is_empty()
    }
}

/// Score how well `resume` covers the keywords of `job_description`.
///
/// The score counts over the raw job keyword list, so a keyword repeated in
/// the job description weighs more. A job description without keywords
/// scores 0 with nothing missing.
pub fn analyze_job_fit(job_description: &str, resume: &str) -> JobFit {
    let job_keywords = keywords::extract_keywords(job_description);
    let resume_keywords: HashSet<String> = keywords::extract_keywords(resume).into_iter().collect();

    if job_keywords.is_empty() {
        warn!("Job description contains no usable keywords");
        return JobFit {
            score: 0,
            missing_keywords: Vec::new(),
            recommendations: Vec::new(),
        };
    }

    let (matching, missing): (Vec<String>, Vec<String>) = job_keywords
        .into_iter()
        .partition(|keyword| resume_keywords.contains(keyword));

    let total = matching.len() + missing.len();
    let score = (100.0 * matching.len() as f64 / total as f64).round() as u8;

    debug!(
        "Job fit: {} of {} job keywords matched ({}%)",
        matching.len(),
        total,
        score
    );

    let recommendations = recommendations_for(&missing);
    JobFit {
        score,
        missing_keywords: missing,
        recommendations,
    }
}

/// Group missing keywords into technical, soft-skill and domain suggestions
pub fn recommendations_for(missing: &[String]) -> Vec<String> {
    let bucket = |category: KeywordCategory| {
        missing
            .iter()
            .filter(|keyword| keywords::classify(keyword) == category)
            .map(String::as_str)
            .collect::<Vec<_>>()
    };

    [
        (KeywordCategory::Technical, "Highlight experience with technical skills"),
        (KeywordCategory::SoftSkill, "Emphasize soft skills"),
        (KeywordCategory::Domain, "Include domain-specific experience"),
    ]
    .into_iter()
    .filter_map(|(category, lead)| {
        let words = bucket(category);
        (!words.is_empty()).then(|| format!("{}: {}", lead, words.join(", ")))
    })
    .collect()
}
