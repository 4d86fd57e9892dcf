//! End-to-end tests: extract, analyze, render

use resume_analyzer::analysis::report::IssueCategory;
use resume_analyzer::analysis::{clarity, formatting, grammar};
use resume_analyzer::config::{Config, OutputFormat};
use resume_analyzer::input::InputManager;
use resume_analyzer::output::{ReportDocument, ReportGenerator, ReportMetadata};
use resume_analyzer::{AnalysisReport, ResumeAnalyzer};
use std::path::Path;

const RESUME: &str = "tests/fixtures/sample_resume.txt";
const RESUME_MD: &str = "tests/fixtures/sample_resume.md";
const JOB: &str = "tests/fixtures/job_description.txt";

async fn read(path: &str) -> String {
    InputManager::new().extract_text(Path::new(path)).await.unwrap()
}

async fn analyze(resume: &str, job: Option<&str>) -> (ResumeAnalyzer, AnalysisReport) {
    let resume_text = read(resume).await;
    let job_text = match job {
        Some(path) => Some(read(path).await),
        None => None,
    };
    let analyzer = ResumeAnalyzer::new(resume_text);
    let report = analyzer.analyze(job_text.as_deref()).await;
    (analyzer, report)
}

fn has(issues: &[String], message: &str) -> bool {
    issues.iter().any(|issue| issue == message)
}

#[tokio::test]
async fn test_sections_of_sample_resume() {
    let (analyzer, _) = analyze(RESUME, None).await;
    let names: Vec<&str> = analyzer.sections().names().collect();
    assert_eq!(names, vec!["SUMMARY", "EXPERIENCE", "PROJECTS", "EDUCATION", "SKILLS"]);
}

#[tokio::test]
async fn test_formatting_findings() {
    let (_, report) = analyze(RESUME, None).await;
    assert!(has(&report.formatting, formatting::INCONSISTENT_BULLETS));
    assert!(has(&report.formatting, formatting::MISSING_PERIODS));
    assert!(has(&report.formatting, formatting::INCONSISTENT_DATES));
    assert!(!has(&report.formatting, formatting::INCONSISTENT_HEADINGS));
    assert!(!has(&report.formatting, formatting::INCONSISTENT_ALIGNMENT));
}

#[tokio::test]
async fn test_clarity_findings() {
    let (_, report) = analyze(RESUME, None).await;
    assert!(has(&report.clarity, clarity::USE_ACTION_VERBS));
    assert!(has(&report.clarity, clarity::ADD_METRICS));
    assert!(has(&report.clarity, clarity::REPLACE_WEAK_PHRASES));
    assert!(!has(&report.clarity, clarity::USE_BULLETS));
}

#[tokio::test]
async fn test_grammar_findings() {
    let (_, report) = analyze(RESUME, None).await;
    assert!(has(&report.grammar, grammar::INCONSISTENT_ENDINGS));
    assert!(!has(&report.grammar, grammar::CONFUSED_WORDS));
    assert!(!has(&report.grammar, grammar::CAPITALIZE_SENTENCES));
}

#[tokio::test]
async fn test_job_fit_against_fixture() {
    let (_, report) = analyze(RESUME, Some(JOB)).await;
    let fit = report.job_fit.as_ref().expect("job description was given");

    assert!(fit.score > 0 && fit.score < 70, "score {}", fit.score);
    assert!(fit.missing_keywords.contains(&"kubernetes".to_string()));
    assert!(fit.missing_keywords.contains(&"communication".to_string()));
    assert!(!fit.missing_keywords.contains(&"rust".to_string()));
    assert!(report
        .suggestions
        .iter()
        .any(|s| s.starts_with("Consider adding keywords related to:") && s.contains("kubernetes")));
}

#[tokio::test]
async fn test_markdown_resume_is_analyzable() {
    let (analyzer, report) = analyze(RESUME_MD, None).await;
    let names: Vec<&str> = analyzer.sections().names().collect();
    assert_eq!(names, vec!["EXPERIENCE", "SKILLS"]);
    assert!(has(&report.clarity, clarity::REPLACE_WEAK_PHRASES));
}

#[tokio::test]
async fn test_byte_order_mark_keeps_first_section() {
    let (analyzer, report) = analyze("tests/fixtures/bom_resume.txt", None).await;
    let names: Vec<&str> = analyzer.sections().names().collect();
    assert_eq!(names, vec!["EXPERIENCE"]);
    assert!(!has(&report.formatting, formatting::SECTION_START_SPACING));
    assert!(!has(&report.clarity, clarity::USE_BULLETS));
}

#[tokio::test]
async fn test_threshold_from_config() {
    let mut config = Config::default();
    config.set("analysis.job_fit_threshold", "10").unwrap();

    let job = read(JOB).await;
    let analyzer = ResumeAnalyzer::with_config(read(RESUME).await, config.analysis);
    let report = analyzer.analyze(Some(job.as_str())).await;
    assert!(!report
        .suggestions
        .iter()
        .any(|s| s.starts_with("Consider adding keywords")));
}

#[tokio::test]
async fn test_rendered_reports() {
    let (analyzer, report) = analyze(RESUME, Some(JOB)).await;
    let metadata = ReportMetadata::new(RESUME, Some(JOB.to_string()), analyzer.sections().len());
    let document = ReportDocument::new(report, metadata).with_annotations(analyzer.resume());

    assert!(document
        .annotations
        .iter()
        .any(|line| line.text.starts_with("- Responsible") && line.highlight.category == IssueCategory::Formatting));

    let generator = ReportGenerator::with_options(false, true, true, true, true);

    let json = generator.generate_report(&document, &OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metadata"]["sectionCount"], 5);
    assert!(value["report"]["jobFit"]["score"].is_u64());

    let console = generator.generate_report(&document, &OutputFormat::Console).unwrap();
    assert!(console.contains("RESUME ANALYSIS"));
    assert!(console.contains(formatting::INCONSISTENT_BULLETS));

    let html = generator.generate_report(&document, &OutputFormat::Html).unwrap();
    assert!(html.contains("Annotated Lines"));
}
