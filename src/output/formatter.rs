//! Output formatters: console, JSON, Markdown and HTML renderings of a report

use crate::analysis::report::IssueCategory;
use crate::config::OutputFormat;
use crate::error::{Result, ResumeAnalyzerError};
use crate::output::report::ReportDocument;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

const CATEGORIES: [IssueCategory; 3] = [
    IssueCategory::Formatting,
    IssueCategory::Clarity,
    IssueCategory::Grammar,
];

/// Longest annotated line shown by the non-detailed console view
const ANNOTATION_PREVIEW: usize = 72;

/// Trait for rendering a report document
pub trait OutputFormatter {
    fn format_report(&self, document: &ReportDocument) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for tooling and overlays
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Dispatches a document to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Analysis Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .issues {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #ffc107;
        }
        .issues.clear { border-left-color: #28a745; }
        .hl-formatting { background: #fff3cd; }
        .hl-clarity { background: #d1ecf1; }
        .hl-grammar { background: #f8d7da; }
        table { border-collapse: collapse; width: 100%; }
        td, th { padding: 6px 10px; border-bottom: 1px solid #e9ecef; text-align: left; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📋 Resume Analysis Report</h1>
            <p>Generated: {{ generated_at }} | Sections found: {{ section_count }}</p>
        </div>

        <div class="section">
            <h2>Summary</h2>
            <p><strong>Verdict:</strong> {{ verdict }}</p>
            {% if has_job_fit %}
            <h3>Job Fit: {{ job_fit_score }}% <span class="score-badge {{ score_class }}">{{ score_label }}</span></h3>
            {% if !missing_keywords.is_empty() %}
            <p><strong>Missing keywords:</strong> {{ missing_keywords.join(", ") }}</p>
            {% endif %}
            {% endif %}
        </div>

        {% for group in groups %}
        <div class="section">
            <h2>{{ group.title }}</h2>
            <div class="issues{% if group.clear %} clear{% endif %}">
                <ul>
                {% for issue in group.issues %}
                    <li>{{ issue }}</li>
                {% endfor %}
                </ul>
            </div>
        </div>
        {% endfor %}

        <div class="section">
            <h2>💡 Suggestions</h2>
            <ol>
            {% for suggestion in suggestions %}
                <li>{{ suggestion }}</li>
            {% endfor %}
            </ol>
        </div>

        {% if !annotations.is_empty() %}
        <div class="section">
            <h2>🔎 Annotated Lines</h2>
            <table>
                <tr><th>Line</th><th>Text</th><th>Issue</th></tr>
                {% for line in annotations %}
                <tr class="hl-{{ line.category }}">
                    <td>{{ line.line_number }}</td>
                    <td>{{ line.text }}</td>
                    <td>{{ line.message }}</td>
                </tr>
                {% endfor %}
            </table>
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>ℹ️ Generated by Resume Analyzer v{{ version }}</strong></p>
            <p><strong>Resume:</strong> {{ resume_file }} | <strong>Job:</strong> {{ job_file }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    section_count: usize,
    verdict: String,
    has_job_fit: bool,
    job_fit_score: u8,
    score_class: String,
    score_label: String,
    missing_keywords: Vec<String>,
    groups: Vec<HtmlIssueGroup>,
    suggestions: Vec<String>,
    annotations: Vec<HtmlAnnotation>,
    version: String,
    resume_file: String,
    job_file: String,
}

struct HtmlIssueGroup {
    title: String,
    clear: bool,
    issues: Vec<String>,
}

struct HtmlAnnotation {
    line_number: usize,
    category: String,
    text: String,
    message: String,
}

fn is_positive(message: &str) -> bool {
    message.starts_with('✓')
}

fn score_label(score: u8) -> &'static str {
    match score {
        90..=100 => "EXCELLENT",
        80..=89 => "VERY GOOD",
        70..=79 => "GOOD",
        60..=69 => "FAIR",
        50..=59 => "BELOW AVG",
        _ => "POOR",
    }
}

fn category_icon(category: IssueCategory) -> &'static str {
    match category {
        IssueCategory::Formatting => "📐",
        IssueCategory::Clarity => "💡",
        IssueCategory::Grammar => "✏️",
    }
}

fn file_label(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Shorten `text` to at most `max` user-perceived characters
pub fn truncate_text(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(1);
    format!("{}…", graphemes[..keep].concat())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let badge = score_label(score);
        let color = match score {
            90..=100 => Color::Green,
            80..=89 => Color::BrightGreen,
            70..=79 => Color::Yellow,
            60..=69 => Color::BrightYellow,
            50..=59 => Color::Red,
            _ => Color::BrightRed,
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_issue(&self, message: &str) -> String {
        if is_positive(message) {
            format!("  {}\n", self.colorize(message, Color::Green))
        } else if self.use_colors {
            format!("  • {}\n", message.color(Color::Yellow))
        } else {
            format!("  [-] {}\n", message)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, document: &ReportDocument) -> Result<String> {
        let report = &document.report;
        let metadata = &document.metadata;
        let mut output = String::new();

        output.push_str(&self.format_header("📋 RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Resume: {} | Sections: {}\n",
            metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            file_label(&metadata.resume_file),
            metadata.section_count
        ));
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(document.verdict(), Color::Cyan)
        ));

        if let Some(fit) = &report.job_fit {
            output.push_str(&self.format_header("🎯 Job Fit", 2));
            output.push_str(&format!("Score: {}% {}\n", fit.score, self.format_score_badge(fit.score)));
            if !fit.missing_keywords.is_empty() {
                output.push_str(&format!(
                    "Missing keywords: {}\n",
                    self.colorize(&fit.missing_keywords.join(", "), Color::Red)
                ));
            }
            if self.detailed && !fit.recommendations.is_empty() {
                output.push_str(&self.format_header("Keyword Recommendations", 3));
                for recommendation in &fit.recommendations {
                    output.push_str(&format!("  → {}\n", recommendation));
                }
            }
        }

        for category in CATEGORIES {
            let issues = report.issues(category);
            let title = format!("{} {} ({})", category_icon(category), category, issues.len());
            output.push_str(&self.format_header(&title, 2));
            if issues.is_empty() {
                output.push_str(&format!("  {}\n", self.colorize("No issues found", Color::Green)));
            }
            for issue in issues {
                output.push_str(&self.format_issue(issue));
            }
        }

        output.push_str(&self.format_header("💡 Suggestions", 2));
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
        }

        if !document.annotations.is_empty() {
            output.push_str(&self.format_header("🔎 Annotated Lines", 2));
            for line in &document.annotations {
                let text = if self.detailed {
                    line.text.trim().to_string()
                } else {
                    truncate_text(line.text.trim(), ANNOTATION_PREVIEW)
                };
                output.push_str(&format!(
                    "  {:>4} {} {}\n",
                    self.colorize(&format!("L{}", line.line_number), Color::BrightBlack),
                    self.colorize(&format!("[{}]", line.highlight.category), Color::Magenta),
                    text
                ));
                output.push_str(&format!("       ↳ {}\n", line.highlight.message));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("ℹ️ Metadata", 3));
            output.push_str(&format!("Analyzer version: {}\n", metadata.analyzer_version));
            output.push_str(&format!("Resume file: {}\n", metadata.resume_file));
            if let Some(job_file) = &metadata.job_file {
                output.push_str(&format!("Job file: {}\n", job_file));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, document: &ReportDocument) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> String {
        let color = match score {
            80..=100 => "brightgreen",
            70..=79 => "yellow",
            60..=69 => "orange",
            _ => "red",
        };
        format!("![{}](https://img.shields.io/badge/fit-{}%25-{})", score_label(score), score, color)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, document: &ReportDocument) -> Result<String> {
        let report = &document.report;
        let metadata = &document.metadata;
        let mut output = String::new();

        output.push_str("# 📋 Resume Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Sections:** {}\n",
                metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                metadata.section_count
            ));
            output.push_str(&format!("**Resume:** `{}`", file_label(&metadata.resume_file)));
            if let Some(job_file) = &metadata.job_file {
                output.push_str(&format!(" | **Job:** `{}`", file_label(job_file)));
            }
            output.push_str("\n\n");
        }

        output.push_str(&format!("**Verdict:** {}\n\n", document.verdict()));

        if let Some(fit) = &report.job_fit {
            output.push_str("## 🎯 Job Fit\n\n");
            output.push_str(&format!(
                "**Score:** {}% {}\n\n",
                fit.score,
                Self::markdown_score_badge(fit.score)
            ));
            if !fit.missing_keywords.is_empty() {
                let keywords: Vec<String> = fit.missing_keywords.iter().map(|k| format!("`{}`", k)).collect();
                output.push_str(&format!("**Missing keywords:** {}\n\n", keywords.join(", ")));
            }
        }

        for category in CATEGORIES {
            output.push_str(&format!("## {} {}\n\n", category_icon(category), category));
            let issues = report.issues(category);
            if issues.is_empty() {
                output.push_str("_No issues found._\n");
            }
            for issue in issues {
                if is_positive(issue) {
                    output.push_str(&format!("- {}\n", issue));
                } else {
                    output.push_str(&format!("- [ ] {}\n", issue));
                }
            }
            output.push('\n');
        }

        output.push_str("## 💡 Suggestions\n\n");
        for (i, suggestion) in report.suggestions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, suggestion));
        }
        output.push('\n');

        if !document.annotations.is_empty() {
            output.push_str("## 🔎 Annotated Lines\n\n");
            output.push_str("| Line | Category | Text | Issue |\n");
            output.push_str("|------|----------|------|-------|\n");
            for line in &document.annotations {
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    line.line_number,
                    line.highlight.category,
                    line.text.trim().replace('|', "\\|"),
                    line.highlight.message
                ));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Resume Analyzer v{}*\n",
                metadata.analyzer_version
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn score_class(score: u8) -> &'static str {
        match score {
            90..=100 => "score-excellent",
            70..=89 => "score-good",
            50..=69 => "score-fair",
            _ => "score-poor",
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, document: &ReportDocument) -> Result<String> {
        let report = &document.report;
        let metadata = &document.metadata;
        let score = document.job_fit_score().unwrap_or(0);

        let groups = CATEGORIES
            .into_iter()
            .map(|category| {
                let issues = report.issues(category);
                HtmlIssueGroup {
                    title: format!("{} {}", category_icon(category), category),
                    clear: issues.iter().all(|issue| is_positive(issue)),
                    issues: issues.to_vec(),
                }
            })
            .collect();

        let annotations = document
            .annotations
            .iter()
            .map(|line| HtmlAnnotation {
                line_number: line.line_number,
                category: line.highlight.category.to_string().to_lowercase(),
                text: line.text.trim().to_string(),
                message: line.highlight.message.clone(),
            })
            .collect();

        let template = HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            section_count: metadata.section_count,
            verdict: document.verdict().to_string(),
            has_job_fit: report.job_fit.is_some(),
            job_fit_score: score,
            score_class: Self::score_class(score).to_string(),
            score_label: score_label(score).to_string(),
            missing_keywords: report
                .job_fit
                .as_ref()
                .map(|fit| fit.missing_keywords.clone())
                .unwrap_or_default(),
            groups,
            suggestions: report.suggestions.clone(),
            annotations,
            version: metadata.analyzer_version.clone(),
            resume_file: file_label(&metadata.resume_file),
            job_file: metadata
                .job_file
                .as_deref()
                .map(file_label)
                .unwrap_or_else(|| "none".to_string()),
        };

        Ok(template.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    fn formatters(&self) -> [&dyn OutputFormatter; 4] {
        [
            &self.console_formatter,
            &self.json_formatter,
            &self.markdown_formatter,
            &self.html_formatter,
        ]
    }

    pub fn generate_report(&self, document: &ReportDocument, format: &OutputFormat) -> Result<String> {
        let formatter = self
            .formatters()
            .into_iter()
            .find(|formatter| formatter.supports_format() == *format)
            .ok_or_else(|| ResumeAnalyzerError::OutputFormatting(format!("No formatter for {:?}", format)))?;
        formatter.format_report(document)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };
    format!("{}_analysis{}.{}", base_name, timestamp_suffix, extension)
}
