//! Formatting consistency checks over the whole resume

use crate::analysis::bullets;
use crate::analysis::sections::SectionMap;
use crate::config::AnalysisConfig;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

pub const INCONSISTENT_SPACING: &str =
    "Inconsistent spacing between sections - use single line breaks for consistency";
pub const INCONSISTENT_BULLETS: &str = "Inconsistent bullet point formatting - use the same style throughout";
pub const INCONSISTENT_ALIGNMENT: &str = "Inconsistent bullet point alignment";
pub const MISSING_PERIODS: &str =
    "Some bullet points are missing ending periods - add periods to all for consistency";
pub const REMOVE_PERIODS: &str =
    "Inconsistent bullet point endings - remove all ending periods for consistency";
pub const SECTION_START_SPACING: &str = "Inconsistent spacing at the beginning of sections";
pub const INCONSISTENT_DATES: &str = "Inconsistent date formatting across the resume";
pub const INCONSISTENT_HEADINGS: &str = "Inconsistent section heading styles";

static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[A-Za-z0-9_]").expect("Invalid word start regex"));

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{2}/\d{2}/\d{4}|\b\d{4}|\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{4}\b")
        .expect("Invalid date regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateFormat {
    /// MM/DD/YYYY
    Numeric,
    /// YYYY
    Year,
    /// Month YYYY
    MonthYear,
}

impl DateFormat {
    pub fn classify(date: &str) -> Self {
        if date.contains('/') {
            DateFormat::Numeric
        } else if date.starts_with(|c: char| c.is_ascii_alphabetic()) {
            DateFormat::MonthYear
        } else {
            DateFormat::Year
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingStyle {
    AllCaps,
    TitleCase,
    Other,
}

impl HeadingStyle {
    pub fn classify(heading: &str) -> Self {
        if heading == heading.to_uppercase() {
            return HeadingStyle::AllCaps;
        }
        let mut chars = heading.chars();
        let mut title = String::with_capacity(heading.len());
        if let Some(first) = chars.next() {
            title.extend(first.to_uppercase());
            title.push_str(&chars.as_str().to_lowercase());
        }
        if heading == title {
            HeadingStyle::TitleCase
        } else {
            HeadingStyle::Other
        }
    }
}

/// Everything a formatting check may look at
struct FormattingContext<'a> {
    text: &'a str,
    sections: &'a SectionMap,
    bullets: Vec<&'a str>,
    config: &'a AnalysisConfig,
}

type Check = fn(&FormattingContext) -> Option<&'static str>;

const CHECKS: &[(&str, Check)] = &[
    ("blank-line-run", check_blank_lines),
    ("bullet-style", check_bullet_style),
    ("bullet-alignment", check_bullet_alignment),
    ("bullet-endings", check_bullet_endings),
    ("leading-character", check_leading_character),
    ("date-format", check_date_formats),
    ("heading-style", check_heading_styles),
];

/// Run every formatting check; each contributes at most one message
pub fn check_formatting(text: &str, sections: &SectionMap, config: &AnalysisConfig) -> Vec<String> {
    let bullets: Vec<&str> = sections
        .iter()
        .flat_map(|section| section.lines())
        .filter(|line| bullets::is_layout_bullet(line))
        .collect();

    debug!("Total bullet lines found: {}", bullets.len());

    let ctx = FormattingContext { text, sections, bullets, config };

    CHECKS
        .iter()
        .filter_map(|(name, check)| {
            let message = check(&ctx)?;
            debug!("Formatting check '{}' triggered", name);
            Some(message.to_string())
        })
        .collect()
}

fn check_blank_lines(ctx: &FormattingContext) -> Option<&'static str> {
    let mut previous_empty = false;
    let mut runs = 0;
    for line in ctx.text.split('\n') {
        let empty = line.trim().is_empty();
        if empty && previous_empty {
            runs += 1;
        }
        previous_empty = empty;
    }
    (runs > 0).then_some(INCONSISTENT_SPACING)
}

fn check_bullet_style(ctx: &FormattingContext) -> Option<&'static str> {
    let styles: HashSet<&str> = ctx.bullets.iter().map(|line| bullets::marker(line)).collect();
    (styles.len() > 1).then_some(INCONSISTENT_BULLETS)
}

fn check_bullet_alignment(ctx: &FormattingContext) -> Option<&'static str> {
    let levels: HashSet<usize> = ctx.bullets.iter().map(|line| bullets::indentation(line)).collect();
    (levels.len() > ctx.config.max_indent_levels).then_some(INCONSISTENT_ALIGNMENT)
}

fn check_bullet_endings(ctx: &FormattingContext) -> Option<&'static str> {
    let total = ctx.bullets.len();
    let with_periods = ctx.bullets.iter().filter(|line| line.trim().ends_with('.')).count();
    if with_periods == 0 || with_periods == total {
        return None;
    }
    if with_periods * 2 > total {
        Some(MISSING_PERIODS)
    } else {
        Some(REMOVE_PERIODS)
    }
}

fn check_leading_character(ctx: &FormattingContext) -> Option<&'static str> {
    (!WORD_START.is_match(ctx.text)).then_some(SECTION_START_SPACING)
}

fn check_date_formats(ctx: &FormattingContext) -> Option<&'static str> {
    let formats: HashSet<DateFormat> = DATE
        .find_iter(ctx.text)
        .map(|m| DateFormat::classify(m.as_str()))
        .collect();
    (formats.len() > 1).then_some(INCONSISTENT_DATES)
}

fn check_heading_styles(ctx: &FormattingContext) -> Option<&'static str> {
    let styles: HashSet<HeadingStyle> = ctx
        .sections
        .iter()
        .map(|section| HeadingStyle::classify(&section.name))
        .collect();
    (styles.len() > 1).then_some(INCONSISTENT_HEADINGS)
}
