//! Clarity review of achievement bullets: action verbs, metrics, weak phrasing

use crate::analysis::bullets;
use crate::analysis::rules::{self, Rule};
use crate::analysis::sections::SectionMap;
use crate::config::AnalysisConfig;
use aho_corasick::{AhoCorasick, Anchored, Input, MatchKind, StartKind};
use log::{debug, trace};
use std::sync::LazyLock;

pub const USE_BULLETS: &str =
    "Consider using bullet points to highlight key achievements and responsibilities";
pub const USE_ACTION_VERBS: &str = "Consider starting achievement statements with strong action verbs";
pub const ADD_METRICS: &str = "Add specific metrics or quantifiable achievements to demonstrate impact";
pub const REPLACE_WEAK_PHRASES: &str = "Replace passive or weak phrases with strong, active verbs";

pub const ACTION_VERBS: &[&str] = &[
    "Led", "Developed", "Created", "Managed", "Implemented", "Designed",
    "Improved", "Increased", "Reduced", "Achieved", "Built", "Launched",
    "Coordinated", "Established", "Generated", "Delivered", "Spearheaded",
    "Orchestrated", "Streamlined", "Transformed", "Collaborated", "Explored",
    "Rewrote", "Used", "Wrote", "Made", "Worked",
];

pub const WEAK_PHRASES: &[&str] = &[
    "helped", "assisted", "worked on", "responsible for", "duties included",
    "participated in", "was involved in", "took part in", "was responsible",
    "had to", "needed to", "tried to",
];

static ACTION_VERB_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .start_kind(StartKind::Anchored)
        .match_kind(MatchKind::LeftmostFirst)
        .build(ACTION_VERBS)
        .expect("Failed to build action verb matcher")
});

static WEAK_PHRASE_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(WEAK_PHRASES)
        .expect("Failed to build weak phrase matcher")
});

static METRIC: LazyLock<Rule> = LazyLock::new(|| {
    Rule::new(
        "quantified-impact",
        r"(?i)\d+%|\d+x|\$\d+|\d+\s*(?:users|customers|people|students|clients|hours|days|weeks|months|years|dollars|pounds|team members)",
        ADD_METRICS,
    )
});

/// Does the bullet open with one of [`ACTION_VERBS`]?
pub fn starts_with_action_verb(text: &str) -> bool {
    ACTION_VERB_MATCHER
        .find(Input::new(text).anchored(Anchored::Yes))
        .is_some()
}

pub fn has_metric(text: &str) -> bool {
    METRIC.matches(text)
}

pub fn has_weak_phrase(text: &str) -> bool {
    WEAK_PHRASE_MATCHER.is_match(text)
}

fn lacks_action_verb(text: &str) -> bool {
    !starts_with_action_verb(text)
}

fn lacks_metric(text: &str) -> bool {
    !has_metric(text)
}

type BulletCheck = fn(&str) -> bool;

/// Per-bullet checks: predicate that flags a problem, and its message
const BULLET_CHECKS: &[(&str, BulletCheck, &str)] = &[
    ("action-verb", lacks_action_verb, USE_ACTION_VERBS),
    ("metrics", lacks_metric, ADD_METRICS),
    ("weak-phrase", has_weak_phrase, REPLACE_WEAK_PHRASES),
];

/// Review list items in the experience/project sections
pub fn check_clarity(sections: &SectionMap, config: &AnalysisConfig) -> Vec<String> {
    let items: Vec<&str> = sections
        .content_sections()
        .flat_map(|section| section.lines())
        .filter(|line| bullets::is_list_item(line))
        .collect();

    debug!("Clarity analysis found {} bullets", items.len());

    if items.is_empty() {
        return vec![USE_BULLETS.to_string()];
    }

    let mut issues = Vec::new();
    for bullet in items {
        let text = bullets::strip_list_prefix(bullet);
        if text.chars().count() < config.min_bullet_length {
            continue;
        }

        for (name, flagged, message) in BULLET_CHECKS {
            if flagged(text) {
                trace!("Clarity check '{}' flagged: {}", name, text);
                issues.push(message.to_string());
            }
        }
    }

    rules::dedup(issues)
}
