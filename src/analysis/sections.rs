//! Section segmentation of raw resume text

use log::{debug, trace};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Sections whose content gets clarity and grammar review
pub const CONTENT_SECTIONS: [&str; 4] = ["EXPERIENCE", "WORK EXPERIENCE", "SELECTED ACHIEVEMENTS", "PROJECTS"];

static ALL_CAPS_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z\s]+$").expect("Invalid all-caps header regex"));

static KNOWN_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(EDUCATION|EXPERIENCE|WORK|SKILLS?|PROJECTS?|ACHIEVEMENTS?|INTERESTS?|SUMMARY|OBJECTIVE|QUALIFICATIONS)",
    )
    .expect("Invalid known header regex")
});

/// A named block of resume text starting at a heading line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Uppercased heading, used as the section key
    pub name: String,
    /// Heading exactly as written (trimmed)
    pub heading: String,
    /// Raw non-empty lines of the section, each followed by a newline
    pub body: String,
}

impl Section {
    fn new(heading: &str) -> Self {
        Self {
            name: heading.to_uppercase(),
            heading: heading.to_string(),
            body: String::new(),
        }
    }

    /// Lines of the body, without the trailing empty remainder
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines()
    }
}

/// Sections keyed by uppercased heading, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    /// Split resume text into sections in a single pass.
    ///
    /// Lines before the first heading and blank lines are dropped. A repeated
    /// heading restarts that section with an empty body.
    pub fn segment(text: &str) -> Self {
        let mut map = SectionMap::default();
        let mut current: Option<usize> = None;

        debug!("Segmenting resume text ({} lines)", text.split('\n').count());

        for line in text.split('\n') {
            let trimmed = line.trim();

            if is_section_header(line) {
                current = Some(map.start_section(trimmed));
                debug!("Found section: {}", trimmed.to_uppercase());
            } else if let Some(idx) = current {
                if !trimmed.is_empty() {
                    let body = &mut map.sections[idx].body;
                    body.push_str(line);
                    body.push('\n');
                }
            } else if !trimmed.is_empty() {
                trace!("Discarding line before first section: {:?}", line);
            }
        }

        debug!("Found sections: {:?}", map.names().collect::<Vec<_>>());
        map
    }

    fn start_section(&mut self, heading: &str) -> usize {
        let section = Section::new(heading);
        match self.sections.iter().position(|s| s.name == section.name) {
            Some(idx) => {
                self.sections[idx] = section;
                idx
            }
            None => {
                self.sections.push(section);
                self.sections.len() - 1
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// First section whose key contains `target` or is contained by it
    pub fn find_related(&self, target: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.name.contains(target) || target.contains(s.name.as_str()))
    }

    /// Related section for each of [`CONTENT_SECTIONS`]; one section may be picked more than once
    pub fn content_sections(&self) -> impl Iterator<Item = &Section> {
        CONTENT_SECTIONS.iter().filter_map(|target| self.find_related(target))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// A heading is a non-indented line that is all caps or starts with a known section word
pub fn is_section_header(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && (ALL_CAPS_HEADER.is_match(trimmed) || KNOWN_HEADER.is_match(trimmed))
        && !line.starts_with(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_headers_yields_empty_map() {
        let map = SectionMap::segment("John Doe\njohn@example.com\n\nI write software.");
        assert!(map.is_empty());
    }

    #[test]
    fn test_indented_all_caps_is_not_a_header() {
        assert!(!is_section_header("    EXPERIENCE"));
        assert!(is_section_header("EXPERIENCE"));
        assert!(is_section_header("Work Experience"));
        assert!(is_section_header("skills & tools"));
        assert!(!is_section_header("Senior Developer"));
        assert!(!is_section_header(""));
    }

    #[test]
    fn test_segment_collects_bodies() {
        let text = "Jane Roe\nEXPERIENCE\nAcme Corp\n\n• Led things\nEducation\nBSc Computer Science\n";
        let map = SectionMap::segment(text);

        assert_eq!(map.names().collect::<Vec<_>>(), vec!["EXPERIENCE", "EDUCATION"]);
        assert_eq!(map.get("EXPERIENCE").unwrap().body, "Acme Corp\n• Led things\n");
        assert_eq!(map.get("EDUCATION").unwrap().heading, "Education");
        assert_eq!(map.get("EDUCATION").unwrap().body, "BSc Computer Science\n");
    }

    #[test]
    fn test_repeated_heading_restarts_section() {
        let text = "SKILLS\nRust\nSKILLS\nGo\n";
        let map = SectionMap::segment(text);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("SKILLS").unwrap().body, "Go\n");
    }

    #[test]
    fn test_section_lines_preserve_order() {
        let lines = ["Acme Corp, 2019", "  • Built a compiler", "  • Shipped the thing"];
        let text = format!("PROJECTS\n{}", lines.join("\n"));
        let map = SectionMap::segment(&text);

        let section = map.get("PROJECTS").unwrap();
        assert_eq!(section.lines().collect::<Vec<_>>(), lines);
        assert_eq!(section.body, format!("{}\n", lines.join("\n")));
    }

    #[test]
    fn test_find_related_matches_substrings_both_ways() {
        let map = SectionMap::segment("WORK EXPERIENCE\nAcme\nPROJECTS\nThing\n");
        assert_eq!(map.find_related("EXPERIENCE").unwrap().name, "WORK EXPERIENCE");
        assert_eq!(map.find_related("SELECTED PROJECTS").unwrap().name, "PROJECTS");
        assert!(map.find_related("EDUCATION").is_none());
    }

    #[test]
    fn test_content_sections_can_repeat() {
        let map = SectionMap::segment("WORK EXPERIENCE\nAcme\nSKILLS\nRust\n");
        let picked: Vec<_> = map.content_sections().map(|s| s.name.as_str()).collect();
        assert_eq!(picked, vec!["WORK EXPERIENCE", "WORK EXPERIENCE"]);
    }
}
