//! Report rendering and issue highlighting

pub mod formatter;
pub mod highlight;
pub mod report;

pub use formatter::{save_report_to_file, suggest_filename, OutputFormatter, ReportGenerator};
pub use highlight::{annotate_lines, issue_for_text, AnnotatedLine, Highlight};
pub use report::{ReportDocument, ReportMetadata};
