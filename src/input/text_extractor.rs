//! Text extraction from various file formats

use crate::error::{Result, ResumeAnalyzerError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeAnalyzerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

/// Renders Markdown to plain text, keeping one line per heading, paragraph
/// line and list item so the resume stays segmentable.
pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(Self::to_text(&markdown_content))
    }
}

fn break_line(output: &mut String) {
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
}

impl MarkdownExtractor {
    pub fn to_text(markdown: &str) -> String {
        // A byte order mark would hide the first heading from the parser
        let markdown = markdown.strip_prefix('\u{FEFF}').unwrap_or(markdown);
        let mut output = String::new();
        // Next number per open list; None for unordered lists
        let mut lists: Vec<Option<u64>> = Vec::new();
        let mut item_open = false;

        for event in Parser::new(markdown) {
            match event {
                Event::Start(Tag::List(start)) => {
                    break_line(&mut output);
                    lists.push(start);
                }
                Event::End(Tag::List(_)) => {
                    lists.pop();
                }
                Event::Start(Tag::Item) => {
                    break_line(&mut output);
                    output.push_str(&"  ".repeat(lists.len().saturating_sub(1)));
                    match lists.last_mut() {
                        Some(Some(number)) => {
                            output.push_str(&format!("{}. ", number));
                            *number += 1;
                        }
                        _ => output.push_str("• "),
                    }
                    item_open = true;
                }
                Event::Start(Tag::Paragraph) | Event::Start(Tag::Heading(..)) => {
                    if !item_open {
                        break_line(&mut output);
                    }
                }
                Event::End(Tag::Paragraph) | Event::End(Tag::Heading(..)) | Event::End(Tag::Item) => {
                    break_line(&mut output);
                }
                Event::Text(text) | Event::Code(text) => {
                    output.push_str(&text);
                    item_open = false;
                }
                Event::SoftBreak | Event::HardBreak | Event::Rule => break_line(&mut output),
                _ => {}
            }
        }

        output
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
