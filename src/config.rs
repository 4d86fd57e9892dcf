//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// Thresholds used by the heuristic analyzers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Job-fit scores below this add a "missing keywords" suggestion
    pub job_fit_threshold: u8,
    /// Bullets shorter than this (after stripping markers) are skipped by clarity checks
    pub min_bullet_length: usize,
    /// Lines must be longer than this to count as sentences for grammar checks
    pub sentence_min_length: usize,
    /// Number of distinct bullet indentation levels tolerated
    pub max_indent_levels: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            _ => Err(format!(
                "Invalid output format: {}. Supported: console, json, markdown, html",
                s
            )),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            job_fit_threshold: 70,
            min_bullet_length: 5,
            sentence_min_length: 20,
            max_indent_levels: 2,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load the user config, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    /// Set a value by dotted key, e.g. `analysis.job_fit_threshold`
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "analysis.job_fit_threshold" => {
                let threshold: u8 = parse_value(key, value)?;
                if threshold > 100 {
                    return Err(ResumeAnalyzerError::Configuration(format!(
                        "{} must be between 0 and 100, got {}",
                        key, threshold
                    )));
                }
                self.analysis.job_fit_threshold = threshold;
            }
            "analysis.min_bullet_length" => self.analysis.min_bullet_length = parse_value(key, value)?,
            "analysis.sentence_min_length" => self.analysis.sentence_min_length = parse_value(key, value)?,
            "analysis.max_indent_levels" => self.analysis.max_indent_levels = parse_value(key, value)?,
            "output.format" => {
                self.output.format = value.parse().map_err(ResumeAnalyzerError::Configuration)?;
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            _ => {
                return Err(ResumeAnalyzerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| {
        ResumeAnalyzerError::Configuration(format!("Invalid value '{}' for {}: {}", value, key, e))
    })
}
