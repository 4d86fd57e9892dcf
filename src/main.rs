//! Resume analyzer: heuristic resume checks from the command line

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction};
use resume_analyzer::config::{Config, OutputFormat};
use resume_analyzer::input::InputManager;
use resume_analyzer::output::formatter::truncate_text;
use resume_analyzer::output::{save_report_to_file, suggest_filename, ReportDocument, ReportGenerator, ReportMetadata};
use resume_analyzer::{ResumeAnalyzer, ResumeAnalyzerError, Result};
use std::path::{Path, PathBuf};
use std::process;

/// Filter used when `RUST_LOG` is unset
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_log_filter(cli.verbose))).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) if path.exists() => Config::load_from(path),
        Some(_) => Ok(Config::default()),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
            annotate,
        } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, cli::RESUME_EXTENSIONS)
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;
            if let Some(job) = &job {
                cli::validate_file_extension(job, cli::JOB_EXTENSIONS)
                    .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e)))?;
            }

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeAnalyzerError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager
                .extract_text(&resume)
                .await
                .with_context(|| format!("Failed to read resume {}", resume.display()))?;
            let job_text = match &job {
                Some(path) => Some(
                    input_manager
                        .extract_text(path)
                        .await
                        .with_context(|| format!("Failed to read job description {}", path.display()))?,
                ),
                None => None,
            };

            let analyzer = ResumeAnalyzer::with_config(resume_text, config.analysis.clone());
            let report = analyzer.analyze(job_text.as_deref()).await;

            let metadata = ReportMetadata::new(
                resume.display().to_string(),
                job.as_ref().map(|path| path.display().to_string()),
                analyzer.sections().len(),
            );
            let mut document = ReportDocument::new(report, metadata);
            if annotate {
                document = document.with_annotations(analyzer.resume());
            }

            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed, true, true, true);
            let rendered = generator.generate_report(&document, &output_format)?;

            match save {
                Some(path) => {
                    let target = save_target(path, &output_format, &resume);
                    save_report_to_file(&rendered, &target)
                        .with_context(|| format!("Failed to save report to {}", target.display()))?;
                    println!("💾 Report saved to {}", target.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Sections { resume } => {
            cli::validate_file_extension(&resume, cli::RESUME_EXTENSIONS)
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;

            let resume_text = InputManager::new()
                .extract_text(&resume)
                .await
                .with_context(|| format!("Failed to read resume {}", resume.display()))?;
            let analyzer = ResumeAnalyzer::with_config(resume_text, config.analysis.clone());
            let sections = analyzer.sections();

            if sections.is_empty() {
                println!("⚠️  No sections detected in {}", resume.display());
                return Ok(());
            }

            println!("📑 {} sections in {}\n", sections.len(), resume.display());
            for section in sections.iter() {
                let lines: Vec<&str> = section
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect();
                println!("{} ({} lines)", section.name, lines.len());
                if let Some(first) = lines.first() {
                    println!("   {}", truncate_text(first, 70));
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("{}", rendered);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset to defaults");
            }

            Some(ConfigAction::Set { key, value }) => {
                config.set(&key, &value)?;
                config.save_to(config_path)?;
                println!("✅ Set {} = {}", key, value);
            }

            Some(ConfigAction::Path) => println!("{}", config_path.display()),
        },
    }

    Ok(())
}

/// A directory target gets a generated, timestamped file name
fn save_target(path: PathBuf, format: &OutputFormat, resume: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(suggest_filename(format, &resume.to_string_lossy(), true))
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter() {
        assert_eq!(default_log_filter(false), "info");
        assert_eq!(default_log_filter(true), "debug");
    }
}
