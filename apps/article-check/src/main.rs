//! article-check binary
//!
//! Checks a `.docx` article against the journal template and prints the
//! report. Logs go to stderr so stdout carries only the report.

use anyhow::{Context, Result};
use article_check::reporter::{CheckedFile, ConsoleReporter, JsonReporter};
use article_compliance::{DocumentValidator, TemplateConfig};
use clap::{Parser, ValueEnum};
use shared_docx::DocxExtractor;
use shared_types::DocumentContent;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "article-check")]
#[command(version, about = "Check a journal article against the publication template")]
struct Args {
    /// Article to check (.docx)
    file: PathBuf,

    /// Page count to use instead of the word-based estimate
    #[arg(long)]
    pages: Option<u32>,

    /// Template overrides (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Exit with status 1 when any error-severity check fails
    #[arg(long)]
    strict: bool,

    /// Words per page for the page estimate
    #[arg(long)]
    words_per_page: Option<u32>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Ошибка обработки документа: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let mut config = match &args.config {
        Some(path) => TemplateConfig::from_file(path)?,
        None => TemplateConfig::default(),
    };
    if let Some(words_per_page) = args.words_per_page {
        config.words_per_page = words_per_page;
        config.validate().context("invalid --words-per-page")?;
    }

    let extracted = DocxExtractor::extract_file(&args.file, config.words_per_page)
        .with_context(|| format!("failed to extract {}", args.file.display()))?;
    tracing::info!(
        words = extracted.word_count,
        estimated_pages = extracted.pages,
        "extracted document"
    );

    let mut document = DocumentContent::from(extracted);
    if let Some(pages) = args.pages {
        document.pages = pages;
    }

    let report = DocumentValidator::with_config(config).validate(&document);
    let summary = report.summary();
    tracing::info!(
        passed = summary.passed_checks,
        total = summary.total_checks,
        percentage = summary.percentage,
        "validation complete"
    );

    let file = args.file.display().to_string();
    let output = match args.format {
        OutputFormat::Text => ConsoleReporter::format(&file, &report)?,
        OutputFormat::Json => JsonReporter::format(
            &CheckedFile::new(&file, &report, chrono::Utc::now()),
            true,
        )?,
    };
    println!("{output}");

    if args.strict && report.has_errors() {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "article-check",
            "paper.docx",
            "--pages",
            "9",
            "--format",
            "json",
            "--strict",
        ])
        .unwrap();
        assert_eq!(args.file, PathBuf::from("paper.docx"));
        assert_eq!(args.pages, Some(9));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.strict);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["article-check", "paper.docx"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.strict);
        assert!(args.words_per_page.is_none());
    }

    #[test]
    fn test_non_docx_is_a_processing_failure() {
        let args = Args::try_parse_from(["article-check", "paper.pdf"]).unwrap();
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("Unsupported file format"));
    }
}
