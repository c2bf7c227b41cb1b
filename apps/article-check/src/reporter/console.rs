//! Console reporter for validation reports
//!
//! Summary counters first, then every category with one marked line per
//! check, then the verdict.

use anyhow::Result;
use shared_types::{Check, Severity, ValidationReport, ValidationResult};
use std::fmt::Write;

const RULE: &str = "────────────────────────────────────────────────────────────────";

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn format(file: &str, report: &ValidationReport) -> Result<String> {
        let mut output = String::new();
        let summary = report.summary();

        writeln!(output)?;
        writeln!(output, "Файл:          {}", file)?;
        writeln!(output, "Соответствие:  {}%", summary.percentage)?;
        writeln!(output, "Всего проверок: {}", summary.total_checks)?;
        writeln!(output, "  Пройдено:     {}", summary.passed_checks)?;
        writeln!(
            output,
            "  Не пройдено:  {} (ошибок: {}, предупреждений: {})",
            summary.failed_checks, summary.errors, summary.warnings
        )?;
        writeln!(output)?;

        for result in &report.results {
            Self::format_category(&mut output, result)?;
        }

        writeln!(output, "{RULE}")?;
        if report.is_fully_compliant() {
            writeln!(output, "✓ Документ полностью соответствует требованиям")?;
        } else {
            writeln!(
                output,
                "✗ Обнаружено {} несоответствий",
                summary.failed_checks
            )?;
        }
        writeln!(output)?;
        Ok(output)
    }

    fn format_category(output: &mut String, result: &ValidationResult) -> Result<()> {
        writeln!(output, "{RULE}")?;
        writeln!(
            output,
            "{} ({}/{})",
            result.category,
            result.passed_count(),
            result.checks.len()
        )?;
        writeln!(output, "{RULE}")?;

        for check in &result.checks {
            writeln!(
                output,
                "  {} {}: {}",
                Self::marker(check),
                check.name,
                check.message
            )?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn marker(check: &Check) -> &'static str {
        match check.severity {
            Severity::Success => "✓",
            Severity::Warning => "⚠",
            Severity::Error => "✗",
        }
    }
}
