//! JSON reporter for validation reports

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_types::{ReportSummary, ValidationReport, ValidationResult};

/// Envelope written to stdout with `--format json`
#[derive(Debug, Serialize)]
pub struct CheckedFile<'a> {
    pub file: &'a str,
    pub checked_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub results: &'a [ValidationResult],
}

impl<'a> CheckedFile<'a> {
    pub fn new(file: &'a str, report: &'a ValidationReport, checked_at: DateTime<Utc>) -> Self {
        Self {
            file,
            checked_at,
            summary: report.summary(),
            results: &report.results,
        }
    }
}

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    pub fn format(checked: &CheckedFile<'_>, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(checked)?
        } else {
            serde_json::to_string(checked)?
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use shared_types::{Check, RuleId, Severity};

    fn sample() -> ValidationReport {
        ValidationReport::new(vec![ValidationResult::new(
            "Список литературы",
            vec![
                Check::pass(RuleId::References, "Список литературы", "ok"),
                Check::fail(RuleId::AuthorInfo, "Сведения об авторе", "нет", Severity::Warning),
            ],
        )])
    }

    #[test]
    fn test_envelope_fields() {
        let report = sample();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let output = JsonReporter::format(&CheckedFile::new("paper.docx", &report, at), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["file"], "paper.docx");
        assert_eq!(value["checked_at"], "2024-05-01T12:00:00Z");
        assert_eq!(value["summary"]["total_checks"], 2);
        assert_eq!(value["summary"]["warnings"], 1);
        assert_eq!(value["summary"]["percentage"], 50);
        assert_eq!(value["results"][0]["category"], "Список литературы");
        assert_eq!(value["results"][0]["checks"][1]["severity"], "warning");
        assert_eq!(value["results"][0]["checks"][1]["rule"], "author_info");
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let report = sample();
        let checked = CheckedFile::new("paper.docx", &report, Utc::now());
        assert!(!JsonReporter::format(&checked, false).unwrap().contains('\n'));
        assert!(JsonReporter::format(&checked, true).unwrap().contains('\n'));
    }
}
