use serde::{Deserialize, Serialize};

/// Plain text of an article plus its estimated page count.
///
/// Produced by the extraction step and consumed once per validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContent {
    pub text: String,
    pub pages: u32,
}

impl DocumentContent {
    pub fn new(text: impl Into<String>, pages: u32) -> Self {
        Self {
            text: text.into(),
            pages,
        }
    }
}

/// The three languages an article must be presented in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Armenian,
    English,
    Russian,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Armenian, Language::English, Language::Russian];

    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::Armenian => "hy",
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    /// Prepositional form used in report messages ("на армянском")
    pub fn locative(self) -> &'static str {
        match self {
            Language::Armenian => "армянском",
            Language::English => "английском",
            Language::Russian => "русском",
        }
    }
}

/// Identifies the template rule a [`Check`] was produced by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    PageCount,
    Identifier,
    UppercaseTitle,
    AuthorLine,
    Abstract(Language),
    Keywords(Language),
    TranslatedTitle(Language),
    Introduction,
    Analysis,
    Conclusion,
    References,
    ReferenceFormat,
    AuthorInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Outcome of a single rule.
///
/// A passing check always carries [`Severity::Success`]; use [`Check::pass`]
/// and [`Check::fail`] rather than building the struct by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub rule: RuleId,
    pub name: String,
    pub passed: bool,
    pub message: String,
    pub severity: Severity,
}

impl Check {
    pub fn pass(rule: RuleId, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule,
            name: name.into(),
            passed: true,
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// A failed check. `Severity::Success` is not a failure severity and is
    /// recorded as `Severity::Error`.
    pub fn fail(
        rule: RuleId,
        name: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        let severity = match severity {
            Severity::Success => Severity::Error,
            other => other,
        };
        Self {
            rule,
            name: name.into(),
            passed: false,
            message: message.into(),
            severity,
        }
    }
}

/// Checks of one rule group, in evaluation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub category: String,
    pub checks: Vec<Check>,
}

impl ValidationResult {
    pub fn new(category: impl Into<String>, checks: Vec<Check>) -> Self {
        Self {
            category: category.into(),
            checks,
        }
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }
}

/// Full output of a validation run: one [`ValidationResult`] per rule group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn new(results: Vec<ValidationResult>) -> Self {
        Self { results }
    }

    /// All checks, flattened across categories
    pub fn checks(&self) -> impl Iterator<Item = &Check> {
        self.results.iter().flat_map(|r| r.checks.iter())
    }

    pub fn find(&self, rule: RuleId) -> Option<&Check> {
        self.checks().find(|c| c.rule == rule)
    }

    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary::default();
        for check in self.checks() {
            summary.total_checks += 1;
            match (check.passed, check.severity) {
                (true, _) => summary.passed_checks += 1,
                (false, Severity::Warning) => summary.warnings += 1,
                (false, _) => summary.errors += 1,
            }
        }
        summary.failed_checks = summary.total_checks - summary.passed_checks;
        summary.percentage = percentage(summary.passed_checks, summary.total_checks);
        summary
    }

    pub fn is_fully_compliant(&self) -> bool {
        self.checks().all(|c| c.passed)
    }

    pub fn has_errors(&self) -> bool {
        self.checks()
            .any(|c| !c.passed && c.severity == Severity::Error)
    }
}

/// Counters shown above the grouped check list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_checks: usize,
    pub passed_checks: usize,
    pub failed_checks: usize,
    pub warnings: usize,
    pub errors: usize,
    /// `round(passed / total * 100)`, 0 for an empty report
    pub percentage: u32,
}

fn percentage(passed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((passed as f64 / total as f64) * 100.0).round() as u32
}
