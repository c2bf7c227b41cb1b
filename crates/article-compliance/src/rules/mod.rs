//! Template rule groups
//!
//! Each group consumes the same document and produces one
//! [`ValidationResult`]. Groups never read each other's output.

pub mod multilingual;
pub mod references;
pub mod sections;
pub mod structure;

use shared_types::{Check, RuleId, Severity, ValidationResult};

pub const STRUCTURE_CATEGORY: &str = "Структура документа";
pub const MULTILINGUAL_CATEGORY: &str = "Многоязычное оформление";
pub const SECTIONS_CATEGORY: &str = "Разделы статьи";
pub const REFERENCES_CATEGORY: &str = "Список литературы";

/// Severity a rule reports when it does not pass.
///
/// Fixed per rule and independent of what was measured.
pub fn failure_severity(rule: RuleId) -> Severity {
    match rule {
        RuleId::PageCount
        | RuleId::Identifier
        | RuleId::UppercaseTitle
        | RuleId::AuthorLine
        | RuleId::Abstract(_)
        | RuleId::TranslatedTitle(_)
        | RuleId::References => Severity::Error,

        RuleId::Keywords(_)
        | RuleId::Introduction
        | RuleId::Analysis
        | RuleId::Conclusion
        | RuleId::ReferenceFormat
        | RuleId::AuthorInfo => Severity::Warning,
    }
}

/// Build a check whose failure severity comes from [`failure_severity`]
pub fn outcome(rule: RuleId, name: impl Into<String>, passed: bool, message: String) -> Check {
    if passed {
        Check::pass(rule, name, message)
    } else {
        Check::fail(rule, name, message, failure_severity(rule))
    }
}

/// Ordered sequence of `(precondition, rule)` steps.
///
/// A step whose precondition is false is skipped entirely and emits nothing.
#[derive(Debug, Default)]
pub struct Checklist {
    checks: Vec<Check>,
}

impl Checklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn always(self, rule: impl FnOnce() -> Check) -> Self {
        self.when(true, rule)
    }

    pub fn when(mut self, precondition: bool, rule: impl FnOnce() -> Check) -> Self {
        if precondition {
            self.checks.push(rule());
        }
        self
    }

    pub fn finish(self, category: &str) -> ValidationResult {
        let result = ValidationResult::new(category, self.checks);
        tracing::debug!(
            category,
            total = result.checks.len(),
            passed = result.passed_count(),
            "rule group evaluated"
        );
        result
    }
}

/// Outcome of a word-count-bounded section check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measured {
    Absent,
    OutOfBand(usize),
    InBand(usize),
}

impl Measured {
    pub fn classify(count: Option<usize>, in_band: impl FnOnce(usize) -> bool) -> Self {
        match count {
            None => Measured::Absent,
            Some(n) if in_band(n) => Measured::InBand(n),
            Some(n) => Measured::OutOfBand(n),
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Measured::InBand(_))
    }
}
