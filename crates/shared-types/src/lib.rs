pub mod types;

pub use types::{
    Check, DocumentContent, Language, ReportSummary, RuleId, Severity, ValidationReport,
    ValidationResult,
};
