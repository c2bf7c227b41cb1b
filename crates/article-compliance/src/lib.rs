//! Journal template compliance checks for extracted article text
//!
//! Four independent rule groups run over the same text and page estimate:
//! structure, multilingual content, sections and references. The run is a
//! pure function of its inputs and always yields a complete report.

pub mod config;
pub mod extractors;
pub mod patterns;
pub mod rules;

pub use config::{Band, ConfigError, TemplateConfig};

use extractors::span::non_blank_lines;
use shared_types::{DocumentContent, ValidationReport};

/// Validator entry point
#[derive(Debug, Clone, Default)]
pub struct DocumentValidator {
    config: TemplateConfig,
}

impl DocumentValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TemplateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    pub fn validate(&self, document: &DocumentContent) -> ValidationReport {
        self.validate_text(&document.text, document.pages)
    }

    pub fn validate_text(&self, text: &str, pages: u32) -> ValidationReport {
        let lines = non_blank_lines(text);
        tracing::debug!(lines = lines.len(), pages, "validating document");

        let report = ValidationReport::new(vec![
            rules::structure::check_structure(&lines, pages, &self.config),
            rules::multilingual::check_multilingual(text, &self.config),
            rules::sections::check_sections(text, &self.config),
            rules::references::check_references(text, &self.config),
        ]);

        let summary = report.summary();
        tracing::debug!(
            total = summary.total_checks,
            passed = summary.passed_checks,
            percentage = summary.percentage,
            "validation finished"
        );
        report
    }
}

/// Validate with the journal's default template
pub fn validate_document(document: &DocumentContent) -> ValidationReport {
    DocumentValidator::new().validate(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules::{MULTILINGUAL_CATEGORY, REFERENCES_CATEGORY, SECTIONS_CATEGORY, STRUCTURE_CATEGORY};

    #[test]
    fn test_groups_in_fixed_order() {
        let report = validate_document(&DocumentContent::new("text", 10));
        let categories: Vec<_> = report.results.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            categories,
            vec![
                STRUCTURE_CATEGORY,
                MULTILINGUAL_CATEGORY,
                SECTIONS_CATEGORY,
                REFERENCES_CATEGORY
            ]
        );
    }

    #[test]
    fn test_custom_config_is_applied() {
        let config = TemplateConfig {
            pages: Band::new(1, 3),
            ..TemplateConfig::default()
        };
        let report = DocumentValidator::with_config(config).validate_text("", 2);
        let pages = report.find(shared_types::RuleId::PageCount).unwrap();
        assert!(pages.passed);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let document = DocumentContent::new("УДК: 1\nTITLE LINE IN CAPITALS\nИван Петров", 9);
        assert_eq!(validate_document(&document), validate_document(&document));
    }
}
