//! Bibliography and trailing author information
//!
//! The numbering check only runs when the bibliography itself was found, so
//! this group is the one place where the number of emitted checks depends on
//! the document.

use super::{outcome, Checklist, REFERENCES_CATEGORY};
use crate::config::TemplateConfig;
use crate::extractors::numeric::numbered_line_count;
use crate::extractors::span::capture_section;
use crate::patterns::{AUTHOR_INFO, REFERENCES, REFERENCES_BODY};
use shared_types::{Check, RuleId, ValidationResult};

pub fn check_references(text: &str, config: &TemplateConfig) -> ValidationResult {
    let has_references = REFERENCES.is_match(text);

    Checklist::new()
        .always(|| references_check(has_references))
        .when(has_references, || check_reference_format(text, config))
        .always(|| check_author_info(text))
        .finish(REFERENCES_CATEGORY)
}

fn references_check(found: bool) -> Check {
    let message = if found {
        "Раздел с литературой присутствует."
    } else {
        "Требуется раздел со списком литературы (Գրականություն/References/Литература)."
    };
    outcome(
        RuleId::References,
        "Список литературы",
        found,
        message.to_string(),
    )
}

/// Numbered entries ("1. ...") between the bibliography heading and the
/// author information block
pub fn check_reference_format(text: &str, config: &TemplateConfig) -> Check {
    let min = config.min_numbered_references;
    let count = capture_section(&REFERENCES_BODY, text)
        .map(numbered_line_count)
        .unwrap_or(0);
    tracing::trace!(entries = count, "numbered references");

    let passed = count >= min;
    let message = if passed {
        format!("Список литературы пронумерован ({count} источников).")
    } else {
        format!(
            "Найдено {count} пронумерованных источников, требуется не менее {min} в формате «1. Автор, Название»."
        )
    };
    outcome(
        RuleId::ReferenceFormat,
        "Оформление списка литературы",
        passed,
        message,
    )
}

pub fn check_author_info(text: &str) -> Check {
    let passed = AUTHOR_INFO.is_match(text);
    let message = if passed {
        "Сведения об авторе присутствуют."
    } else {
        "Рекомендуется добавить сведения об авторе в конце статьи."
    };
    outcome(
        RuleId::AuthorInfo,
        "Сведения об авторе",
        passed,
        message.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Severity;

    #[test]
    fn test_format_check_skipped_without_bibliography() {
        let result = check_references("plain body text", &TemplateConfig::default());
        let rules: Vec<_> = result.checks.iter().map(|c| c.rule).collect();
        assert_eq!(rules, vec![RuleId::References, RuleId::AuthorInfo]);
        assert_eq!(result.checks[0].severity, Severity::Error);
        assert_eq!(result.checks[1].severity, Severity::Warning);
    }

    #[test]
    fn test_two_numbered_entries_is_a_warning() {
        let text = "Литература\n1. A\n2. B\n";
        let result = check_references(text, &TemplateConfig::default());
        assert_eq!(result.checks.len(), 3);
        assert!(result.checks[0].passed);

        let format = &result.checks[1];
        assert_eq!(format.rule, RuleId::ReferenceFormat);
        assert!(!format.passed);
        assert_eq!(format.severity, Severity::Warning);
        assert!(format.message.contains('2'));
    }

    #[test]
    fn test_third_numbered_entry_flips_to_success() {
        let text = "Литература\n1. A\n2. B\n3. C\n";
        let check = check_reference_format(text, &TemplateConfig::default());
        assert!(check.passed);
        assert_eq!(check.severity, Severity::Success);
    }

    #[test]
    fn test_numbering_stops_at_author_info() {
        let text = "References\n1. A\n2. B\nInformation about the author\n3. Phone\n4. Email\n";
        let check = check_reference_format(text, &TemplateConfig::default());
        assert!(!check.passed, "{}", check.message);
    }

    #[test]
    fn test_numbered_bibliography_heading() {
        let text = "4. Conclusion\nDone.\n5. References\n1. A\n2. B\n3. C\n";
        let result = check_references(text, &TemplateConfig::default());
        assert_eq!(result.checks.len(), 3);
        let format = &result.checks[1];
        assert!(format.passed, "{}", format.message);
        assert!(format.message.contains('3'));
    }

    #[test]
    fn test_inline_mention_counts_as_presence_only() {
        // Presence matches anywhere; the entries are read from a heading line
        let text = "See the list of references below.\n1. A\n2. B\n3. C";
        let result = check_references(text, &TemplateConfig::default());
        assert!(result.checks[0].passed);
        assert!(!result.checks[1].passed);
    }

    #[test]
    fn test_author_info_markers() {
        assert!(check_author_info("Сведения об авторах\nИванов").passed);
        assert!(check_author_info("Сведения об авторе").passed);
        assert!(check_author_info("Информация об авторе").passed);
        assert!(check_author_info("Տեղեկություններ հեղինակի մասին").passed);
        assert!(check_author_info("INFORMATION ABOUT THE AUTHOR").passed);
        assert!(!check_author_info("nothing").passed);
    }
}
