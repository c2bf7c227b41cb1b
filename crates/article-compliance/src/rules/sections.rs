//! Required body sections: introduction, analysis, conclusion

use super::{outcome, Checklist, Measured, SECTIONS_CATEGORY};
use crate::config::TemplateConfig;
use crate::extractors::numeric::word_count;
use crate::extractors::span::capture_section;
use crate::patterns::{ANALYSIS, CONCLUSION_BODY, INTRODUCTION};
use regex::Regex;
use shared_types::{Check, RuleId, ValidationResult};

pub fn check_sections(text: &str, config: &TemplateConfig) -> ValidationResult {
    Checklist::new()
        .always(|| {
            check_presence(
                text,
                &INTRODUCTION,
                RuleId::Introduction,
                "Введение",
                "Раздел «Введение» (Ներածություն/Introduction) не найден.",
            )
        })
        .always(|| {
            check_presence(
                text,
                &ANALYSIS,
                RuleId::Analysis,
                "Анализ",
                "Раздел с анализом (Վերլուծություն/Analysis) не найден.",
            )
        })
        .always(|| check_conclusion(text, config))
        .finish(SECTIONS_CATEGORY)
}

fn check_presence(
    text: &str,
    pattern: &Regex,
    rule: RuleId,
    name: &str,
    missing: &str,
) -> Check {
    let passed = pattern.is_match(text);
    let message = if passed {
        format!("Раздел «{name}» присутствует.")
    } else {
        missing.to_string()
    };
    outcome(rule, name, passed, message)
}

/// Conclusion up to the bibliography (or end of text), at most
/// `conclusion_max_words` words
pub fn check_conclusion(text: &str, config: &TemplateConfig) -> Check {
    let max = config.conclusion_max_words;
    let count = capture_section(&CONCLUSION_BODY, text).map(word_count);
    tracing::trace!(words = ?count, "conclusion");

    let measured = Measured::classify(count, |n| n <= max);
    let message = match measured {
        Measured::Absent => "Раздел «Заключение» (Եզրակացություն/Conclusion) не найден.".to_string(),
        Measured::OutOfBand(n) => {
            format!("Заключение содержит {n} слов, допускается не более {max}.")
        }
        Measured::InBand(n) => format!("Заключение содержит {n} слов (не более {max})."),
    };
    outcome(RuleId::Conclusion, "Заключение", measured.passed(), message)
}
