//! Abstracts, keyword lists and translated titles in all three languages
//!
//! One routine runs per [`LanguageProfile`]; languages differ only in their
//! markers, bands and keyword policy.

use super::{outcome, Checklist, Measured, MULTILINGUAL_CATEGORY};
use crate::config::TemplateConfig;
use crate::extractors::numeric::{list_item_count, word_count};
use crate::extractors::span::capture_section;
use crate::patterns::{language_patterns, KeywordPolicy, LanguageProfile, PROFILES};
use shared_types::{Check, Language, RuleId, ValidationResult};

pub fn check_multilingual(text: &str, config: &TemplateConfig) -> ValidationResult {
    PROFILES
        .iter()
        .fold(Checklist::new(), |checklist, profile| {
            checklist
                .always(|| check_abstract(text, profile.language, config))
                .always(|| check_keywords(text, profile, config))
                .when(profile.translated_title, || {
                    check_translated_title(text, profile.language, config)
                })
        })
        .finish(MULTILINGUAL_CATEGORY)
}

/// Abstract between its marker and the next abstract/keywords marker,
/// bounded by the language's word band
pub fn check_abstract(text: &str, language: Language, config: &TemplateConfig) -> Check {
    let band = config.abstracts.for_language(language);
    let count = capture_section(&language_patterns(language).abstract_body, text).map(word_count);
    tracing::trace!(language = language.code(), words = ?count, "abstract");

    let lang = language.locative();
    let measured = Measured::classify(count, |n| band.contains(n));
    let message = match measured {
        Measured::Absent => {
            format!("Аннотация на {lang} языке не найдена. Требуется {band} слов.")
        }
        Measured::OutOfBand(n) => {
            format!("Аннотация на {lang} содержит {n} слов, требуется {band}.")
        }
        Measured::InBand(n) => {
            format!("Аннотация на {lang} содержит {n} слов (норма {band}).")
        }
    };
    outcome(
        RuleId::Abstract(language),
        format!("Аннотация на {lang}"),
        measured.passed(),
        message,
    )
}

pub fn check_keywords(text: &str, profile: &LanguageProfile, config: &TemplateConfig) -> Check {
    match profile.keyword_policy {
        KeywordPolicy::Counted => check_keyword_count(text, profile, config),
        KeywordPolicy::PresenceOnly => check_keyword_presence(text, profile),
    }
}

fn check_keyword_count(text: &str, profile: &LanguageProfile, config: &TemplateConfig) -> Check {
    let band = config.keywords;
    let language = profile.language;
    let count = capture_section(&language_patterns(language).keyword_list, text).map(list_item_count);
    tracing::trace!(language = language.code(), keywords = ?count, "keyword list");

    let measured = Measured::classify(count, |n| band.contains(n));
    let message = match measured {
        Measured::Absent => format!(
            "Требуется указать {band} ключевых слов ({}).",
            profile.keywords_markers[0]
        ),
        Measured::OutOfBand(n) => format!("Указано {n} ключевых слов, требуется {band}."),
        Measured::InBand(n) => format!("Указано {n} ключевых слов (норма {band})."),
    };
    outcome(
        RuleId::Keywords(language),
        format!("Ключевые слова на {}", language.locative()),
        measured.passed(),
        message,
    )
}

fn check_keyword_presence(text: &str, profile: &LanguageProfile) -> Check {
    let language = profile.language;
    let lang = language.locative();
    let passed = language_patterns(language).keywords_heading.is_match(text);
    let message = if passed {
        format!("Ключевые слова на {lang} присутствуют.")
    } else {
        format!(
            "Требуется указать ключевые слова на {lang} ({}).",
            profile.keywords_markers[0]
        )
    };
    outcome(
        RuleId::Keywords(language),
        format!("Ключевые слова на {lang}"),
        passed,
        message,
    )
}

/// A full line in the language's uppercase alphabet, longer than the minimum
pub fn check_translated_title(text: &str, language: Language, config: &TemplateConfig) -> Check {
    let pattern = &language_patterns(language).uppercase_line;
    let passed = text.lines().map(str::trim).any(|line| {
        line.chars().count() > config.translated_title_min_len
            && line == line.to_uppercase()
            && pattern.is_match(line)
    });

    let lang = language.locative();
    let message = if passed {
        format!("Заголовок на {lang} языке оформлен заглавными буквами.")
    } else {
        format!("Требуется заголовок на {lang} языке, написанный ЗАГЛАВНЫМИ БУКВАМИ.")
    };
    outcome(
        RuleId::TranslatedTitle(language),
        format!("Заголовок на {lang} заглавными буквами"),
        passed,
        message,
    )
}
