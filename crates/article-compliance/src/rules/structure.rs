//! Structure checks: page count, classification code, title and author line
//!
//! The author check is anchored on the line found by the title scan. The scan
//! runs once and its [`TitleScan`] is passed to the author check, so a
//! document without a qualifying title never gets an author match either.

use super::{outcome, Checklist, STRUCTURE_CATEGORY};
use crate::config::TemplateConfig;
use crate::extractors::numeric::LetterStats;
use crate::patterns::{Script, IDENTIFIER_LINE, IDENTIFIER_PREFIX};
use shared_types::{Check, RuleId, ValidationResult};

/// Result of scanning the top of the document for the main title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TitleScan {
    /// Index into the non-blank line sequence
    pub line_index: Option<usize>,
}

impl TitleScan {
    pub fn found(&self) -> bool {
        self.line_index.is_some()
    }
}

pub fn check_structure(lines: &[&str], pages: u32, config: &TemplateConfig) -> ValidationResult {
    let title = scan_title(lines, config);
    tracing::trace!(title_index = ?title.line_index, "title scan");

    Checklist::new()
        .always(|| check_page_count(pages, config))
        .always(|| check_identifier(lines))
        .always(|| title_check(title))
        .always(|| check_author_line(lines, title, config))
        .finish(STRUCTURE_CATEGORY)
}

pub fn check_page_count(pages: u32, config: &TemplateConfig) -> Check {
    let band = config.pages;
    let passed = band.contains(pages as usize);
    let verdict = if passed {
        format!("Соответствует требованию {band} страниц.")
    } else {
        format!("Требуется {band} страниц.")
    };
    outcome(
        RuleId::PageCount,
        "Объем документа",
        passed,
        format!("Документ содержит {pages} страниц. {verdict}"),
    )
}

/// Only the first non-blank line is considered
pub fn check_identifier(lines: &[&str]) -> Check {
    let passed = lines
        .first()
        .is_some_and(|line| IDENTIFIER_LINE.is_match(line));
    let message = if passed {
        "УДК корректно указан в первой строке."
    } else {
        "УДК должен быть указан в первой строке (ՀՏԴ/UDC/УДК) с числовым кодом."
    };
    outcome(
        RuleId::Identifier,
        "УДК в первой строке",
        passed,
        message.to_string(),
    )
}

/// First line within the scan window that looks like an uppercase title
pub fn scan_title(lines: &[&str], config: &TemplateConfig) -> TitleScan {
    let line_index = lines
        .iter()
        .take(config.title.scan_lines)
        .position(|line| !IDENTIFIER_PREFIX.is_match(line) && is_title_line(line, config));
    TitleScan { line_index }
}

fn is_title_line(line: &str, config: &TemplateConfig) -> bool {
    let len = line.chars().count();
    if len <= config.title.min_len || len >= config.title.max_len {
        return false;
    }
    let stats = LetterStats::of(line);
    stats.letters >= config.title.min_letters
        && stats.uppercase_ratio() > config.title.uppercase_ratio
}

fn title_check(title: TitleScan) -> Check {
    let message = if title.found() {
        "Заголовок корректно оформлен заглавными буквами."
    } else {
        "Заголовок должен быть написан ЗАГЛАВНЫМИ БУКВАМИ в начале статьи."
    };
    outcome(
        RuleId::UppercaseTitle,
        "Заголовок заглавными буквами",
        title.found(),
        message.to_string(),
    )
}

/// Author line within the few lines directly below the title
pub fn check_author_line(lines: &[&str], title: TitleScan, config: &TemplateConfig) -> Check {
    let author = title.line_index.and_then(|index| {
        lines
            .iter()
            .skip(index + 1)
            .take(config.author.scan_lines)
            .find(|line| is_author_line(line, config))
    });

    let message = match (title.found(), author) {
        (_, Some(line)) => format!("Автор указан под заголовком: {line}"),
        (true, None) => "Под заголовком не найдена строка с именем автора.".to_string(),
        (false, None) => "Заголовок не найден, информация об авторе не может быть проверена."
            .to_string(),
    };
    outcome(
        RuleId::AuthorLine,
        "Информация об авторе",
        author.is_some(),
        message,
    )
}

fn is_author_line(line: &str, config: &TemplateConfig) -> bool {
    let len = line.chars().count();
    if len <= config.author.min_len || len >= config.author.max_len {
        return false;
    }
    let has_letter = line.chars().any(|c| {
        matches!(
            Script::of(c),
            Some(Script::Latin | Script::Cyrillic | Script::Armenian)
        )
    });
    if !has_letter {
        return false;
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();
    config.author.tokens.contains(tokens.len())
        && tokens
            .iter()
            .any(|token| token.chars().next().is_some_and(char::is_uppercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::span::non_blank_lines;
    use shared_types::Severity;

    fn config() -> TemplateConfig {
        TemplateConfig::default()
    }

    #[test]
    fn test_page_count_band_edges() {
        for (pages, passed) in [(7, false), (8, true), (12, true), (13, false)] {
            let check = check_page_count(pages, &config());
            assert_eq!(check.passed, passed, "pages = {pages}");
            assert!(check.message.contains(&pages.to_string()));
            let expected = if passed { Severity::Success } else { Severity::Error };
            assert_eq!(check.severity, expected);
        }
    }

    #[test]
    fn test_identifier_only_first_line() {
        assert!(check_identifier(&["УДК: 336.5", "TITLE"]).passed);
        assert!(!check_identifier(&["Some title"]).passed);
        assert!(!check_identifier(&["Some title", "УДК: 336.5"]).passed);
        assert!(!check_identifier(&[]).passed);
    }

    #[test]
    fn test_title_skips_identifier_line() {
        let lines = ["UDC 336.71 FINANCIAL MARKETS", "ФИНАНСОВЫЕ РЫНКИ АРМЕНИИ", "Иван Петров"];
        assert_eq!(scan_title(&lines, &config()).line_index, Some(1));
    }

    #[test]
    fn test_title_requires_uppercase_ratio_and_length() {
        let cfg = config();
        // Too short (15 chars is not > 15)
        assert!(!is_title_line("ABCDEFGHIJKLMNO", &cfg));
        assert!(is_title_line("ABCDEFGHIJKLMNOP", &cfg));
        assert!(!is_title_line("Financial Markets Of Armenia", &cfg));
        // Enough length but fewer than 10 letters
        assert!(!is_title_line("ABC 1234567890 DEF", &cfg));
        assert!(is_title_line("ՖԻՆԱՆՍԱԿԱՆ ՇՈՒԿԱՆԵՐԸ ՀԱՅԱՍՏԱՆՈՒՄ", &cfg));
    }

    #[test]
    fn test_title_outside_scan_window_is_ignored() {
        let mut lines = vec!["filler line"; 15];
        lines.push("THE TITLE IS FAR TOO LATE");
        assert!(!scan_title(&lines, &config()).found());
    }

    #[test]
    fn test_author_found_below_title() {
        let text = "ՀՏԴ՝ 336.7\nՖԻՆԱՆՍԱԿԱՆ ՇՈՒԿԱՆԵՐԸ ՀԱՅԱՍՏԱՆՈՒՄ\n\nԱրամ Պետրոսյան\n";
        let lines = non_blank_lines(text);
        let title = scan_title(&lines, &config());
        assert_eq!(title.line_index, Some(1));
        let check = check_author_line(&lines, title, &config());
        assert!(check.passed, "{}", check.message);
    }

    #[test]
    fn test_author_rejects_long_sentences() {
        let lines = [
            "FINANCIAL MARKETS OF ARMENIA",
            "this line has far too many words to be an author line",
        ];
        let title = scan_title(&lines, &config());
        assert!(!check_author_line(&lines, title, &config()).passed);
    }

    #[test]
    fn test_author_without_title_anchor_fails() {
        let lines = ["УДК: 1", "Financial markets", "Ivan Petrov"];
        let title = scan_title(&lines, &config());
        assert!(!title.found());
        let check = check_author_line(&lines, title, &config());
        assert!(!check.passed);
        assert_eq!(check.severity, Severity::Error);
    }

    #[test]
    fn test_author_window_is_five_lines() {
        let mut lines = vec!["FINANCIAL MARKETS OF ARMENIA"];
        lines.extend(["1234567"; 5]);
        lines.push("Ivan Petrov");
        let title = scan_title(&lines, &config());
        assert!(!check_author_line(&lines, title, &config()).passed);
    }

    #[test]
    fn test_empty_document_fails_closed() {
        let result = check_structure(&[], 0, &config());
        assert_eq!(result.checks.len(), 4);
        assert!(result.checks.iter().all(|c| !c.passed));
    }
}
