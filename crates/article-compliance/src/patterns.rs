//! Marker vocabularies and regex patterns for the journal template
//!
//! Per-language markers are declared once in [`PROFILES`]; the compiled
//! patterns used by the rule groups are derived from that table.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::Language;

/// Writing systems recognised by the title and author heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Cyrillic,
    Armenian,
    Greek,
}

impl Script {
    /// Script of an alphabetic character, if it is one we count
    pub fn of(c: char) -> Option<Script> {
        if !c.is_alphabetic() {
            return None;
        }
        match c {
            'A'..='Z' | 'a'..='z' | '\u{00C0}'..='\u{024F}' => Some(Script::Latin),
            '\u{0400}'..='\u{04FF}' => Some(Script::Cyrillic),
            '\u{0531}'..='\u{0556}' | '\u{0560}'..='\u{0588}' => Some(Script::Armenian),
            '\u{0370}'..='\u{03FF}' => Some(Script::Greek),
            _ => None,
        }
    }
}

/// How a language's keyword list is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordPolicy {
    /// Split into items and bound the count
    Counted,
    /// Marker presence only
    PresenceOnly,
}

/// Declarative marker set for one article language.
///
/// Marker entries are regex fragments and are joined into alternations.
#[derive(Debug)]
pub struct LanguageProfile {
    pub language: Language,
    /// Classification code prefix expected on the first line
    pub identifier: &'static str,
    pub abstract_markers: &'static [&'static str],
    pub keywords_markers: &'static [&'static str],
    pub keyword_policy: KeywordPolicy,
    /// Character class body of the language's uppercase alphabet
    pub uppercase_class: &'static str,
    /// Whether a separate uppercase title in this language is required
    pub translated_title: bool,
}

pub static PROFILES: [LanguageProfile; 3] = [
    LanguageProfile {
        language: Language::Armenian,
        identifier: "ՀՏԴ",
        abstract_markers: &["Ամփոփում", "Համառոտագիր", "Բնութագիր"],
        keywords_markers: &["Հիմնաբառեր", "Բանալի բառեր"],
        keyword_policy: KeywordPolicy::Counted,
        uppercase_class: "Ա-Ֆ",
        translated_title: false,
    },
    LanguageProfile {
        language: Language::English,
        identifier: "UDC",
        abstract_markers: &["Abstract"],
        keywords_markers: &["Keywords?", "Key words"],
        keyword_policy: KeywordPolicy::PresenceOnly,
        uppercase_class: "A-Z",
        translated_title: true,
    },
    LanguageProfile {
        language: Language::Russian,
        identifier: "УДК",
        abstract_markers: &["Аннотация", "Анотация", "Резюме"],
        keywords_markers: &["Ключевые слова"],
        keyword_policy: KeywordPolicy::PresenceOnly,
        uppercase_class: "А-ЯЁ",
        translated_title: true,
    },
];

pub fn profile(language: Language) -> &'static LanguageProfile {
    match language {
        Language::Armenian => &PROFILES[0],
        Language::English => &PROFILES[1],
        Language::Russian => &PROFILES[2],
    }
}

/// Section headings shared by all three languages
pub const INTRODUCTION_MARKERS: &[&str] = &["Ներածություն", "Introduction", "Введение"];
pub const ANALYSIS_MARKERS: &[&str] = &["Վերլուծություն", "Analysis", "Анализ"];
pub const CONCLUSION_MARKERS: &[&str] = &[
    "Եզրակացություն",
    "Եզրահանգումներ",
    "Conclusions?",
    "Заключение",
    "Выводы",
];
pub const REFERENCES_MARKERS: &[&str] = &[
    "Օգտագործված գրականություն",
    "Գրականություն",
    "References",
    "Bibliography",
    "Список литературы",
    "Литература",
];
pub const AUTHOR_INFO_MARKERS: &[&str] = &[
    "Տեղեկություններ հեղինակի մասին",
    "Տեղեկություն հեղինակի մասին",
    "Information about the authors?",
    "About the authors?",
    "Сведения об автор(?:е|ах)",
    "Информация об автор(?:е|ах)",
];

/// Optional separator after a heading marker ("Abstract:", "Հիմնաբառեր՝", "Резюме.")
const SEPARATOR: &str = r"[ \t]*[:՝.\-–—]?";

fn alternation<'a>(markers: impl IntoIterator<Item = &'a &'static str>) -> String {
    markers
        .into_iter()
        .copied()
        .collect::<Vec<_>>()
        .join("|")
}

/// Heading marker anchored at the start of a line, optionally numbered
/// ("3. Заключение", "2.1 Analysis")
fn heading(markers: &str) -> String {
    format!(r"^[ \t]*(?:\d+(?:\.\d+)*\.?[ \t]*)?(?:{markers})\b")
}

/// Bounded capture from a line-anchored start marker up to the nearest
/// line-anchored end marker or the end of text. Lazy body, no backtracking
/// engine involved.
fn bounded_capture(start: &str, end: &str) -> Regex {
    let pattern = format!(
        r"(?ims){start}{SEPARATOR}(.*?)(?:{end}|\z)",
        start = heading(start),
        end = heading(end),
    );
    Regex::new(&pattern).unwrap()
}

fn anywhere(markers: &[&'static str]) -> Regex {
    Regex::new(&format!(r"(?i)(?:{})", alternation(markers))).unwrap()
}

/// Compiled patterns for one language profile
#[derive(Debug)]
pub struct LanguagePatterns {
    /// Group 1: abstract body
    pub abstract_body: Regex,
    /// Group 1: the keyword line following the marker
    pub keyword_list: Regex,
    pub keywords_heading: Regex,
    /// Whole line of uppercase letters in the language's alphabet
    pub uppercase_line: Regex,
}

impl LanguagePatterns {
    fn compile(profile: &LanguageProfile, section_end: &str) -> Self {
        let keywords = alternation(profile.keywords_markers);
        Self {
            abstract_body: bounded_capture(&alternation(profile.abstract_markers), section_end),
            keyword_list: Regex::new(&format!(
                r"(?im){}{SEPARATOR}\s*([^\n]*)",
                heading(&keywords)
            ))
            .unwrap(),
            keywords_heading: Regex::new(&format!(r"(?im){}", heading(&keywords))).unwrap(),
            uppercase_line: Regex::new(&format!(r"^[{}\s]+$", profile.uppercase_class)).unwrap(),
        }
    }
}

lazy_static! {
    /// Any abstract or keywords marker in any language ends an abstract
    static ref ABSTRACT_END: String = alternation(
        PROFILES
            .iter()
            .flat_map(|p| p.abstract_markers.iter().chain(p.keywords_markers.iter()))
    );

    static ref LANGUAGE_PATTERNS: Vec<LanguagePatterns> = PROFILES
        .iter()
        .map(|p| LanguagePatterns::compile(p, &ABSTRACT_END))
        .collect();

    /// Identifier code followed by optional separator and a digit ("УДК: 336.5")
    pub static ref IDENTIFIER_LINE: Regex = Regex::new(&format!(
        r"^(?:{})\s*[՝:.]?\s*\d",
        alternation(PROFILES.iter().map(|p| &p.identifier))
    ))
    .unwrap();

    pub static ref IDENTIFIER_PREFIX: Regex = Regex::new(&format!(
        r"^(?:{})",
        alternation(PROFILES.iter().map(|p| &p.identifier))
    ))
    .unwrap();

    pub static ref INTRODUCTION: Regex = anywhere(INTRODUCTION_MARKERS);
    pub static ref ANALYSIS: Regex = anywhere(ANALYSIS_MARKERS);
    pub static ref REFERENCES: Regex = anywhere(REFERENCES_MARKERS);
    pub static ref AUTHOR_INFO: Regex = anywhere(AUTHOR_INFO_MARKERS);

    /// Group 1: conclusion body up to the bibliography or end of text
    pub static ref CONCLUSION_BODY: Regex = bounded_capture(
        &alternation(CONCLUSION_MARKERS),
        &alternation(REFERENCES_MARKERS),
    );

    /// Group 1: bibliography body up to the author information block or end of text
    pub static ref REFERENCES_BODY: Regex = bounded_capture(
        &alternation(REFERENCES_MARKERS),
        &alternation(AUTHOR_INFO_MARKERS),
    );

    /// "  12. Author, Title" at the start of a line
    pub static ref NUMBERED_ENTRY: Regex = Regex::new(r"(?m)^[ \t]*\d+\.").unwrap();

    /// Separators inside a keyword list
    pub static ref KEYWORD_DELIMITER: Regex = Regex::new(r"[,;，、،]").unwrap();
}

pub fn language_patterns(language: Language) -> &'static LanguagePatterns {
    let index = PROFILES
        .iter()
        .position(|p| p.language == language)
        .unwrap_or_default();
    &LANGUAGE_PATTERNS[index]
}
