//! Journal template configuration
//!
//! Every numeric threshold the rule groups apply lives here. The defaults are
//! the journal's published template; a TOML file may override any subset of
//! them.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared_types::Language;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors for a configuration that parses but cannot be applied
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Inverted band for {field}: min {min} is greater than max {max}")]
    InvertedBand {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("Uppercase ratio must be within (0, 1], got {0}")]
    InvalidRatio(f64),

    #[error("words_per_page must be greater than zero")]
    ZeroWordsPerPage,
}

/// Closed numeric interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub min: usize,
    pub max: usize,
}

impl Band {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: usize) -> bool {
        self.min <= value && value <= self.max
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedBand {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}–{}", self.min, self.max)
    }
}

/// Full template configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Allowed page count (default: 8–12)
    pub pages: Band,
    pub title: TitleConfig,
    pub author: AuthorConfig,
    pub abstracts: AbstractBands,
    /// Keyword count for the Armenian list (default: 5–10)
    pub keywords: Band,
    /// Minimum trimmed length of an English/Russian uppercase title
    pub translated_title_min_len: usize,
    pub conclusion_max_words: usize,
    pub min_numbered_references: usize,
    /// Used to estimate page count from word count
    pub words_per_page: u32,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            pages: Band::new(8, 12),
            title: TitleConfig::default(),
            author: AuthorConfig::default(),
            abstracts: AbstractBands::default(),
            keywords: Band::new(5, 10),
            translated_title_min_len: 20,
            conclusion_max_words: 150,
            min_numbered_references: 3,
            words_per_page: 450,
        }
    }
}

/// Heuristics for locating the main (uppercase) title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    /// How many non-blank lines are scanned from the top
    pub scan_lines: usize,
    /// Exclusive lower bound on title length in characters
    pub min_len: usize,
    /// Exclusive upper bound on title length in characters
    pub max_len: usize,
    /// Share of uppercase letters that must be exceeded
    pub uppercase_ratio: f64,
    pub min_letters: usize,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            scan_lines: 15,
            min_len: 15,
            max_len: 200,
            uppercase_ratio: 0.8,
            min_letters: 10,
        }
    }
}

/// Heuristics for the author line below the title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    /// Lines after the title that are considered
    pub scan_lines: usize,
    /// Exclusive lower bound on line length
    pub min_len: usize,
    /// Exclusive upper bound on line length
    pub max_len: usize,
    /// Whitespace-separated tokens allowed on the line
    pub tokens: Band,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            scan_lines: 5,
            min_len: 5,
            max_len: 80,
            tokens: Band::new(1, 5),
        }
    }
}

/// Word-count band per abstract language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbstractBands {
    pub armenian: Band,
    pub english: Band,
    pub russian: Band,
}

impl Default for AbstractBands {
    fn default() -> Self {
        Self {
            armenian: Band::new(50, 150),
            english: Band::new(50, 200),
            russian: Band::new(30, 150),
        }
    }
}

impl AbstractBands {
    pub fn for_language(&self, language: Language) -> Band {
        match language {
            Language::Armenian => self.armenian,
            Language::English => self.english,
            Language::Russian => self.russian,
        }
    }
}

impl TemplateConfig {
    /// Load configuration from a TOML file
    ///
    /// Missing fields fall back to the journal defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed, or
    /// the resulting bands are inconsistent (see [`TemplateConfig::validate`]).
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template config: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// ```
    /// use article_compliance::config::TemplateConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = TemplateConfig::from_str(r#"
    ///     conclusion_max_words = 200
    ///
    ///     [pages]
    ///     min = 6
    ///     max = 14
    /// "#)?;
    /// assert_eq!(config.pages.min, 6);
    /// assert_eq!(config.keywords.max, 10);
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML template config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pages.check("pages")?;
        self.keywords.check("keywords")?;
        self.author.tokens.check("author.tokens")?;
        self.abstracts.armenian.check("abstracts.armenian")?;
        self.abstracts.english.check("abstracts.english")?;
        self.abstracts.russian.check("abstracts.russian")?;
        Band::new(self.title.min_len, self.title.max_len).check("title length")?;
        Band::new(self.author.min_len, self.author.max_len).check("author length")?;

        let ratio = self.title.uppercase_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ConfigError::InvalidRatio(ratio));
        }
        if self.words_per_page == 0 {
            return Err(ConfigError::ZeroWordsPerPage);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_journal_template() {
        let config = TemplateConfig::default();
        assert_eq!(config.pages, Band::new(8, 12));
        assert_eq!(config.abstracts.for_language(Language::Armenian), Band::new(50, 150));
        assert_eq!(config.abstracts.for_language(Language::English), Band::new(50, 200));
        assert_eq!(config.abstracts.for_language(Language::Russian), Band::new(30, 150));
        assert_eq!(config.keywords, Band::new(5, 10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_band_is_inclusive() {
        let band = Band::new(50, 150);
        assert!(!band.contains(49));
        assert!(band.contains(50));
        assert!(band.contains(150));
        assert!(!band.contains(151));
        assert_eq!(band.to_string(), "50–150");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TemplateConfig::from_str(
            r#"
            words_per_page = 300

            [abstracts.english]
            min = 100
            max = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.words_per_page, 300);
        assert_eq!(config.abstracts.english, Band::new(100, 250));
        assert_eq!(config.abstracts.armenian, Band::new(50, 150));
        assert_eq!(config.title.scan_lines, 15);
    }

    #[test]
    fn test_rejects_inverted_band() {
        let err = TemplateConfig::from_str("[pages]\nmin = 12\nmax = 8\n").unwrap_err();
        assert!(err.to_string().contains("pages"), "got: {err}");
    }

    #[test]
    fn test_rejects_zero_words_per_page() {
        let config = TemplateConfig {
            words_per_page: 0,
            ..TemplateConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWordsPerPage));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(TemplateConfig::from_str("pages = [").is_err());
    }
}
