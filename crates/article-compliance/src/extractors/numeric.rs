// Counting utilities for length and format checks
use crate::patterns::{Script, KEYWORD_DELIMITER, NUMBERED_ENTRY};

/// Whitespace-delimited token count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of non-empty items in a comma-family delimited list
pub fn list_item_count(list: &str) -> usize {
    KEYWORD_DELIMITER
        .split(list)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .count()
}

/// Lines starting with "<integer>." after optional indentation
pub fn numbered_line_count(text: &str) -> usize {
    NUMBERED_ENTRY.find_iter(text).count()
}

/// Letter tally across the scripts recognised by [`Script`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterStats {
    pub letters: usize,
    pub uppercase: usize,
}

impl LetterStats {
    pub fn of(text: &str) -> Self {
        let mut stats = Self::default();
        for c in text.chars().filter(|&c| Script::of(c).is_some()) {
            stats.letters += 1;
            if c.is_uppercase() {
                stats.uppercase += 1;
            }
        }
        stats
    }

    /// Share of uppercase letters, 0.0 when there are none
    pub fn uppercase_ratio(&self) -> f64 {
        if self.letters == 0 {
            return 0.0;
        }
        self.uppercase as f64 / self.letters as f64
    }
}
