// Line and section slicing over raw article text
use regex::Regex;

/// Non-blank lines in document order, trimmed
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Body captured by group 1 of a bounded-capture pattern, trimmed.
///
/// `None` when the start marker is absent; `Some("")` when the marker is
/// present but nothing follows it.
pub fn capture_section<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str().trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_non_blank_lines_drops_blank_and_keeps_order() {
        let text = "\n  УДК: 1\n\n\t\r\nTITLE\r\n  author  \n";
        assert_eq!(non_blank_lines(text), vec!["УДК: 1", "TITLE", "author"]);
    }

    #[test]
    fn test_non_blank_lines_of_empty_text() {
        assert!(non_blank_lines("").is_empty());
        assert!(non_blank_lines(" \n\n \t").is_empty());
    }

    #[test]
    fn test_capture_section_distinguishes_empty_from_absent() {
        let re = Regex::new(r"(?s)Start:(.*?)(?:End|\z)").unwrap();
        assert_eq!(capture_section(&re, "Start: a b End"), Some("a b"));
        assert_eq!(capture_section(&re, "Start:End"), Some(""));
        assert_eq!(capture_section(&re, "nothing here"), None);
    }
}
