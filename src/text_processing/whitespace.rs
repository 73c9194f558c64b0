/// Whitespace cleanup for assembled phrases
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MULTI_SPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapse runs of whitespace to a single space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    MULTI_SPACE_REGEX.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_spaces_collapsed() {
        assert_eq!(collapse_whitespace("too    many     spaces"), "too many spaces");
    }

    #[test]
    fn test_ends_trimmed() {
        assert_eq!(collapse_whitespace("  one hundred  "), "one hundred");
    }

    #[test]
    fn test_mixed_whitespace() {
        assert_eq!(collapse_whitespace("douăzeci și\t\nunu"), "douăzeci și unu");
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(collapse_whitespace("   "), "");
    }
}
