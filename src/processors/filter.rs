// stickerize/src/processors/filter.rs
use crate::core::{StickerError, Result};
use regex::Regex;

/// Compiles a user supplied name filter.
///
/// The pattern only has to match at the start of a name, the remainder of
/// the name is free: `.+(jpe?g|png)` also accepts `cat.png.bak`.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(&format!("^(?:{})", pattern)).map_err(|source| StickerError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Keeps the names matching `pattern`, in their original order.
pub fn filter_by_pattern(names: &[String], pattern: &Regex) -> Vec<String> {
    names
        .iter()
        .filter(|name| pattern.is_match(name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_PATTERN;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_pattern_keeps_listing_order() {
        let pattern = compile_pattern(DEFAULT_PATTERN).unwrap();
        let listing = names(&["b.png", "notes.txt", "a.jpeg", "c.jpg", "d.gif"]);

        assert_eq!(
            filter_by_pattern(&listing, &pattern),
            names(&["b.png", "a.jpeg", "c.jpg"])
        );
    }

    #[test]
    fn test_default_pattern_is_case_sensitive() {
        let pattern = compile_pattern(DEFAULT_PATTERN).unwrap();
        let listing = names(&["SHOUT.PNG", "quiet.png"]);

        assert_eq!(filter_by_pattern(&listing, &pattern), names(&["quiet.png"]));
    }

    #[test]
    fn test_pattern_is_anchored_at_start_only() {
        let pattern = compile_pattern("cat").unwrap();
        let listing = names(&["cat.png", "bobcat.png", "catalog.jpg"]);

        assert_eq!(
            filter_by_pattern(&listing, &pattern),
            names(&["cat.png", "catalog.jpg"])
        );
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = compile_pattern("(unclosed").unwrap_err();
        assert!(matches!(err, StickerError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }
}
