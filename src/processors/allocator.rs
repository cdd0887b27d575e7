// stickerize/src/processors/allocator.rs
use crate::core::{FilenameStrategy, Result, StickerError, COUNT_PATTERN};
use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;

fn count_name_regex() -> &'static Regex {
    static COUNT_NAME: OnceLock<Regex> = OnceLock::new();
    COUNT_NAME.get_or_init(|| Regex::new(COUNT_PATTERN).expect("count pattern is valid"))
}

fn image_suffix_regex() -> &'static Regex {
    static SUFFIX: OnceLock<Regex> = OnceLock::new();
    SUFFIX.get_or_init(|| Regex::new(r"^.+\.(jpe?g|png)$").expect("suffix pattern is valid"))
}

/// Source name to destination name pairs, in allocation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilenameMapping {
    entries: Vec<(String, String)>,
}

impl FilenameMapping {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(source, dest)| (source.as_str(), dest.as_str()))
    }

    pub fn destinations(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, dest)| dest.as_str()).collect()
    }

    fn push(&mut self, source: String, dest: String) {
        self.entries.push((source, dest));
    }
}

impl FilenameStrategy {
    /// Destination names this strategy has to steer clear of, ordered the
    /// way the strategy consumes them.
    pub fn eligible_destinations(&self, names: &[String]) -> Vec<String> {
        match self {
            FilenameStrategy::Count => count_candidates(names),
        }
    }

    /// Maps every source name to a fresh destination name.
    pub fn allocate(&self, sources: &[String], destinations: &[String]) -> Result<FilenameMapping> {
        match self {
            FilenameStrategy::Count => allocate_count(sources, destinations),
        }
    }
}

/// Destination names with a purely numeric stem, sorted by that number.
pub fn count_candidates(names: &[String]) -> Vec<String> {
    let mut numbered: Vec<(String, String)> = names
        .iter()
        .filter(|name| count_name_regex().is_match(name))
        .filter_map(|name| numeric_stem(name).map(|stem| (stem, name.clone())))
        .collect();

    numbered.sort_by(|(a, _), (b, _)| compare_decimal(a, b));

    numbered.into_iter().map(|(_, name)| name).collect()
}

/// First free number after the existing numeric names, or "1" when there
/// are none. Numbers are kept as decimal strings, so any stem fits.
pub fn next_count(destinations: &[String]) -> String {
    destinations
        .iter()
        .filter_map(|name| numeric_stem(name))
        .max_by(|a, b| compare_decimal(a, b))
        .map(|highest| increment_decimal(&highest))
        .unwrap_or_else(|| "1".to_string())
}

/// Assigns `<n>.<ext>` names to `sources` in the order given, starting at
/// [`next_count`]. The extension is copied from the source name unchanged.
pub fn allocate_count(sources: &[String], destinations: &[String]) -> Result<FilenameMapping> {
    let first = next_count(destinations);
    let mut counter = first.clone();
    let mut mapping = FilenameMapping::default();

    for source in sources {
        let extension = image_suffix_regex()
            .captures(source)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| {
                StickerError::InvalidFileName(format!(
                    "{} does not end in .jpg, .jpeg or .png",
                    source
                ))
            })?;

        mapping.push(source.clone(), format!("{}.{}", counter, extension));
        counter = increment_decimal(&counter);
    }

    log::debug!("Allocated {} names starting at {}", mapping.len(), first);

    Ok(mapping)
}

/// Stem of `name` as ASCII decimal digits without leading zeros. Any Unicode
/// decimal digit counts; `None` when the stem holds anything else.
fn numeric_stem(name: &str) -> Option<String> {
    let stem = name.split('.').next()?;
    if stem.is_empty() {
        return None;
    }

    let digits = stem
        .chars()
        .map(|c| digit_value(c).and_then(|d| char::from_digit(d, 10)))
        .collect::<Option<String>>()?;

    let trimmed = digits.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() })
}

fn is_decimal_digit(c: char) -> bool {
    static DIGIT: OnceLock<Regex> = OnceLock::new();
    let mut buf = [0u8; 4];
    DIGIT
        .get_or_init(|| Regex::new(r"^\d$").expect("digit pattern is valid"))
        .is_match(c.encode_utf8(&mut buf))
}

/// Value of a decimal digit from any script. Unicode encodes every set of
/// decimal digits as a contiguous run 0..=9, so the value is the distance
/// from the start of the run, modulo 10 for scripts with adjacent runs.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }

    Some((c as u32 - start) % 10)
}

/// Orders normalised decimal strings numerically.
fn compare_decimal(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn increment_decimal(digits: &str) -> String {
    let mut out: Vec<char> = digits.chars().collect();
    for d in out.iter_mut().rev() {
        match d.to_digit(10) {
            Some(9) => *d = '0',
            Some(v) => {
                *d = char::from_digit(v + 1, 10).unwrap_or('0');
                return out.into_iter().collect();
            }
            None => *d = '0',
        }
    }

    std::iter::once('1').chain(out).collect()
}
