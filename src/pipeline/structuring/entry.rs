use regex::Regex;

use super::types::TestEntry;

/// Numeric token: digits with a single optional decimal point.
const NUM: &str = r"[0-9]+(?:\.[0-9]+)?";

/// Matches a single data line against the test-line patterns.
///
/// The full pattern captures an optional reference range after the unit;
/// the simple pattern stops at the unit. Full is tried first, then the
/// simple fallback, so a line with a malformed range still yields a
/// rangeless entry.
#[derive(Debug, Clone)]
pub struct EntryMatcher {
    full: Regex,
    simple: Regex,
}

impl EntryMatcher {
    /// Patterns are compiled once here, not per line. An empty separator
    /// set leaves only the simple pattern, disabling range capture.
    pub fn new(range_separators: &[char]) -> Self {
        let simple = Regex::new(&simple_pattern()).unwrap();
        let full = if range_separators.is_empty() {
            simple.clone()
        } else {
            Regex::new(&full_pattern(range_separators)).unwrap()
        };
        Self { full, simple }
    }

    pub fn match_line(&self, line: &str) -> Option<TestEntry> {
        match_entry(&self.full, line).or_else(|| match_entry(&self.simple, line))
    }
}

fn simple_pattern() -> String {
    format!(r"^([^0-9]+?)\s+({NUM})\s+(\w+/?\w*)")
}

fn full_pattern(separators: &[char]) -> String {
    let class: String = separators
        .iter()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    format!(r"^([^0-9]+?)\s+({NUM})\s+(\w+/?\w*)\s*(?:[(<]?({NUM})[{class}]+({NUM})[)>]?)?")
}

fn match_entry(pattern: &Regex, line: &str) -> Option<TestEntry> {
    let caps = pattern.captures(line)?;

    let substance = caps.get(1)?.as_str().trim();
    let unit = caps.get(3)?.as_str().trim();
    if substance.is_empty() || unit.is_empty() {
        return None;
    }
    let value = parse_finite(caps.get(2)?.as_str())?;

    // Both bounds must parse, or the range is dropped and the entry kept.
    let range = caps
        .get(4)
        .zip(caps.get(5))
        .and_then(|(low, high)| Some((parse_finite(low.as_str())?, parse_finite(high.as_str())?)));

    Some(TestEntry {
        substance: substance.to_string(),
        value,
        unit: unit.to_string(),
        min_range: range.map(|(low, _)| low),
        max_range: range.map(|(_, high)| high),
    })
}

/// Overlong digit runs overflow `f64` to infinity; treat those as unparsed.
fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
