use std::sync::LazyLock;

use regex::Regex;

/// Entirely uppercase letters and whitespace, at least 3 characters.
static RE_ALL_CAPS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z\s]{3,}$").unwrap());

/// Category vocabulary at the start of the line, any casing.
static RE_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:HEMATOLOGY|CHEMISTRY|LIPIDS|THYROID|VITAMINS|HORMONES|PROTEINS)").unwrap()
});

/// Panel phrases at the start of the line, any casing.
static RE_PANEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:Complete Blood Count|Metabolic Panel|Lipid Panel)").unwrap()
});

/// Does a trimmed line open a new test group?
///
/// Checked before any test-line matching, so a line that qualifies as a
/// header is never read as data. An all-caps rule catches generic section
/// headings; the vocabulary and panel rules catch known names in any case.
pub fn is_group_header(line: &str) -> bool {
    RE_ALL_CAPS.is_match(line) || RE_CATEGORY.is_match(line) || RE_PANEL.is_match(line)
}
