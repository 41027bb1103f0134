use std::sync::LazyLock;

use tracing::debug;

use super::entry::EntryMatcher;
use super::header::is_group_header;
use super::types::ReportGroup;

static DEFAULT_PARSER: LazyLock<ReportParser> =
    LazyLock::new(|| ReportParser::new(ParserOptions::default()));

/// Parse raw report text with default options.
pub fn parse_report(text: &str) -> Vec<ReportGroup> {
    DEFAULT_PARSER.parse(text)
}

/// Tuning for `ReportParser`.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Characters accepted between the low and high bound of a range.
    /// OCR renders that dash inconsistently, so this is a set; one or
    /// more consecutive separator characters count as one separator.
    /// An empty set disables range capture entirely.
    pub range_separators: Vec<char>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            range_separators: vec![
                '-',
                '\u{2013}', // en dash –
                '\u{2014}', // em dash —
                '\u{2212}', // minus sign −
            ],
        }
    }
}

/// Turns raw report text into ordered test groups.
///
/// Line-oriented single pass: every line is trimmed, blank lines are
/// skipped, header lines open a new group, anything else is matched as a
/// test line inside the open group. Unrecognized input is dropped, never
/// reported; parsing cannot fail and zero groups is a valid outcome.
#[derive(Debug, Clone)]
pub struct ReportParser {
    matcher: EntryMatcher,
}

impl ReportParser {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            matcher: EntryMatcher::new(&options.range_separators),
        }
    }

    pub fn parse(&self, text: &str) -> Vec<ReportGroup> {
        let mut groups: Vec<ReportGroup> = Vec::new();
        let mut current: Option<ReportGroup> = None;

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if is_group_header(line) {
                push_if_nonempty(&mut groups, current.take());
                current = Some(ReportGroup {
                    name: line.to_string(),
                    tests: Vec::new(),
                });
                continue;
            }

            match current.as_mut() {
                Some(group) => match self.matcher.match_line(line) {
                    Some(entry) => group.tests.push(entry),
                    None => debug!(line, "No test pattern matched"),
                },
                // Data before the first header has no group to land in.
                None => debug!(line, "Dropping line before first header"),
            }
        }

        push_if_nonempty(&mut groups, current);
        groups
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

/// Groups without a single parsed test are dropped.
fn push_if_nonempty(groups: &mut Vec<ReportGroup>, group: Option<ReportGroup>) {
    match group {
        Some(g) if !g.tests.is_empty() => groups.push(g),
        Some(g) => debug!(group = %g.name, "Dropping group with no parsed tests"),
        None => {}
    }
}
