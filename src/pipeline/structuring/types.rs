use serde::{Deserialize, Serialize};

use crate::models::range::RangeStatus;

/// One section of a report: a header line and the tests under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportGroup {
    /// Header line exactly as it appeared, trimmed.
    pub name: String,
    pub tests: Vec<TestEntry>,
}

/// One measured test recognized on a single line.
///
/// `min_range` and `max_range` are always both present or both absent:
/// a half-parsed range is dropped, the entry kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestEntry {
    pub substance: String,
    pub value: f64,
    pub unit: String,
    pub min_range: Option<f64>,
    pub max_range: Option<f64>,
}

impl TestEntry {
    pub fn has_range(&self) -> bool {
        self.min_range.is_some() && self.max_range.is_some()
    }

    pub fn range_status(&self) -> Option<RangeStatus> {
        RangeStatus::classify(self.value, self.min_range, self.max_range)
    }
}
