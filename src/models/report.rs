use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::range::RangeStatus;
use crate::pipeline::structuring::types::TestEntry;

/// One processed report: a single OCR'd document for a given test date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: Uuid,
    pub test_date: NaiveDate,
    /// Opaque reference to the source document (URL, object key, file path).
    pub source_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ReportRecord {
    pub fn new(test_date: NaiveDate, source_ref: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            test_date,
            source_ref,
            created_at: Utc::now(),
        }
    }
}

/// One measured test, flattened for storage under its report and group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRecord {
    pub id: Uuid,
    pub report_id: Uuid,
    pub group_name: String,
    pub substance: String,
    pub value: f64,
    pub unit: String,
    pub min_range: Option<f64>,
    pub max_range: Option<f64>,
}

impl TestRecord {
    /// Flatten one parsed entry into a storable row.
    pub fn from_entry(report_id: Uuid, group_name: &str, entry: &TestEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            report_id,
            group_name: group_name.to_string(),
            substance: entry.substance.clone(),
            value: entry.value,
            unit: entry.unit.clone(),
            min_range: entry.min_range,
            max_range: entry.max_range,
        }
    }

    pub fn range_status(&self) -> Option<RangeStatus> {
        RangeStatus::classify(self.value, self.min_range, self.max_range)
    }
}
