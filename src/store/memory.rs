use std::collections::HashMap;

use uuid::Uuid;

use super::{ReportStore, StoreError};
use crate::models::{ReportRecord, TestRecord};
use crate::pipeline::structuring::ReportGroup;

/// In-memory `ReportStore`: reference implementation and test double.
///
/// Saving under an existing report id replaces that report's rows.
#[derive(Debug, Default)]
pub struct MemoryStore {
    reports: HashMap<Uuid, ReportRecord>,
    tests: HashMap<Uuid, Vec<TestRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report_count(&self) -> usize {
        self.reports.len()
    }
}

impl ReportStore for MemoryStore {
    fn save_report(
        &mut self,
        record: &ReportRecord,
        groups: &[ReportGroup],
    ) -> Result<usize, StoreError> {
        let rows: Vec<TestRecord> = groups
            .iter()
            .flat_map(|group| {
                group
                    .tests
                    .iter()
                    .map(|entry| TestRecord::from_entry(record.id, &group.name, entry))
            })
            .collect();

        let written = rows.len();
        self.reports.insert(record.id, record.clone());
        self.tests.insert(record.id, rows);
        Ok(written)
    }

    fn get_report(&self, id: &Uuid) -> Result<ReportRecord, StoreError> {
        self.reports
            .get(id)
            .cloned()
            .ok_or(StoreError::ReportNotFound(*id))
    }

    fn list_reports(&self) -> Vec<ReportRecord> {
        let mut reports: Vec<ReportRecord> = self.reports.values().cloned().collect();
        reports.sort_by(|a, b| {
            b.test_date
                .cmp(&a.test_date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        reports
    }

    fn tests_for_report(&self, id: &Uuid) -> Result<Vec<TestRecord>, StoreError> {
        let mut rows = self
            .tests
            .get(id)
            .cloned()
            .ok_or(StoreError::ReportNotFound(*id))?;
        // Stable sort: document order survives within each group.
        rows.sort_by(|a, b| a.group_name.cmp(&b.group_name));
        Ok(rows)
    }

    fn tests_for_group(&self, id: &Uuid, group_name: &str) -> Result<Vec<TestRecord>, StoreError> {
        let rows = self.tests.get(id).ok_or(StoreError::ReportNotFound(*id))?;
        Ok(rows
            .iter()
            .filter(|row| row.group_name == group_name)
            .cloned()
            .collect())
    }
}
