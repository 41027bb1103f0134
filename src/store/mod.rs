pub mod memory;

pub use memory::*;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{ReportRecord, TestRecord};
use crate::pipeline::structuring::ReportGroup;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Report not found: {0}")]
    ReportNotFound(Uuid),

    #[error("Storage write failed: {0}")]
    WriteFailed(String),
}

/// Persistence surface for processed reports.
///
/// `MemoryStore` carries the reference semantics; durable backends live
/// with the host behind this trait.
pub trait ReportStore {
    /// Persist a report and its parsed groups, flattened to test rows.
    /// Returns the number of rows written.
    fn save_report(
        &mut self,
        record: &ReportRecord,
        groups: &[ReportGroup],
    ) -> Result<usize, StoreError>;

    fn get_report(&self, id: &Uuid) -> Result<ReportRecord, StoreError>;

    /// All reports, newest test date first.
    fn list_reports(&self) -> Vec<ReportRecord>;

    /// Rows for one report, ordered by group name; document order within
    /// a group.
    fn tests_for_report(&self, id: &Uuid) -> Result<Vec<TestRecord>, StoreError>;

    /// Rows for one group of one report, in document order. Unknown group
    /// names yield an empty list, not an error.
    fn tests_for_group(&self, id: &Uuid, group_name: &str) -> Result<Vec<TestRecord>, StoreError>;
}
