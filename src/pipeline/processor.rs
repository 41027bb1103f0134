//! Report processing orchestrator.
//!
//! Single entry point that drives the pipeline:
//! fetch text → sanitize → parse → (optionally) store.
//!
//! Uses trait-based DI for the text source and the store so the
//! orchestrator remains fully testable with static and in-memory
//! implementations.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::ReportRecord;
use crate::pipeline::extraction::sanitize::sanitize_report_text;
use crate::pipeline::extraction::types::TextSource;
use crate::pipeline::extraction::ExtractionError;
use crate::pipeline::structuring::parser::ReportParser;
use crate::pipeline::structuring::types::ReportGroup;
use crate::store::{ReportStore, StoreError};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while processing a report.
///
/// Parsing is absent on purpose: it cannot fail, and a report in which no
/// groups are recognized is still a processed report.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Storage write failed: {0}")]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Per-stage numbers for the caller after processing one report.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingSummary {
    pub text_length: usize,
    pub chunk_count: usize,
    pub group_count: usize,
    pub test_count: usize,
    pub ranged_test_count: usize,
}

/// Full output: the report record, its parsed groups, and stage numbers.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingOutput {
    pub record: ReportRecord,
    pub groups: Vec<ReportGroup>,
    pub summary: ProcessingSummary,
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Drives one report through fetch → sanitize → parse.
pub struct ReportProcessor {
    source: Box<dyn TextSource + Send + Sync>,
    parser: ReportParser,
}

impl ReportProcessor {
    pub fn new(source: Box<dyn TextSource + Send + Sync>) -> Self {
        Self {
            source,
            parser: ReportParser::default(),
        }
    }

    /// Replace the default parser (custom range separators, usually).
    pub fn with_parser(mut self, parser: ReportParser) -> Self {
        self.parser = parser;
        self
    }

    /// Process the document behind `reference` into structured groups.
    ///
    /// Zero recognized groups is a valid outcome, not an error.
    pub fn process(
        &self,
        reference: &str,
        test_date: NaiveDate,
    ) -> Result<ProcessingOutput, ProcessingError> {
        tracing::info!(reference, "Processing: fetching text");
        let extracted = self.source.fetch_text(reference)?;

        let text = sanitize_report_text(&extracted.text);
        let groups = self.parser.parse(&text);

        if groups.is_empty() {
            tracing::warn!(reference, "No test groups recognized in report text");
        }

        let summary = ProcessingSummary {
            text_length: text.len(),
            chunk_count: extracted.chunk_count,
            group_count: groups.len(),
            test_count: groups.iter().map(|g| g.tests.len()).sum(),
            ranged_test_count: groups
                .iter()
                .flat_map(|g| &g.tests)
                .filter(|t| t.has_range())
                .count(),
        };

        tracing::info!(
            reference,
            groups = summary.group_count,
            tests = summary.test_count,
            "Processing complete"
        );

        let record = ReportRecord::new(test_date, Some(reference.to_string()));
        Ok(ProcessingOutput {
            record,
            groups,
            summary,
        })
    }

    /// `process`, then persist the result through the given store.
    pub fn process_and_store(
        &self,
        reference: &str,
        test_date: NaiveDate,
        store: &mut dyn ReportStore,
    ) -> Result<ProcessingOutput, ProcessingError> {
        let output = self.process(reference, test_date)?;
        let rows = store.save_report(&output.record, &output.groups)?;
        tracing::info!(report_id = %output.record.id, rows, "Report saved");
        Ok(output)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
