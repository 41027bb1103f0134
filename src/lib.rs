pub mod config;
pub mod models;
pub mod pipeline;
pub mod store;

pub use models::{RangeStatus, ReportRecord, TestRecord};
pub use pipeline::extraction::{
    sanitize_report_text, ExtractedText, ExtractionError, ProviderOutput, ProviderReply,
    StaticTextSource, TextSource,
};
pub use pipeline::processor::{
    ProcessingError, ProcessingOutput, ProcessingSummary, ReportProcessor,
};
pub use pipeline::structuring::{
    is_group_header, parse_report, ParserOptions, ReportGroup, ReportParser, TestEntry,
};
pub use store::{MemoryStore, ReportStore, StoreError};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for hosts that have not installed a subscriber.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);
}
