pub mod analyzer;
pub mod error;
pub mod loader;
pub mod parser;
pub mod record;
pub mod report;
pub mod stats;
pub mod table;

pub use analyzer::{Analysis, Analyzer, AnalyzerConfig, Mode};
pub use error::{Error, MalformedReason, Result};
pub use loader::{FileLoader, GzFileLoader, InputFormat, RecordSource, TextLoader, ZstdFileLoader};
pub use record::BigramRecord;
pub use report::Report;
pub use stats::{SummaryStats, ThresholdFraction};
pub use table::FrequencyTable;
