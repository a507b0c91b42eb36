use log::{debug, info};

use crate::error::{Error, Result};
use crate::loader::RecordSource;
use crate::report::Report;
use crate::stats::{SummaryStats, ThresholdFraction};
use crate::table::FrequencyTable;

/// What an analysis run reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Total count, most frequent bigrams and threshold type count.
    #[default]
    Summary,
    /// Only the frequency table, highest count first.
    SortOnly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub mode: Mode,
    pub fraction: ThresholdFraction,
}

/// Turns a bigram count table into a frequency report.
#[derive(Clone, Debug, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Reads every record from `source` and builds the frequency table.
    ///
    /// The first malformed record aborts the run; nothing is derived from a
    /// partially valid table.
    pub fn analyze<S: RecordSource>(&self, source: &S) -> Result<Analysis> {
        let mut records = Vec::new();
        let mut input_total = 0u128;
        for record in source.iter()? {
            let record = record?;
            input_total += record.count as u128;
            records.push(record);
        }
        info!("parsed {} bigram records", records.len());

        let table = FrequencyTable::new(records);
        let table_total = table.total();
        if table_total != input_total {
            return Err(Error::TotalMismatch {
                input: input_total,
                table: table_total,
            });
        }
        debug!(
            "total {} occurrences, max count {:?}",
            table_total,
            table.max_count()
        );

        Ok(Analysis {
            table,
            total: table_total,
            config: self.config,
        })
    }
}

/// The outcome of [`Analyzer::analyze`]: a validated frequency table.
#[derive(Clone, Debug)]
pub struct Analysis {
    table: FrequencyTable,
    total: u128,
    config: AnalyzerConfig,
}

impl Analysis {
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn total(&self) -> u128 {
        self.total
    }

    pub fn stats(&self) -> SummaryStats<'_> {
        let stats = SummaryStats::new(&self.table, self.total, self.config.fraction);
        debug!(
            "threshold {} reached by {} types",
            stats.threshold, stats.threshold_types
        );
        stats
    }

    pub fn report(&self) -> Report<'_> {
        match self.config.mode {
            Mode::Summary => Report::Summary(self.stats()),
            Mode::SortOnly => Report::SortOnly(&self.table),
        }
    }
}
