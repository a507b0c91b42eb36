use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while loading or analyzing a count table.
///
/// Every variant is fatal for the run: statistics are only emitted from a
/// complete, well-formed table.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed record on line {line}: {reason} (got {content:?})")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: MalformedReason,
    },

    #[error("sorted table holds {table} occurrences but the input held {input}")]
    TotalMismatch { input: u128, table: u128 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a single line could not be turned into a record.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("expected `<bigram>\\t<count>` but found no tab")]
    MissingTab,

    #[error("expected exactly two tab-separated fields")]
    TooManyFields,

    #[error("count {0:?} is negative")]
    NegativeCount(String),

    #[error("count {0:?} is not a non-negative integer")]
    InvalidCount(String),
}
