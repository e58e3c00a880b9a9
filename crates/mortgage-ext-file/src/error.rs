//! Rate table loading errors.

use thiserror::Error;

/// Failure to build the rate table.
///
/// Every variant is fatal at startup: a service must not answer requests from
/// a partially loaded table.
#[derive(Debug, Error)]
pub enum RateLoadError {
    /// The resource is missing or unreadable.
    #[error("failed to read mortgage rates from {path}: {source}")]
    Io {
        /// Path that was opened.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer could not read a record.
    #[error("invalid mortgage rate CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A record was read but one of its fields does not parse.
    #[error("error parsing CSV row {line} ({row}): {reason}")]
    MalformedRow {
        /// 1-based line number in the resource.
        line: u64,
        /// Raw fields joined with commas.
        row: String,
        /// Which field failed and why.
        reason: String,
    },
}
