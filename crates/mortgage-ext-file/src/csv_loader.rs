//! CSV interest rate loader.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::{debug, info};

use mortgage_core::InterestRate;
use mortgage_traits::RateStore;

use crate::error::RateLoadError;
use crate::table::RateTable;

/// Header row of the rate CSV. Columns are read by position.
pub const RATE_HEADERS: [&str; 3] = ["Maturity Period", "Interest Rate", "Last Update"];

/// Pattern of the `Last Update` column (`dd-MM-yyyy HH:mm:ss`).
pub const LAST_UPDATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Loads the interest rate table from CSV.
///
/// The first row is a header and is skipped. Surrounding whitespace of every
/// field is ignored. Any unparseable row fails the whole load.
pub struct CsvRateLoader;

impl CsvRateLoader {
    /// Loads every rate from the CSV file at `path`.
    ///
    /// A header-only or empty file produces an empty table.
    pub fn load_all(path: impl AsRef<Path>) -> Result<RateTable, RateLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RateLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let table = Self::from_reader(file)?;
        info!("Loaded {} mortgage rates from {}", table.len(), path.display());
        Ok(table)
    }

    /// Loads every rate from CSV data in `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<RateTable, RateLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut rates = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, csv::Position::line);

            let rate = parse_record(&record).map_err(|reason| RateLoadError::MalformedRow {
                line,
                row: record.iter().collect::<Vec<_>>().join(","),
                reason,
            })?;
            debug!(
                maturity_period = rate.maturity_period,
                interest_rate = %rate.interest_rate,
                "parsed rate row"
            );
            rates.push(rate);
        }

        Ok(RateTable::new(rates))
    }
}

fn parse_record(record: &csv::StringRecord) -> Result<InterestRate, String> {
    let field = |index: usize| {
        record
            .get(index)
            .ok_or_else(|| format!("missing column '{}'", RATE_HEADERS[index]))
    };

    let maturity_raw = field(0)?;
    let maturity_period: u32 = maturity_raw
        .parse()
        .map_err(|_| format!("invalid maturity period '{maturity_raw}'"))?;
    if maturity_period == 0 {
        return Err("maturity period must be at least 1 year".to_string());
    }

    let rate_raw = field(1)?;
    let interest_rate = Decimal::from_str(rate_raw)
        .map_err(|_| format!("invalid interest rate '{rate_raw}'"))?;
    if interest_rate < Decimal::ZERO {
        return Err(format!("interest rate '{rate_raw}' is negative"));
    }

    let update_raw = field(2)?;
    let last_update = NaiveDateTime::parse_from_str(update_raw, LAST_UPDATE_FORMAT)
        .ok()
        // chrono accepts unpadded fields; the pattern is fixed width.
        .filter(|parsed| parsed.format(LAST_UPDATE_FORMAT).to_string() == update_raw)
        .ok_or_else(|| format!("invalid last update '{update_raw}', expected dd-MM-yyyy HH:mm:ss"))?;

    Ok(InterestRate::new(maturity_period, interest_rate, last_update))
}
