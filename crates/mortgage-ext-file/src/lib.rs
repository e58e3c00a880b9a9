//! # Mortgage Ext File
//!
//! File-based interest rate table for the mortgage feasibility service.
//!
//! This crate provides:
//! - [`CsvRateLoader`]: parses a rate CSV once at startup
//! - [`RateTable`]: the immutable in-memory table, implementing
//!   [`mortgage_traits::RateStore`]
//!
//! The expected CSV layout:
//!
//! ```text
//! Maturity Period,Interest Rate,Last Update
//! 10,3.50,01-01-2024 10:00:00
//! 20,4.10,01-01-2024 10:00:00
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod csv_loader;
mod error;
mod table;

pub use csv_loader::{CsvRateLoader, LAST_UPDATE_FORMAT, RATE_HEADERS};
pub use error::RateLoadError;
pub use table::RateTable;
