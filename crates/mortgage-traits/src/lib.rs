//! # Mortgage Traits
//!
//! Trait definitions for the mortgage feasibility service.
//!
//! This crate contains ONLY trait definitions and depends on nothing but
//! `mortgage-core`. Implementations live in extension crates such as
//! `mortgage-ext-file`.
//!
//! ## Module Structure
//!
//! - [`rates`]: Read access to the interest rate table
//!
//! ## Dependency Injection
//!
//! The feasibility service holds its store as an `Arc<dyn RateStore>`, so any
//! implementation can be plugged in at startup:
//!
//! ```ignore
//! let table = CsvRateLoader::load_all("config/mortgage-rates.csv")?;
//! let service = MortgageService::new(Arc::new(table));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod rates;

pub use rates::RateStore;
