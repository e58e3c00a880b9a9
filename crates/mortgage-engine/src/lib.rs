//! # Mortgage Engine
//!
//! Mortgage feasibility evaluation.
//!
//! This crate provides [`MortgageService`], which applies the affordability
//! rules to a [`MortgageCheckRequest`](mortgage_core::MortgageCheckRequest),
//! looks up the applicable rate in a [`RateStore`](mortgage_traits::RateStore)
//! and prices the monthly installment.
//!
//! ## Architecture
//!
//! ```text
//! request ─> affordability rules ─┬─> not feasible (no lookup)
//!                                 │
//!                                 └─> RateStore lookup ─> payment calculation
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod service;

pub use error::EngineError;
pub use service::{MortgageService, MAX_INCOME_MULTIPLIER};
