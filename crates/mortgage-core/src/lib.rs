//! # Mortgage Core
//!
//! Core types and payment arithmetic for the mortgage feasibility service.
//!
//! This crate provides the building blocks shared by the rest of the workspace:
//!
//! - **Types**: [`InterestRate`], [`MortgageCheckRequest`], [`MortgageCheckResult`]
//! - **Math**: [`MathContext`], a significant-digit rounding context over `Decimal`
//! - **Payment**: the fixed-installment amortization formula
//!
//! All money and rate arithmetic is done in `rust_decimal::Decimal`. Binary
//! floating point never enters a calculation.
//!
//! ## Example
//!
//! ```rust
//! use mortgage_core::payment::calculate_monthly_payment;
//! use rust_decimal_macros::dec;
//!
//! let monthly = calculate_monthly_payment(dec!(10000), dec!(5), 10).unwrap();
//! assert_eq!(monthly, dec!(106.07));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod math;
pub mod payment;
pub mod types;

pub use error::{MortgageError, MortgageResult};
pub use math::{MathContext, ScaledDecimal};
pub use types::{InterestRate, MortgageCheckRequest, MortgageCheckResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MortgageError, MortgageResult};
    pub use crate::math::{round_half_up, MathContext, MATH_CONTEXT};
    pub use crate::payment::calculate_monthly_payment;
    pub use crate::types::{InterestRate, MortgageCheckRequest, MortgageCheckResult};
}
