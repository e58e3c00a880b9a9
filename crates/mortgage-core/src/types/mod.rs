//! Domain types for mortgage checks.
//!
//! - [`InterestRate`]: Fixed rate offered for a maturity period
//! - [`MortgageCheckRequest`]: Validated input of a feasibility check
//! - [`MortgageCheckResult`]: Outcome of a feasibility check

mod mortgage;
mod rate;

pub use mortgage::{MortgageCheckRequest, MortgageCheckResult};
pub use rate::InterestRate;
