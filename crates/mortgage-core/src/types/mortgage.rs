//! Mortgage check input and outcome.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated mortgage check.
///
/// Values are assumed to satisfy the boundary constraints: every amount is
/// non-negative and the maturity period is at least one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageCheckRequest {
    /// Gross yearly income of the applicant.
    pub income: Decimal,
    /// Requested loan term in whole years.
    pub maturity_period: u32,
    /// Amount to borrow.
    pub loan_value: Decimal,
    /// Value of the home the loan is secured on.
    pub home_value: Decimal,
}

impl MortgageCheckRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(income: Decimal, maturity_period: u32, loan_value: Decimal, home_value: Decimal) -> Self {
        Self {
            income,
            maturity_period,
            loan_value,
            home_value,
        }
    }
}

/// Outcome of a mortgage check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageCheckResult {
    /// Whether both affordability rules pass.
    pub feasible: bool,
    /// Monthly installment; zero when not feasible.
    pub monthly_costs: Decimal,
}

impl MortgageCheckResult {
    /// A feasible check with its monthly installment.
    #[must_use]
    pub fn feasible(monthly_costs: Decimal) -> Self {
        Self {
            feasible: true,
            monthly_costs,
        }
    }

    /// A rejected check. The monthly cost is zero.
    #[must_use]
    pub fn not_feasible() -> Self {
        Self {
            feasible: false,
            monthly_costs: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_not_feasible_has_zero_cost() {
        let result = MortgageCheckResult::not_feasible();
        assert!(!result.feasible);
        assert!(result.monthly_costs.is_zero());
    }

    #[test]
    fn test_result_wire_names() {
        let json = serde_json::to_value(MortgageCheckResult::feasible(dec!(1111.55))).unwrap();
        assert_eq!(json["feasible"], true);
        assert_eq!(json["monthlyCosts"].to_string(), "1111.55");
    }

    #[test]
    fn test_amounts_keep_their_scale_on_the_wire() {
        let json = serde_json::to_string(&MortgageCheckResult::feasible(dec!(1000.00))).unwrap();
        assert_eq!(json, r#"{"feasible":true,"monthlyCosts":1000.00}"#);
    }

    #[test]
    fn test_request_amounts_are_exact() {
        let request: MortgageCheckRequest = serde_json::from_str(
            r#"{"income":1,"maturityPeriod":1,"loanValue":1234567890123456.79,"homeValue":1234567890123456.78}"#,
        )
        .unwrap();
        assert_eq!(request.loan_value, dec!(1234567890123456.79));
        assert!(request.loan_value > request.home_value);
    }

    #[test]
    fn test_request_from_json() {
        let request: MortgageCheckRequest = serde_json::from_str(
            r#"{"income":60000,"maturityPeriod":15,"loanValue":150000,"homeValue":200000}"#,
        )
        .unwrap();
        assert_eq!(
            request,
            MortgageCheckRequest::new(dec!(60000), 15, dec!(150000), dec!(200000))
        );
    }
}
