//! Interest rate entries of the rate table.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fixed annual interest rate offered for one maturity period.
///
/// Entries are created once when the rate table is loaded and never change
/// afterwards.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use mortgage_core::InterestRate;
/// use rust_decimal_macros::dec;
///
/// let updated = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let rate = InterestRate::new(10, dec!(3.5), updated);
/// assert_eq!(rate.maturity_period, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestRate {
    /// Loan term in whole years.
    pub maturity_period: u32,
    /// Annual rate as a percentage (3.5 means 3.5%).
    pub interest_rate: Decimal,
    /// When the rate was last revised.
    pub last_update: NaiveDateTime,
}

impl InterestRate {
    /// Creates a new rate entry.
    #[must_use]
    pub fn new(maturity_period: u32, interest_rate: Decimal, last_update: NaiveDateTime) -> Self {
        Self {
            maturity_period,
            interest_rate,
            last_update,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_serializes_camel_case() {
        let updated = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let rate = InterestRate::new(20, dec!(4.25), updated);

        let json = serde_json::to_value(&rate).unwrap();
        assert_eq!(json["maturityPeriod"], 20);
        assert_eq!(json["interestRate"].to_string(), "4.25");
        assert_eq!(json["lastUpdate"], "2024-03-15T09:30:00");
    }
}
