//! In-memory interest rate table.

use mortgage_core::InterestRate;
use mortgage_traits::RateStore;

/// Immutable interest rate table, in load order.
///
/// Built once and shared behind an `Arc`; there is no way to modify it after
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    rates: Vec<InterestRate>,
}

impl RateTable {
    /// Creates a table from entries in load order.
    pub fn new(rates: Vec<InterestRate>) -> Self {
        Self { rates }
    }
}

impl FromIterator<InterestRate> for RateTable {
    fn from_iter<I: IntoIterator<Item = InterestRate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl RateStore for RateTable {
    fn find_all(&self) -> &[InterestRate] {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_find_all_keeps_load_order() {
        let updated = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let table: RateTable = [30, 10, 20]
            .into_iter()
            .map(|period| InterestRate::new(period, dec!(4), updated))
            .collect();

        let periods: Vec<u32> = table.find_all().iter().map(|r| r.maturity_period).collect();
        assert_eq!(periods, vec![30, 10, 20]);
        assert_eq!(table.find_by_maturity_period(10).map(|r| r.maturity_period), Some(10));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(RateTable::default().is_empty());
    }
}
