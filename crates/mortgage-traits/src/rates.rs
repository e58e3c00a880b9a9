//! Interest rate store traits.

use mortgage_core::InterestRate;

/// Read access to an interest rate table.
///
/// A store is filled once before it is shared and is read-only afterwards,
/// so implementations hand out plain borrows and need no locking.
pub trait RateStore: Send + Sync {
    /// All entries, in load order.
    fn find_all(&self) -> &[InterestRate];

    /// First entry for `maturity_period`, in load order.
    ///
    /// The default is a linear scan over [`RateStore::find_all`]; rate tables
    /// hold a handful of rows.
    fn find_by_maturity_period(&self, maturity_period: u32) -> Option<&InterestRate> {
        self.find_all()
            .iter()
            .find(|rate| rate.maturity_period == maturity_period)
    }

    /// Number of entries.
    fn len(&self) -> usize {
        self.find_all().len()
    }

    /// Whether the table has no entries.
    fn is_empty(&self) -> bool {
        self.find_all().is_empty()
    }
}

impl RateStore for Vec<InterestRate> {
    fn find_all(&self) -> &[InterestRate] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn rate(period: u32, value: Decimal) -> InterestRate {
        let updated = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        InterestRate::new(period, value, updated)
    }

    #[test]
    fn test_find_by_maturity_period() {
        let store = vec![rate(10, dec!(3.5)), rate(20, dec!(4.0))];
        assert_eq!(
            store.find_by_maturity_period(20).map(|r| r.interest_rate),
            Some(dec!(4.0))
        );
        assert!(store.find_by_maturity_period(30).is_none());
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let store = vec![rate(10, dec!(3.5)), rate(10, dec!(9.9))];
        assert_eq!(
            store.find_by_maturity_period(10).map(|r| r.interest_rate),
            Some(dec!(3.5))
        );
    }

    #[test]
    fn test_empty_store() {
        let store: Vec<InterestRate> = Vec::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.find_by_maturity_period(10).is_none());
    }
}
