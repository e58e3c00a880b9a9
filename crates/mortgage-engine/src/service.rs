//! Mortgage feasibility service.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use mortgage_core::payment::calculate_monthly_payment;
use mortgage_core::{InterestRate, MortgageCheckRequest, MortgageCheckResult};
use mortgage_traits::RateStore;

use crate::error::EngineError;

/// Largest loan as a multiple of yearly income.
pub const MAX_INCOME_MULTIPLIER: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Checks mortgage requests against the affordability rules.
///
/// Stateless apart from the shared, read-only rate store, so one instance
/// serves any number of concurrent requests.
#[derive(Clone)]
pub struct MortgageService {
    rates: Arc<dyn RateStore>,
}

impl MortgageService {
    /// Create a service reading rates from `rates`.
    pub fn new(rates: Arc<dyn RateStore>) -> Self {
        Self { rates }
    }

    /// All offered rates, in load order.
    pub fn get_all_rates(&self) -> &[InterestRate] {
        self.rates.find_all()
    }

    /// Decide whether `request` is affordable and price it.
    ///
    /// A request is feasible when the loan is at most four times the income
    /// and at most the home value; both limits are inclusive. Infeasible
    /// requests return a zero cost without touching the rate store.
    ///
    /// # Errors
    ///
    /// [`EngineError::RateNotFound`] when no rate is offered for the
    /// requested maturity period.
    pub fn check_mortgage(
        &self,
        request: &MortgageCheckRequest,
    ) -> Result<MortgageCheckResult, EngineError> {
        // An income too large to multiply covers any representable loan.
        let income_feasible = request
            .income
            .checked_mul(MAX_INCOME_MULTIPLIER)
            .map_or(true, |limit| request.loan_value <= limit);
        let value_feasible = request.loan_value <= request.home_value;

        if !income_feasible || !value_feasible {
            debug!(
                income_feasible,
                value_feasible,
                maturity_period = request.maturity_period,
                "Mortgage not feasible"
            );
            return Ok(MortgageCheckResult::not_feasible());
        }

        let rate = self
            .rates
            .find_by_maturity_period(request.maturity_period)
            .ok_or(EngineError::RateNotFound {
                maturity_period: request.maturity_period,
            })?;

        let monthly_costs = calculate_monthly_payment(
            request.loan_value,
            rate.interest_rate,
            request.maturity_period,
        )?;

        debug!(
            maturity_period = request.maturity_period,
            interest_rate = %rate.interest_rate,
            monthly_costs = %monthly_costs,
            "Mortgage feasible"
        );
        Ok(MortgageCheckResult::feasible(monthly_costs))
    }
}
