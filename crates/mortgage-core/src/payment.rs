//! Fixed monthly installment of an amortizing loan.
//!
//! Uses the standard annuity formula
//!
//! ```text
//! M = P · [ i(1 + i)^n ] / [ (1 + i)^n − 1 ]
//! ```
//!
//! with `n = years × 12` and `i = annual_rate_percent / 100 / 12`.
//!
//! Intermediate values are rounded to 10 significant digits, half-up (see
//! [`MATH_CONTEXT`]), and the installment to cents, half-up. Results are
//! reproducible to the cent for audit.

use rust_decimal::Decimal;

use crate::error::{MortgageError, MortgageResult};
use crate::math::{round_half_up, MATH_CONTEXT};

/// Percent to fraction.
pub const PERCENT_DIVISOR: Decimal = Decimal::ONE_HUNDRED;

/// Months per year.
pub const MONTHS_IN_YEAR: u32 = 12;

/// Fractional digits of a monthly installment.
pub const CENTS_DP: u32 = 2;

/// From `10^20` on, `(1 + i)^n − 1` rounds back to `(1 + i)^n` at 10
/// significant digits.
const CANCELLING_EXPONENT: i64 = 20;

/// Calculates the monthly installment.
///
/// Principal and rate must be non-negative and the term at least one year;
/// the request boundary guarantees this.
///
/// Edge cases:
/// - zero principal returns zero, whatever the rate and term;
/// - a zero rate splits the principal into `years × 12` equal installments.
///
/// # Errors
///
/// Returns `MortgageError` when the term exceeds 999,999,999 months or an
/// amount is too large for `Decimal` arithmetic.
///
/// # Example
///
/// ```rust
/// use mortgage_core::payment::calculate_monthly_payment;
/// use rust_decimal_macros::dec;
///
/// let monthly = calculate_monthly_payment(dec!(12000), dec!(0), 1).unwrap();
/// assert_eq!(monthly.to_string(), "1000.00");
/// ```
pub fn calculate_monthly_payment(
    principal: Decimal,
    annual_rate_percent: Decimal,
    years: u32,
) -> MortgageResult<Decimal> {
    if principal.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let total_months = years.checked_mul(MONTHS_IN_YEAR).ok_or_else(|| {
        MortgageError::invalid_input(format!("term of {years} years is too long"))
    })?;
    if annual_rate_percent.is_zero() {
        let installment = principal.checked_div(Decimal::from(total_months)).ok_or_else(|| {
            MortgageError::arithmetic(format!("cannot split {principal} over {total_months} months"))
        })?;
        return Ok(round_half_up(installment, CENTS_DP));
    }

    let monthly_rate = MATH_CONTEXT.div(
        MATH_CONTEXT.div(annual_rate_percent, PERCENT_DIVISOR)?,
        Decimal::from(MONTHS_IN_YEAR),
    )?;

    let base = monthly_rate
        .checked_add(Decimal::ONE)
        .ok_or_else(|| MortgageError::arithmetic(format!("overflow in 1 + {monthly_rate}")))?;
    // (1 + i)^n
    let growth = MATH_CONTEXT.pow_scaled(base, total_months)?;

    let factor = if growth.exponent < CANCELLING_EXPONENT {
        let growth = growth.to_decimal()?;
        // i(1 + i)^n
        let numerator = MATH_CONTEXT.mul(monthly_rate, growth)?;
        // (1 + i)^n - 1
        let denominator = MATH_CONTEXT.sub(growth, Decimal::ONE)?;
        MATH_CONTEXT.div(numerator, denominator)?
    } else {
        // The denominator equals the growth, so its power of ten cancels.
        let numerator = MATH_CONTEXT.mul(monthly_rate, growth.mantissa)?;
        MATH_CONTEXT.div(numerator, growth.mantissa)?
    };
    let payment = principal
        .checked_mul(factor)
        .ok_or_else(|| MortgageError::arithmetic(format!("overflow in {principal} * {factor}")))?;

    Ok(round_half_up(payment, CENTS_DP))
}
