//! Significant-digit decimal arithmetic.
//!
//! `rust_decimal` rounds to decimal places; the payment formula needs rounding
//! to a number of *significant* digits at every intermediate step, so that the
//! result does not depend on the magnitude of the operands. [`MathContext`]
//! provides that, always rounding half away from zero.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{MortgageError, MortgageResult};

/// Context used by the payment calculation: 10 significant digits, half-up.
pub const MATH_CONTEXT: MathContext = MathContext::new(10);

const HALF_UP: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Largest exponent accepted by [`MathContext::pow`].
pub const MAX_POW_EXPONENT: u32 = 999_999_999;

/// Largest power of ten a `Decimal` can hold.
const MAX_DECIMAL_SHIFT: i64 = 28;

/// A decimal split into `mantissa × 10^exponent`.
///
/// The mantissa is zero or lies in `[1, 10)`, so magnitudes far beyond the
/// range of `Decimal` can be carried through multiplication and rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledDecimal {
    /// Significant digits, zero or in `[1, 10)` by absolute value.
    pub mantissa: Decimal,
    /// Power of ten applied to the mantissa.
    pub exponent: i64,
}

impl ScaledDecimal {
    /// Splits `value` exactly.
    pub fn normalize(value: Decimal) -> Self {
        if value.is_zero() {
            return Self {
                mantissa: Decimal::ZERO,
                exponent: 0,
            };
        }
        let digits = significant_digits(value);
        Self {
            mantissa: Decimal::from_i128_with_scale(value.mantissa(), digits - 1),
            exponent: i64::from(digits) - 1 - i64::from(value.scale()),
        }
    }

    /// Multiplies by `10^by`.
    fn shifted(self, by: i64) -> MortgageResult<Self> {
        let exponent = self
            .exponent
            .checked_add(by)
            .ok_or_else(|| MortgageError::arithmetic(format!("exponent overflow in {self}")))?;
        Ok(Self { exponent, ..self })
    }

    /// The value as a `Decimal`.
    ///
    /// Values smaller than `Decimal` can represent become zero.
    pub fn to_decimal(self) -> MortgageResult<Decimal> {
        if self.mantissa.is_zero() || self.exponent == 0 {
            return Ok(self.mantissa);
        }
        let out_of_range = || MortgageError::arithmetic(format!("{self} is out of range"));
        if self.exponent > 0 {
            let factor = power_of_ten(self.exponent).ok_or_else(out_of_range)?;
            self.mantissa.checked_mul(factor).ok_or_else(out_of_range)
        } else {
            match self.exponent.checked_neg().and_then(power_of_ten) {
                Some(divisor) => self.mantissa.checked_div(divisor).ok_or_else(out_of_range),
                None => Ok(Decimal::ZERO),
            }
        }
    }
}

impl fmt::Display for ScaledDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}E{}", self.mantissa, self.exponent)
    }
}

/// `10^exponent` for `0 <= exponent <= 28`.
fn power_of_ten(exponent: i64) -> Option<Decimal> {
    if !(0..=MAX_DECIMAL_SHIFT).contains(&exponent) {
        return None;
    }
    let exponent = u32::try_from(exponent).ok()?;
    Some(Decimal::from_i128_with_scale(10_i128.pow(exponent), 0))
}

/// A precision (in significant digits) applied after each arithmetic step.
///
/// Products are computed exactly before rounding as long as both operands fit
/// in 14 significant digits, which covers every context the crate builds.
///
/// # Example
///
/// ```rust
/// use mortgage_core::MathContext;
/// use rust_decimal_macros::dec;
///
/// let mc = MathContext::new(4);
/// assert_eq!(mc.round(dec!(3.14159)).unwrap(), dec!(3.142));
/// assert_eq!(mc.div(dec!(1), dec!(3)).unwrap(), dec!(0.3333));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathContext {
    precision: u32,
}

impl MathContext {
    /// Creates a context rounding to `precision` significant digits.
    #[must_use]
    pub const fn new(precision: u32) -> Self {
        Self { precision }
    }

    /// Number of significant digits kept by this context.
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounds `value` to this context's precision.
    pub fn round(&self, value: Decimal) -> MortgageResult<Decimal> {
        let digits = significant_digits(value);
        if digits <= self.precision {
            return Ok(value);
        }

        let excess = digits - self.precision;
        let scale = value.scale();
        if excess <= scale {
            return Ok(value.round_dp_with_strategy(scale - excess, HALF_UP));
        }

        // Rounding reaches into the integer part: shift right, round, shift back.
        let shift = excess - scale;
        let shifted = Decimal::from_i128_with_scale(value.mantissa(), scale + shift);
        let factor = Decimal::from_i128_with_scale(10_i128.pow(shift), 0);
        shifted
            .round_dp_with_strategy(0, HALF_UP)
            .checked_mul(factor)
            .ok_or_else(|| MortgageError::arithmetic(format!("overflow rounding {value}")))
    }

    /// `a × b`, rounded.
    pub fn mul(&self, a: Decimal, b: Decimal) -> MortgageResult<Decimal> {
        let product = a
            .checked_mul(b)
            .ok_or_else(|| MortgageError::arithmetic(format!("overflow in {a} * {b}")))?;
        self.round(product)
    }

    /// `a ÷ b`, rounded.
    pub fn div(&self, a: Decimal, b: Decimal) -> MortgageResult<Decimal> {
        if b.is_zero() {
            return Err(MortgageError::arithmetic(format!("division of {a} by zero")));
        }
        let quotient = a
            .checked_div(b)
            .ok_or_else(|| MortgageError::arithmetic(format!("overflow in {a} / {b}")))?;
        self.round(quotient)
    }

    /// `a − b`, rounded.
    pub fn sub(&self, a: Decimal, b: Decimal) -> MortgageResult<Decimal> {
        let difference = a
            .checked_sub(b)
            .ok_or_else(|| MortgageError::arithmetic(format!("overflow in {a} - {b}")))?;
        self.round(difference)
    }

    /// `base` raised to a non-negative integer power.
    ///
    /// See [`MathContext::pow_scaled`]; this variant fails when the result
    /// does not fit in a `Decimal`.
    pub fn pow(&self, base: Decimal, exponent: u32) -> MortgageResult<Decimal> {
        self.pow_scaled(base, exponent)?.to_decimal()
    }

    /// `base` raised to a non-negative integer power, kept in split form.
    ///
    /// Uses left-to-right binary exponentiation. Every intermediate product is
    /// rounded to a working precision of `precision + digits(exponent) + 1`
    /// significant digits, and the final value to this context's precision.
    /// `base^0` is exactly one.
    pub fn pow_scaled(&self, base: Decimal, exponent: u32) -> MortgageResult<ScaledDecimal> {
        if exponent == 0 {
            return Ok(ScaledDecimal::normalize(Decimal::ONE));
        }
        if exponent > MAX_POW_EXPONENT {
            return Err(MortgageError::invalid_input(format!(
                "exponent {exponent} exceeds {MAX_POW_EXPONENT}"
            )));
        }

        let exponent_digits = exponent.ilog10() + 1;
        if exponent_digits > self.precision {
            return Err(MortgageError::invalid_input(format!(
                "exponent {exponent} has more digits than precision {}",
                self.precision
            )));
        }
        let working = MathContext::new(self.precision + exponent_digits + 1);

        let base = ScaledDecimal::normalize(base);
        let mut acc = ScaledDecimal::normalize(Decimal::ONE);
        let mut seen_bit = false;
        for bit in (0..u32::BITS).rev() {
            if exponent & (1 << bit) != 0 {
                seen_bit = true;
                acc = working.mul_scaled(acc, base)?;
            }
            if bit == 0 {
                break;
            }
            if seen_bit {
                acc = working.mul_scaled(acc, acc)?;
            }
        }

        let rounded = ScaledDecimal::normalize(self.round(acc.mantissa)?);
        rounded.shifted(acc.exponent)
    }

    /// `a × b` in split form, rounded.
    fn mul_scaled(&self, a: ScaledDecimal, b: ScaledDecimal) -> MortgageResult<ScaledDecimal> {
        let exponent = a.exponent.checked_add(b.exponent).ok_or_else(|| {
            MortgageError::arithmetic(format!("exponent overflow in {a} * {b}"))
        })?;
        ScaledDecimal::normalize(self.mul(a.mantissa, b.mantissa)?).shifted(exponent)
    }
}

/// Rounds half-up to exactly `dp` fractional digits.
///
/// Unlike `Decimal::round_dp`, the scale of the result is always `dp`, so
/// `1000` comes back as `1000.00` for `dp = 2`.
#[must_use]
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, HALF_UP);
    rounded.rescale(dp);
    rounded
}

/// Number of digits in the unscaled value; zero counts as one digit.
fn significant_digits(value: Decimal) -> u32 {
    value
        .mantissa()
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |log| log + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_keeps_short_values() {
        assert_eq!(MATH_CONTEXT.round(dec!(0.05)).unwrap(), dec!(0.05));
        assert_eq!(MATH_CONTEXT.round(Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_round_fractional_digits() {
        let third = dec!(0.05) / dec!(12);
        assert_eq!(MATH_CONTEXT.round(third).unwrap(), dec!(0.004166666667));
        assert_eq!(
            MATH_CONTEXT.round(dec!(1.23456789049)).unwrap(),
            dec!(1.234567890)
        );
    }

    #[test]
    fn test_round_midpoint_goes_away_from_zero() {
        assert_eq!(
            MATH_CONTEXT.round(dec!(1.0000000005)).unwrap(),
            dec!(1.000000001)
        );
        assert_eq!(
            MATH_CONTEXT.round(dec!(-1.0000000005)).unwrap(),
            dec!(-1.000000001)
        );
    }

    #[test]
    fn test_round_into_integer_part() {
        assert_eq!(
            MATH_CONTEXT.round(dec!(12345678905)).unwrap(),
            dec!(12345678910)
        );
        assert_eq!(MathContext::new(2).round(dec!(1250)).unwrap(), dec!(1300));
    }

    #[test]
    fn test_div_and_sub() {
        let mc = MathContext::new(4);
        assert_eq!(mc.div(dec!(2), dec!(3)).unwrap(), dec!(0.6667));
        assert_eq!(mc.sub(dec!(1.00049), dec!(1)).unwrap(), dec!(0.00049));
        assert!(mc.div(dec!(1), Decimal::ZERO).is_err());
    }

    #[test]
    fn test_pow_small_exponents() {
        assert_eq!(MATH_CONTEXT.pow(dec!(1.1), 0).unwrap(), Decimal::ONE);
        assert_eq!(MATH_CONTEXT.pow(dec!(1.1), 1).unwrap(), dec!(1.1));
        assert_eq!(MATH_CONTEXT.pow(dec!(1.1), 2).unwrap(), dec!(1.21));
        assert_eq!(MATH_CONTEXT.pow(dec!(2), 10).unwrap(), dec!(1024));
    }

    #[test]
    fn test_pow_rounds_to_context() {
        // 1.5^3 = 3.375
        assert_eq!(MathContext::new(3).pow(dec!(1.5), 3).unwrap(), dec!(3.38));
    }

    #[test]
    fn test_pow_rejects_exponent_wider_than_precision() {
        assert!(MathContext::new(2).pow(dec!(1.01), 120).is_err());
        assert!(MATH_CONTEXT.pow(dec!(1), MAX_POW_EXPONENT + 1).is_err());
    }

    #[test]
    fn test_pow_scaled_beyond_decimal_range() {
        // (1 + 2/12)^600 and (1 + 20/12)^360
        let growth = MATH_CONTEXT.pow_scaled(dec!(1.1666666667), 600).unwrap();
        assert_eq!(growth.mantissa, dec!(1.472562667));
        assert_eq!(growth.exponent, 40);

        let growth = MATH_CONTEXT.pow_scaled(dec!(2.666666667), 360).unwrap();
        assert_eq!(growth.mantissa, dec!(2.232254142));
        assert_eq!(growth.exponent, 153);

        assert!(MATH_CONTEXT.pow(dec!(1.1666666667), 600).is_err());
    }

    #[test]
    fn test_pow_scaled_matches_pow_in_range() {
        let scaled = MATH_CONTEXT.pow_scaled(dec!(1.004166666667), 120).unwrap();
        assert_eq!(
            scaled.to_decimal().unwrap(),
            MATH_CONTEXT.pow(dec!(1.004166666667), 120).unwrap()
        );
        assert_eq!(scaled.to_decimal().unwrap(), dec!(1.647009498));
    }

    #[test]
    fn test_normalize_round_trips() {
        for value in [dec!(0), dec!(1), dec!(1024), dec!(0.00049), dec!(-12.5)] {
            let scaled = ScaledDecimal::normalize(value);
            assert_eq!(scaled.to_decimal().unwrap(), value);
        }
        let scaled = ScaledDecimal::normalize(dec!(1024));
        assert_eq!(scaled.mantissa, dec!(1.024));
        assert_eq!(scaled.exponent, 3);
    }

    #[test]
    fn test_round_half_up_fixes_scale() {
        assert_eq!(round_half_up(dec!(1000), 2).to_string(), "1000.00");
        assert_eq!(round_half_up(dec!(106.0655), 2).to_string(), "106.07");
        assert_eq!(round_half_up(dec!(0.125), 2).to_string(), "0.13");
        assert_eq!(round_half_up(dec!(0.135), 2).to_string(), "0.14");
    }
}
