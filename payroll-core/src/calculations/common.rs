//! Common utility functions for payroll calculations.
//!
//! This module provides shared functionality used by the tax, contribution
//! and resolver calculations: rounding, comparisons, and conversion of
//! caller-supplied floating-point amounts into [`Decimal`].

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use thiserror::Error;

/// Errors raised when a caller-supplied amount is outside the valid domain.
#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    /// NaN or infinite input.
    #[error("amount must be finite, got {0}")]
    NotFinite(f64),

    /// Negative input where a non-negative amount is required.
    #[error("amount must be non-negative, got {0}")]
    Negative(f64),

    /// Finite input too large to represent as a decimal.
    #[error("amount {0} is out of range")]
    OutOfRange(f64),
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

/// Converts a caller-supplied `f64` into a non-negative [`Decimal`].
///
/// # Errors
///
/// Returns [`AmountError`] for NaN, infinities, negative values, or values
/// beyond the decimal range.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payroll_core::calculations::common::{AmountError, amount_from_f64};
///
/// assert_eq!(amount_from_f64(1234.5), Ok(dec!(1234.5)));
/// assert_eq!(amount_from_f64(-1.0), Err(AmountError::Negative(-1.0)));
/// ```
pub fn amount_from_f64(value: f64) -> Result<Decimal, AmountError> {
    if !value.is_finite() {
        return Err(AmountError::NotFinite(value));
    }
    if value < 0.0 {
        return Err(AmountError::Negative(value));
    }
    Decimal::from_f64(value).ok_or(AmountError::OutOfRange(value))
}
