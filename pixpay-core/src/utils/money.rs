//! Monetary conversion helpers.
//!
//! The gateway only accepts integer minor units; decimal currency values
//! must pass through [`to_minor_units`] before they reach a wire type.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Conversion failures for monetary values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    /// The amount does not fit an `i64` once scaled to minor units.
    #[error("amount {0} overflows minor-unit representation")]
    Overflow(Decimal),
}

/// Convert a decimal currency amount to integer minor units (centavos).
///
/// Rounds half away from zero, so `19.995` becomes `2000`.
pub fn to_minor_units(amount: Decimal) -> Result<i64, MoneyError> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(MoneyError::Overflow(amount))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(MoneyError::Overflow(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_typical_totals() {
        assert_eq!(to_minor_units(Decimal::new(1999, 2)), Ok(1999)); // 19.99
        assert_eq!(to_minor_units(Decimal::new(10, 0)), Ok(1000)); // 10
        assert_eq!(to_minor_units(Decimal::new(1, 1)), Ok(10)); // 0.1
        assert_eq!(to_minor_units(Decimal::ZERO), Ok(0));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(to_minor_units(Decimal::new(19995, 3)), Ok(2000)); // 19.995
        assert_eq!(to_minor_units(Decimal::new(9994, 3)), Ok(999)); // 9.994
        assert_eq!(to_minor_units(Decimal::new(-19995, 3)), Ok(-2000)); // -19.995
    }

    #[test]
    fn sub_cent_precision_is_rounded_not_truncated() {
        assert_eq!(to_minor_units(Decimal::new(123456, 4)), Ok(1235)); // 12.3456
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            to_minor_units(Decimal::MAX),
            Err(MoneyError::Overflow(Decimal::MAX))
        );
    }
}
