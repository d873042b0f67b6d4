//! Rounding conventions for collapsing decimal results to minor units.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounding convention applied when a decimal amount is collapsed to a
/// whole number of minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round to nearest, ties away from zero.
    #[default]
    HalfUp,
    /// Round to nearest, ties to the even neighbour (banker's rounding).
    HalfEven,
    /// Round to nearest, ties towards zero.
    HalfDown,
    /// Round away from zero.
    Up,
    /// Round towards zero (truncation).
    Down,
    /// Round towards positive infinity.
    Ceiling,
    /// Round towards negative infinity.
    Floor,
}

impl RoundingMode {
    /// The equivalent `rust_decimal` strategy.
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }
}

/// Round `value` to zero fractional digits using `mode`.
///
/// This is the single rounding step applied at construction and after every
/// arithmetic operation; results that are already integral pass through
/// unchanged.
pub fn round_to_unit(value: Decimal, mode: RoundingMode) -> Decimal {
    value.round_dp_with_strategy(0, mode.strategy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn half_up_rounds_midpoint_away_from_zero() {
        assert_eq!(round_to_unit(dec!(2.5), RoundingMode::HalfUp), dec!(3));
        assert_eq!(round_to_unit(dec!(-2.5), RoundingMode::HalfUp), dec!(-3));
    }

    #[test]
    fn half_even_rounds_midpoint_to_even() {
        assert_eq!(round_to_unit(dec!(2.5), RoundingMode::HalfEven), dec!(2));
        assert_eq!(round_to_unit(dec!(3.5), RoundingMode::HalfEven), dec!(4));
    }

    #[test]
    fn directed_modes() {
        assert_eq!(round_to_unit(dec!(2.1), RoundingMode::Up), dec!(3));
        assert_eq!(round_to_unit(dec!(2.9), RoundingMode::Down), dec!(2));
        assert_eq!(round_to_unit(dec!(-2.1), RoundingMode::Ceiling), dec!(-2));
        assert_eq!(round_to_unit(dec!(-2.1), RoundingMode::Floor), dec!(-3));
    }

    #[test]
    fn integral_values_pass_through() {
        assert_eq!(round_to_unit(dec!(42), RoundingMode::HalfUp), dec!(42));
        assert_eq!(round_to_unit(dec!(-42), RoundingMode::Floor), dec!(-42));
    }
}
