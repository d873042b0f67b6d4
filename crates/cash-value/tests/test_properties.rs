//! Algebraic properties of `Cash` arithmetic.

use cash_value::{Cash, Interpretation, Options};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn cash(minor_units: i64) -> Cash {
    Cash::new(minor_units, Options::new()).unwrap()
}

const AMOUNT_RANGE: std::ops::Range<i64> = -1_000_000_000_000..1_000_000_000_000;

proptest! {
    #[test]
    fn addition_commutes(a in AMOUNT_RANGE, b in AMOUNT_RANGE) {
        let left = cash(a).add(&cash(b)).unwrap();
        let right = cash(b).add(&cash(a)).unwrap();
        prop_assert_eq!(left.amount(), right.amount());
    }

    #[test]
    fn subtraction_inverts_addition(a in AMOUNT_RANGE, b in AMOUNT_RANGE) {
        let sum = cash(a).add(&cash(b)).unwrap();
        let back = sum.sub(&cash(b)).unwrap();
        prop_assert_eq!(back.amount(), Decimal::from(a));
    }

    #[test]
    fn multiply_then_divide_round_trips(a in AMOUNT_RANGE, k in 1i64..10_000) {
        let scaled = cash(a).mul(k);
        let back = scaled.div_scalar(k).unwrap();
        prop_assert_eq!(back.amount(), Decimal::from(a));
    }

    #[test]
    fn divmod_satisfies_the_division_identity(
        a in AMOUNT_RANGE,
        b in AMOUNT_RANGE.prop_filter("divisor must be non-zero", |b| *b != 0),
    ) {
        let (quotient, remainder) = cash(a).divmod(&cash(b)).unwrap();
        prop_assert_eq!(quotient * Decimal::from(b) + remainder.amount(), Decimal::from(a));
    }

    #[test]
    fn divmod_scalar_satisfies_the_division_identity(
        a in AMOUNT_RANGE,
        b in AMOUNT_RANGE.prop_filter("divisor must be non-zero", |b| *b != 0),
    ) {
        let (quotient, remainder) = cash(a).divmod_scalar(b).unwrap();
        prop_assert_eq!(
            quotient.amount() * Decimal::from(b) + remainder.amount(),
            Decimal::from(a)
        );
    }

    #[test]
    fn rendering_round_trips_for_non_negative_amounts(a in 0i64..1_000_000_000_000) {
        use cash_value::ToCash;

        let original = cash(a);
        let reconstructed = original
            .to_decimal_string()
            .to_cash_with(Options::new().interpretation(Interpretation::WholeDecimal))
            .unwrap();
        prop_assert_eq!(reconstructed.amount(), Decimal::from(a));
    }
}
