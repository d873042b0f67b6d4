//! Tests for the process-wide defaults lifecycle.
//!
//! Every test here mutates the shared `Defaults` singleton, so they all
//! serialize on one lock and restore the initial record before finishing.

use std::sync::Mutex;

use cash_core::{Error, RoundingMode};
use cash_currencies::currencies::EUR;
use cash_value::{Cash, Defaults, Interpretation, Options, VatStatus};
use rust_decimal_macros::dec;

static DEFAULTS_GUARD: Mutex<()> = Mutex::new(());

fn with_reset(test: impl FnOnce()) {
    let _guard = DEFAULTS_GUARD
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    Defaults::instance().reset();
    test();
    Defaults::instance().reset();
}

#[test]
fn initial_record() {
    with_reset(|| {
        let defaults = Defaults::instance();
        assert_eq!(defaults.units_per_whole(), 100);
        assert_eq!(defaults.rounding(), RoundingMode::HalfUp);
        assert_eq!(defaults.currency(), None);
        assert_eq!(defaults.vat_rate(), dec!(20));
        assert_eq!(defaults.vat(), VatStatus::Excluded);
        assert_eq!(defaults.interpretation(), Interpretation::MinorUnits);
    });
}

#[test]
fn changed_defaults_apply_to_new_values() {
    with_reset(|| {
        Defaults::instance().set_units_per_whole(1000).unwrap();
        Defaults::instance().set_rounding(RoundingMode::HalfEven);
        Defaults::instance().set_currency(Some(EUR));

        let value = Cash::new(2500, Options::new()).unwrap();
        // EUR carries its own granularity, which beats the default.
        assert_eq!(value.units_per_whole(), 100);
        assert_eq!(value.rounding(), RoundingMode::HalfEven);
        assert_eq!(value.currency(), Some(EUR));
    });
}

#[test]
fn constructed_values_never_reread_defaults() {
    with_reset(|| {
        let value = Cash::new(2500, Options::new()).unwrap();
        Defaults::instance().set_units_per_whole(10).unwrap();
        Defaults::instance()
            .set_vat(VatStatus::Included)
            .unwrap();

        // The value keeps the configuration captured at construction,
        // and so does everything derived from it.
        assert_eq!(value.units_per_whole(), 100);
        assert_eq!(value.vat(), VatStatus::Excluded);
        let derived = value.mul(2);
        assert_eq!(derived.units_per_whole(), 100);
        assert_eq!(derived.vat(), VatStatus::Excluded);
    });
}

#[test]
fn default_interpretation_applies() {
    with_reset(|| {
        Defaults::instance().set_interpretation(Interpretation::WholeDecimal);
        let value = Cash::new(dec!(123.45), Options::new()).unwrap();
        assert_eq!(value.amount(), dec!(12345));
    });
}

#[test]
fn default_vat_rate_applies() {
    with_reset(|| {
        Defaults::instance().set_vat_rate(dec!(25));
        let value = Cash::new(1000, Options::new()).unwrap();
        assert_eq!(value.amount_plus_vat(), dec!(1250));
    });
}

#[test]
fn invalid_defaults_are_rejected_at_set_time() {
    with_reset(|| {
        assert!(matches!(
            Defaults::instance().set_units_per_whole(0),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Defaults::instance().set_vat(VatStatus::Mixed),
            Err(Error::InvalidConfiguration(_))
        ));
        // The record is untouched by the failed setters.
        assert_eq!(Defaults::instance().units_per_whole(), 100);
        assert_eq!(Defaults::instance().vat(), VatStatus::Excluded);
    });
}

#[test]
fn reset_restores_the_initial_record() {
    with_reset(|| {
        Defaults::instance().set_units_per_whole(7).unwrap();
        Defaults::instance().set_currency(Some(EUR));
        Defaults::instance().set_rounding(RoundingMode::Floor);
        Defaults::instance().reset();

        assert_eq!(Defaults::instance().units_per_whole(), 100);
        assert_eq!(Defaults::instance().currency(), None);
        assert_eq!(Defaults::instance().rounding(), RoundingMode::HalfUp);
    });
}
