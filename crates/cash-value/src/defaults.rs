//! Process-wide construction defaults.
//!
//! [`Defaults`] is a process-wide singleton accessed via a
//! `std::sync::OnceLock`, holding the fallback values used when a
//! [`Cash`](crate::Cash) is constructed with unset
//! [`Options`](crate::Options) fields.
//!
//! The record is read exactly once, at construction time. Already-built
//! values never consult it again, so changing a default never alters the
//! behavior of existing values. Tests that change defaults should call
//! [`Defaults::reset`] when done.

use std::sync::{Mutex, OnceLock};

use cash_core::{Error, Result, RoundingMode};
use cash_currencies::Currency;
use rust_decimal::Decimal;

use crate::options::Interpretation;
use crate::vat::VatStatus;

/// Fallback construction values, captured in one snapshot per construction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DefaultValues {
    pub units_per_whole: u32,
    pub rounding: RoundingMode,
    pub currency: Option<Currency>,
    pub vat_rate: Decimal,
    pub vat: VatStatus,
    pub interpretation: Interpretation,
}

impl DefaultValues {
    fn initial() -> Self {
        Self {
            units_per_whole: 100,
            rounding: RoundingMode::HalfUp,
            currency: None,
            vat_rate: Decimal::from(20),
            vat: VatStatus::Excluded,
            interpretation: Interpretation::MinorUnits,
        }
    }
}

/// Process-wide defaults used by [`Cash::new`](crate::Cash::new).
pub struct Defaults {
    inner: Mutex<DefaultValues>,
}

static INSTANCE: OnceLock<Defaults> = OnceLock::new();

impl Defaults {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Defaults {
        INSTANCE.get_or_init(|| Defaults {
            inner: Mutex::new(DefaultValues::initial()),
        })
    }

    /// Default subunit granularity (initially 100).
    pub fn units_per_whole(&self) -> u32 {
        self.lock().units_per_whole
    }

    /// Set the default subunit granularity.
    pub fn set_units_per_whole(&self, units: u32) -> Result<()> {
        if units == 0 {
            return Err(Error::InvalidConfiguration(
                "units_per_whole must be positive".into(),
            ));
        }
        self.lock().units_per_whole = units;
        Ok(())
    }

    /// Default rounding convention (initially [`RoundingMode::HalfUp`]).
    pub fn rounding(&self) -> RoundingMode {
        self.lock().rounding
    }

    /// Set the default rounding convention.
    pub fn set_rounding(&self, mode: RoundingMode) {
        self.lock().rounding = mode;
    }

    /// Default currency (initially absent).
    pub fn currency(&self) -> Option<Currency> {
        self.lock().currency
    }

    /// Set or clear the default currency.
    pub fn set_currency(&self, currency: Option<Currency>) {
        self.lock().currency = currency;
    }

    /// Default VAT rate percentage (initially 20).
    pub fn vat_rate(&self) -> Decimal {
        self.lock().vat_rate
    }

    /// Set the default VAT rate percentage.
    pub fn set_vat_rate(&self, rate: Decimal) {
        self.lock().vat_rate = rate;
    }

    /// Default VAT inclusion status (initially [`VatStatus::Excluded`]).
    pub fn vat(&self) -> VatStatus {
        self.lock().vat
    }

    /// Set the default VAT inclusion status.
    ///
    /// [`VatStatus::Mixed`] marks heterogeneous composition and cannot be
    /// a default.
    pub fn set_vat(&self, status: VatStatus) -> Result<()> {
        if status == VatStatus::Mixed {
            return Err(Error::InvalidConfiguration(
                "the default VAT status must be included or excluded".into(),
            ));
        }
        self.lock().vat = status;
        Ok(())
    }

    /// Default raw-amount interpretation (initially
    /// [`Interpretation::MinorUnits`]).
    pub fn interpretation(&self) -> Interpretation {
        self.lock().interpretation
    }

    /// Set the default raw-amount interpretation.
    pub fn set_interpretation(&self, interpretation: Interpretation) {
        self.lock().interpretation = interpretation;
    }

    /// Restore every default to its initial value.
    pub fn reset(&self) {
        *self.lock() = DefaultValues::initial();
    }

    /// One consistent snapshot of all defaults.
    pub(crate) fn snapshot(&self) -> DefaultValues {
        *self.lock()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DefaultValues> {
        self.inner.lock().expect("Defaults mutex poisoned")
    }
}
