//! Per-construction options.

use cash_core::RoundingMode;
use cash_currencies::Currency;
use rust_decimal::Decimal;

use crate::vat::VatStatus;

/// How the raw amount passed to a constructor is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpretation {
    /// The raw amount is a count of minor units.
    #[default]
    MinorUnits,
    /// The raw amount is a decimal number of whole units, converted to
    /// minor units during construction.
    WholeDecimal,
}

/// Options accepted by [`Cash::new`](crate::Cash::new).
///
/// Unset fields fall back to the process-wide
/// [`Defaults`](crate::Defaults), read once at construction time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Minor units per whole unit. Overridden by the currency's own
    /// granularity when the currency defines one.
    pub units_per_whole: Option<u32>,
    /// Rounding convention for this value and everything derived from it.
    pub rounding: Option<RoundingMode>,
    /// Currency tag.
    pub currency: Option<Currency>,
    /// VAT rate as a percentage (e.g. `20`).
    pub vat_rate: Option<Decimal>,
    /// VAT inclusion status; only [`VatStatus::Included`] and
    /// [`VatStatus::Excluded`] are accepted at construction.
    pub vat: Option<VatStatus>,
    /// Interpretation of the raw amount.
    pub interpretation: Option<Interpretation>,
}

impl Options {
    /// Options with every field unset, deferring entirely to the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subunit granularity.
    pub fn units_per_whole(mut self, units: u32) -> Self {
        self.units_per_whole = Some(units);
        self
    }

    /// Set the rounding convention.
    pub fn rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = Some(mode);
        self
    }

    /// Set the currency tag.
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Set the VAT rate percentage.
    pub fn vat_rate(mut self, rate: Decimal) -> Self {
        self.vat_rate = Some(rate);
        self
    }

    /// Set the VAT inclusion status.
    pub fn vat(mut self, status: VatStatus) -> Self {
        self.vat = Some(status);
        self
    }

    /// Set the raw-amount interpretation.
    pub fn interpretation(mut self, interpretation: Interpretation) -> Self {
        self.interpretation = Some(interpretation);
        self
    }
}
