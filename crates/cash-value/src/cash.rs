//! The [`Cash`] value type: decimal-exact monetary amounts.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, Neg};

use cash_core::{round_to_unit, Error, Result, RoundingMode};
use cash_currencies::Currency;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::defaults::Defaults;
use crate::options::{Interpretation, Options};
use crate::vat::VatStatus;

/// An immutable sum of money, stored as a whole number of minor units.
///
/// The amount is held as an arbitrary-precision decimal that is collapsed
/// to an integer count of minor units immediately after construction and
/// after every arithmetic operation, so no binary floating-point error can
/// enter a computation. All configuration (granularity, rounding
/// convention, currency, VAT rate and status) is resolved at construction
/// and carried forward into every derived value; the process-wide
/// [`Defaults`] are never consulted again.
///
/// Operations between two `Cash` values require equal currencies and fail
/// with [`Error::IncompatibleCurrency`] otherwise; operations against a
/// bare scalar are currency-agnostic.
///
/// ```
/// use cash_value::{Cash, Options};
///
/// let price = Cash::new(1299, Options::new())?;
/// let shipping = Cash::new(450, Options::new())?;
/// let total = price.add(&shipping)?;
/// assert_eq!(total.to_decimal_string(), "17.49");
/// # Ok::<(), cash_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cash {
    amount: Decimal,
    units_per_whole: u32,
    decimal_places: u32,
    rounding: RoundingMode,
    currency: Option<Currency>,
    vat_rate: Decimal,
    vat: VatStatus,
}

impl Cash {
    /// Construct a value from a raw amount and per-construction options.
    ///
    /// Unset options fall back to the process-wide [`Defaults`], read once
    /// here. When the resolved currency defines its own granularity, it
    /// overrides any explicit or default `units_per_whole`. The raw amount
    /// is interpreted per [`Interpretation`], then rounded to a whole
    /// number of minor units with the resolved [`RoundingMode`].
    ///
    /// # Errors
    /// [`Error::InvalidConfiguration`] when the resolved granularity is
    /// zero or the requested VAT status is [`VatStatus::Mixed`].
    pub fn new(amount: impl Into<Decimal>, options: Options) -> Result<Self> {
        let defaults = Defaults::instance().snapshot();

        if options.vat == Some(VatStatus::Mixed) {
            return Err(Error::InvalidConfiguration(
                "a value cannot be constructed as VAT-mixed".into(),
            ));
        }

        let currency = options.currency.or(defaults.currency);
        let configured = options.units_per_whole.unwrap_or(defaults.units_per_whole);
        // The currency's own granularity wins over any configured one.
        let units_per_whole = currency
            .and_then(|c| c.units_per_whole())
            .unwrap_or(configured);
        if units_per_whole == 0 {
            return Err(Error::InvalidConfiguration(
                "units_per_whole must be positive".into(),
            ));
        }
        let decimal_places = decimal_places_for(units_per_whole);
        let rounding = options.rounding.unwrap_or(defaults.rounding);

        let raw = amount.into();
        let converted = match options.interpretation.unwrap_or(defaults.interpretation) {
            Interpretation::MinorUnits => raw,
            Interpretation::WholeDecimal => {
                let whole = raw.trunc();
                whole * Decimal::from(units_per_whole) + (raw - whole) * pow10(decimal_places)
            }
        };

        Ok(Self {
            amount: round_to_unit(converted, rounding),
            units_per_whole,
            decimal_places,
            rounding,
            currency,
            vat_rate: options.vat_rate.unwrap_or(defaults.vat_rate),
            vat: options.vat.unwrap_or(defaults.vat),
        })
    }

    /// The amount as an integral count of minor units.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Minor units per whole unit.
    pub fn units_per_whole(&self) -> u32 {
        self.units_per_whole
    }

    /// Decimal places used when rendering, `ceil(log10(units_per_whole))`.
    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Rounding convention carried by this value.
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Currency tag, when present.
    pub fn currency(&self) -> Option<Currency> {
        self.currency
    }

    /// VAT rate percentage carried by this value.
    pub fn vat_rate(&self) -> Decimal {
        self.vat_rate
    }

    /// VAT inclusion status.
    pub fn vat(&self) -> VatStatus {
        self.vat
    }

    // ── Arithmetic ───────────────────────────────────────────────────────

    /// Sum of two values.
    ///
    /// # Errors
    /// [`Error::IncompatibleCurrency`] when the currencies differ.
    pub fn add(&self, other: &Cash) -> Result<Cash> {
        self.guard_currency(other)?;
        Ok(self.combine(other, self.amount + other.amount))
    }

    /// Difference of two values.
    ///
    /// # Errors
    /// [`Error::IncompatibleCurrency`] when the currencies differ.
    pub fn sub(&self, other: &Cash) -> Result<Cash> {
        self.guard_currency(other)?;
        Ok(self.combine(other, self.amount - other.amount))
    }

    /// The value with its sign flipped; configuration is unchanged.
    pub fn negate(&self) -> Cash {
        self.derive(-self.amount)
    }

    /// The absolute value; configuration is unchanged.
    pub fn abs(&self) -> Cash {
        self.derive(self.amount.abs())
    }

    /// The value scaled by a decimal factor, rounded to minor units.
    pub fn mul(&self, scalar: impl Into<Decimal>) -> Cash {
        self.derive(self.amount * scalar.into())
    }

    /// How many times `other` fits into `self`: a dimensionless decimal
    /// ratio of the two minor-unit amounts, not a monetary value.
    ///
    /// # Errors
    /// [`Error::IncompatibleCurrency`] when the currencies differ;
    /// [`Error::DivisionByZero`] when `other` is zero.
    pub fn div(&self, other: &Cash) -> Result<Decimal> {
        self.guard_currency(other)?;
        if other.amount == Decimal::ZERO {
            return Err(Error::DivisionByZero);
        }
        Ok(self.amount / other.amount)
    }

    /// The value divided by a scalar, rounded to minor units.
    ///
    /// # Errors
    /// [`Error::DivisionByZero`] when the scalar is zero.
    pub fn div_scalar(&self, scalar: impl Into<Decimal>) -> Result<Cash> {
        let divisor = scalar.into();
        if divisor == Decimal::ZERO {
            return Err(Error::DivisionByZero);
        }
        Ok(self.derive(self.amount / divisor))
    }

    /// Floor-division remainder of two values.
    ///
    /// # Errors
    /// [`Error::IncompatibleCurrency`] when the currencies differ;
    /// [`Error::DivisionByZero`] when `other` is zero.
    pub fn rem(&self, other: &Cash) -> Result<Cash> {
        self.guard_currency(other)?;
        if other.amount == Decimal::ZERO {
            return Err(Error::DivisionByZero);
        }
        let (_, remainder) = floor_divmod(self.amount, other.amount);
        Ok(self.combine(other, remainder))
    }

    /// Floor-division remainder against a scalar.
    ///
    /// # Errors
    /// [`Error::DivisionByZero`] when the scalar is zero.
    pub fn rem_scalar(&self, scalar: impl Into<Decimal>) -> Result<Cash> {
        let divisor = scalar.into();
        if divisor == Decimal::ZERO {
            return Err(Error::DivisionByZero);
        }
        let (_, remainder) = floor_divmod(self.amount, divisor);
        Ok(self.derive(remainder))
    }

    /// Floor division of two values: a dimensionless decimal quotient and
    /// a monetary remainder, satisfying
    /// `self.amount == quotient * other.amount + remainder.amount`.
    ///
    /// # Errors
    /// [`Error::IncompatibleCurrency`] when the currencies differ;
    /// [`Error::DivisionByZero`] when `other` is zero.
    pub fn divmod(&self, other: &Cash) -> Result<(Decimal, Cash)> {
        self.guard_currency(other)?;
        if other.amount == Decimal::ZERO {
            return Err(Error::DivisionByZero);
        }
        let (quotient, remainder) = floor_divmod(self.amount, other.amount);
        Ok((quotient, self.combine(other, remainder)))
    }

    /// Floor division against a scalar: monetary quotient and remainder.
    ///
    /// # Errors
    /// [`Error::DivisionByZero`] when the scalar is zero.
    pub fn divmod_scalar(&self, scalar: impl Into<Decimal>) -> Result<(Cash, Cash)> {
        let divisor = scalar.into();
        if divisor == Decimal::ZERO {
            return Err(Error::DivisionByZero);
        }
        let (quotient, remainder) = floor_divmod(self.amount, divisor);
        Ok((self.derive(quotient), self.derive(remainder)))
    }

    // ── Comparison ───────────────────────────────────────────────────────

    /// Ordering of the two amounts.
    ///
    /// # Errors
    /// [`Error::IncompatibleCurrency`] when the currencies differ.
    pub fn compare(&self, other: &Cash) -> Result<Ordering> {
        self.guard_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Whether the two amounts are equal.
    ///
    /// # Errors
    /// [`Error::IncompatibleCurrency`] when the currencies differ.
    pub fn equals(&self, other: &Cash) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// Whether `self` is strictly smaller.
    ///
    /// # Errors
    /// [`Error::IncompatibleCurrency`] when the currencies differ.
    pub fn less_than(&self, other: &Cash) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Whether `self` is strictly greater.
    ///
    /// # Errors
    /// [`Error::IncompatibleCurrency`] when the currencies differ.
    pub fn greater_than(&self, other: &Cash) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Whether `self` is smaller or equal.
    ///
    /// # Errors
    /// [`Error::IncompatibleCurrency`] when the currencies differ.
    pub fn less_or_equal(&self, other: &Cash) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }

    /// Whether `self` is greater or equal.
    ///
    /// # Errors
    /// [`Error::IncompatibleCurrency`] when the currencies differ.
    pub fn greater_or_equal(&self, other: &Cash) -> Result<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    // ── VAT ──────────────────────────────────────────────────────────────

    /// The amount with VAT applied, in minor units.
    ///
    /// A VAT-included value is returned unchanged; anything else is scaled
    /// by `1 + vat_rate / 100`. The result is an exact decimal, not
    /// rounded to minor units.
    pub fn amount_plus_vat(&self) -> Decimal {
        match self.vat {
            VatStatus::Included => self.amount,
            _ => self.amount * self.vat_factor(),
        }
    }

    /// The amount with VAT removed, in minor units.
    ///
    /// A VAT-included value is divided by `1 + vat_rate / 100`; anything
    /// else is returned unchanged. The result is an exact decimal, not
    /// rounded to minor units.
    pub fn amount_less_vat(&self) -> Decimal {
        match self.vat {
            VatStatus::Included => self.amount / self.vat_factor(),
            _ => self.amount,
        }
    }

    // ── Rendering ────────────────────────────────────────────────────────

    /// The amount rendered as a decimal string, e.g. 12345 minor units at
    /// 100 per whole as `"123.45"`. A granularity of 1 renders as a bare
    /// integer with no separator.
    pub fn to_decimal_string(&self) -> String {
        format!("{self}")
    }

    /// The decimal rendering parsed as a native float, an intentionally
    /// lossy convenience. Never used for arithmetic.
    pub fn to_approximate_float(&self) -> f64 {
        self.to_decimal_string()
            .parse()
            .expect("decimal rendering is a valid float literal")
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn guard_currency(&self, other: &Cash) -> Result<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(Error::IncompatibleCurrency {
                expected: currency_label(self.currency),
                found: currency_label(other.currency),
            })
        }
    }

    /// New value from a unary or scalar operation: configuration and VAT
    /// status are carried over verbatim, the amount is re-rounded.
    fn derive(&self, amount: Decimal) -> Cash {
        Cash {
            amount: round_to_unit(amount, self.rounding),
            ..*self
        }
    }

    /// New value from combining two operands: the left operand's
    /// configuration carries over, the VAT status is re-evaluated.
    fn combine(&self, other: &Cash, amount: Decimal) -> Cash {
        Cash {
            amount: round_to_unit(amount, self.rounding),
            vat: self.vat.combine(other.vat),
            ..*self
        }
    }

    fn vat_factor(&self) -> Decimal {
        Decimal::ONE + self.vat_rate / Decimal::ONE_HUNDRED
    }
}

impl fmt::Display for Cash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.units_per_whole == 1 {
            return write!(f, "{}", self.amount);
        }
        let units = self
            .amount
            .to_i128()
            .expect("amount is an integral number of minor units");
        let sign = if units < 0 { "-" } else { "" };
        let whole = units.unsigned_abs() / u128::from(self.units_per_whole);
        let fraction = units.unsigned_abs() % u128::from(self.units_per_whole);
        write!(
            f,
            "{sign}{whole}.{fraction:0>width$}",
            width = self.decimal_places as usize
        )
    }
}

impl Neg for Cash {
    type Output = Cash;

    fn neg(self) -> Cash {
        self.negate()
    }
}

impl Mul<Decimal> for Cash {
    type Output = Cash;

    fn mul(self, scalar: Decimal) -> Cash {
        self.derive(self.amount * scalar)
    }
}

fn currency_label(currency: Option<Currency>) -> String {
    match currency {
        Some(c) => c.code().to_string(),
        None => "none".to_string(),
    }
}

/// Smallest `p` such that `10^p >= units_per_whole`.
fn decimal_places_for(units_per_whole: u32) -> u32 {
    let mut places = 0;
    let mut bound: u64 = 1;
    while bound < u64::from(units_per_whole) {
        bound *= 10;
        places += 1;
    }
    places
}

fn pow10(places: u32) -> Decimal {
    Decimal::from(10u64.pow(places))
}

/// Floor division: the remainder takes the divisor's sign and
/// `a == q * b + r` holds exactly.
fn floor_divmod(a: Decimal, b: Decimal) -> (Decimal, Decimal) {
    let quotient = (a / b).floor();
    (quotient, a - quotient * b)
}
