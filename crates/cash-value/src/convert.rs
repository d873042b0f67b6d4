//! Conversions from raw numeric and text input into [`Cash`] values.

use cash_core::{Error, Result};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::cash::Cash;
use crate::options::Options;

/// Conversion of raw input into a [`Cash`] value.
///
/// Numeric input forwards directly to [`Cash::new`], so the raw value is
/// interpreted as minor units unless the options say otherwise. Text input
/// is scrubbed first: every character except digits, `.` and `,` is
/// stripped, then `,` separators are removed, and the cleaned string is
/// parsed as a decimal.
///
/// ```
/// use cash_value::ToCash;
///
/// let cash = "£12,345.67".to_cash()?;
/// assert_eq!(cash.to_decimal_string(), "123.46");
/// # Ok::<(), cash_core::Error>(())
/// ```
pub trait ToCash {
    /// Convert with explicit options.
    fn to_cash_with(&self, options: Options) -> Result<Cash>;

    /// Convert using the process-wide defaults.
    fn to_cash(&self) -> Result<Cash> {
        self.to_cash_with(Options::default())
    }
}

macro_rules! impl_to_cash_for_int {
    ($($ty:ty),*) => {
        $(
            impl ToCash for $ty {
                fn to_cash_with(&self, options: Options) -> Result<Cash> {
                    Cash::new(Decimal::from(*self), options)
                }
            }
        )*
    };
}

impl_to_cash_for_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl ToCash for f64 {
    fn to_cash_with(&self, options: Options) -> Result<Cash> {
        let amount = Decimal::from_f64(*self)
            .ok_or_else(|| Error::InvalidAmount(format!("{self} is not a finite decimal")))?;
        Cash::new(amount, options)
    }
}

impl ToCash for Decimal {
    fn to_cash_with(&self, options: Options) -> Result<Cash> {
        Cash::new(*self, options)
    }
}

impl ToCash for str {
    fn to_cash_with(&self, options: Options) -> Result<Cash> {
        let cleaned = self
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
            .collect::<String>()
            .replace(',', "");
        if cleaned.is_empty() {
            return Err(Error::InvalidAmount(format!(
                "{self:?} contains no numeric amount"
            )));
        }
        let amount: Decimal = cleaned
            .parse()
            .map_err(|_| Error::InvalidAmount(format!("cannot parse {self:?} as a decimal")))?;
        Cash::new(amount, options)
    }
}

impl ToCash for String {
    fn to_cash_with(&self, options: Options) -> Result<Cash> {
        self.as_str().to_cash_with(options)
    }
}
