//! # cash-value
//!
//! The [`Cash`] value type: sums of money stored as integer minor units
//! backed by arbitrary-precision decimal arithmetic, with configurable
//! granularity, rounding, currency compatibility checking, and VAT
//! inclusion-status tracking.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The `Cash` value type and its arithmetic.
pub mod cash;

/// Conversions from raw numeric and text input.
pub mod convert;

/// Process-wide construction defaults.
pub mod defaults;

/// Per-construction options.
pub mod options;

/// VAT inclusion status.
pub mod vat;

pub use cash::Cash;
pub use convert::ToCash;
pub use defaults::Defaults;
pub use options::{Interpretation, Options};
pub use vat::VatStatus;
