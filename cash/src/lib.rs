//! # cash
//!
//! Decimal-exact monetary values for Rust: sums of money stored as integer
//! minor units backed by arbitrary-precision decimal arithmetic.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `cash-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! cash = "0.1"
//! ```
//!
//! ```rust
//! use cash::currencies::GBP;
//! use cash::{Cash, Options};
//! use rust_decimal_macros::dec;
//!
//! let net = Cash::new(5000, Options::new().currency(GBP))?;
//! let fee = Cash::new(1, Options::new().currency(GBP))?;
//! let total = net.add(&fee)?;
//! assert_eq!(total.to_decimal_string(), "50.01");
//! // 20% VAT on an exclusive amount, exact to the last decimal digit.
//! assert_eq!(total.amount_plus_vat(), dec!(6001.2));
//! # Ok::<(), cash::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core error and rounding definitions.
pub use cash_core as core;

/// The value type, options, defaults, and conversions.
pub use cash_value as value;

/// Pre-defined world currencies.
pub use cash_currencies::currencies;

pub use cash_core::{Error, Result, RoundingMode};
pub use cash_currencies::Currency;
pub use cash_value::{Cash, Defaults, Interpretation, Options, ToCash, VatStatus};
