//! Error types for cash-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here, through the [`Result`]
//! alias. Errors are raised synchronously at the offending call; no
//! operation leaves a partially-built value behind.

use thiserror::Error;

/// The top-level error type used throughout cash-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two operands of a currency-aware operation carry different
    /// currencies (an absent currency is only compatible with absence).
    #[error("incompatible currency: {found} != {expected}")]
    IncompatibleCurrency {
        /// Currency of the left operand, or `"none"`.
        expected: String,
        /// Currency of the right operand, or `"none"`.
        found: String,
    },

    /// Division, modulo, or divmod with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// A construction option or process-wide default was invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A raw input could not be interpreted as a numeric amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

/// Shorthand `Result` type used throughout cash-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = Error::IncompatibleCurrency {
            expected: "none".into(),
            found: "USD".into(),
        };
        assert_eq!(err.to_string(), "incompatible currency: USD != none");
        assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
    }
}
