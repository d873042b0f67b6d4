//! # cash-core
//!
//! Core definitions shared across the cash-rs workspace: the error
//! hierarchy, the `Result` alias, and the rounding conventions used to
//! collapse decimal results to whole minor units.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the crate-wide `Result` alias.
pub mod errors;

/// Rounding conventions.
pub mod rounding;

pub use errors::{Error, Result};
pub use rounding::{round_to_unit, RoundingMode};
