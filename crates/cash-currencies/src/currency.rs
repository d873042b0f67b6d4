//! `Currency`: identity and optional subunit granularity.

use std::fmt;

/// A currency tag attached to a monetary value.
///
/// Two values are currency-compatible iff their currencies are equal, so
/// equality is plain structural equality. A currency may additionally fix
/// its own subunit granularity; when it does, that granularity overrides
/// whatever a caller configures on the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// Identified by code alone; subunit granularity comes from the value
    /// the currency is attached to.
    Simple(&'static str),
    /// A currency that fixes its own number of minor units per whole unit.
    WithGranularity {
        /// ISO 4217 alphabetic code (e.g. "USD").
        code: &'static str,
        /// Minor units per whole unit (e.g. 100 for cents).
        units_per_whole: u32,
    },
}

impl Currency {
    /// The identifying code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Simple(code) => code,
            Currency::WithGranularity { code, .. } => code,
        }
    }

    /// Subunit granularity, when this currency defines one.
    pub fn units_per_whole(&self) -> Option<u32> {
        match self {
            Currency::Simple(_) => None,
            Currency::WithGranularity {
                units_per_whole, ..
            } => Some(*units_per_whole),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_and_granularity() {
        let plain = Currency::Simple("XTS");
        assert_eq!(plain.code(), "XTS");
        assert_eq!(plain.units_per_whole(), None);

        let fixed = Currency::WithGranularity {
            code: "USD",
            units_per_whole: 100,
        };
        assert_eq!(fixed.code(), "USD");
        assert_eq!(fixed.units_per_whole(), Some(100));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Currency::Simple("USD"), Currency::Simple("USD"));
        assert_ne!(
            Currency::Simple("USD"),
            Currency::WithGranularity {
                code: "USD",
                units_per_whole: 100
            }
        );
    }

    #[test]
    fn display_renders_code() {
        assert_eq!(format!("{}", Currency::Simple("EUR")), "EUR");
    }
}
