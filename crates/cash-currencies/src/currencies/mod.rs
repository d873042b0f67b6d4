//! Pre-defined world currencies, organized by region.

pub mod africa;
pub mod america;
pub mod asia_pacific;
pub mod europe;

// Re-export all currencies at the `currencies` module level for convenience.
pub use africa::*;
pub use america::*;
pub use asia_pacific::*;
pub use europe::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_properties() {
        assert_eq!(USD.code(), "USD");
        assert_eq!(USD.units_per_whole(), Some(100));
    }

    #[test]
    fn jpy_has_no_subdivision() {
        assert_eq!(JPY.units_per_whole(), Some(1));
    }

    #[test]
    fn tnd_uses_millimes() {
        assert_eq!(TND.units_per_whole(), Some(1000));
    }

    #[test]
    fn all_currencies_have_codes() {
        let all = [
            &USD, &CAD, &BRL, &MXN, &EUR, &GBP, &CHF, &SEK, &NOK, &DKK, &PLN,
            &CZK, &JPY, &CNY, &INR, &KRW, &SGD, &HKD, &AUD, &NZD, &ZAR, &EGP,
            &KES, &TND,
        ];
        for c in all {
            assert!(!c.code().is_empty(), "currency has empty code: {c:?}");
        }
    }
}
