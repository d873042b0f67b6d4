//! African currencies.

use crate::currency::Currency;

/// South African Rand.
pub static ZAR: Currency = Currency::WithGranularity {
    code: "ZAR",
    units_per_whole: 100,
};

/// Egyptian Pound.
pub static EGP: Currency = Currency::WithGranularity {
    code: "EGP",
    units_per_whole: 100,
};

/// Kenyan Shilling.
pub static KES: Currency = Currency::WithGranularity {
    code: "KES",
    units_per_whole: 100,
};

/// Tunisian Dinar, subdivided into 1000 millimes.
pub static TND: Currency = Currency::WithGranularity {
    code: "TND",
    units_per_whole: 1000,
};
