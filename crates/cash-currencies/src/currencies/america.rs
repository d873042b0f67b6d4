//! American currencies.

use crate::currency::Currency;

/// United States Dollar.
pub static USD: Currency = Currency::WithGranularity {
    code: "USD",
    units_per_whole: 100,
};

/// Canadian Dollar.
pub static CAD: Currency = Currency::WithGranularity {
    code: "CAD",
    units_per_whole: 100,
};

/// Brazilian Real.
pub static BRL: Currency = Currency::WithGranularity {
    code: "BRL",
    units_per_whole: 100,
};

/// Mexican Peso.
pub static MXN: Currency = Currency::WithGranularity {
    code: "MXN",
    units_per_whole: 100,
};
