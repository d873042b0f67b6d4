//! European currencies.

use crate::currency::Currency;

/// Euro.
pub static EUR: Currency = Currency::WithGranularity {
    code: "EUR",
    units_per_whole: 100,
};

/// British Pound Sterling.
pub static GBP: Currency = Currency::WithGranularity {
    code: "GBP",
    units_per_whole: 100,
};

/// Swiss Franc.
pub static CHF: Currency = Currency::WithGranularity {
    code: "CHF",
    units_per_whole: 100,
};

/// Swedish Krona.
pub static SEK: Currency = Currency::WithGranularity {
    code: "SEK",
    units_per_whole: 100,
};

/// Norwegian Krone.
pub static NOK: Currency = Currency::WithGranularity {
    code: "NOK",
    units_per_whole: 100,
};

/// Danish Krone.
pub static DKK: Currency = Currency::WithGranularity {
    code: "DKK",
    units_per_whole: 100,
};

/// Polish Złoty.
pub static PLN: Currency = Currency::WithGranularity {
    code: "PLN",
    units_per_whole: 100,
};

/// Czech Koruna.
pub static CZK: Currency = Currency::WithGranularity {
    code: "CZK",
    units_per_whole: 100,
};
