//! Asian and Pacific currencies.

use crate::currency::Currency;

/// Japanese Yen. The yen has no circulating subdivision.
pub static JPY: Currency = Currency::WithGranularity {
    code: "JPY",
    units_per_whole: 1,
};

/// Chinese Yuan Renminbi.
pub static CNY: Currency = Currency::WithGranularity {
    code: "CNY",
    units_per_whole: 100,
};

/// Indian Rupee.
pub static INR: Currency = Currency::WithGranularity {
    code: "INR",
    units_per_whole: 100,
};

/// South Korean Won.
pub static KRW: Currency = Currency::WithGranularity {
    code: "KRW",
    units_per_whole: 100,
};

/// Singapore Dollar.
pub static SGD: Currency = Currency::WithGranularity {
    code: "SGD",
    units_per_whole: 100,
};

/// Hong Kong Dollar.
pub static HKD: Currency = Currency::WithGranularity {
    code: "HKD",
    units_per_whole: 100,
};

/// Australian Dollar.
pub static AUD: Currency = Currency::WithGranularity {
    code: "AUD",
    units_per_whole: 100,
};

/// New Zealand Dollar.
pub static NZD: Currency = Currency::WithGranularity {
    code: "NZD",
    units_per_whole: 100,
};
