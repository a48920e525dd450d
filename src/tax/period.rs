//! Conversion between a reporting period and its annual equivalent.

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::Serialize;

/// Reporting period a pay amount is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Year,
    Month,
    Week,
    /// Working day; occurrences per year are caller-supplied
    Day,
}

/// Working days in a year when the caller does not say otherwise
pub const DEFAULT_DAYS_PER_YEAR: u32 = 260;

impl Period {
    /// How many times this period occurs in a year
    pub fn per_year(&self, days_per_year: u32) -> Decimal {
        match self {
            Period::Year => Decimal::ONE,
            Period::Month => Decimal::from(12u32),
            Period::Week => Decimal::from(52u32),
            Period::Day => Decimal::from(days_per_year),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Year => write!(f, "year"),
            Period::Month => write!(f, "month"),
            Period::Week => write!(f, "week"),
            Period::Day => write!(f, "day"),
        }
    }
}

/// Scale a per-period amount to its annual equivalent. No rounding here;
/// currency rounding happens at the result boundary.
pub fn annualise(amount: Decimal, period: Period, days_per_year: u32) -> Decimal {
    amount * period.per_year(days_per_year)
}

/// Exact inverse of [`annualise`]
pub fn de_annualise(annual: Decimal, period: Period, days_per_year: u32) -> Decimal {
    annual / period.per_year(days_per_year)
}
