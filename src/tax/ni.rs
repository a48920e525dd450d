//! Employee (primary Class 1) National Insurance.
//!
//! NI is computed straight from annual gross pay, independent of the tax
//! code and personal allowance: the main rate applies between the primary
//! threshold and the upper earnings limit, the upper rate above it.

use super::round_gbp;
use super::year::{NI_PT, NI_UEL};
use clap::ValueEnum;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Employee NI category letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
pub enum NiCategory {
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    S,
    V,
    Z,
}

/// All categories in HMRC table order
pub const ALL_CATEGORIES: [NiCategory; 16] = [
    NiCategory::A,
    NiCategory::B,
    NiCategory::C,
    NiCategory::D,
    NiCategory::E,
    NiCategory::F,
    NiCategory::H,
    NiCategory::I,
    NiCategory::J,
    NiCategory::K,
    NiCategory::L,
    NiCategory::M,
    NiCategory::N,
    NiCategory::S,
    NiCategory::V,
    NiCategory::Z,
];

/// Employee rate pair: main rate between PT and UEL, upper rate above UEL
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NiRates {
    pub main: Decimal,
    pub upper: Decimal,
}

impl NiCategory {
    pub fn rates(&self) -> NiRates {
        use NiCategory::*;
        match self {
            A | F | H | M | N | V => NiRates {
                main: dec!(0.08),
                upper: dec!(0.02),
            },
            B | E | I => NiRates {
                main: dec!(0.0185),
                upper: dec!(0.02),
            },
            D | J | L | Z => NiRates {
                main: dec!(0.02),
                upper: dec!(0.02),
            },
            C | K | S => NiRates {
                main: Decimal::ZERO,
                upper: Decimal::ZERO,
            },
        }
    }

    pub fn description(&self) -> &'static str {
        use NiCategory::*;
        match self {
            A => "Standard rate (most employees)",
            B => "Married women/widows with valid election",
            C => "State pension age employees",
            D => "Deferred (contracted-out)",
            E => "Married women/widows + state pension age",
            F => "Freeport standard rate",
            H => "Apprentices under 25",
            I => "Freeport married women/widows",
            J => "Deferred rate",
            K => "State pension age + no employer NI",
            L => "Freeport deferred",
            M => "Under 21",
            N => "Under 21 in Freeport",
            S => "Deferred + state pension age",
            V => "Veterans (first 12 months)",
            Z => "Under 21 deferred",
        }
    }
}

impl std::fmt::Display for NiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Employee contribution on annual gross pay for the given category
pub fn compute_ni(annual_gross: Decimal, category: NiCategory) -> Decimal {
    let rates = category.rates();
    let main_base = (annual_gross.min(NI_UEL) - NI_PT).max(Decimal::ZERO);
    let upper_base = (annual_gross - NI_UEL).max(Decimal::ZERO);
    round_gbp(main_base * rates.main + upper_base * rates.upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_due_at_or_below_primary_threshold() {
        assert_eq!(compute_ni(dec!(12000), NiCategory::A), Decimal::ZERO);
        assert_eq!(compute_ni(dec!(12570), NiCategory::A), Decimal::ZERO);
        assert_eq!(compute_ni(Decimal::ZERO, NiCategory::A), Decimal::ZERO);
    }

    #[test]
    fn main_rate_between_thresholds() {
        // (30000 - 12570) * 0.08
        assert_eq!(compute_ni(dec!(30000), NiCategory::A), dec!(1394.40));
    }

    #[test]
    fn upper_rate_above_uel() {
        // (50270 - 12570) * 0.08 + (60000 - 50270) * 0.02
        assert_eq!(compute_ni(dec!(60000), NiCategory::A), dec!(3210.60));
        assert_eq!(compute_ni(dec!(150000), NiCategory::A), dec!(5010.60));
    }

    #[test]
    fn reduced_rate_category() {
        // (30000 - 12570) * 0.0185 = 322.455, rounds half-up
        assert_eq!(compute_ni(dec!(30000), NiCategory::B), dec!(322.46));
    }

    #[test]
    fn deferred_rate_category() {
        assert_eq!(compute_ni(dec!(30000), NiCategory::J), dec!(348.60));
    }

    #[test]
    fn zero_rate_categories_pay_nothing() {
        for category in [NiCategory::C, NiCategory::K, NiCategory::S] {
            assert_eq!(compute_ni(dec!(150000), category), Decimal::ZERO);
        }
    }

    #[test]
    fn every_category_has_rates_within_bounds() {
        for category in ALL_CATEGORIES {
            let rates = category.rates();
            assert!(rates.main >= Decimal::ZERO && rates.main <= Decimal::ONE);
            assert!(rates.upper >= Decimal::ZERO && rates.upper <= Decimal::ONE);
        }
    }
}
