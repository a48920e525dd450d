pub mod allowance;
pub mod code;
pub mod estimate;
pub mod income;
pub mod ni;
pub mod period;
pub mod year;

pub use code::{parse_tax_code, ParsedTaxCode, TaxCodeMode};
pub use estimate::{
    estimate_gross_from_net, estimate_take_home, EstimateError, TakeHomeRequest, TakeHomeResult,
};
pub use income::{compute_income_tax, BandTaxLine, IncomeTax};
pub use ni::{compute_ni, NiCategory, NiRates};
pub use period::{annualise, de_annualise, Period, DEFAULT_DAYS_PER_YEAR};
pub use year::{Band, Jurisdiction, TaxYear, TAX_YEAR};

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to whole pence, half away from zero. Applied only where an amount is
/// placed into a result structure; intermediate sums stay unrounded.
pub fn round_gbp(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round_gbp_half_up() {
        assert_eq!(round_gbp(dec!(322.455)), dec!(322.46));
        assert_eq!(round_gbp(dec!(322.454)), dec!(322.45));
        assert_eq!(round_gbp(dec!(30000)), dec!(30000.00));
    }
}
