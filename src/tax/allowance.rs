//! Personal allowance high-income taper.

use super::year::TAPER_THRESHOLD;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Taper the allowance: £1 lost for every £2 of income above £100,000,
/// floored at zero. A £12,570 allowance is fully gone at £125,140.
///
/// Callers apply this only when standard bands are in play; flat-rate and
/// no-tax codes fix the allowance at zero by definition.
pub fn personal_allowance(annual_gross: Decimal, base_allowance: Decimal) -> Decimal {
    if annual_gross <= TAPER_THRESHOLD {
        return base_allowance;
    }
    let reduction = ((annual_gross - TAPER_THRESHOLD) / dec!(2)).floor();
    (base_allowance - reduction).max(Decimal::ZERO)
}
