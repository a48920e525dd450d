//! Progressive Income Tax over the jurisdiction band tables.

use super::code::TaxCodeMode;
use super::round_gbp;
use super::year::Jurisdiction;
use rust_decimal::Decimal;
use serde::Serialize;

/// One line of the band breakdown; insertion order follows band order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandTaxLine {
    pub band: &'static str,
    pub taxable_in_band: Decimal,
    pub rate: Decimal,
    pub tax: Decimal,
}

/// Total tax plus the per-band itemization
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeTax {
    pub total: Decimal,
    pub breakdown: Vec<BandTaxLine>,
}

/// Allocate taxable income across the jurisdiction's bands, or apply the
/// tax code's flat/no-tax override.
pub fn compute_income_tax(
    taxable: Decimal,
    jurisdiction: Jurisdiction,
    mode: Option<&TaxCodeMode>,
) -> IncomeTax {
    match mode {
        Some(TaxCodeMode::NoTax) => IncomeTax {
            total: Decimal::ZERO,
            // Synthetic zero-rate line so callers always have something to show
            breakdown: vec![BandTaxLine {
                band: "nt",
                taxable_in_band: round_gbp(taxable),
                rate: Decimal::ZERO,
                tax: Decimal::ZERO,
            }],
        },
        Some(TaxCodeMode::Flat { rate }) => {
            let tax = round_gbp(taxable * *rate);
            IncomeTax {
                total: tax,
                breakdown: vec![BandTaxLine {
                    band: "flat",
                    taxable_in_band: round_gbp(taxable),
                    rate: *rate,
                    tax,
                }],
            }
        }
        _ => banded(taxable, jurisdiction),
    }
}

fn banded(taxable: Decimal, jurisdiction: Jurisdiction) -> IncomeTax {
    let mut remaining = taxable;
    let mut lower = Decimal::ZERO;
    let mut total = Decimal::ZERO;
    let mut breakdown = Vec::new();

    for band in jurisdiction.bands() {
        if remaining <= Decimal::ZERO {
            break;
        }
        let slice = match band.up_to {
            Some(upper) => remaining.min(upper - lower).max(Decimal::ZERO),
            None => remaining,
        };
        if slice > Decimal::ZERO {
            let tax = slice * band.rate;
            breakdown.push(BandTaxLine {
                band: band.name,
                taxable_in_band: round_gbp(slice),
                rate: band.rate,
                tax: round_gbp(tax),
            });
            total += tax;
            remaining -= slice;
        }
        if let Some(upper) = band.up_to {
            lower = upper;
        }
    }

    // The total is rounded once from the unrounded sum while each displayed
    // line is rounded independently, so summing the lines can differ from the
    // total by a penny. That is expected, not a bug.
    IncomeTax {
        total: round_gbp(total),
        breakdown,
    }
}
