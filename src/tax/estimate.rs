//! Forward (gross to net) and reverse (net to gross) estimators.

use super::allowance::personal_allowance;
use super::code::{parse_tax_code, TaxCodeMode};
use super::income::{compute_income_tax, BandTaxLine};
use super::ni::{compute_ni, NiCategory};
use super::period::{annualise, de_annualise, Period, DEFAULT_DAYS_PER_YEAR};
use super::round_gbp;
use super::year::{Jurisdiction, PA_STANDARD, TAX_YEAR};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

/// Inputs shared by both estimators. `amount` is gross pay for the forward
/// direction and the target net figure for the reverse direction, expressed
/// in `period`.
#[derive(Debug, Clone, Default)]
pub struct TakeHomeRequest {
    pub amount: Decimal,
    pub period: Period,
    /// Overrides any jurisdiction implied by an S-prefixed tax code
    pub jurisdiction: Option<Jurisdiction>,
    pub tax_code: Option<String>,
    pub ni_category: NiCategory,
    /// Occurrences per year when `period` is `Day`; defaults to 260
    pub days_per_year: Option<u32>,
}

/// Annual figures, all rounded to pence
#[derive(Debug, Clone, Serialize)]
pub struct AnnualFigures {
    pub gross: Decimal,
    pub personal_allowance: Decimal,
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
    pub income_tax_breakdown: Vec<BandTaxLine>,
    pub national_insurance: Decimal,
    pub take_home: Decimal,
}

/// The same monetary fields re-expressed in the request's period
#[derive(Debug, Clone, Serialize)]
pub struct PeriodFigures {
    pub period: Period,
    pub gross: Decimal,
    pub income_tax: Decimal,
    pub national_insurance: Decimal,
    pub take_home: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub jurisdiction: Jurisdiction,
    pub ni_category: NiCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code_used: Option<String>,
    pub tax_year: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TakeHomeResult {
    pub annual: AnnualFigures,
    pub per_period: PeriodFigures,
    pub meta: Meta,
}

/// The reverse search finished without evaluating a single candidate. This
/// signals an implementation defect, never a bad input.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("gross-from-net search produced no candidate evaluation")]
    SearchProducedNoResult,
}

/// Estimate take-home pay from gross pay.
pub fn estimate_take_home(input: &TakeHomeRequest) -> TakeHomeResult {
    let days_per_year = input.days_per_year.unwrap_or(DEFAULT_DAYS_PER_YEAR);
    let annual_gross = annualise(input.amount, input.period, days_per_year);

    let parsed = parse_tax_code(input.tax_code.as_deref());
    let jurisdiction = input
        .jurisdiction
        .or(parsed.implied_jurisdiction)
        .unwrap_or_default();
    let mode = parsed.mode;

    let base_allowance = match mode {
        Some(TaxCodeMode::Standard { allowance }) => allowance,
        Some(TaxCodeMode::ZeroAllowance | TaxCodeMode::Flat { .. } | TaxCodeMode::NoTax) => {
            Decimal::ZERO
        }
        None => PA_STANDARD,
    };

    // Taper only where the standard band machinery is in play; flat-rate and
    // no-tax codes have already fixed the allowance at zero
    let allowance = match mode {
        None | Some(TaxCodeMode::Standard { .. } | TaxCodeMode::ZeroAllowance) => {
            personal_allowance(annual_gross, base_allowance)
        }
        _ => base_allowance,
    };

    let taxable = (annual_gross - allowance).max(Decimal::ZERO);
    let income_tax = compute_income_tax(taxable, jurisdiction, mode.as_ref());
    let ni = compute_ni(annual_gross, input.ni_category);
    let take_home = round_gbp(annual_gross - income_tax.total - ni);

    TakeHomeResult {
        annual: AnnualFigures {
            gross: round_gbp(annual_gross),
            personal_allowance: round_gbp(allowance),
            taxable_income: round_gbp(taxable),
            income_tax: income_tax.total,
            income_tax_breakdown: income_tax.breakdown,
            national_insurance: ni,
            take_home,
        },
        per_period: PeriodFigures {
            period: input.period,
            gross: round_gbp(input.amount),
            income_tax: round_gbp(de_annualise(income_tax.total, input.period, days_per_year)),
            national_insurance: round_gbp(de_annualise(ni, input.period, days_per_year)),
            take_home: round_gbp(de_annualise(take_home, input.period, days_per_year)),
        },
        meta: Meta {
            jurisdiction,
            ni_category: input.ni_category,
            tax_code_used: parsed.code_used,
            tax_year: TAX_YEAR.display(),
        },
    }
}

const SEARCH_TOLERANCE: Decimal = dec!(0.01);
const MAX_ITERATIONS: u32 = 100;

/// Find the gross pay whose take-home matches the requested net figure.
///
/// Income Tax and NI are piecewise-linear and non-decreasing in gross, so
/// take-home is monotonic and bisection brackets stay valid. The last
/// evaluated candidate is kept as the working estimate, so the loop always
/// has a result even if the tolerance is never hit.
pub fn estimate_gross_from_net(input: &TakeHomeRequest) -> Result<TakeHomeResult, EstimateError> {
    let days_per_year = input.days_per_year.unwrap_or(DEFAULT_DAYS_PER_YEAR);
    let target = annualise(input.amount, input.period, days_per_year);

    // Zero or negative target: gross is zero, no search needed
    if target <= Decimal::ZERO {
        let zero = TakeHomeRequest {
            amount: Decimal::ZERO,
            ..input.clone()
        };
        return Ok(estimate_take_home(&zero));
    }

    let parsed = parse_tax_code(input.tax_code.as_deref());
    let jurisdiction = input
        .jurisdiction
        .or(parsed.implied_jurisdiction)
        .unwrap_or_default();

    let mut candidate = TakeHomeRequest {
        amount: Decimal::ZERO,
        period: Period::Year,
        jurisdiction: Some(jurisdiction),
        tax_code: input.tax_code.clone(),
        ni_category: input.ni_category,
        days_per_year: Some(days_per_year),
    };

    // Gross can never be below net, and even at the top combined marginal
    // burden (48% tax + 2% NI) net stays above a third of gross, so three
    // times the target is a safe upper bracket. Revisit if a rate table ever
    // pushes the combined marginal burden past ~53%.
    let mut low = target;
    let mut high = target * dec!(3);
    let mut best: Option<TakeHomeResult> = None;

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / dec!(2);
        candidate.amount = mid;
        let result = estimate_take_home(&candidate);
        let diff = result.annual.take_home - target;

        if diff.abs() < SEARCH_TOLERANCE {
            best = Some(result);
            break;
        }
        if diff < Decimal::ZERO {
            // Net too low, need a higher gross
            low = mid;
        } else {
            high = mid;
        }
        best = Some(result);
    }

    let best = best.ok_or(EstimateError::SearchProducedNoResult)?;

    Ok(TakeHomeResult {
        per_period: PeriodFigures {
            period: input.period,
            gross: round_gbp(de_annualise(best.annual.gross, input.period, days_per_year)),
            income_tax: round_gbp(de_annualise(
                best.annual.income_tax,
                input.period,
                days_per_year,
            )),
            national_insurance: round_gbp(de_annualise(
                best.annual.national_insurance,
                input.period,
                days_per_year,
            )),
            take_home: round_gbp(de_annualise(
                best.annual.take_home,
                input.period,
                days_per_year,
            )),
        },
        annual: best.annual,
        meta: best.meta,
    })
}
