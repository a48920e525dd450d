//! CLI commands over the take-home engine.

pub mod categories;
pub mod gross;
pub mod net;

pub use categories::CategoriesCommand;
pub use gross::GrossCommand;
pub use net::NetCommand;

use crate::tax::{
    parse_tax_code, Jurisdiction, NiCategory, Period, TakeHomeRequest, TakeHomeResult, TaxYear,
    TAX_YEAR,
};
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Inputs common to the `net` and `gross` subcommands
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Amount in GBP for the chosen period
    pub amount: Decimal,

    /// Period the amount is expressed in
    #[arg(short, long, value_enum, default_value_t = Period::Year)]
    pub period: Period,

    /// Rate table to use; inferred from an S-prefixed tax code when omitted
    #[arg(short, long, value_enum)]
    pub jurisdiction: Option<Jurisdiction>,

    /// Tax code, e.g. 1257L, S1257L, BR, D0, D1, 0T, NT, K475
    #[arg(short, long)]
    pub tax_code: Option<String>,

    /// Employee NI category letter
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = NiCategory::A)]
    pub ni_category: NiCategory,

    /// Working days per year when the period is `day`
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub days_per_year: Option<u32>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

impl EstimateArgs {
    pub fn request(&self) -> TakeHomeRequest {
        TakeHomeRequest {
            // The engine expects validated input; negative pay clamps to zero
            amount: self.amount.max(Decimal::ZERO),
            period: self.period,
            jurisdiction: self.jurisdiction,
            tax_code: self.tax_code.clone(),
            ni_category: self.ni_category,
            days_per_year: self.days_per_year,
        }
    }

    /// Warn about inputs the engine silently tolerates
    pub fn log_input_notes(&self) {
        if let Some(code) = self.tax_code.as_deref() {
            let parsed = parse_tax_code(Some(code));
            if parsed.code_used.is_some() && parsed.mode.is_none() {
                log::warn!(
                    "tax code '{}' not recognized; standard allowance and bands apply",
                    code.trim().to_uppercase()
                );
            }
        }
        let today = chrono::Local::now().date_naive();
        let current = TaxYear::from_date(today);
        if current != TAX_YEAR {
            log::warn!("rates are for the {TAX_YEAR} tax year; today falls in {current}");
        }
    }
}

/// Row for the band breakdown table
#[derive(Debug, Clone, Tabled)]
struct BandRow {
    #[tabled(rename = "Band")]
    band: &'static str,

    #[tabled(rename = "Taxable")]
    taxable: String,

    #[tabled(rename = "Rate")]
    rate: String,

    #[tabled(rename = "Tax")]
    tax: String,
}

pub(crate) fn print_result(title: &str, result: &TakeHomeResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    let meta = &result.meta;
    println!();
    match meta.tax_code_used.as_deref() {
        Some(code) => println!(
            "{} ({}, {}, category {}, code {})",
            title, meta.tax_year, meta.jurisdiction, meta.ni_category, code
        ),
        None => println!(
            "{} ({}, {}, category {})",
            title, meta.tax_year, meta.jurisdiction, meta.ni_category
        ),
    }
    println!();

    let annual = &result.annual;
    println!("ANNUAL");
    println!("  Gross: {}", format_gbp(annual.gross));
    println!(
        "  Personal Allowance: {} | Taxable: {}",
        format_gbp_signed(annual.personal_allowance),
        format_gbp(annual.taxable_income)
    );
    println!(
        "  Income Tax: {} | National Insurance: {}",
        format_gbp(annual.income_tax),
        format_gbp(annual.national_insurance)
    );
    println!("  Take-Home: {}", format_gbp(annual.take_home));
    println!();

    if !annual.income_tax_breakdown.is_empty() {
        let rows: Vec<BandRow> = annual
            .income_tax_breakdown
            .iter()
            .map(|line| BandRow {
                band: line.band,
                taxable: format_gbp(line.taxable_in_band),
                rate: format!("{}%", (line.rate * dec!(100)).normalize()),
                tax: format_gbp(line.tax),
            })
            .collect();
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{table}");
        println!();
    }

    let per = &result.per_period;
    if per.period != Period::Year {
        println!("PER {}", per.period.to_string().to_uppercase());
        println!("  Gross: {}", format_gbp(per.gross));
        println!(
            "  Income Tax: {} | National Insurance: {}",
            format_gbp(per.income_tax),
            format_gbp(per.national_insurance)
        );
        println!("  Take-Home: {}", format_gbp(per.take_home));
        println!();
    }

    Ok(())
}

pub(crate) fn format_gbp(amount: Decimal) -> String {
    format!("£{:.2}", amount)
}

fn format_gbp_signed(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-£{:.2}", amount.abs())
    } else {
        format!("£{:.2}", amount)
    }
}
