//! 2025/26 tax year constants: personal allowance, regional Income Tax band
//! tables and National Insurance thresholds.

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// UK Tax Year (runs 6 April to 5 April)
/// The year value represents the end year (e.g., 2026 = 2025/26 tax year)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaxYear(pub i32);

/// The tax year whose rates are configured in this module
pub const TAX_YEAR: TaxYear = TaxYear(2026);

impl TaxYear {
    /// Create a tax year from a date
    pub fn from_date(date: NaiveDate) -> Self {
        let year = date.year();
        // Tax year starts 6 April: on or after 6 April the tax year ends next
        // April, before it the tax year ends this April
        if date >= NaiveDate::from_ymd_opt(year, 4, 6).unwrap() {
            TaxYear(year + 1)
        } else {
            TaxYear(year)
        }
    }

    /// Display as "2025/26" format
    pub fn display(&self) -> String {
        format!("{}/{:02}", self.0 - 1, self.0 % 100)
    }
}

impl std::fmt::Display for TaxYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Regional rate-table selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Jurisdiction {
    /// England, Wales and Northern Ireland
    #[default]
    Ruk,
    Scotland,
}

impl Jurisdiction {
    /// Income tax band table for this jurisdiction
    pub fn bands(&self) -> &'static [Band] {
        match self {
            Jurisdiction::Ruk => &RUK_BANDS,
            Jurisdiction::Scotland => &SCOTLAND_BANDS,
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Jurisdiction::Ruk => write!(f, "ruk"),
            Jurisdiction::Scotland => write!(f, "scotland"),
        }
    }
}

/// One slice of taxable income taxed at a single marginal rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Cumulative taxable upper bound in GBP; `None` for the unbounded top band
    pub up_to: Option<Decimal>,
    pub rate: Decimal,
    pub name: &'static str,
}

/// Standard personal allowance
pub const PA_STANDARD: Decimal = dec!(12570);

/// Allowance taper threshold: £1 of allowance lost per £2 of income above this
pub const TAPER_THRESHOLD: Decimal = dec!(100000);

/// NI primary threshold (annual)
pub const NI_PT: Decimal = dec!(12570);

/// NI upper earnings limit (annual)
pub const NI_UEL: Decimal = dec!(50270);

/// Bands are on taxable income (after the allowance), bounds cumulative
pub const RUK_BANDS: [Band; 3] = [
    Band {
        up_to: Some(dec!(37700)),
        rate: dec!(0.20),
        name: "basic",
    },
    Band {
        up_to: Some(dec!(125140)),
        rate: dec!(0.40),
        name: "higher",
    },
    Band {
        up_to: None,
        rate: dec!(0.45),
        name: "additional",
    },
];

pub const SCOTLAND_BANDS: [Band; 6] = [
    Band {
        up_to: Some(dec!(2827)),
        rate: dec!(0.19),
        name: "starter",
    },
    Band {
        up_to: Some(dec!(14921)),
        rate: dec!(0.20),
        name: "basic",
    },
    Band {
        up_to: Some(dec!(31092)),
        rate: dec!(0.21),
        name: "intermediate",
    },
    Band {
        up_to: Some(dec!(62430)),
        rate: dec!(0.42),
        name: "higher",
    },
    Band {
        up_to: Some(dec!(125140)),
        rate: dec!(0.45),
        name: "advanced",
    },
    Band {
        up_to: None,
        rate: dec!(0.48),
        name: "top",
    },
];
