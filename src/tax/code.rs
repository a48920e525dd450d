//! Tax code interpretation.
//!
//! A tax code either overrides the personal allowance (`1257L`, `K475`),
//! forces a flat rate (`BR`, `D0`, `D1`), zeroes the allowance (`0T`) or
//! switches tax off entirely (`NT`). A leading `S` marks a Scottish code.
//! Anything unrecognized falls back to the defaults but is still echoed for
//! display.

use super::year::Jurisdiction;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// How a tax code overrides the default allowance and bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaxCodeMode {
    /// Explicit annual allowance; negative for K codes, where untaxed
    /// benefits exceed the allowances
    Standard { allowance: Decimal },
    /// Single rate on all taxable income, no allowance (BR, D0, D1)
    Flat { rate: Decimal },
    /// Standard bands with the allowance forced to zero (0T)
    ZeroAllowance,
    /// No tax at all (NT)
    NoTax,
}

/// Outcome of parsing an optional tax code string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTaxCode {
    /// `None` means no override: standard allowance and bands apply
    pub mode: Option<TaxCodeMode>,
    /// Scotland when the code carries an `S` prefix; an explicit caller
    /// jurisdiction takes precedence downstream
    pub implied_jurisdiction: Option<Jurisdiction>,
    /// Normalized code echoed back for display, even when unrecognized
    pub code_used: Option<String>,
}

pub fn parse_tax_code(raw: Option<&str>) -> ParsedTaxCode {
    let Some(raw) = raw else {
        return ParsedTaxCode::default();
    };
    let code = raw.trim().to_uppercase();
    if code.is_empty() {
        return ParsedTaxCode::default();
    }

    let implied_jurisdiction = code
        .starts_with('S')
        .then_some(Jurisdiction::Scotland);
    let core = if implied_jurisdiction.is_some() {
        &code[1..]
    } else {
        code.as_str()
    };

    let mode = match core {
        "NT" => Some(TaxCodeMode::NoTax),
        "BR" => Some(TaxCodeMode::Flat { rate: dec!(0.20) }),
        "D0" => Some(TaxCodeMode::Flat { rate: dec!(0.40) }),
        "D1" => Some(TaxCodeMode::Flat { rate: dec!(0.45) }),
        "0T" => Some(TaxCodeMode::ZeroAllowance),
        _ if core.starts_with('K') => digit_run(&core[1..]).map(|n| TaxCodeMode::Standard {
            allowance: Decimal::from(n) * dec!(-10),
        }),
        _ => digit_run(core).map(|n| TaxCodeMode::Standard {
            allowance: Decimal::from(n) * dec!(10),
        }),
    };

    ParsedTaxCode {
        mode,
        implied_jurisdiction,
        code_used: Some(code),
    }
}

/// First contiguous run of digits, if any
fn digit_run(s: &str) -> Option<u64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits: String = s[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_blank_gives_no_mode() {
        assert_eq!(parse_tax_code(None), ParsedTaxCode::default());
        assert_eq!(parse_tax_code(Some("")), ParsedTaxCode::default());
        assert_eq!(parse_tax_code(Some("   ")), ParsedTaxCode::default());
    }

    #[test]
    fn standard_code_multiplies_digits_by_ten() {
        let parsed = parse_tax_code(Some("1257L"));
        assert_eq!(
            parsed.mode,
            Some(TaxCodeMode::Standard {
                allowance: dec!(12570)
            })
        );
        assert_eq!(parsed.implied_jurisdiction, None);
        assert_eq!(parsed.code_used.as_deref(), Some("1257L"));
    }

    #[test]
    fn trailing_letter_is_ignored() {
        for code in ["1257T", "1257M", "1257"] {
            let parsed = parse_tax_code(Some(code));
            assert_eq!(
                parsed.mode,
                Some(TaxCodeMode::Standard {
                    allowance: dec!(12570)
                })
            );
        }
    }

    #[test]
    fn lowercase_and_whitespace_are_normalized() {
        let parsed = parse_tax_code(Some("  s1257l "));
        assert_eq!(
            parsed.mode,
            Some(TaxCodeMode::Standard {
                allowance: dec!(12570)
            })
        );
        assert_eq!(parsed.implied_jurisdiction, Some(Jurisdiction::Scotland));
        assert_eq!(parsed.code_used.as_deref(), Some("S1257L"));
    }

    #[test]
    fn special_tokens() {
        assert_eq!(parse_tax_code(Some("NT")).mode, Some(TaxCodeMode::NoTax));
        assert_eq!(
            parse_tax_code(Some("BR")).mode,
            Some(TaxCodeMode::Flat { rate: dec!(0.20) })
        );
        assert_eq!(
            parse_tax_code(Some("D0")).mode,
            Some(TaxCodeMode::Flat { rate: dec!(0.40) })
        );
        assert_eq!(
            parse_tax_code(Some("D1")).mode,
            Some(TaxCodeMode::Flat { rate: dec!(0.45) })
        );
        assert_eq!(
            parse_tax_code(Some("0T")).mode,
            Some(TaxCodeMode::ZeroAllowance)
        );
    }

    #[test]
    fn scottish_prefix_applies_to_special_tokens() {
        let parsed = parse_tax_code(Some("SBR"));
        assert_eq!(parsed.mode, Some(TaxCodeMode::Flat { rate: dec!(0.20) }));
        assert_eq!(parsed.implied_jurisdiction, Some(Jurisdiction::Scotland));
    }

    #[test]
    fn k_code_gives_negative_allowance() {
        let parsed = parse_tax_code(Some("K475"));
        assert_eq!(
            parsed.mode,
            Some(TaxCodeMode::Standard {
                allowance: dec!(-4750)
            })
        );

        let scottish = parse_tax_code(Some("SK475"));
        assert_eq!(
            scottish.mode,
            Some(TaxCodeMode::Standard {
                allowance: dec!(-4750)
            })
        );
        assert_eq!(scottish.implied_jurisdiction, Some(Jurisdiction::Scotland));
    }

    #[test]
    fn long_digit_runs_parse_without_overflow() {
        let parsed = parse_tax_code(Some("1234567890L"));
        assert_eq!(
            parsed.mode,
            Some(TaxCodeMode::Standard {
                allowance: dec!(12345678900)
            })
        );
    }

    #[test]
    fn k_without_digits_is_unrecognized() {
        let parsed = parse_tax_code(Some("K"));
        assert_eq!(parsed.mode, None);
        assert_eq!(parsed.code_used.as_deref(), Some("K"));
    }

    #[test]
    fn unrecognized_code_still_echoed() {
        let parsed = parse_tax_code(Some("wxyz"));
        assert_eq!(parsed.mode, None);
        assert_eq!(parsed.implied_jurisdiction, None);
        assert_eq!(parsed.code_used.as_deref(), Some("WXYZ"));
    }

    #[test]
    fn bare_s_implies_scotland_without_mode() {
        let parsed = parse_tax_code(Some("S"));
        assert_eq!(parsed.mode, None);
        assert_eq!(parsed.implied_jurisdiction, Some(Jurisdiction::Scotland));
        assert_eq!(parsed.code_used.as_deref(), Some("S"));
    }
}
