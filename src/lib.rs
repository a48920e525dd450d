//! UK employee take-home pay estimation for the 2025/26 tax year.
//!
//! The calculation engine lives in [`tax`]: given gross pay (or a target net
//! figure) in any reporting period it resolves the tax code, applies the
//! personal allowance taper, walks the regional Income Tax bands, computes
//! category-based employee National Insurance and returns a full breakdown.
//! [`cmd`] is the CLI surface over the engine.

pub mod cmd;
pub mod tax;
