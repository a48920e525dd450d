//! Property tests for the estimators.
//!
//! These check the structural laws of the engine over random inputs: the
//! take-home identity, monotonicity in gross pay, breakdown consistency and
//! the forward/reverse round trip.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use takehome::tax::ni::ALL_CATEGORIES;
use takehome::tax::{
    estimate_gross_from_net, estimate_take_home, Jurisdiction, TakeHomeRequest,
};

fn request(gross: u32, scotland: bool) -> TakeHomeRequest {
    TakeHomeRequest {
        amount: Decimal::from(gross),
        jurisdiction: Some(if scotland {
            Jurisdiction::Scotland
        } else {
            Jurisdiction::Ruk
        }),
        ..Default::default()
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn take_home_is_gross_minus_deductions(gross in 0u32..500_000, scotland in any::<bool>()) {
        let result = estimate_take_home(&request(gross, scotland));
        prop_assert_eq!(
            result.annual.take_home,
            result.annual.gross - result.annual.income_tax - result.annual.national_insurance
        );
    }

    #[test]
    fn no_tax_below_the_standard_allowance(gross in 0u32..=12_570, scotland in any::<bool>()) {
        let result = estimate_take_home(&request(gross, scotland));
        prop_assert_eq!(result.annual.income_tax, Decimal::ZERO);
    }

    #[test]
    fn take_home_is_monotonic_in_gross(
        a in 0u32..300_000,
        b in 0u32..300_000,
        scotland in any::<bool>(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_net = estimate_take_home(&request(lo, scotland)).annual.take_home;
        let hi_net = estimate_take_home(&request(hi, scotland)).annual.take_home;
        prop_assert!(lo_net <= hi_net, "net fell from {lo_net} to {hi_net} as gross rose");
    }

    #[test]
    fn breakdown_sums_to_total(gross in 0u32..500_000, scotland in any::<bool>()) {
        let result = estimate_take_home(&request(gross, scotland));
        let sum: Decimal = result
            .annual
            .income_tax_breakdown
            .iter()
            .map(|line| line.tax)
            .sum();
        prop_assert!((sum - result.annual.income_tax).abs() <= dec!(0.01));
    }

    #[test]
    fn reverse_recovers_forward_gross(
        gross in 1u32..400_000,
        scotland in any::<bool>(),
        category_index in 0usize..ALL_CATEGORIES.len(),
    ) {
        let mut forward_request = request(gross, scotland);
        forward_request.ni_category = ALL_CATEGORIES[category_index];

        let forward = estimate_take_home(&forward_request);
        let reverse = estimate_gross_from_net(&TakeHomeRequest {
            amount: forward.annual.take_home,
            ..forward_request
        })
        .unwrap();

        prop_assert!(
            (reverse.annual.gross - Decimal::from(gross)).abs() <= Decimal::ONE,
            "expected gross near {gross}, found {}",
            reverse.annual.gross
        );
    }

    // Starts at £5,000 because a K code can push take-home negative on very
    // small gross figures, where the reverse estimator clamps to zero.
    #[test]
    fn reverse_round_trips_with_tax_codes(
        gross in 5_000u32..200_000,
        code_index in 0usize..6,
    ) {
        let code = ["1257L", "S1257L", "BR", "D0", "0T", "K475"][code_index];
        let forward = estimate_take_home(&TakeHomeRequest {
            amount: Decimal::from(gross),
            tax_code: Some(code.into()),
            ..Default::default()
        });
        let reverse = estimate_gross_from_net(&TakeHomeRequest {
            amount: forward.annual.take_home,
            tax_code: Some(code.into()),
            ..Default::default()
        })
        .unwrap();
        prop_assert!((reverse.annual.gross - Decimal::from(gross)).abs() <= Decimal::ONE);
    }
}
