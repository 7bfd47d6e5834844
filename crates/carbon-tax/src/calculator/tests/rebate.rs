use super::common::*;
use crate::calculator::{AdultCount, Province, RURAL_SUPPLEMENT};

#[test]
fn single_adult_alberta_receives_base_amount() {
    let rebate = calculator().compute_rebate(Province::Alberta, AdultCount::One, 0, false);
    assert_eq!(rebate, 772.0);
}

#[test]
fn rural_supplement_applies_after_second_adult() {
    let rebate = calculator().compute_rebate(Province::Alberta, AdultCount::Two, 2, true);
    assert_close(rebate, (772.0 + 386.0 + 193.0 * 2.0) * 1.10);
    assert_close(rebate, 1_698.40);
}

#[test]
fn province_constants_match_published_amounts() {
    let calculator = calculator();
    let cases = [
        (Province::Alberta, 772.0, 193.0, 386.0),
        (Province::Manitoba, 528.0, 132.0, 264.0),
        (Province::Ontario, 488.0, 122.0, 244.0),
        (Province::Saskatchewan, 680.0, 170.0, 340.0),
    ];

    for (province, base, per_child, second_adult) in cases {
        assert_eq!(
            calculator.compute_rebate(province, AdultCount::One, 0, false),
            base
        );
        assert_eq!(
            calculator.compute_rebate(province, AdultCount::One, 3, false),
            base + per_child * 3.0
        );
        assert_eq!(
            calculator.compute_rebate(province, AdultCount::Two, 0, false),
            base + second_adult
        );
    }
}

#[test]
fn rebate_never_decreases_with_more_children() {
    let calculator = calculator();
    for province in Province::ALL {
        for adults in [AdultCount::One, AdultCount::Two] {
            for rural in [false, true] {
                let mut previous = calculator.compute_rebate(province, adults, 0, rural);
                for children in 1..=12 {
                    let current = calculator.compute_rebate(province, adults, children, rural);
                    assert!(
                        current >= previous,
                        "{province} rebate dropped at {children} children"
                    );
                    previous = current;
                }
            }
        }
    }
}

#[test]
fn rural_flag_scales_whole_rebate() {
    let calculator = calculator();
    for province in Province::ALL {
        for adults in [AdultCount::One, AdultCount::Two] {
            for children in 0..6 {
                let urban = calculator.compute_rebate(province, adults, children, false);
                let rural = calculator.compute_rebate(province, adults, children, true);
                assert!((rural - urban * RURAL_SUPPLEMENT).abs() < TOLERANCE);
            }
        }
    }
}
