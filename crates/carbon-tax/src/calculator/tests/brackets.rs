use super::common::*;
use crate::calculator::{CalculationError, Province, INCOME_CEILING};

#[test]
fn alberta_bracket_edges_match_table() {
    let calculator = calculator();
    let cost = |income| {
        calculator
            .lookup_indirect_cost(Province::Alberta, income)
            .expect("income within table")
    };

    assert_eq!(cost(0.0), 260.27);
    assert_eq!(cost(38_990.0), 260.27);
    assert_eq!(cost(38_991.0), 261.73);
    assert_eq!(cost(341_880.0), 913.14);
    assert_eq!(cost(INCOME_CEILING), 913.14);
}

#[test]
fn tables_partition_income_range_without_gaps() {
    for province in Province::ALL {
        let brackets = province.profile().brackets;
        assert_eq!(brackets[0].min, 0.0, "{province} table must start at zero");
        assert_eq!(brackets[brackets.len() - 1].max, INCOME_CEILING);
        for pair in brackets.windows(2) {
            assert!(pair[0].min <= pair[0].max);
            assert_eq!(
                pair[0].max + 1.0,
                pair[1].min,
                "{province} brackets must be contiguous"
            );
        }
    }
}

#[test]
fn every_sampled_income_matches_exactly_one_bracket() {
    let samples = [
        0.0,
        0.99,
        29_658.5,
        38_990.75,
        61_384.0,
        150_000.0,
        999_999.99,
        INCOME_CEILING,
    ];
    for province in Province::ALL {
        let brackets = province.profile().brackets;
        for income in samples {
            let whole = f64::trunc(income);
            let matches = brackets
                .iter()
                .filter(|bracket| bracket.contains(whole))
                .count();
            assert_eq!(matches, 1, "{province} income {income}");
            assert!(province.profile().bracket_for(income).is_some());
        }
    }
}

#[test]
fn fractional_income_between_bounds_uses_lower_bracket() {
    let cost = calculator()
        .lookup_indirect_cost(Province::Ontario, 29_658.5)
        .expect("fractional income is covered");
    assert_eq!(cost, 157.04);
}

#[test]
fn out_of_range_income_is_reported() {
    let calculator = calculator();
    for income in [-1.0, -0.5, -0.0001, INCOME_CEILING + 1.0, f64::NAN] {
        match calculator.lookup_indirect_cost(Province::Saskatchewan, income) {
            Err(CalculationError::BracketLookupMiss { province, .. }) => {
                assert_eq!(province, Province::Saskatchewan)
            }
            other => panic!("expected bracket miss for {income}, got {other:?}"),
        }
    }
}

#[test]
fn provincial_tables_return_their_own_deciles() {
    let calculator = calculator();
    let cases = [
        (Province::Saskatchewan, 300_000.0, 1_494.76),
        (Province::Manitoba, 90_000.0, 287.90),
        (Province::Ontario, 100_000.0, 247.19),
        (Province::Alberta, 100_000.0, 402.77),
    ];
    for (province, income, expected) in cases {
        assert_eq!(
            calculator
                .lookup_indirect_cost(province, income)
                .expect("covered"),
            expected
        );
    }
}
