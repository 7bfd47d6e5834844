use super::common::*;
use crate::calculator::{AdultCount, CalculationError, InputGuard, Province, INCOME_CEILING};
use crate::config::CalculatorConfig;

fn guard() -> InputGuard {
    InputGuard::from_config(&CalculatorConfig::default())
}

#[test]
fn guard_builds_typed_inputs() {
    let (household, usage) = guard()
        .inputs_from_request(request())
        .expect("valid request");

    assert_eq!(household.province, Province::Alberta);
    assert_eq!(household.adults, AdultCount::Two);
    assert_eq!(household.children, 2);
    assert_eq!(household.income, Some(95_000.0));
    assert_eq!(usage.gasoline, 100.0);
    assert_eq!(usage.natural_gas, 8.0);
}

#[test]
fn guard_accepts_uppercase_province_codes() {
    let mut request = request();
    request.province = " ON ".to_string();
    let (household, _) = guard().inputs_from_request(request).expect("valid code");
    assert_eq!(household.province, Province::Ontario);
}

#[test]
fn guard_rejects_unknown_province() {
    let mut request = request();
    request.province = "bc".to_string();

    match guard().inputs_from_request(request) {
        Err(CalculationError::InvalidProvince(code)) => assert_eq!(code, "bc"),
        other => panic!("expected invalid province, got {other:?}"),
    }
}

#[test]
fn guard_rejects_adult_counts_other_than_one_or_two() {
    for adults in [0, 3] {
        let mut request = request();
        request.adults = adults;
        match guard().inputs_from_request(request) {
            Err(CalculationError::InvalidAdultCount(found)) => assert_eq!(found, adults),
            other => panic!("expected invalid adult count, got {other:?}"),
        }
    }
}

#[test]
fn guard_rejects_fractional_and_negative_children() {
    for children in [1.5, -1.0] {
        let mut request = request();
        request.children = children;
        match guard().inputs_from_request(request) {
            Err(CalculationError::InvalidQuantity { field, .. }) => assert_eq!(field, "children"),
            other => panic!("expected invalid children, got {other:?}"),
        }
    }
}

#[test]
fn guard_rejects_negative_fuel_quantities() {
    let mut request = request();
    request.propane = -2.0;
    let error = guard()
        .inputs_from_request(request)
        .expect_err("negative propane rejected");
    assert_eq!(error.field(), Some("propane"));
    assert!(error.is_validation());
}

#[test]
fn guard_rejects_non_finite_quantities() {
    let mut request = request();
    request.diesel = f64::INFINITY;
    let error = guard()
        .inputs_from_request(request)
        .expect_err("infinite diesel rejected");
    assert_eq!(error.field(), Some("diesel"));
}

#[test]
fn guard_requires_income_when_estimating_indirect_cost() {
    let mut request = request();
    request.income = None;
    match guard().inputs_from_request(request) {
        Err(CalculationError::MissingIncome) => {}
        other => panic!("expected missing income, got {other:?}"),
    }
}

#[test]
fn guard_rejects_negative_income_and_income_above_ceiling() {
    let mut negative = request();
    negative.income = Some(-10.0);
    match guard().inputs_from_request(negative) {
        Err(CalculationError::InvalidQuantity { field, value }) => {
            assert_eq!(field, "income");
            assert_eq!(value, -10.0);
        }
        other => panic!("expected invalid income, got {other:?}"),
    }

    let mut too_high = request();
    too_high.income = Some(INCOME_CEILING + 0.5);
    match guard().inputs_from_request(too_high) {
        Err(CalculationError::IncomeAboveCeiling { ceiling, .. }) => {
            assert_eq!(ceiling, INCOME_CEILING)
        }
        other => panic!("expected income above ceiling, got {other:?}"),
    }
}

#[test]
fn guard_ignores_income_when_indirect_cost_disabled() {
    let guard = InputGuard::from_config(&CalculatorConfig {
        include_indirect_cost: false,
        ..CalculatorConfig::default()
    });
    let mut request = request();
    request.income = Some(-1.0);

    let (household, _) = guard
        .inputs_from_request(request)
        .expect("income is not consulted");
    assert_eq!(household.income, None);
}

#[test]
fn evaluate_request_packages_all_figures() {
    let result = calculator()
        .evaluate_request(request())
        .expect("valid request evaluates");

    assert_close(result.rebate, 772.0 + 386.0 + 2.0 * 193.0);
    assert_close(
        result.direct_tax_paid,
        100.0 * 12.0 * 0.1431 + 8.0 * 12.0 * 3.4177,
    );
    assert_eq!(result.estimated_indirect_cost, Some(402.77));
    assert_close(
        result.net_position,
        result.rebate - result.direct_tax_paid - 402.77,
    );
}

#[test]
fn evaluate_request_without_indirect_cost_returns_two_figures() {
    let mut request = request();
    request.income = None;
    let result = calculator_without_indirect()
        .evaluate_request(request)
        .expect("income not required");

    assert_eq!(result.estimated_indirect_cost, None);
    assert_close(result.net_position, result.rebate - result.direct_tax_paid);
}

#[test]
fn evaluation_is_idempotent() {
    let calculator = calculator();
    let first = calculator.evaluate_request(request()).expect("evaluates");
    let second = calculator.evaluate_request(request()).expect("evaluates");

    assert_eq!(first.rebate.to_bits(), second.rebate.to_bits());
    assert_eq!(
        first.direct_tax_paid.to_bits(),
        second.direct_tax_paid.to_bits()
    );
    assert_eq!(first, second);
}

#[test]
fn display_formats_currency_figures() {
    let display = calculator()
        .evaluate_request(request())
        .expect("evaluates")
        .display();

    assert_eq!(display.rebate, "$1,544.00");
    assert_eq!(display.estimated_indirect_cost.as_deref(), Some("$402.77"));
}
