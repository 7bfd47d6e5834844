use crate::calculator::{CalculationRequest, CarbonTaxCalculator};
use crate::config::CalculatorConfig;

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn calculator() -> CarbonTaxCalculator {
    CarbonTaxCalculator::new(CalculatorConfig::default())
}

pub(super) fn calculator_without_indirect() -> CarbonTaxCalculator {
    CarbonTaxCalculator::new(CalculatorConfig {
        include_indirect_cost: false,
        ..CalculatorConfig::default()
    })
}

pub(super) fn request() -> CalculationRequest {
    CalculationRequest {
        province: "ab".to_string(),
        adults: 2,
        children: 2.0,
        rural: false,
        income: Some(95_000.0),
        gasoline: 100.0,
        diesel: 0.0,
        natural_gas: 8.0,
        propane: 0.0,
    }
}
