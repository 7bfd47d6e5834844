//! Household carbon-tax position: rebate, direct fuel charge, and an optional
//! income-decile estimate of indirect costs.
//!
//! Every evaluation is a pure function of its inputs. Province profiles and the
//! fuel rate table are immutable statics shared by all callers.

pub mod domain;
mod engine;
mod format;
mod guard;
mod profile;
mod rates;
pub mod router;
mod schedule;

#[cfg(test)]
mod tests;

pub use domain::{
    AdultCount, CalculationDisplay, CalculationResult, FuelUsageInput, HouseholdInput, Province,
};
pub use engine::{CalculationError, CarbonTaxCalculator, RURAL_SUPPLEMENT};
pub use format::format_currency;
pub use guard::{CalculationRequest, InputGuard};
pub use profile::{
    province_catalogue, IncomeBracket, ProvinceProfile, ProvinceSummary, INCOME_CEILING,
};
pub use rates::{FuelRateTable, CARBON_PRICE_PER_TONNE, MONTHS_PER_YEAR};
pub use router::{calculator_router, CalculationResponse};
pub use schedule::{QuarterlyPayment, RebateSchedule};
