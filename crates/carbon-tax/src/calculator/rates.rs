use serde::Serialize;

use super::domain::FuelUsageInput;

/// Carbon price the rate table is derived from, in dollars per tonne CO2e.
pub const CARBON_PRICE_PER_TONNE: f64 = 65.0;

pub const MONTHS_PER_YEAR: f64 = 12.0;

const GASOLINE_PER_LITRE: f64 = 0.1431;
// Scaled from gasoline using the ratio of previously published diesel/gasoline charges.
const DIESEL_TO_GASOLINE_RATIO: f64 = 1.21357466;
const NATURAL_GAS_PER_GJ: f64 = 3.4177;
const PROPANE_PER_LITRE: f64 = 0.1006;

/// Fuel charge per unit of fuel. Diesel is charged as a multiple of the gasoline rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuelRateTable {
    pub gasoline: f64,
    pub diesel_to_gasoline: f64,
    pub natural_gas: f64,
    pub propane: f64,
}

impl FuelRateTable {
    /// Rates effective April 1, 2023.
    pub const STANDARD: FuelRateTable = FuelRateTable {
        gasoline: GASOLINE_PER_LITRE,
        diesel_to_gasoline: DIESEL_TO_GASOLINE_RATIO,
        natural_gas: NATURAL_GAS_PER_GJ,
        propane: PROPANE_PER_LITRE,
    };

    /// Diesel charge per litre.
    pub fn diesel(&self) -> f64 {
        self.diesel_to_gasoline * self.gasoline
    }

    /// Annual charge for monthly usage. Every fuel contributes, zero or not.
    ///
    /// Terms multiply left to right: quantity, months, diesel ratio, rate.
    pub fn annual_charge(&self, usage: &FuelUsageInput) -> f64 {
        usage.gasoline * MONTHS_PER_YEAR * self.gasoline
            + usage.diesel * MONTHS_PER_YEAR * self.diesel_to_gasoline * self.gasoline
            + usage.natural_gas * MONTHS_PER_YEAR * self.natural_gas
            + usage.propane * MONTHS_PER_YEAR * self.propane
    }
}

impl Default for FuelRateTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
