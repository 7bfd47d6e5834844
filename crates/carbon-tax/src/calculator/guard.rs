use serde::{Deserialize, Serialize};

use super::domain::{AdultCount, FuelUsageInput, HouseholdInput, Province};
use super::engine::CalculationError;
use crate::config::CalculatorConfig;

/// Unvalidated form values as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub province: String,
    pub adults: u8,
    #[serde(default)]
    pub children: f64,
    #[serde(default)]
    pub rural: bool,
    #[serde(default)]
    pub income: Option<f64>,
    #[serde(default)]
    pub gasoline: f64,
    #[serde(default)]
    pub diesel: f64,
    #[serde(default)]
    pub natural_gas: f64,
    #[serde(default)]
    pub propane: f64,
}

/// Boundary validation turning a [`CalculationRequest`] into calculator inputs.
#[derive(Debug, Clone)]
pub struct InputGuard {
    include_indirect_cost: bool,
    income_ceiling: f64,
}

impl InputGuard {
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            include_indirect_cost: config.include_indirect_cost,
            income_ceiling: config.income_ceiling,
        }
    }

    pub fn inputs_from_request(
        &self,
        request: CalculationRequest,
    ) -> Result<(HouseholdInput, FuelUsageInput), CalculationError> {
        let province = Province::from_code(&request.province)
            .ok_or_else(|| CalculationError::InvalidProvince(request.province.clone()))?;
        let adults = AdultCount::try_from(request.adults)
            .map_err(|_| CalculationError::InvalidAdultCount(request.adults))?;
        let children = whole_count("children", request.children)?;

        let income = if self.include_indirect_cost {
            let income = request.income.ok_or(CalculationError::MissingIncome)?;
            let income = non_negative("income", income)?;
            if income > self.income_ceiling {
                return Err(CalculationError::IncomeAboveCeiling {
                    income,
                    ceiling: self.income_ceiling,
                });
            }
            Some(income)
        } else {
            None
        };

        let household = HouseholdInput {
            province,
            adults,
            children,
            rural: request.rural,
            income,
        };
        let usage = FuelUsageInput {
            gasoline: non_negative("gasoline", request.gasoline)?,
            diesel: non_negative("diesel", request.diesel)?,
            natural_gas: non_negative("natural_gas", request.natural_gas)?,
            propane: non_negative("propane", request.propane)?,
        };

        Ok((household, usage))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, CalculationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalculationError::InvalidQuantity { field, value })
    }
}

fn whole_count(field: &'static str, value: f64) -> Result<u32, CalculationError> {
    let value = non_negative(field, value)?;
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(CalculationError::InvalidQuantity { field, value });
    }
    Ok(value as u32)
}
