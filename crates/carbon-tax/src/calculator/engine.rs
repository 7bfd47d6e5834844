use tracing::{debug, warn};

use super::domain::{AdultCount, CalculationResult, FuelUsageInput, HouseholdInput, Province};
use super::guard::{CalculationRequest, InputGuard};
use super::rates::FuelRateTable;
use crate::config::CalculatorConfig;

/// Multiplier applied to the whole rebate for rural residents.
pub const RURAL_SUPPLEMENT: f64 = 1.10;

/// Errors raised while validating inputs or evaluating a household.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error("unknown province '{0}': expected one of AB, SK, MB, ON")]
    InvalidProvince(String),
    #[error("{field} must be a non-negative number (found {value})")]
    InvalidQuantity { field: &'static str, value: f64 },
    #[error("adult count must be 1 or 2 (found {0})")]
    InvalidAdultCount(u8),
    #[error("household income is required to estimate indirect costs")]
    MissingIncome,
    #[error("household income {income} exceeds the supported maximum of {ceiling}")]
    IncomeAboveCeiling { income: f64, ceiling: f64 },
    #[error("no {province} income bracket covers {income}")]
    BracketLookupMiss { province: Province, income: f64 },
}

impl CalculationError {
    /// Input field the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CalculationError::InvalidProvince(_) => Some("province"),
            CalculationError::InvalidQuantity { field, .. } => Some(*field),
            CalculationError::InvalidAdultCount(_) => Some("adults"),
            CalculationError::MissingIncome | CalculationError::IncomeAboveCeiling { .. } => {
                Some("income")
            }
            CalculationError::BracketLookupMiss { .. } => None,
        }
    }

    /// True when the caller supplied bad input, false for internal inconsistencies.
    pub fn is_validation(&self) -> bool {
        !matches!(self, CalculationError::BracketLookupMiss { .. })
    }
}

/// Stateless calculator for the rebate, direct fuel charge and indirect-cost estimate.
#[derive(Debug, Clone)]
pub struct CarbonTaxCalculator {
    config: CalculatorConfig,
    rates: FuelRateTable,
    guard: InputGuard,
}

impl CarbonTaxCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self::with_rates(config, FuelRateTable::STANDARD)
    }

    pub fn with_rates(config: CalculatorConfig, rates: FuelRateTable) -> Self {
        let guard = InputGuard::from_config(&config);
        Self {
            config,
            rates,
            guard,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn rates(&self) -> &FuelRateTable {
        &self.rates
    }

    pub fn includes_indirect_cost(&self) -> bool {
        self.config.include_indirect_cost
    }

    pub fn compute_rebate(
        &self,
        province: Province,
        adults: AdultCount,
        children: u32,
        rural: bool,
    ) -> f64 {
        let profile = province.profile();
        let mut rebate = profile.base_amount + profile.per_child_amount * f64::from(children);
        if adults == AdultCount::Two {
            rebate += profile.second_adult_amount;
        }
        if rural {
            rebate *= RURAL_SUPPLEMENT;
        }
        rebate
    }

    pub fn compute_direct_tax_paid(&self, usage: &FuelUsageInput) -> f64 {
        self.rates.annual_charge(usage)
    }

    pub fn lookup_indirect_cost(
        &self,
        province: Province,
        income: f64,
    ) -> Result<f64, CalculationError> {
        match province.profile().bracket_for(income) {
            Some(bracket) => Ok(bracket.indirect_cost),
            None => {
                warn!(%province, income, "income fell outside every indirect-cost bracket");
                Err(CalculationError::BracketLookupMiss { province, income })
            }
        }
    }

    /// Evaluates typed inputs. Income is still checked for sign since the
    /// fields are public; other bounds belong to [`InputGuard`].
    pub fn evaluate(
        &self,
        household: &HouseholdInput,
        usage: &FuelUsageInput,
    ) -> Result<CalculationResult, CalculationError> {
        let rebate = self.compute_rebate(
            household.province,
            household.adults,
            household.children,
            household.rural,
        );
        let direct_tax_paid = self.compute_direct_tax_paid(usage);
        let estimated_indirect_cost = if self.config.include_indirect_cost {
            let income = household.income.ok_or(CalculationError::MissingIncome)?;
            if !income.is_finite() || income < 0.0 {
                return Err(CalculationError::InvalidQuantity {
                    field: "income",
                    value: income,
                });
            }
            Some(self.lookup_indirect_cost(household.province, income)?)
        } else {
            None
        };

        debug!(
            province = %household.province,
            indirect = self.config.include_indirect_cost,
            "evaluated household carbon-tax position"
        );

        Ok(CalculationResult::new(
            rebate,
            direct_tax_paid,
            estimated_indirect_cost,
        ))
    }

    /// Validates raw form values, then evaluates them.
    pub fn evaluate_request(
        &self,
        request: CalculationRequest,
    ) -> Result<CalculationResult, CalculationError> {
        let (household, usage) = self.guard.inputs_from_request(request)?;
        self.evaluate(&household, &usage)
    }
}

impl Default for CarbonTaxCalculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}
