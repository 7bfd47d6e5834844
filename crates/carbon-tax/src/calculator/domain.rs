use serde::{Deserialize, Serialize};
use std::fmt;

use super::format::format_currency;

/// Provinces where the federal fuel charge and rebate apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Province {
    #[serde(rename = "ab")]
    Alberta,
    #[serde(rename = "sk")]
    Saskatchewan,
    #[serde(rename = "mb")]
    Manitoba,
    #[serde(rename = "on")]
    Ontario,
}

impl Province {
    pub const ALL: [Province; 4] = [
        Province::Alberta,
        Province::Saskatchewan,
        Province::Manitoba,
        Province::Ontario,
    ];

    /// Parses a two-letter code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ab" => Some(Self::Alberta),
            "sk" => Some(Self::Saskatchewan),
            "mb" => Some(Self::Manitoba),
            "on" => Some(Self::Ontario),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Province::Alberta => "AB",
            Province::Saskatchewan => "SK",
            Province::Manitoba => "MB",
            Province::Ontario => "ON",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Province::Alberta => "Alberta",
            Province::Saskatchewan => "Saskatchewan",
            Province::Manitoba => "Manitoba",
            Province::Ontario => "Ontario",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Number of adults in the household; the rebate only distinguishes one from two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AdultCount {
    One,
    Two,
}

impl AdultCount {
    pub fn count(&self) -> u8 {
        match self {
            AdultCount::One => 1,
            AdultCount::Two => 2,
        }
    }
}

impl TryFrom<u8> for AdultCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(format!("adult count must be 1 or 2, found {other}")),
        }
    }
}

impl From<AdultCount> for u8 {
    fn from(value: AdultCount) -> Self {
        value.count()
    }
}

/// Validated household composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdInput {
    pub province: Province,
    pub adults: AdultCount,
    pub children: u32,
    pub rural: bool,
    /// Annual household income; only consulted when indirect costs are estimated.
    pub income: Option<f64>,
}

/// Monthly fuel consumption: litres for liquids, gigajoules for natural gas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelUsageInput {
    pub gasoline: f64,
    pub diesel: f64,
    pub natural_gas: f64,
    pub propane: f64,
}

/// Annual figures produced by a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub rebate: f64,
    pub direct_tax_paid: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_indirect_cost: Option<f64>,
    /// Rebate minus everything paid; positive when the household comes out ahead.
    pub net_position: f64,
}

impl CalculationResult {
    pub(crate) fn new(
        rebate: f64,
        direct_tax_paid: f64,
        estimated_indirect_cost: Option<f64>,
    ) -> Self {
        let net_position = rebate - direct_tax_paid - estimated_indirect_cost.unwrap_or(0.0);
        Self {
            rebate,
            direct_tax_paid,
            estimated_indirect_cost,
            net_position,
        }
    }

    pub fn display(&self) -> CalculationDisplay {
        CalculationDisplay {
            rebate: format_currency(self.rebate),
            direct_tax_paid: format_currency(self.direct_tax_paid),
            estimated_indirect_cost: self.estimated_indirect_cost.map(format_currency),
            net_position: format_currency(self.net_position),
        }
    }
}

/// Currency-formatted view of a [`CalculationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationDisplay {
    pub rebate: String,
    pub direct_tax_paid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_indirect_cost: Option<String>,
    pub net_position: String,
}
