use chrono::NaiveDate;
use serde::Serialize;

/// One instalment of the annual rebate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarterlyPayment {
    pub period: NaiveDate,
    pub label: String,
    pub amount: f64,
}

/// Months in which a program year's rebate is paid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebateSchedule {
    program_year: &'static str,
    periods: [NaiveDate; 4],
}

impl RebateSchedule {
    /// April, July and October 2023, then January 2024.
    pub fn program_2023_24() -> Self {
        Self {
            program_year: "2023/24",
            periods: [
                first_of_month(2023, 4),
                first_of_month(2023, 7),
                first_of_month(2023, 10),
                first_of_month(2024, 1),
            ],
        }
    }

    pub fn program_year(&self) -> &'static str {
        self.program_year
    }

    pub fn periods(&self) -> &[NaiveDate] {
        &self.periods
    }

    /// Splits an annual rebate into equal instalments.
    pub fn payments(&self, annual_rebate: f64) -> Vec<QuarterlyPayment> {
        let amount = annual_rebate / self.periods.len() as f64;
        self.periods
            .iter()
            .map(|period| QuarterlyPayment {
                period: *period,
                label: period.format("%B %Y").to_string(),
                amount,
            })
            .collect()
    }
}

impl Default for RebateSchedule {
    fn default() -> Self {
        Self::program_2023_24()
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}
