use carbon_tax::calculator::{
    format_currency, CalculationRequest, CalculationResult, CarbonTaxCalculator,
    QuarterlyPayment, RebateSchedule,
};
use carbon_tax::config::AppConfig;
use carbon_tax::error::AppError;
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// Province code: AB, SK, MB or ON
    #[arg(long)]
    pub(crate) province: String,
    /// Adults in the household (1 or 2)
    #[arg(long, default_value_t = 1)]
    pub(crate) adults: u8,
    /// Dependent children
    #[arg(long, default_value_t = 0.0)]
    pub(crate) children: f64,
    /// Claim the rural supplement
    #[arg(long)]
    pub(crate) rural: bool,
    /// Annual household income (required unless indirect costs are disabled)
    #[arg(long)]
    pub(crate) income: Option<f64>,
    /// Gasoline, litres per month
    #[arg(long, default_value_t = 0.0)]
    pub(crate) gasoline: f64,
    /// Diesel, litres per month
    #[arg(long, default_value_t = 0.0)]
    pub(crate) diesel: f64,
    /// Natural gas, GJ per month
    #[arg(long, default_value_t = 0.0)]
    pub(crate) natural_gas: f64,
    /// Propane, litres per month
    #[arg(long, default_value_t = 0.0)]
    pub(crate) propane: f64,
    /// Skip the income-based indirect-cost estimate
    #[arg(long)]
    pub(crate) no_indirect: bool,
}

impl From<&CalculateArgs> for CalculationRequest {
    fn from(args: &CalculateArgs) -> Self {
        CalculationRequest {
            province: args.province.clone(),
            adults: args.adults,
            children: args.children,
            rural: args.rural,
            income: args.income,
            gasoline: args.gasoline,
            diesel: args.diesel,
            natural_gas: args.natural_gas,
            propane: args.propane,
        }
    }
}

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if args.no_indirect {
        config.calculator.include_indirect_cost = false;
    }

    let calculator = CarbonTaxCalculator::new(config.calculator);
    let result = calculator.evaluate_request(CalculationRequest::from(&args))?;
    let schedule = RebateSchedule::program_2023_24();

    for line in render_result(&result, &schedule.payments(result.rebate)) {
        println!("{line}");
    }
    println!(
        "\nFigures are annual for the {} program year.",
        schedule.program_year()
    );

    Ok(())
}

fn render_result(result: &CalculationResult, payments: &[QuarterlyPayment]) -> Vec<String> {
    let display = result.display();
    let mut lines = vec![
        format!("Your carbon tax rebate is: {}", display.rebate),
        format!("Your carbon tax paid is: {}", display.direct_tax_paid),
    ];
    if let Some(indirect) = display.estimated_indirect_cost {
        lines.push(format!("Your *estimated* indirect costs are: {indirect}"));
    }
    lines.push(format!("Net position: {}", display.net_position));

    lines.push("\nRebate payments".to_string());
    for payment in payments {
        lines.push(format!(
            "- {}: {}",
            payment.label,
            format_currency(payment.amount)
        ));
    }
    lines
}
