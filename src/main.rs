use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use br_amortization::{compare_systems, AmortizationSystem, CalculationInput, FinancingRequest};

/// SAC and Price amortization for real estate financing
#[derive(Parser)]
#[command(
    name = "br-amortization",
    version,
    about = "SAC and Price amortization for real estate financing",
    long_about = "Summarizes a loan under the SAC (constant amortization) and Price \
                  (constant installment) systems. Amounts are integer cents, rates are \
                  annual fractions (0.08 = 8% a year). Results are printed as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Constant installment (Price) schedule summary
    Price(LoanArgs),
    /// Constant amortization (SAC) schedule summary
    Sac(LoanArgs),
    /// Both systems side by side
    Compare(LoanArgs),
    /// Simulate financing a property after a down payment
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct LoanArgs {
    /// Financed amount in cents
    #[arg(long)]
    amount: i64,
    /// Annual interest rate as a fraction (0.08 = 8%)
    #[arg(long)]
    rate: Decimal,
    /// Term in months
    #[arg(long)]
    months: u32,
}

impl From<LoanArgs> for CalculationInput {
    fn from(args: LoanArgs) -> Self {
        CalculationInput::new(args.amount, args.rate, args.months)
    }
}

#[derive(Args)]
struct SimulateArgs {
    /// JSON file with a financing request, or "-" for stdin
    #[arg(long)]
    input: Option<String>,
    /// Property value in cents
    #[arg(long)]
    property_value: Option<i64>,
    /// Down payment in cents
    #[arg(long)]
    down_payment: Option<i64>,
    /// Annual interest rate as a fraction (0.08 = 8%)
    #[arg(long)]
    rate: Option<Decimal>,
    /// Term in months
    #[arg(long)]
    months: Option<u32>,
    /// Amortization system: sac or price
    #[arg(long)]
    system: Option<AmortizationSystem>,
}

fn read_request(source: &str) -> Result<FinancingRequest> {
    let contents = if source == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read financing request from stdin")?;
        buffer
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read '{source}'"))?
    };
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse financing request from '{source}'"))
}

fn run_simulate(args: SimulateArgs) -> Result<Value> {
    let mut request = match args.input.as_deref() {
        Some(source) => read_request(source)?,
        None => FinancingRequest::default(),
    };

    if let Some(property_value) = args.property_value {
        request.property_value = property_value;
    }
    if let Some(down_payment) = args.down_payment {
        request.down_payment_value = down_payment;
    }
    if let Some(rate) = args.rate {
        request.annual_interest_rate = rate;
    }
    if let Some(months) = args.months {
        request.term_in_months = months;
    }
    if let Some(system) = args.system {
        request.calculation_type = system;
    }

    info!(?request, "running simulation");
    let simulation = request.simulate()?;
    Ok(serde_json::to_value(simulation)?)
}

fn run(command: Commands) -> Result<Value> {
    let value = match command {
        Commands::Price(args) => {
            serde_json::to_value(AmortizationSystem::Price.compute(&args.into())?)?
        }
        Commands::Sac(args) => {
            serde_json::to_value(AmortizationSystem::Sac.compute(&args.into())?)?
        }
        Commands::Compare(args) => serde_json::to_value(compare_systems(&args.into())?)?,
        Commands::Simulate(args) => run_simulate(args)?,
    };
    Ok(value)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let value = run(cli.command)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
