use clap::{Parser, ValueEnum};
use fuelstation::application::rush::rush;
use fuelstation::config::{FuelSetting, StationConfig};
use fuelstation::interfaces::csv::customer_reader::CustomerReader;
use fuelstation::interfaces::csv::report_writer::ReportWriter;
use fuelstation::interfaces::json;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Customers CSV file (customer,fuel,liters,max_price). Customers arrive
    /// in waves of up to 256 at a time.
    input: PathBuf,

    /// Pump to install as FUEL=LITERS. Repeat for more pumps; order matters.
    #[arg(long = "pump", value_name = "FUEL=LITERS")]
    pumps: Vec<FuelSetting>,

    /// Price per liter as FUEL=PRICE. Repeat for more fuels.
    #[arg(long = "price", value_name = "FUEL=PRICE")]
    prices: Vec<FuelSetting>,

    /// Output format of the final report
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_thread_names(true)
        .init();

    let cli = Cli::parse();

    let engine = StationConfig::new(cli.pumps, cli.prices)
        .build_engine()
        .into_diagnostic()?;

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = CustomerReader::new(file);
    let mut customers = Vec::new();
    for customer in reader.customers() {
        match customer {
            Ok(customer) => customers.push(customer),
            Err(e) => error!(error = %e, "Error reading customer"),
        }
    }

    let visits = rush(&engine, customers);
    let served = visits.iter().filter(|v| v.outcome.is_served()).count();
    info!(customers = visits.len(), served, "rush is over");

    let report = engine.report();
    for pump in &report.pumps {
        info!(fuel = %pump.fuel(), remaining = %pump.remaining(), "pump status");
    }

    let stdout = io::stdout();
    match cli.format {
        Format::Csv => ReportWriter::new(stdout.lock())
            .write_report(&report)
            .into_diagnostic()?,
        Format::Json => json::write_report(stdout.lock(), &report).into_diagnostic()?,
    }

    Ok(())
}
