use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;

use payroll_cli::app::{self, Direction};
use payroll_cli::logging::init_logging;
use payroll_cli::period::PayPeriod;
use payroll_cli::utils::parse_amount;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Monthly payroll calculator: gross to net and net to gross.
///
/// Applies the income-tax bracket table, the low-income credit and the
/// employee social-security contribution for the selected year.
#[derive(Debug, Parser)]
#[command(name = "net-pay", version)]
struct Cli {
    /// Schedule year.
    #[arg(long, default_value = "2025")]
    year: i32,

    /// CSV file replacing the compiled-in bracket table
    /// (columns: lower_bound, base_amount, marginal_rate).
    #[arg(long, value_name = "FILE")]
    brackets: Option<PathBuf>,

    /// Also append log output to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Net income for a gross income.
    Net {
        /// Gross income, e.g. 10,000.00
        #[arg(value_parser = parse_amount)]
        amount: Decimal,

        #[arg(long, value_enum, default_value_t)]
        period: PayPeriod,
    },
    /// Gross income needed to take home a net income.
    Gross {
        /// Desired net income, e.g. 8,500
        #[arg(value_parser = parse_amount)]
        amount: Decimal,

        #[arg(long, value_enum, default_value_t)]
        period: PayPeriod,
    },
    /// Print the active bracket table.
    Table,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    debug!(?cli, "parsed arguments");

    let engine = app::build_engine(cli.year, cli.brackets.as_deref())?;

    match cli.command {
        Command::Net { amount, period } => {
            let report = app::calculate(&engine, Direction::GrossToNet, amount, period)?;
            println!("{report}");
        }
        Command::Gross { amount, period } => {
            let report = app::calculate(&engine, Direction::NetToGross, amount, period)?;
            println!("{report}");
        }
        Command::Table => println!("{}", app::render_schedule(engine.schedule())),
    }

    Ok(())
}
