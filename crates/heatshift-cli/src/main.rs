mod commands;
mod config;
mod input;
mod output;
mod telemetry;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::assess::{AssessArgs, SavingsArgs, StackArgs};
use commands::directory::{InstallersArgs, ListArgs};
use config::CliConfig;

/// Heat pump renovation incentives and savings
#[derive(Parser)]
#[command(
    name = "heatshift",
    version,
    about = "Heat pump renovation incentives and savings",
    long_about = "Matches a building renovation profile against a catalog of grants and \
                  loans, stacks the applicable grants (capped at project cost) and \
                  estimates energy, CO2 and loan-interest savings with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log filter (overrides HEATSHIFT_LOG_LEVEL; RUST_LOG wins over both)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full assessment: grant stack, financing options and savings
    Assess(AssessArgs),
    /// Stack the applicable grants for a profile
    Stack(StackArgs),
    /// Energy, CO2 and loan-interest savings for a profile
    Savings(SavingsArgs),
    /// List the incentive catalog for a jurisdiction
    Incentives(ListArgs),
    /// List electricity suppliers for a jurisdiction
    Suppliers(ListArgs),
    /// List certified installers, optionally filtered by target technology
    Installers(InstallersArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match CliConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };
    if let Some(level) = cli.log_level {
        config.telemetry.log_level = level;
    }
    if let Err(e) = telemetry::init(&config.telemetry) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Assess(args) => commands::assess::run_assess(args, &config),
        Commands::Stack(args) => commands::assess::run_stack(args, &config),
        Commands::Savings(args) => commands::assess::run_savings(args, &config),
        Commands::Incentives(args) => commands::directory::run_incentives(args, &config),
        Commands::Suppliers(args) => commands::directory::run_suppliers(args, &config),
        Commands::Installers(args) => commands::directory::run_installers(args, &config),
        Commands::Version => {
            println!("heatshift {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
