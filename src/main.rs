use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use payroll_engine::cli::CommandLoop;
use payroll_engine::config::{ConfigLoader, PayrollConfig};
use payroll_engine::payroll::PayrollService;

#[derive(Parser)]
#[command(name = "payroll")]
#[command(about = "Interactive payroll calculator", long_about = None)]
struct Cli {
    /// YAML file seeding the currency, job types and employees
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?
            .into_config(),
        None => PayrollConfig::default(),
    };
    debug!(?config, "Using configuration");

    let mut payroll =
        PayrollService::from_config(&config).context("seeding payroll from configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    CommandLoop::new(&mut payroll, stdin.lock(), stdout.lock())
        .run()
        .context("console I/O failed")?;

    info!(
        employees = payroll.list_employees().len(),
        total = %payroll.total_payroll(),
        "Payroll session ended"
    );
    Ok(())
}
