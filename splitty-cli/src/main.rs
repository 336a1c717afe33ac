use std::{borrow::Cow, path::PathBuf, process};

use clap::Parser;
use splitty_application::SettlementProcessor;
use splitty_infrastructure::{CsvRecordSource, load_config};
use splitty_presentation::{SettlementPresenter, format_error, format_infra_error};
use tracing_subscriber::EnvFilter;

type CliResult<T> = Result<T, Cow<'static, str>>;

/// Works out who owes whom after a shared trip.
#[derive(Parser, Debug)]
#[command(name = "splitty", version)]
#[command(about = "Settle shared expenses from a CSV file with the fewest transfers")]
struct Cli {
    /// Path to the input CSV file.
    #[arg(short, long, env = "SPLITTY_INPUT")]
    input: PathBuf,

    /// Path to a JSON configuration file.
    #[arg(short, long, env = "SPLITTY_CONFIG")]
    config: PathBuf,

    /// Print every participant's net balance before the settlements.
    #[arg(long)]
    show_balances: bool,
}

fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = load_config(&cli.config).map_err(|err| format_infra_error(&err))?;
    let source = CsvRecordSource::new(&cli.input);

    let report = SettlementProcessor::new(&config)
        .run(&source)
        .map_err(|err| format_error(&err))?;

    tracing::info!(
        transactions = report.transaction_count,
        settlements = report.settlements.len(),
        "settled"
    );
    print!("{}", SettlementPresenter::render(&report, cli.show_balances));
    Ok(())
}
