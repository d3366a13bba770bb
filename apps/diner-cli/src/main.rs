//! # diner
//!
//! Order food from your shell.
//!
//! ## Usage
//! ```bash
//! # Interactive order, text bill
//! diner
//!
//! # JSON bill, verbose logs on stderr
//! diner --json --log-level debug
//!
//! # Custom config file
//! diner --config ./diner.toml
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use diner_cli::{
    init_tracing, report_error, session, CliResult, DinerConfig, ReceiptFormat, TerminalPrompt,
};
use diner_core::Catalog;
use tracing::info;

#[derive(Parser, Debug)]
#[clap(name = "diner", author, version, about = "Order food from your shell")]
struct Cli {
    #[clap(long, short, help = "Config file path (default: platform config directory)")]
    config: Option<PathBuf>,

    #[clap(long, help = "Print the bill as JSON")]
    json: bool,

    #[clap(long, short, help = "Log filter, e.g. debug or diner_cli=trace")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&mut io::stderr(), &e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let cli_config_path = cli.config.clone();
    let mut config = DinerConfig::load(cli.config)?;
    if cli.json {
        config.receipt.format = ReceiptFormat::Json;
    }

    init_tracing(cli.log_level.as_deref(), &config);
    info!(
        config_path = ?cli_config_path,
        format = %config.receipt.format,
        pointer = %config.prompt.pointer,
        "Configuration loaded"
    );

    let catalog = Catalog::builtin()?;
    let mut prompt = TerminalPrompt::new(&config.prompt.pointer);
    let mut stdout = io::stdout().lock();

    session::run(&catalog, &mut prompt, &mut stdout, &config)?;
    Ok(())
}
