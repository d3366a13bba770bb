//! # Shell Diner Terminal App
//!
//! Wires diner-core to the terminal.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       diner-cli Structure                               │
//! │                                                                         │
//! │  main.rs ─── parses args, loads config, initializes tracing            │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  session.rs ─── banner, category loops, bill                           │
//! │     │                 │                  │                              │
//! │     ▼                 ▼                  ▼                              │
//! │  prompt.rs      diner-core          receipt.rs                         │
//! │  (dialoguer)    (Order, Bill)       (text / JSON)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod receipt;
pub mod session;

pub use config::{DinerConfig, ReceiptFormat};
pub use error::{CliError, CliResult};
pub use prompt::{Prompt, TerminalPrompt};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Filter Priority
/// 1. `--log-level` argument
/// 2. `RUST_LOG`
/// 3. `logging.filter` from config (`DINER_LOG` overrides it)
///
/// Logs go to stderr so they never mix with the bill on stdout.
pub fn init_tracing(cli_filter: Option<&str>, config: &DinerConfig) {
    let filter = match cli_filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Writes a fatal error as a single line.
///
/// Tracing may not be initialized yet when this runs, so it does not log.
pub fn report_error<W: std::io::Write>(out: &mut W, err: &CliError) {
    let _ = writeln!(out, "Error: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_writes_one_line() {
        let mut out = Vec::<u8>::new();
        report_error(&mut out, &CliError::InvalidConfig("prompt.pointer must not be empty".into()));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Error: Invalid configuration: prompt.pointer must not be empty\n"
        );
        assert_eq!(text.lines().count(), 1);
    }
}
