//! Loan Ledger CLI
//!
//! Command-line interface for processing a loan ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- ledger.txt
//! cargo run -- --strategy async --batch-size 500 ledger.txt
//! RUST_LOG=debug cargo run -- ledger.txt
//! cargo run            # prompts for the ledger path on stdin
//! ```
//!
//! BALANCE results go to stdout, one line each. Diagnostics for skipped
//! commands go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Ledger processed (some commands may have been skipped)
//! - 1: Ledger could not be opened or read, or no path was given

use loan_ledger::cli;
use loan_ledger::strategy;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let input_path = match args.input_file.clone() {
        Some(path) => path,
        None => {
            let stdin = std::io::stdin();
            match cli::prompt_input_path(&mut stdin.lock(), &mut std::io::stderr()) {
                Some(path) => path,
                None => {
                    error!("No ledger path given");
                    process::exit(1);
                }
            }
        }
    };

    let strategy = {
        let config = matches!(args.strategy, cli::StrategyType::Async).then(|| args.to_read_config());
        strategy::create_strategy(args.strategy, config)
    };

    let mut output = std::io::stdout().lock();
    if let Err(e) = strategy.process(&input_path, &mut output) {
        error!("Ledger input couldn't be processed: {}", e);
        process::exit(1);
    }
}
