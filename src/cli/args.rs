use crate::strategy::ReadConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Process a loan ledger and report loan balances
#[derive(Parser, Debug)]
#[command(name = "loan-ledger")]
#[command(about = "Process a loan ledger and report loan balances", long_about = None)]
pub struct CliArgs {
    /// Ledger file path; prompted for on stdin when omitted
    #[arg(value_name = "INPUT", help = "Path to the ledger file")]
    pub input_file: Option<PathBuf>,

    /// Processing strategy to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Processing strategy: 'sync' for synchronous or 'async' for asynchronous reading"
    )]
    pub strategy: StrategyType,

    /// Number of ledger lines read per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of ledger lines read per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Default log filter, overridden by RUST_LOG
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Diagnostic log level written to stderr (overridden by RUST_LOG)"
    )]
    pub log_level: String,
}

/// Available processing strategies
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a ReadConfig from CLI arguments, falling back to defaults
    pub fn to_read_config(&self) -> ReadConfig {
        match self.batch_size {
            Some(batch_size) => ReadConfig::new(batch_size),
            None => ReadConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_strategy(&["program", "ledger.txt"], StrategyType::Sync)]
    #[case::explicit_sync(&["program", "--strategy", "sync", "ledger.txt"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "--strategy", "async", "ledger.txt"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.strategy, expected);
    }

    #[test]
    fn test_input_is_optional() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        assert!(parsed.input_file.is_none());
        assert_eq!(parsed.log_level, "warn");
    }

    #[test]
    fn test_input_path_parsed() {
        let parsed = CliArgs::try_parse_from(["program", "ledger.txt"]).unwrap();
        assert_eq!(parsed.input_file, Some(PathBuf::from("ledger.txt")));
    }

    #[rstest]
    #[case::defaults(&["program", "ledger.txt"], 1000)]
    #[case::custom(&["program", "--batch-size", "50", "ledger.txt"], 50)]
    #[case::zero_falls_back(&["program", "--batch-size", "0", "ledger.txt"], 1000)]
    fn test_read_config_conversion(#[case] args: &[&str], #[case] expected: usize) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_read_config().batch_size, expected);
    }

    #[test]
    fn test_log_level_option() {
        let parsed =
            CliArgs::try_parse_from(["program", "--log-level", "debug", "ledger.txt"]).unwrap();
        assert_eq!(parsed.log_level, "debug");
    }

    #[rstest]
    #[case::invalid_strategy(&["program", "--strategy", "parallel", "ledger.txt"])]
    #[case::invalid_batch_size(&["program", "--batch-size", "-3", "ledger.txt"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
