//! Processing strategy module for ledger processing
//!
//! This module defines the Strategy pattern for complete ledger processing
//! pipelines, encompassing reading, command processing and BALANCE output.
//! Different implementations (synchronous, asynchronous) can be selected at
//! runtime; all of them apply commands strictly in input order.

use crate::cli::StrategyType;
use crate::core::LedgerProcessor;
use crate::io::ledger_format::write_balance_report;
use crate::types::{LedgerCommand, LedgerError};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, ReadConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete ledger pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Process the ledger at `input_path`, writing BALANCE lines to `output`
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the whole ledger was read (individual commands may have
    ///   been skipped)
    /// * `Err(LedgerError)` if the ledger could not be opened or read, or
    ///   output could not be written
    ///
    /// Individual command failures are logged and do not cause this method to
    /// return an error. Processing continues with the next line.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LedgerError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` is only used by the async strategy.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<ReadConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}

/// Apply one reader result to the processor, writing any BALANCE line
///
/// Shared by every strategy so that skip-and-report behaviour is identical.
/// Input read failures and output failures are returned; command failures
/// are logged.
pub(crate) fn apply_command<W: Write>(
    processor: &mut LedgerProcessor,
    parsed: Result<LedgerCommand, LedgerError>,
    writer: &mut csv::Writer<W>,
) -> Result<(), LedgerError> {
    let command = match parsed {
        Ok(command) => command,
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            warn!("Couldn't parse ledger input: {}", e);
            return Ok(());
        }
    };

    let command_type = command.command_type();
    match processor.process(command) {
        Ok(Some(report)) => {
            debug!(%command_type, bank = %report.bank_name, borrower = %report.borrower_name, "balance resolved");
            write_balance_report(writer, &report)
        }
        Ok(None) => {
            debug!(%command_type, "command applied");
            Ok(())
        }
        Err(e) => {
            warn!(%command_type, "Couldn't process ledger command: {}", e);
            Ok(())
        }
    }
}
