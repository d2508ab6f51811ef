//! Synchronous processing strategy
//!
//! Single-threaded implementation of the ProcessingStrategy trait. It
//! orchestrates ledger processing by coordinating between the SyncReader (for
//! input) and the LedgerProcessor (for business logic).
//!
//! # Memory Efficiency
//!
//! Lines are read one at a time; memory grows with the number of stored
//! entities, not with the size of the ledger file.

use crate::core::LedgerProcessor;
use crate::io::ledger_format::balance_writer;
use crate::io::sync_reader::SyncReader;
use crate::strategy::{apply_command, ProcessingStrategy};
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use loan_ledger::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("ledger.txt"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Process the ledger and write BALANCE lines to output
    ///
    /// 1. Opens the ledger with a SyncReader (fails before any output is written)
    /// 2. Feeds each line to a fresh LedgerProcessor in input order
    /// 3. Writes each resolved BALANCE line as soon as it is computed
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LedgerError> {
        let reader = SyncReader::new(input_path)?;

        let mut processor = LedgerProcessor::new();
        let mut writer = balance_writer(output);

        for parsed in reader {
            apply_command(&mut processor, parsed, &mut writer)?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary ledger file for testing
    fn create_temp_ledger(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn run(content: &str) -> String {
        let file = create_temp_ledger(content);
        let mut output = Vec::new();
        SyncProcessingStrategy
            .process(file.path(), &mut output)
            .expect("Processing failed");
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_sync_strategy_reports_balances_in_order() {
        let output = run("LOAN IDIDI Dale 10000 5 4\n\
                          LOAN MBI Harry 2000 2 2\n\
                          BALANCE IDIDI Dale 5\n\
                          BALANCE IDIDI Dale 40\n\
                          BALANCE MBI Harry 12\n\
                          BALANCE MBI Harry 0\n");

        assert_eq!(
            output,
            "IDIDI Dale 1000 55\n\
             IDIDI Dale 8000 20\n\
             MBI Harry 1044 12\n\
             MBI Harry 0 24\n"
        );
    }

    #[test]
    fn test_sync_strategy_applies_lump_sums() {
        let output = run("LOAN IDIDI Dale 5000 1 6\n\
                          LOAN MBI Harry 10000 3 7\n\
                          LOAN UON Shelly 15000 2 9\n\
                          PAYMENT IDIDI Dale 1000 5\n\
                          PAYMENT MBI Harry 5000 10\n\
                          PAYMENT UON Shelly 7000 12\n\
                          BALANCE IDIDI Dale 3\n\
                          BALANCE IDIDI Dale 6\n\
                          BALANCE UON Shelly 12\n\
                          BALANCE MBI Harry 12\n");

        assert_eq!(
            output,
            "IDIDI Dale 1326 9\n\
             IDIDI Dale 3652 4\n\
             UON Shelly 15856 3\n\
             MBI Harry 9044 10\n"
        );
    }

    #[test]
    fn test_sync_strategy_skips_unresolved_balance() {
        let output = run("LOAN IDIDI Dale 1000 2 10\n\
                          BALANCE MBI Dale 5\n\
                          PAYMENT IDIDI Harry 100 2\n\
                          BALANCE IDIDI Dale 1\n");

        assert_eq!(output, "IDIDI Dale 50 23\n");
    }

    #[test]
    fn test_sync_strategy_continues_on_malformed_lines() {
        let output = run("LOAN IDIDI Dale 1000 2 10\n\
                          LOAN IDIDI\n\
                          REFUND IDIDI Dale 10\n\
                          BALANCE IDIDI Dale soon\n\
                          BALANCE IDIDI Dale 2\n");

        assert_eq!(output, "IDIDI Dale 100 22\n");
    }

    #[test]
    fn test_sync_strategy_handles_missing_file() {
        let mut output = Vec::new();

        let result = SyncProcessingStrategy.process(Path::new("nonexistent.txt"), &mut output);

        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_sync_strategy_aborts_on_unreadable_ledger() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut output = Vec::new();

        let result = SyncProcessingStrategy.process(dir.path(), &mut output);

        assert!(matches!(result, Err(LedgerError::IoError { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_sync_strategy_no_balance_no_output() {
        assert_eq!(run("LOAN IDIDI Dale 1000 2 10\n"), "");
    }

    #[test]
    fn test_sync_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SyncProcessingStrategy>();
    }
}
