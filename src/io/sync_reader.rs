//! Synchronous ledger reader with iterator interface
//!
//! Provides a streaming iterator over ledger commands from a file.
//! Delegates format concerns to the ledger_format module.
//!
//! # Design
//!
//! The SyncReader uses csv::Reader configured for the ledger grammar (see
//! `ledger_format::ledger_reader_builder`) to split lines into tokens one
//! record at a time, without loading the file into memory.
//!
//! ```no_run
//! use loan_ledger::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("ledger.txt")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Processing command: {:?}", command),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Open failures (file not found, permission) are returned from `new()`
//! - A read failure after opening is yielded as a fatal `IoError`
//! - Individual line errors are yielded as Err variants carrying the line number

use crate::io::ledger_format::{convert_ledger_tokens, ledger_reader_builder};
use crate::types::{LedgerCommand, LedgerError};
use csv::StringRecord;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Synchronous ledger reader
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    record: StringRecord,
}

impl SyncReader {
    /// Open a ledger file for streaming iteration
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if nothing exists at `path`
    /// * `IoError` if the file exists but cannot be opened
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| open_error(path, e))?;

        let reader = ledger_reader_builder()
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            record: StringRecord::new(),
        })
    }
}

/// Map a failure to open the ledger file to the fatal input error
pub(crate) fn open_error(path: &Path, error: std::io::Error) -> LedgerError {
    if error.kind() == ErrorKind::NotFound {
        LedgerError::FileNotFound {
            path: path.display().to_string(),
        }
    } else {
        LedgerError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), error),
        }
    }
}

impl Iterator for SyncReader {
    type Item = Result<LedgerCommand, LedgerError>;

    /// Get the next ledger command
    ///
    /// # Returns
    ///
    /// * `Some(Ok(LedgerCommand))` - Successfully parsed line
    /// * `Some(Err(LedgerError))` - Split or conversion error, tagged with its
    ///   line, or a fatal read failure
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.record.position().map_or(0, |pos| pos.line());
                Some(convert_ledger_tokens(self.record.iter()).map_err(|e| e.at_line(line)))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
