//! Asynchronous ledger reader with batch interface
//!
//! Reads ledger commands from any `futures::io::AsyncRead` source in batches.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming line splitting, configured like the sync reader
//! - the ledger_format module for token conversion
//!
//! ```text
//! AsyncRead → csv-async → AsyncReader → Batches of ledger commands
//!                              ↓
//!                      ledger_format module
//! ```
//!
//! Batches preserve input order. Failed lines stay in the batch as `Err`
//! entries, so callers can report them at the point they occur.

use crate::io::ledger_format::{convert_ledger_tokens, DELIMITER};
use crate::types::{LedgerCommand, LedgerError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous ledger reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncReader<R>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async source
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv_async::Trim::All)
            .create_reader(reader);

        Self { csv_reader }
    }

    /// Read up to `batch_size` ledger lines
    ///
    /// # Returns
    ///
    /// One result per line, in input order. Returns an empty vector once the
    /// end of input is reached. A read failure ends the batch as its last entry.
    pub async fn read_batch(
        &mut self,
        batch_size: usize,
    ) -> Vec<Result<LedgerCommand, LedgerError>> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.records();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(record)) => {
                    let line = record.position().map_or(0, |pos| pos.line());
                    batch.push(convert_ledger_tokens(record.iter()).map_err(|e| e.at_line(line)));
                }
                Some(Err(e)) => {
                    let error = LedgerError::from(e);
                    let fatal = error.is_fatal();
                    batch.push(Err(error));
                    if fatal {
                        break;
                    }
                }
                None => break,
            }
        }

        batch
    }
}
