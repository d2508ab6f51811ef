//! Asynchronous processing strategy
//!
//! Implementation of the ProcessingStrategy trait that reads the ledger
//! through tokio's async file I/O in batches.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── ReadConfig (batch_size)
//!     ├── current-thread tokio runtime
//!     ├── AsyncReader (batch ledger reading)
//!     └── LedgerProcessor (same processor as the sync strategy)
//! ```
//!
//! # Ordering
//!
//! Reading is asynchronous but processing is not concurrent: each batch is
//! applied line by line, in input order, before the next batch is read.
//! Find-or-create and the loan lookups depend on every earlier command.

use crate::core::LedgerProcessor;
use crate::io::async_reader::AsyncReader;
use crate::io::ledger_format::balance_writer;
use crate::io::sync_reader::open_error;
use crate::strategy::{apply_command, ProcessingStrategy};
use crate::types::LedgerError;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Configuration for batched reading
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadConfig {
    /// Number of ledger lines read ahead per batch
    pub batch_size: usize,
}

impl ReadConfig {
    pub const DEFAULT_BATCH_SIZE: usize = 1000;

    /// Create a ReadConfig, falling back to the default for a zero batch size
    pub fn new(batch_size: usize) -> Self {
        let batch_size = if batch_size == 0 {
            warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                Self::DEFAULT_BATCH_SIZE
            );
            Self::DEFAULT_BATCH_SIZE
        } else {
            batch_size
        };

        Self { batch_size }
    }
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            batch_size: Self::DEFAULT_BATCH_SIZE,
        }
    }
}

/// Asynchronous processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: ReadConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: ReadConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Process the ledger and write BALANCE lines to output
    ///
    /// 1. Builds a current-thread tokio runtime
    /// 2. Opens the ledger with tokio::fs (fails before any output is written)
    /// 3. Reads batches with AsyncReader and applies each line in order
    /// 4. Writes each resolved BALANCE line as soon as it is computed
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), LedgerError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| LedgerError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        runtime.block_on(async {
            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| open_error(input_path, e))?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            let mut processor = LedgerProcessor::new();
            let mut writer = balance_writer(output);

            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                for parsed in batch {
                    apply_command(&mut processor, parsed, &mut writer)?;
                }
            }

            writer.flush()?;
            Ok::<(), LedgerError>(())
        })
    }
}
