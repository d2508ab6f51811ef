//! I/O module
//!
//! Handles ledger parsing and output.
//!
//! # Components
//!
//! - `ledger_format` - Ledger line format (token conversion, BALANCE output serialization)
//! - `sync_reader` - Synchronous ledger reader with iterator interface
//! - `async_reader` - Asynchronous ledger reader with batch reading interface

pub mod async_reader;
pub mod ledger_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use ledger_format::{balance_writer, convert_ledger_tokens, write_balance_report};
pub use sync_reader::SyncReader;
