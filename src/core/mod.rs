//! Core business logic module
//!
//! This module contains the ledger processing components:
//! - `traits` - The `LedgerStore` seam the processor depends on
//! - `entity_store` - In-memory repositories for banks, borrowers, loans and payments
//! - `accounting` - Total payable, installment and balance computations
//! - `processor` - Ledger command processing orchestration

pub mod accounting;
pub mod entity_store;
pub mod processor;
pub mod traits;

pub use entity_store::InMemoryStore;
pub use processor::LedgerProcessor;
pub use traits::LedgerStore;
