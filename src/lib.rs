//! Loan Ledger Library
//! # Overview
//!
//! This library processes a sequential ledger of loan commands against an
//! in-memory store of banks, borrowers, loans and payments, and reports loan
//! balances (amount paid, installments left) as of a given month.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Bank, Borrower, Loan, Payment, commands, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::entity_store`] - Linear-scan repositories with get-or-create
//!   - [`core::accounting`] - Total payable, installment and balance rules
//!   - [`core::processor`] - Ledger command processing
//! - [`io`] - Ledger line format and readers
//! - [`strategy`] - Complete read/process/write pipelines
//!
//! # Commands
//!
//! - **LOAN**: Originate a loan, creating bank and borrower on first reference
//! - **PAYMENT**: Record a lump sum against an existing loan
//! - **BALANCE**: Report amount paid and installments left as of a month
//!
//! # Accounting
//!
//! - `total = ceil(P + P * T * R / 100)`
//! - `emi = ceil(total / (T * 12))`
//! - As of month `m`: `paid = min(emi * m + lump sums up to m, total)`,
//!   `emis_left = ceil((total - paid) / emi)`

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{InMemoryStore, LedgerProcessor, LedgerStore};
pub use io::write_balance_report;
pub use types::{
    BalanceReport, Bank, Borrower, LedgerCommand, LedgerError, Loan, LoanStatus, Payment,
    PaymentMode, PaymentType,
};
