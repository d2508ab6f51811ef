//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `entity`: Bank, Borrower, Loan, Payment and their identifiers
//! - `command`: Parsed ledger commands and balance results
//! - `error`: Error types for the loan ledger

pub mod command;
pub mod entity;
pub mod error;

pub use command::{BalanceReport, CommandType, LedgerCommand, LoanStatus};
pub use entity::{
    Amount, Bank, BankId, Borrower, BorrowerId, Loan, LoanId, Payment, PaymentId, PaymentMode,
    PaymentType,
};
pub use error::LedgerError;
