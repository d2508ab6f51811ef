//! Ledger command and result types
//!
//! `LedgerCommand` is one parsed ledger line. `LoanStatus` is what the
//! accounting engine computes, and `BalanceReport` is the output row
//! rendered for a resolved BALANCE command.

use super::entity::{Amount, LoanId};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Command kinds accepted by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Loan,
    Payment,
    Balance,
}

impl CommandType {
    /// Number of space-separated tokens a line of this kind carries,
    /// including the command keyword itself
    pub fn token_count(self) -> usize {
        match self {
            CommandType::Loan => 6,
            CommandType::Payment => 5,
            CommandType::Balance => 4,
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            CommandType::Loan => "LOAN",
            CommandType::Payment => "PAYMENT",
            CommandType::Balance => "BALANCE",
        };
        f.write_str(keyword)
    }
}

/// A single parsed ledger line
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    /// Originate a loan, creating the bank and borrower on first reference
    Loan {
        bank_name: String,
        borrower_name: String,
        principal: Amount,
        term: u32,
        rate: Decimal,
    },

    /// Record a lump-sum payment against an existing loan
    Payment {
        bank_name: String,
        borrower_name: String,
        amount: Amount,
        month: u32,
    },

    /// Query the loan status as of a month
    Balance {
        bank_name: String,
        borrower_name: String,
        month: u32,
    },
}

impl LedgerCommand {
    pub fn command_type(&self) -> CommandType {
        match self {
            LedgerCommand::Loan { .. } => CommandType::Loan,
            LedgerCommand::Payment { .. } => CommandType::Payment,
            LedgerCommand::Balance { .. } => CommandType::Balance,
        }
    }
}

/// Balance snapshot of a loan as of a given month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanStatus {
    pub loan_id: LoanId,

    /// Installments assumed paid plus lump sums, capped at the total payable
    pub amount_paid: Amount,

    pub emis_left: u64,
}

/// Output row for a resolved BALANCE command
///
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub bank_name: String,
    pub borrower_name: String,
    pub amount_paid: Amount,
    pub emis_left: u64,
}
