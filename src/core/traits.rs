//! Store abstraction consumed by the ledger processor
//!
//! The processor only needs "create or find entity by key" operations. Any
//! backing store offering them can be plugged into `LedgerProcessor`.

use crate::types::{Bank, BankId, Borrower, BorrowerId, Loan, LoanId, Payment, PaymentType};

/// Entity store operations used by the ledger processor
///
/// Lookups are first-match: the store does not enforce uniqueness of natural
/// keys, it only guarantees that `get_or_create_*` never inserts a duplicate.
pub trait LedgerStore {
    /// Find the bank with this name, creating it if absent
    fn get_or_create_bank(&mut self, name: &str) -> Bank;

    /// Find the borrower with this name, creating it if absent
    fn get_or_create_borrower(&mut self, name: &str) -> Borrower;

    fn find_bank_by_name(&self, name: &str) -> Option<&Bank>;

    fn find_borrower_by_name(&self, name: &str) -> Option<&Borrower>;

    /// Persist a new loan
    fn add_loan(&mut self, loan: Loan);

    /// First loan between this bank and borrower
    fn find_loan(&self, bank_id: BankId, borrower_id: BorrowerId) -> Option<&Loan>;

    /// Persist a new payment
    fn add_payment(&mut self, payment: Payment);

    /// Payments recorded against a loan, optionally restricted to one type
    fn payments_for(&self, loan_id: LoanId, payment_type: Option<PaymentType>) -> Vec<&Payment>;
}
