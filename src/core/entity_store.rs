//! In-memory entity store
//!
//! This module provides one repository per entity kind (banks, borrowers,
//! loans, payments) and `InMemoryStore`, which owns all four and implements
//! `LedgerStore`.
//!
//! # Lookup Cost
//!
//! Every repository is an append-only `Vec` searched linearly; lookups are
//! O(n) in the number of records and return the first match. Nothing here
//! enforces uniqueness of names or of (bank, borrower) pairs. The only
//! duplicate protection is `get_or_create`, which performs the check and the
//! insert as one operation on `&mut self`.

use crate::core::traits::LedgerStore;
use crate::types::{Bank, BankId, Borrower, BorrowerId, Loan, LoanId, Payment, PaymentType};

/// Banks, keyed by name
#[derive(Debug, Default)]
pub struct BankRepository {
    banks: Vec<Bank>,
}

impl BankRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, bank: Bank) {
        self.banks.push(bank);
    }

    pub fn find_by_id(&self, id: BankId) -> Option<&Bank> {
        self.banks.iter().find(|bank| bank.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Bank> {
        self.banks.iter().find(|bank| bank.name == name)
    }

    /// Return the bank with this name, inserting a new one if none exists
    pub fn get_or_create(&mut self, name: &str) -> &Bank {
        let index = match self.banks.iter().position(|bank| bank.name == name) {
            Some(index) => index,
            None => {
                self.banks.push(Bank::new(name));
                self.banks.len() - 1
            }
        };
        &self.banks[index]
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}

/// Borrowers, keyed by name
#[derive(Debug, Default)]
pub struct BorrowerRepository {
    borrowers: Vec<Borrower>,
}

impl BorrowerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, borrower: Borrower) {
        self.borrowers.push(borrower);
    }

    pub fn find_by_id(&self, id: BorrowerId) -> Option<&Borrower> {
        self.borrowers.iter().find(|borrower| borrower.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Borrower> {
        self.borrowers.iter().find(|borrower| borrower.name == name)
    }

    /// Return the borrower with this name, inserting a new one if none exists
    pub fn get_or_create(&mut self, name: &str) -> &Borrower {
        let index = match self
            .borrowers
            .iter()
            .position(|borrower| borrower.name == name)
        {
            Some(index) => index,
            None => {
                self.borrowers.push(Borrower::new(name));
                self.borrowers.len() - 1
            }
        };
        &self.borrowers[index]
    }

    pub fn len(&self) -> usize {
        self.borrowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.borrowers.is_empty()
    }
}

/// Loans, keyed by (bank, borrower)
///
/// A second loan for the same pair is stored but never returned by
/// `find_by_pair`, which always yields the first one.
#[derive(Debug, Default)]
pub struct LoanRepository {
    loans: Vec<Loan>,
}

impl LoanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, loan: Loan) {
        self.loans.push(loan);
    }

    pub fn find_by_id(&self, id: LoanId) -> Option<&Loan> {
        self.loans.iter().find(|loan| loan.id == id)
    }

    pub fn find_by_pair(&self, bank_id: BankId, borrower_id: BorrowerId) -> Option<&Loan> {
        self.loans
            .iter()
            .find(|loan| loan.bank_id == bank_id && loan.borrower_id == borrower_id)
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}

/// Payments, related to their loan through `loan_id`
#[derive(Debug, Default)]
pub struct PaymentRepository {
    payments: Vec<Payment>,
}

impl PaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    /// Payments for a loan in insertion order, optionally filtered by type
    pub fn find_by_loan(&self, loan_id: LoanId, payment_type: Option<PaymentType>) -> Vec<&Payment> {
        self.payments
            .iter()
            .filter(|payment| payment.loan_id == loan_id)
            .filter(|payment| payment_type.map_or(true, |kind| payment.payment_type == kind))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

/// Owns every entity collection for the lifetime of a ledger run
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub banks: BankRepository,
    pub borrowers: BorrowerRepository,
    pub loans: LoanRepository,
    pub payments: PaymentRepository,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for InMemoryStore {
    fn get_or_create_bank(&mut self, name: &str) -> Bank {
        self.banks.get_or_create(name).clone()
    }

    fn get_or_create_borrower(&mut self, name: &str) -> Borrower {
        self.borrowers.get_or_create(name).clone()
    }

    fn find_bank_by_name(&self, name: &str) -> Option<&Bank> {
        self.banks.find_by_name(name)
    }

    fn find_borrower_by_name(&self, name: &str) -> Option<&Borrower> {
        self.borrowers.find_by_name(name)
    }

    fn add_loan(&mut self, loan: Loan) {
        self.loans.add(loan);
    }

    fn find_loan(&self, bank_id: BankId, borrower_id: BorrowerId) -> Option<&Loan> {
        self.loans.find_by_pair(bank_id, borrower_id)
    }

    fn add_payment(&mut self, payment: Payment) {
        self.payments.add(payment);
    }

    fn payments_for(&self, loan_id: LoanId, payment_type: Option<PaymentType>) -> Vec<&Payment> {
        self.payments.find_by_loan(loan_id, payment_type)
    }
}
