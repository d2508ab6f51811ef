//! Ledger command processor
//!
//! This module provides the LedgerProcessor that applies ledger commands to
//! an entity store, delegating balance computation to the accounting engine.
//!
//! | Command | Effect                                                  | Output        |
//! |---------|---------------------------------------------------------|---------------|
//! | LOAN    | find-or-create bank and borrower, persist a new loan    | none          |
//! | PAYMENT | resolve bank, borrower and loan; persist a lump sum     | none          |
//! | BALANCE | resolve bank, borrower and loan; compute status         | BalanceReport |
//!
//! The processor never logs. Every failure is returned to the caller, which
//! decides how to report it and whether to continue.

use crate::core::accounting;
use crate::core::entity_store::InMemoryStore;
use crate::core::traits::LedgerStore;
use crate::types::{
    Amount, BalanceReport, Bank, Borrower, LedgerCommand, LedgerError, Loan, LoanId, LoanStatus,
    Payment, PaymentId, PaymentType,
};
use rust_decimal::Decimal;

/// Ledger command processor
///
/// Owns the entity store it mutates; commands are applied strictly one at a
/// time, in the order they are submitted.
pub struct LedgerProcessor<S = InMemoryStore> {
    store: S,
}

impl LedgerProcessor<InMemoryStore> {
    /// Create a processor over an empty in-memory store
    pub fn new() -> Self {
        Self::with_store(InMemoryStore::new())
    }
}

impl Default for LedgerProcessor<InMemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LedgerStore> LedgerProcessor<S> {
    /// Create a processor over an existing store
    pub fn with_store(store: S) -> Self {
        LedgerProcessor { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a single ledger command
    ///
    /// # Returns
    ///
    /// * `Ok(Some(report))` for a resolved BALANCE command
    /// * `Ok(None)` for LOAN and PAYMENT
    /// * `Err(LedgerError)` if the command could not be applied. The store is
    ///   left unchanged in that case.
    pub fn process(
        &mut self,
        command: LedgerCommand,
    ) -> Result<Option<BalanceReport>, LedgerError> {
        match command {
            LedgerCommand::Loan {
                bank_name,
                borrower_name,
                principal,
                term,
                rate,
            } => {
                self.add_loan(&bank_name, &borrower_name, principal, term, rate)?;
                Ok(None)
            }
            LedgerCommand::Payment {
                bank_name,
                borrower_name,
                amount,
                month,
            } => {
                self.record_lump_sum(&bank_name, &borrower_name, amount, month)?;
                Ok(None)
            }
            LedgerCommand::Balance {
                bank_name,
                borrower_name,
                month,
            } => {
                let status = self.loan_status(&bank_name, &borrower_name, month)?;
                Ok(Some(BalanceReport {
                    bank_name,
                    borrower_name,
                    amount_paid: status.amount_paid,
                    emis_left: status.emis_left,
                }))
            }
        }
    }

    /// Originate a loan, creating the bank and borrower on first reference
    ///
    /// # Errors
    ///
    /// Returns `InvalidLoanTerms` unless principal > 0, term > 0 and rate >= 0.
    pub fn add_loan(
        &mut self,
        bank_name: &str,
        borrower_name: &str,
        principal: Amount,
        term: u32,
        rate: Decimal,
    ) -> Result<LoanId, LedgerError> {
        validate_loan_terms(principal, term, rate)?;

        let bank = self.store.get_or_create_bank(bank_name);
        let borrower = self.store.get_or_create_borrower(borrower_name);

        let loan = Loan::new(bank.id, borrower.id, principal, term, rate);
        let loan_id = loan.id;
        self.store.add_loan(loan);

        Ok(loan_id)
    }

    /// Record a lump-sum payment against an existing loan
    pub fn record_lump_sum(
        &mut self,
        bank_name: &str,
        borrower_name: &str,
        amount: Amount,
        month: u32,
    ) -> Result<PaymentId, LedgerError> {
        let loan_id = self.resolve_loan(bank_name, borrower_name)?.id;

        let payment = Payment::lump_sum(loan_id, amount, month);
        let payment_id = payment.id;
        self.store.add_payment(payment);

        Ok(payment_id)
    }

    /// Loan status as of `month`
    pub fn loan_status(
        &self,
        bank_name: &str,
        borrower_name: &str,
        month: u32,
    ) -> Result<LoanStatus, LedgerError> {
        let loan = self.resolve_loan(bank_name, borrower_name)?;
        let lump_sums = self.store.payments_for(loan.id, Some(PaymentType::LumpSum));

        accounting::status(loan, lump_sums, month)
    }

    pub fn bank_by_name(&self, name: &str) -> Option<&Bank> {
        self.store.find_bank_by_name(name)
    }

    pub fn borrower_by_name(&self, name: &str) -> Option<&Borrower> {
        self.store.find_borrower_by_name(name)
    }

    fn resolve_loan(&self, bank_name: &str, borrower_name: &str) -> Result<&Loan, LedgerError> {
        let bank = self
            .store
            .find_bank_by_name(bank_name)
            .ok_or_else(|| LedgerError::bank_not_found(bank_name))?;
        let borrower = self
            .store
            .find_borrower_by_name(borrower_name)
            .ok_or_else(|| LedgerError::borrower_not_found(borrower_name))?;

        self.store
            .find_loan(bank.id, borrower.id)
            .ok_or_else(|| LedgerError::loan_not_found(bank_name, borrower_name))
    }
}

fn validate_loan_terms(principal: Amount, term: u32, rate: Decimal) -> Result<(), LedgerError> {
    if principal == 0 {
        return Err(LedgerError::invalid_loan_terms("principal must be positive"));
    }
    if term == 0 {
        return Err(LedgerError::invalid_loan_terms("term must be at least one year"));
    }
    if rate < Decimal::ZERO {
        return Err(LedgerError::invalid_loan_terms("rate must not be negative"));
    }
    Ok(())
}
