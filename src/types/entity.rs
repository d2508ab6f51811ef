//! Entity types for the loan ledger
//!
//! Banks, borrowers, loans and payments as held by the entity store. All
//! entities are immutable once created; identifiers are opaque values with
//! equality only (no ordering, no arithmetic).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

/// Whole currency units
pub type Amount = u64;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

opaque_id!(
    /// Bank identifier
    BankId
);
opaque_id!(
    /// Borrower identifier
    BorrowerId
);
opaque_id!(
    /// Loan identifier
    LoanId
);
opaque_id!(
    /// Payment identifier
    PaymentId
);

/// A lending bank, keyed by its unique name
#[derive(Debug, Clone, PartialEq)]
pub struct Bank {
    pub id: BankId,
    pub name: String,
}

impl Bank {
    pub fn new(name: &str) -> Self {
        Bank {
            id: BankId::new(),
            name: name.to_string(),
        }
    }
}

/// A borrower, keyed by its unique name
#[derive(Debug, Clone, PartialEq)]
pub struct Borrower {
    pub id: BorrowerId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Borrower {
    pub fn new(name: &str) -> Self {
        Borrower {
            id: BorrowerId::new(),
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// A simple-interest loan between one bank and one borrower
#[derive(Debug, Clone, PartialEq)]
pub struct Loan {
    pub id: LoanId,
    pub bank_id: BankId,
    pub borrower_id: BorrowerId,

    /// Amount lent, in whole currency units (> 0)
    pub principal: Amount,

    /// Loan term in years (> 0)
    pub term: u32,

    /// Simple interest rate, percent per annum (>= 0)
    pub rate: Decimal,

    pub created_at: DateTime<Utc>,
}

impl Loan {
    pub fn new(
        bank_id: BankId,
        borrower_id: BorrowerId,
        principal: Amount,
        term: u32,
        rate: Decimal,
    ) -> Self {
        Loan {
            id: LoanId::new(),
            bank_id,
            borrower_id,
            principal,
            term,
            rate,
            created_at: Utc::now(),
        }
    }
}

/// How a payment relates to the installment schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    /// Regular monthly installment
    Emi,
    /// Ad-hoc payment outside the schedule
    LumpSum,
}

/// Payment instrument. Informational only; never used in accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMode {
    #[default]
    Cash,
    Cheque,
    Upi,
    DebitCard,
    CreditCard,
}

/// A payment recorded against a loan
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: PaymentId,

    /// Back-reference to the owning loan
    pub loan_id: LoanId,

    pub amount: Amount,

    /// Month offset from loan start the payment is attributed to
    pub month: u32,

    pub payment_type: PaymentType,
    pub payment_mode: PaymentMode,

    /// Bank transfer reference, if one was supplied
    pub utr_number: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Create a cash lump-sum payment for the given loan
    pub fn lump_sum(loan_id: LoanId, amount: Amount, month: u32) -> Self {
        Payment {
            id: PaymentId::new(),
            loan_id,
            amount,
            month,
            payment_type: PaymentType::LumpSum,
            payment_mode: PaymentMode::Cash,
            utr_number: None,
            created_at: Utc::now(),
        }
    }
}
