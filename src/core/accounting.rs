//! Loan accounting engine
//!
//! Stateless functions turning a loan's principal, term and rate into the
//! figures the ledger reports.
//!
//! # Rules
//!
//! - Total payable: `ceil(P + P * T * R / 100)`, simple interest over the
//!   whole term.
//! - Monthly installment (EMI): `ceil(total / (T * 12))`. Fixed for the life of
//!   the loan; lump sums shorten the tail, they never reduce the installment.
//! - Status as of month `m`: every installment due through `m` is assumed
//!   paid, lump sums attributed to months `<= m` are added, and the sum is
//!   capped at the total payable. Overpayment is absorbed silently.
//!
//! Rounding happens only at the two divisions (total payable, installment)
//! and when counting remaining installments.

use crate::types::{Amount, LedgerError, Loan, LoanStatus, Payment, PaymentType};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const MONTHS_PER_YEAR: u64 = 12;

/// Total amount the borrower owes over the full term, rounded up
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if the interest or the rounded total does not
/// fit in the amount range.
pub fn total_payable(loan: &Loan) -> Result<Amount, LedgerError> {
    let overflow = || LedgerError::arithmetic_overflow("total payable", loan.id);

    let principal = Decimal::from(loan.principal);
    let interest = principal
        .checked_mul(Decimal::from(loan.term))
        .and_then(|value| value.checked_mul(loan.rate))
        .and_then(|value| value.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(overflow)?;

    principal
        .checked_add(interest)
        .and_then(|total| total.ceil().to_u64())
        .ok_or_else(overflow)
}

/// Number of monthly installments over the loan term
pub fn term_months(loan: &Loan) -> Result<u64, LedgerError> {
    match u64::from(loan.term) * MONTHS_PER_YEAR {
        0 => Err(LedgerError::invalid_loan_terms("term must be at least one year")),
        months => Ok(months),
    }
}

/// Fixed monthly installment, rounded up
pub fn monthly_installment(loan: &Loan) -> Result<Amount, LedgerError> {
    let total = total_payable(loan)?;
    Ok(total.div_ceil(term_months(loan)?))
}

/// Installments needed to clear `remaining`, rounded up
pub fn emis_left(remaining: Amount, installment: Amount) -> u64 {
    if installment == 0 {
        return 0;
    }
    remaining.div_ceil(installment)
}

/// Balance snapshot of `loan` as of `as_of_month`
///
/// Only lump-sum payments attributed to a month `<= as_of_month` count;
/// any other payment in `payments` is ignored. Installments are never read
/// from records, they are assumed paid for every month through `as_of_month`.
pub fn status<'a, I>(loan: &Loan, payments: I, as_of_month: u32) -> Result<LoanStatus, LedgerError>
where
    I: IntoIterator<Item = &'a Payment>,
{
    let total = total_payable(loan)?;
    let installment = monthly_installment(loan)?;

    let lump_sum_paid = payments
        .into_iter()
        .filter(|payment| payment.payment_type == PaymentType::LumpSum)
        .filter(|payment| payment.month <= as_of_month)
        .fold(0, |paid: Amount, payment| paid.saturating_add(payment.amount));

    // Capped at `total` below, so saturating cannot change the result
    let assumed_emi_paid = installment.saturating_mul(u64::from(as_of_month));
    let amount_paid = lump_sum_paid.saturating_add(assumed_emi_paid).min(total);

    Ok(LoanStatus {
        loan_id: loan.id,
        amount_paid,
        emis_left: emis_left(total - amount_paid, installment),
    })
}
