//! Error types for the loan ledger
//!
//! This module defines all error types that can occur while reading and
//! processing a ledger.
//!
//! # Error Categories
//!
//! - **Input errors**: ledger file missing or unreadable. Fatal, the run aborts.
//! - **Command errors**: malformed line, unknown command, bad field value.
//!   The command is skipped and processing continues.
//! - **Resolution errors**: bank, borrower or loan absent. The command is
//!   skipped; a BALANCE produces no output line.
//! - **Accounting errors**: arithmetic overflow while computing a balance.

use thiserror::Error;

/// Main error type for the loan ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Ledger file not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the ledger or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Low-level record splitting failed
    #[error("Ledger parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// First token is not a known command keyword
    #[error("Invalid command '{command}' in ledger input")]
    InvalidCommand {
        /// The unrecognised keyword
        command: String,
    },

    /// Command carries the wrong number of tokens
    #[error("{command} expects {expected} tokens, found {found}")]
    WrongTokenCount {
        command: String,
        expected: usize,
        found: usize,
    },

    /// A numeric field could not be parsed
    #[error("Invalid {field} '{value}'")]
    InvalidField {
        /// Field name as it appears in the grammar
        field: String,
        /// The offending token
        value: String,
    },

    /// Loan terms outside the accepted domain (principal > 0, term > 0, rate >= 0)
    #[error("Invalid loan terms: {message}")]
    InvalidLoanTerms { message: String },

    /// A command error together with the ledger line it came from
    #[error("Line {line}: {source}")]
    AtLine {
        line: u64,
        #[source]
        source: Box<LedgerError>,
    },

    #[error("Bank '{bank}' doesn't exist")]
    BankNotFound { bank: String },

    #[error("Borrower '{borrower}' doesn't exist")]
    BorrowerNotFound { borrower: String },

    #[error("Loan doesn't exist for bank '{bank}' and borrower '{borrower}'")]
    LoanNotFound { bank: String, borrower: String },

    /// Arithmetic overflow while computing loan figures
    #[error("Arithmetic overflow in {operation} for loan {loan}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Loan identifier
        loan: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        // An unreadable source or sink is an input failure, not a bad line
        if let csv::ErrorKind::Io(io_error) = error.kind() {
            return LedgerError::IoError {
                message: io_error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for LedgerError {
    fn from(error: csv_async::Error) -> Self {
        if let csv_async::ErrorKind::Io(io_error) = error.kind() {
            return LedgerError::IoError {
                message: io_error.to_string(),
            };
        }

        LedgerError::ParseError {
            line: None,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidCommand error
    pub fn invalid_command(command: &str) -> Self {
        LedgerError::InvalidCommand {
            command: command.to_string(),
        }
    }

    /// Create a WrongTokenCount error
    pub fn wrong_token_count(command: &str, expected: usize, found: usize) -> Self {
        LedgerError::WrongTokenCount {
            command: command.to_string(),
            expected,
            found,
        }
    }

    /// Create an InvalidField error
    pub fn invalid_field(field: &str, value: &str) -> Self {
        LedgerError::InvalidField {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an InvalidLoanTerms error
    pub fn invalid_loan_terms(message: &str) -> Self {
        LedgerError::InvalidLoanTerms {
            message: message.to_string(),
        }
    }

    /// Attach the ledger line number to an error
    pub fn at_line(self, line: u64) -> Self {
        LedgerError::AtLine {
            line,
            source: Box::new(self),
        }
    }

    pub fn bank_not_found(bank: &str) -> Self {
        LedgerError::BankNotFound {
            bank: bank.to_string(),
        }
    }

    pub fn borrower_not_found(borrower: &str) -> Self {
        LedgerError::BorrowerNotFound {
            borrower: borrower.to_string(),
        }
    }

    pub fn loan_not_found(bank: &str, borrower: &str) -> Self {
        LedgerError::LoanNotFound {
            bank: bank.to_string(),
            borrower: borrower.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, loan: impl ToString) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            loan: loan.to_string(),
        }
    }

    /// Whether this error must abort the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LedgerError::FileNotFound { .. } | LedgerError::IoError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        LedgerError::FileNotFound { path: "ledger.txt".to_string() },
        "File not found: ledger.txt"
    )]
    #[case::io_error(
        LedgerError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(42), message: "bad record".to_string() },
        "Ledger parse error at line 42: bad record"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "bad record".to_string() },
        "Ledger parse error: bad record"
    )]
    #[case::invalid_command(
        LedgerError::invalid_command("REFUND"),
        "Invalid command 'REFUND' in ledger input"
    )]
    #[case::wrong_token_count(
        LedgerError::wrong_token_count("LOAN", 6, 4),
        "LOAN expects 6 tokens, found 4"
    )]
    #[case::invalid_field(
        LedgerError::invalid_field("principal", "ten"),
        "Invalid principal 'ten'"
    )]
    #[case::at_line(
        LedgerError::invalid_command("X").at_line(3),
        "Line 3: Invalid command 'X' in ledger input"
    )]
    #[case::loan_not_found(
        LedgerError::loan_not_found("IDIDI", "Dale"),
        "Loan doesn't exist for bank 'IDIDI' and borrower 'Dale'"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::bank(
        LedgerError::bank_not_found("MBI"),
        LedgerError::BankNotFound { bank: "MBI".to_string() }
    )]
    #[case::borrower(
        LedgerError::borrower_not_found("Harry"),
        LedgerError::BorrowerNotFound { borrower: "Harry".to_string() }
    )]
    #[case::overflow(
        LedgerError::arithmetic_overflow("total payable", "abc"),
        LedgerError::ArithmeticOverflow { operation: "total payable".to_string(), loan: "abc".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert!(error.is_fatal());
    }

    #[test]
    fn test_csv_read_failure_is_fatal() {
        let io_error = std::io::Error::new(std::io::ErrorKind::Other, "Is a directory");
        let error: LedgerError = csv::Error::from(io_error).into();
        assert_eq!(
            error,
            LedgerError::IoError {
                message: "Is a directory".to_string()
            }
        );
        assert!(error.is_fatal());
    }

    #[test]
    fn test_csv_record_error_is_not_fatal() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(&b"LOAN\xff\n"[..]);
        let error: LedgerError = reader
            .records()
            .next()
            .expect("one record")
            .expect_err("invalid UTF-8")
            .into();
        assert!(matches!(error, LedgerError::ParseError { .. }));
        assert!(!error.is_fatal());
    }

    #[test]
    fn test_command_errors_are_not_fatal() {
        assert!(!LedgerError::invalid_command("X").is_fatal());
        assert!(!LedgerError::loan_not_found("A", "B").is_fatal());
    }
}
