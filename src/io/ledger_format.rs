//! Ledger line format
//!
//! This module centralizes the ledger's text format:
//! - reader/writer configuration (single-space delimiter, no header, no quoting)
//! - conversion from a line's tokens to a `LedgerCommand`
//! - BALANCE output serialization
//!
//! ```text
//! LOAN <bank> <borrower> <principal:int> <term:int> <rate:decimal>
//! PAYMENT <bank> <borrower> <amount:int> <month:int>
//! BALANCE <bank> <borrower> <month:int>
//! ```
//!
//! Output is one `<bank> <borrower> <amountPaid> <emisLeft>` line per
//! resolved BALANCE command.
//!
//! Completely empty lines are not commands and are skipped by the reader
//! without a diagnostic; line numbers in errors still count them. A line
//! holding only spaces is reported as an invalid command.

use crate::types::{BalanceReport, CommandType, LedgerCommand, LedgerError};
use csv::{QuoteStyle, ReaderBuilder, Trim, WriterBuilder};
use rust_decimal::Decimal;
use std::io::Write;
use std::str::FromStr;

/// Token separator of ledger lines and output lines
pub const DELIMITER: u8 = b' ';

/// Reader configuration for ledger input
///
/// Records are flexible because each command has its own token count.
pub fn ledger_reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All);
    builder
}

/// Writer for BALANCE output lines
pub fn balance_writer<W: Write>(output: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(output)
}

/// Serialize one BALANCE output line
pub fn write_balance_report<W: Write>(
    writer: &mut csv::Writer<W>,
    report: &BalanceReport,
) -> Result<(), LedgerError> {
    writer.serialize(report).map_err(|e| LedgerError::IoError {
        message: format!("Failed to write balance line: {}", e),
    })
}

/// Convert the tokens of one ledger line to a `LedgerCommand`
///
/// Empty tokens (from repeated or trailing spaces) are ignored. The command
/// keyword is case-sensitive.
///
/// # Errors
///
/// - `InvalidCommand` if the first token is not LOAN, PAYMENT or BALANCE
/// - `WrongTokenCount` if the line has too few or too many tokens
/// - `InvalidField` if a numeric field does not parse
pub fn convert_ledger_tokens<'a, I>(tokens: I) -> Result<LedgerCommand, LedgerError>
where
    I: IntoIterator<Item = &'a str>,
{
    let tokens: Vec<&str> = tokens.into_iter().filter(|t| !t.is_empty()).collect();

    let keyword = tokens.first().copied().unwrap_or_default();
    let command_type = match keyword {
        "LOAN" => CommandType::Loan,
        "PAYMENT" => CommandType::Payment,
        "BALANCE" => CommandType::Balance,
        _ => return Err(LedgerError::invalid_command(keyword)),
    };

    if tokens.len() != command_type.token_count() {
        return Err(LedgerError::wrong_token_count(
            keyword,
            command_type.token_count(),
            tokens.len(),
        ));
    }

    let bank_name = tokens[1].to_string();
    let borrower_name = tokens[2].to_string();

    let command = match command_type {
        CommandType::Loan => LedgerCommand::Loan {
            bank_name,
            borrower_name,
            principal: parse_field("principal", tokens[3])?,
            term: parse_field("term", tokens[4])?,
            rate: parse_field::<Decimal>("rate", tokens[5])?,
        },
        CommandType::Payment => LedgerCommand::Payment {
            bank_name,
            borrower_name,
            amount: parse_field("amount", tokens[3])?,
            month: parse_field("month", tokens[4])?,
        },
        CommandType::Balance => LedgerCommand::Balance {
            bank_name,
            borrower_name,
            month: parse_field("month", tokens[3])?,
        },
    };

    Ok(command)
}

fn parse_field<T: FromStr>(field: &str, value: &str) -> Result<T, LedgerError> {
    value
        .parse()
        .map_err(|_| LedgerError::invalid_field(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn convert(line: &str) -> Result<LedgerCommand, LedgerError> {
        convert_ledger_tokens(line.split(' '))
    }

    #[test]
    fn test_convert_loan() {
        let command = convert("LOAN IDIDI Dale 10000 5 4").unwrap();
        assert_eq!(
            command,
            LedgerCommand::Loan {
                bank_name: "IDIDI".to_string(),
                borrower_name: "Dale".to_string(),
                principal: 10000,
                term: 5,
                rate: Decimal::from(4),
            }
        );
    }

    #[test]
    fn test_convert_loan_with_fractional_rate() {
        let command = convert("LOAN MBI Harry 2000 2 2.5").unwrap();
        match command {
            LedgerCommand::Loan { rate, .. } => assert_eq!(rate, Decimal::new(25, 1)),
            other => panic!("Expected LOAN, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_payment() {
        let command = convert("PAYMENT IDIDI Dale 1000 5").unwrap();
        assert_eq!(
            command,
            LedgerCommand::Payment {
                bank_name: "IDIDI".to_string(),
                borrower_name: "Dale".to_string(),
                amount: 1000,
                month: 5,
            }
        );
    }

    #[test]
    fn test_convert_balance() {
        let command = convert("BALANCE IDIDI Dale 3").unwrap();
        assert_eq!(command.command_type(), CommandType::Balance);
        assert_eq!(
            command,
            LedgerCommand::Balance {
                bank_name: "IDIDI".to_string(),
                borrower_name: "Dale".to_string(),
                month: 3,
            }
        );
    }

    #[test]
    fn test_convert_ignores_trailing_space() {
        assert!(convert("BALANCE IDIDI Dale 3 ").is_ok());
    }

    #[rstest]
    #[case::unknown("REFUND IDIDI Dale 10", "REFUND")]
    #[case::lowercase("loan IDIDI Dale 10000 5 4", "loan")]
    #[case::empty("", "")]
    fn test_convert_invalid_command(#[case] line: &str, #[case] keyword: &str) {
        assert_eq!(convert(line), Err(LedgerError::invalid_command(keyword)));
    }

    #[rstest]
    #[case::loan_short("LOAN IDIDI Dale 10000 5", "LOAN", 6, 5)]
    #[case::payment_long("PAYMENT IDIDI Dale 1000 5 7", "PAYMENT", 5, 6)]
    #[case::balance_short("BALANCE IDIDI", "BALANCE", 4, 2)]
    fn test_convert_wrong_token_count(
        #[case] line: &str,
        #[case] command: &str,
        #[case] expected: usize,
        #[case] found: usize,
    ) {
        assert_eq!(
            convert(line),
            Err(LedgerError::wrong_token_count(command, expected, found))
        );
    }

    #[rstest]
    #[case::principal_text("LOAN IDIDI Dale ten 5 4", "principal", "ten")]
    #[case::principal_negative("LOAN IDIDI Dale -100 5 4", "principal", "-100")]
    #[case::term_fraction("LOAN IDIDI Dale 100 1.5 4", "term", "1.5")]
    #[case::rate_text("LOAN IDIDI Dale 100 5 high", "rate", "high")]
    #[case::amount_text("PAYMENT IDIDI Dale lots 5", "amount", "lots")]
    #[case::month_negative("BALANCE IDIDI Dale -1", "month", "-1")]
    fn test_convert_invalid_field(#[case] line: &str, #[case] field: &str, #[case] value: &str) {
        assert_eq!(convert(line), Err(LedgerError::invalid_field(field, value)));
    }

    #[test]
    fn test_write_balance_report() {
        let mut output = Vec::new();
        {
            let mut writer = balance_writer(&mut output);
            write_balance_report(
                &mut writer,
                &BalanceReport {
                    bank_name: "IDIDI".to_string(),
                    borrower_name: "Dale".to_string(),
                    amount_paid: 1326,
                    emis_left: 9,
                },
            )
            .unwrap();
            writer.flush().unwrap();
        }

        assert_eq!(String::from_utf8(output).unwrap(), "IDIDI Dale 1326 9\n");
    }

    #[test]
    fn test_reader_splits_on_single_spaces() {
        let input = "LOAN IDIDI Dale 10000 5 4\nBALANCE IDIDI Dale 5\n";
        let mut reader = ledger_reader_builder().from_reader(input.as_bytes());

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].len(), 6);
        assert_eq!(&records[1][0], "BALANCE");
    }
}
