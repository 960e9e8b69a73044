use crate::domain::account::Account;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads seed accounts from a CSV source.
///
/// Expects the columns `account_number, balance, status, allowed_payment_schemes`,
/// with schemes written as `Bacs|Chaps` or as a bitmask such as `6`.
pub struct AccountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AccountReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn accounts(self) -> impl Iterator<Item = Result<Account>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{AccountStatus, AllowedPaymentSchemes, Balance};
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "account_number, balance, status, allowed_payment_schemes\n\
                    1, 1000, Live, Bacs|Chaps\n\
                    2, 499.5, InboundPaymentsOnly, FasterPayments\n\
                    3, 0, Disabled,";
        let reader = AccountReader::new(data.as_bytes());
        let accounts: Vec<Account> = reader.accounts().map(|a| a.unwrap()).collect();

        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[0].balance, Balance::new(dec!(1000)));
        assert_eq!(
            accounts[0].allowed_payment_schemes,
            AllowedPaymentSchemes::BACS | AllowedPaymentSchemes::CHAPS
        );
        assert_eq!(accounts[1].status, AccountStatus::InboundPaymentsOnly);
        assert_eq!(accounts[1].balance, Balance::new(dec!(499.5)));
        assert_eq!(accounts[2].allowed_payment_schemes, AllowedPaymentSchemes::NONE);
    }

    #[test]
    fn test_reader_numeric_scheme_mask() {
        let data = "account_number, balance, status, allowed_payment_schemes\n\
                    1, 10, Live, 6\n\
                    2, 10, Live, 8\n\
                    3, 10, Live, 7";
        let reader = AccountReader::new(data.as_bytes());
        let results: Vec<Result<Account>> = reader.accounts().collect();

        assert_eq!(
            results[0].as_ref().unwrap().allowed_payment_schemes,
            AllowedPaymentSchemes::BACS | AllowedPaymentSchemes::CHAPS
        );
        assert!(results[1].is_err());
        assert_eq!(
            results[2].as_ref().unwrap().allowed_payment_schemes,
            AllowedPaymentSchemes::ALL
        );
    }

    #[test]
    fn test_reader_bad_status() {
        let data = "account_number, balance, status, allowed_payment_schemes\n1, 10, Frozen, Bacs";
        let reader = AccountReader::new(data.as_bytes());
        let results: Vec<Result<Account>> = reader.accounts().collect();

        assert!(results[0].is_err());
    }
}
