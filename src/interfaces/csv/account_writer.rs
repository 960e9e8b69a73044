use crate::domain::account::Account;
use crate::error::Result;
use std::io::Write;

/// Writes account state as CSV with the same columns `AccountReader` reads.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_accounts(&mut self, accounts: impl IntoIterator<Item = Account>) -> Result<()> {
        for account in accounts {
            self.writer.serialize(account)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{AccountStatus, AllowedPaymentSchemes};
    use rust_decimal_macros::dec;

    #[test]
    fn test_write_accounts() {
        let mut out = Vec::new();
        let accounts = vec![
            Account::new("1")
                .with_balance(dec!(500))
                .with_allowed_schemes(AllowedPaymentSchemes::BACS | AllowedPaymentSchemes::CHAPS),
            Account::new("2").with_status(AccountStatus::Disabled),
        ];

        AccountWriter::new(&mut out).write_accounts(accounts).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "account_number,balance,status,allowed_payment_schemes");
        assert_eq!(lines[1], "1,500,Live,Bacs|Chaps");
        assert_eq!(lines[2], "2,0,Disabled,");
    }
}
