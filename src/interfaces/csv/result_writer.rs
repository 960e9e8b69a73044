use crate::domain::payment::{PaymentRequest, PaymentResult, PaymentScheme};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct PaymentOutcomeRow<'a> {
    debtor_account_number: &'a str,
    payment_scheme: PaymentScheme,
    amount: Decimal,
    success: bool,
}

/// Writes one CSV row per processed payment.
pub struct PaymentResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PaymentResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_result(&mut self, request: &PaymentRequest, result: PaymentResult) -> Result<()> {
        self.writer.serialize(PaymentOutcomeRow {
            debtor_account_number: request.debtor_account_number.as_deref().unwrap_or_default(),
            payment_scheme: request.payment_scheme,
            amount: request.amount,
            success: result.success,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
