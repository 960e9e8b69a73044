use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The payment rails an account can be debited through.
///
/// Discriminants are the wire codes used by upstream systems.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub enum PaymentScheme {
    FasterPayments = 0,
    Bacs = 1,
    Chaps = 2,
}

impl PaymentScheme {
    pub const ALL: [PaymentScheme; 3] = [
        PaymentScheme::FasterPayments,
        PaymentScheme::Bacs,
        PaymentScheme::Chaps,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaymentScheme::FasterPayments => "FasterPayments",
            PaymentScheme::Bacs => "Bacs",
            PaymentScheme::Chaps => "Chaps",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scheme| scheme.name() == name)
    }
}

impl fmt::Display for PaymentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for PaymentScheme {
    type Error = PaymentError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|scheme| *scheme as i32 == code)
            .ok_or_else(|| {
                PaymentError::Unsupported(format!("Payment scheme {} is not supported", code))
            })
    }
}

/// A request to debit `amount` from the debtor account.
///
/// Neither the account number nor the amount is validated here; zero and
/// negative amounts are accepted and left to the scheme rules.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentRequest {
    #[serde(default)]
    pub debtor_account_number: Option<String>,
    pub amount: Decimal,
    pub payment_scheme: PaymentScheme,
}

impl PaymentRequest {
    pub fn new(
        debtor_account_number: impl Into<String>,
        amount: Decimal,
        payment_scheme: PaymentScheme,
    ) -> Self {
        Self {
            debtor_account_number: Some(debtor_account_number.into()),
            amount,
            payment_scheme,
        }
    }

    /// A request with no debtor account number at all.
    pub fn without_debtor(amount: Decimal, payment_scheme: PaymentScheme) -> Self {
        Self {
            debtor_account_number: None,
            amount,
            payment_scheme,
        }
    }
}

/// Outcome of a payment attempt. Rejections carry no reason.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
pub struct PaymentResult {
    pub success: bool,
}
