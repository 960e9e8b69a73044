//! Scheme-specific authorization rules.
//!
//! Each validator is a pure decision over the debtor account and the request.
//! A missing account is always a rejection and is checked before anything else.

use super::account::{Account, AccountStatus};
use super::payment::{PaymentRequest, PaymentScheme};

pub trait PaymentValidator: Send + Sync {
    fn can_make_payment(&self, account: Option<&Account>, request: &PaymentRequest) -> bool;

    /// The scheme whose rules this validator implements.
    fn scheme(&self) -> PaymentScheme;
}

/// Bacs only requires the scheme to be allowed. Account status is not consulted.
#[derive(Debug, Default, Clone, Copy)]
pub struct BacsPaymentValidator;

impl PaymentValidator for BacsPaymentValidator {
    fn can_make_payment(&self, account: Option<&Account>, _request: &PaymentRequest) -> bool {
        let Some(account) = account else {
            return false;
        };

        account.allowed_payment_schemes.allows(PaymentScheme::Bacs)
    }

    fn scheme(&self) -> PaymentScheme {
        PaymentScheme::Bacs
    }
}

/// Faster Payments requires the scheme to be allowed and the balance to cover the amount.
#[derive(Debug, Default, Clone, Copy)]
pub struct FasterPaymentsValidator;

impl PaymentValidator for FasterPaymentsValidator {
    fn can_make_payment(&self, account: Option<&Account>, request: &PaymentRequest) -> bool {
        let Some(account) = account else {
            return false;
        };

        account
            .allowed_payment_schemes
            .allows(PaymentScheme::FasterPayments)
            && account.balance.covers(request.amount)
    }

    fn scheme(&self) -> PaymentScheme {
        PaymentScheme::FasterPayments
    }
}

/// Chaps requires the scheme to be allowed and the account to be live.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChapsPaymentValidator;

impl PaymentValidator for ChapsPaymentValidator {
    fn can_make_payment(&self, account: Option<&Account>, _request: &PaymentRequest) -> bool {
        let Some(account) = account else {
            return false;
        };

        account.allowed_payment_schemes.allows(PaymentScheme::Chaps)
            && account.status == AccountStatus::Live
    }

    fn scheme(&self) -> PaymentScheme {
        PaymentScheme::Chaps
    }
}
