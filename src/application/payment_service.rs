use crate::application::validator_provider::ValidatorFactoryBox;
use crate::domain::payment::{PaymentRequest, PaymentResult};
use crate::domain::ports::AccountStoreProviderBox;
use crate::error::{PaymentError, Result};
use tracing::debug;

/// Authorizes debit payments and applies approved ones.
///
/// `PaymentService` owns the providers for account stores and validators.
/// A fresh store is resolved for every payment; nothing is cached between calls.
pub struct PaymentService {
    data_store_provider: AccountStoreProviderBox,
    validator_provider: ValidatorFactoryBox,
}

impl PaymentService {
    /// Creates a new `PaymentService` instance.
    ///
    /// # Arguments
    ///
    /// * `data_store_provider` - Resolves the account store used for each payment.
    /// * `validator_provider` - Resolves the rules for each payment scheme.
    pub fn new(
        data_store_provider: AccountStoreProviderBox,
        validator_provider: ValidatorFactoryBox,
    ) -> Self {
        Self {
            data_store_provider,
            validator_provider,
        }
    }

    /// Decides whether the payment may proceed and, if so, debits the account.
    ///
    /// A missing request is an invalid argument and touches nothing. An
    /// unknown account or a failed rule is not an error: it yields an
    /// unsuccessful result and leaves the account as it was. The account is
    /// persisted only when the payment is approved. An approved debit that
    /// overflows the balance is an error and nothing is persisted.
    pub async fn make_payment(&self, request: Option<&PaymentRequest>) -> Result<PaymentResult> {
        let request = request.ok_or_else(|| {
            PaymentError::InvalidArgument("payment request must be provided".to_string())
        })?;

        let store = self.data_store_provider.create_data_store();
        let account = match request.debtor_account_number.as_deref() {
            Some(account_number) => store.get_account(account_number).await?,
            None => None,
        };

        let validator = self.validator_provider.get_validator(request.payment_scheme)?;
        let success = validator.can_make_payment(account.as_ref(), request);

        if success && let Some(mut account) = account {
            account.debit(request.amount)?;
            debug!(
                account = %account.account_number,
                scheme = %request.payment_scheme,
                amount = %request.amount,
                balance = %account.balance,
                store = %store.backend(),
                "payment approved"
            );
            store.update_account(account).await?;
        } else {
            debug!(
                account = request.debtor_account_number.as_deref().unwrap_or_default(),
                scheme = %request.payment_scheme,
                amount = %request.amount,
                "payment rejected"
            );
        }

        Ok(PaymentResult { success })
    }
}
