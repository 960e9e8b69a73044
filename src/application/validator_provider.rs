use crate::domain::payment::PaymentScheme;
use crate::domain::validation::{
    BacsPaymentValidator, ChapsPaymentValidator, FasterPaymentsValidator, PaymentValidator,
};
use crate::error::{PaymentError, Result};
use std::collections::HashMap;
use std::sync::Arc;

pub type ValidatorRef = Arc<dyn PaymentValidator>;

/// Resolves the validator for a payment scheme.
pub trait ValidatorFactory: Send + Sync {
    fn get_validator(&self, scheme: PaymentScheme) -> Result<ValidatorRef>;
}

pub type ValidatorFactoryBox = Box<dyn ValidatorFactory>;

/// Lookup table from scheme to validator.
///
/// Validators are stateless, so a single shared instance per scheme is handed
/// out on every lookup. A scheme without an entry is unsupported.
#[derive(Clone)]
pub struct PaymentValidatorProvider {
    validators: HashMap<PaymentScheme, ValidatorRef>,
}

impl PaymentValidatorProvider {
    /// Creates a provider with the Bacs, Faster Payments and Chaps rules.
    pub fn new() -> Self {
        Self::with_validators([
            Arc::new(BacsPaymentValidator) as ValidatorRef,
            Arc::new(FasterPaymentsValidator) as ValidatorRef,
            Arc::new(ChapsPaymentValidator) as ValidatorRef,
        ])
    }

    /// Creates a provider from an explicit set of validators, keyed by the
    /// scheme each one reports.
    pub fn with_validators(validators: impl IntoIterator<Item = ValidatorRef>) -> Self {
        let validators = validators
            .into_iter()
            .map(|validator| (validator.scheme(), validator))
            .collect();
        Self { validators }
    }

    pub fn supports(&self, scheme: PaymentScheme) -> bool {
        self.validators.contains_key(&scheme)
    }
}

impl Default for PaymentValidatorProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorFactory for PaymentValidatorProvider {
    fn get_validator(&self, scheme: PaymentScheme) -> Result<ValidatorRef> {
        self.validators.get(&scheme).cloned().ok_or_else(|| {
            PaymentError::Unsupported(format!("Payment scheme {} is not supported", scheme))
        })
    }
}
