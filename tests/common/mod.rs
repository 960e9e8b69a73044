#![allow(dead_code)]

use async_trait::async_trait;
use payauth::application::payment_service::PaymentService;
use payauth::application::validator_provider::PaymentValidatorProvider;
use payauth::domain::account::{Account, AccountStatus, AllowedPaymentSchemes};
use payauth::domain::ports::{AccountStore, AccountStoreBox, DataStoreType};
use payauth::error::Result;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

pub const DEBTOR: &str = "123456789";

/// Account store double that records lookups and updates.
#[derive(Clone, Default)]
pub struct RecordingAccountStore {
    accounts: Arc<Mutex<Vec<Account>>>,
    pub lookups: Arc<Mutex<Vec<String>>>,
    pub updates: Arc<Mutex<Vec<Account>>>,
}

impl RecordingAccountStore {
    pub fn with_account(account: Account) -> Self {
        let store = Self::default();
        store.accounts.lock().unwrap().push(account);
        store
    }

    pub fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }

    pub fn all_accounts_now(&self) -> Vec<Account> {
        self.accounts.lock().unwrap().clone()
    }

    pub fn last_update(&self) -> Option<Account> {
        self.updates.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AccountStore for RecordingAccountStore {
    async fn get_account(&self, account_number: &str) -> Result<Option<Account>> {
        self.lookups.lock().unwrap().push(account_number.to_string());
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .iter()
            .find(|account| account.account_number == account_number)
            .cloned())
    }

    async fn update_account(&self, account: Account) -> Result<()> {
        self.updates.lock().unwrap().push(account.clone());
        let mut accounts = self.accounts.lock().unwrap();
        accounts.retain(|existing| existing.account_number != account.account_number);
        accounts.push(account);
        Ok(())
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.lock().unwrap().clone())
    }

    fn backend(&self) -> DataStoreType {
        DataStoreType::Primary
    }
}

/// Builds a service whose every store handle is `store`.
pub fn service_with(store: &RecordingAccountStore) -> PaymentService {
    let store = store.clone();
    PaymentService::new(
        Box::new(move || Box::new(store.clone()) as AccountStoreBox),
        Box::new(PaymentValidatorProvider::new()),
    )
}

pub fn account(
    allowed: AllowedPaymentSchemes,
    status: AccountStatus,
    balance: Decimal,
) -> Account {
    Account::new(DEBTOR)
        .with_allowed_schemes(allowed)
        .with_status(status)
        .with_balance(balance)
}
