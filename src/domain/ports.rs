use super::account::Account;
use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// The setting value that selects the backup store. Compared case-sensitively.
pub const BACKUP_DATA_STORE: &str = "Backup";

/// Which account store backend is in use.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum DataStoreType {
    #[default]
    Primary,
    Backup,
}

impl DataStoreType {
    /// Resolves the configured data-store-type setting.
    ///
    /// Only an exact `"Backup"` selects the backup store; every other value,
    /// including an absent one, falls back to the primary store.
    pub fn from_setting(setting: Option<&str>) -> Self {
        match setting {
            Some(BACKUP_DATA_STORE) => DataStoreType::Backup,
            _ => DataStoreType::Primary,
        }
    }
}

impl fmt::Display for DataStoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataStoreType::Primary => f.write_str("Primary"),
            DataStoreType::Backup => f.write_str("Backup"),
        }
    }
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Looks up an account. `None` means no such account.
    async fn get_account(&self, account_number: &str) -> Result<Option<Account>>;
    /// Persists an account, replacing any existing one with the same number.
    async fn update_account(&self, account: Account) -> Result<()>;
    async fn all_accounts(&self) -> Result<Vec<Account>>;
    fn backend(&self) -> DataStoreType;
}

pub type AccountStoreBox = Box<dyn AccountStore>;

/// Hands out an account store for a single payment.
pub trait AccountStoreProvider: Send + Sync {
    fn create_data_store(&self) -> AccountStoreBox;
}

impl<F> AccountStoreProvider for F
where
    F: Fn() -> AccountStoreBox + Send + Sync,
{
    fn create_data_store(&self) -> AccountStoreBox {
        self()
    }
}

pub type AccountStoreProviderBox = Box<dyn AccountStoreProvider>;
