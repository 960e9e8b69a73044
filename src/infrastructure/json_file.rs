use crate::domain::account::Account;
use crate::domain::ports::{AccountStore, DataStoreType};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::debug;

type AccountTable = BTreeMap<String, Account>;

/// The backup account store, a JSON document on disk.
///
/// The file holds one object keyed by account number. A missing file reads as
/// an empty store. Writes replace the file atomically through a temporary file
/// in the same directory.
///
/// Clones share the write lock, so writers within one process are serialised.
#[derive(Clone)]
pub struct JsonFileAccountStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileAccountStore {
    /// Creates a store backed by the file at `path`. The file is created on
    /// the first update.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn load(&self) -> Result<AccountTable> {
        match std::fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(AccountTable::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                PaymentError::Storage(Box::new(std::io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Corrupt backup store {}: {}", self.path.display(), e),
                )))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(AccountTable::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, accounts: &AccountTable) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, accounts)?;
        file.flush()?;
        file.persist(&self.path).map_err(|e| PaymentError::Io(e.error))?;
        Ok(())
    }
}

#[async_trait]
impl AccountStore for JsonFileAccountStore {
    async fn get_account(&self, account_number: &str) -> Result<Option<Account>> {
        let mut accounts = self.load()?;
        Ok(accounts.remove(account_number))
    }

    async fn update_account(&self, account: Account) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut accounts = self.load()?;
        debug!(
            account = %account.account_number,
            path = %self.path.display(),
            "writing account to backup store"
        );
        accounts.insert(account.account_number.clone(), account);
        self.save(&accounts)
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.load()?.into_values().collect())
    }

    fn backend(&self) -> DataStoreType {
        DataStoreType::Backup
    }
}
