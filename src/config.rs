use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_BACKUP_PATH: &str = "accounts_backup.json";

/// Settings for choosing and locating the account store.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct DataStoreConfig {
    /// Data store backend. Exactly "Backup" selects the file-backed store;
    /// anything else uses the in-memory store.
    #[arg(long, env = "DATA_STORE_TYPE")]
    pub data_store_type: Option<String>,

    /// File used by the backup store.
    #[arg(long, env = "BACKUP_STORE_PATH", default_value = DEFAULT_BACKUP_PATH)]
    pub backup_path: PathBuf,
}

impl Default for DataStoreConfig {
    fn default() -> Self {
        Self {
            data_store_type: None,
            backup_path: PathBuf::from(DEFAULT_BACKUP_PATH),
        }
    }
}
