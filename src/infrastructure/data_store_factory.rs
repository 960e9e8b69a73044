use super::in_memory::InMemoryAccountStore;
use super::json_file::JsonFileAccountStore;
use crate::config::DataStoreConfig;
use crate::domain::ports::{AccountStoreBox, AccountStoreProvider, DataStoreType};

/// Selects the account store from the data-store-type setting.
///
/// The setting is resolved once, when the factory is built. Each call to
/// `create_data_store` hands out a new handle onto the selected backend.
#[derive(Clone)]
pub struct DataStoreFactory {
    data_store_type: DataStoreType,
    primary: InMemoryAccountStore,
    backup: JsonFileAccountStore,
}

impl DataStoreFactory {
    pub fn new(config: &DataStoreConfig) -> Self {
        Self::with_stores(
            config.data_store_type.as_deref(),
            InMemoryAccountStore::new(),
            JsonFileAccountStore::new(&config.backup_path),
        )
    }

    pub fn with_stores(
        data_store_type: Option<&str>,
        primary: InMemoryAccountStore,
        backup: JsonFileAccountStore,
    ) -> Self {
        Self {
            data_store_type: DataStoreType::from_setting(data_store_type),
            primary,
            backup,
        }
    }

    pub fn data_store_type(&self) -> DataStoreType {
        self.data_store_type
    }
}

impl AccountStoreProvider for DataStoreFactory {
    fn create_data_store(&self) -> AccountStoreBox {
        match self.data_store_type {
            DataStoreType::Backup => Box::new(self.backup.clone()),
            DataStoreType::Primary => Box::new(self.primary.clone()),
        }
    }
}
