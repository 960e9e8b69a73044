use payauth::application::payment_service::PaymentService;
use payauth::application::validator_provider::PaymentValidatorProvider;
use payauth::config::DataStoreConfig;
use payauth::domain::account::{Account, AccountStatus, AllowedPaymentSchemes, Balance};
use payauth::domain::payment::{PaymentRequest, PaymentScheme};
use payauth::domain::ports::{AccountStore, AccountStoreProvider, DataStoreType};
use payauth::infrastructure::data_store_factory::DataStoreFactory;
use payauth::infrastructure::in_memory::InMemoryAccountStore;
use payauth::infrastructure::json_file::JsonFileAccountStore;
use rust_decimal_macros::dec;
use tempfile::tempdir;

fn seeded_account() -> Account {
    Account::new("12345678")
        .with_balance(dec!(1000))
        .with_status(AccountStatus::Live)
        .with_allowed_schemes(AllowedPaymentSchemes::CHAPS)
}

#[tokio::test]
async fn test_backup_setting_routes_payments_to_backup_file() {
    let dir = tempdir().unwrap();
    let backup_path = dir.path().join("backup.json");
    let backup = JsonFileAccountStore::new(&backup_path);
    backup.update_account(seeded_account()).await.unwrap();
    let primary = InMemoryAccountStore::with_accounts([seeded_account()]);

    let factory = DataStoreFactory::with_stores(Some("Backup"), primary.clone(), backup);
    let service = PaymentService::new(
        Box::new(factory),
        Box::new(PaymentValidatorProvider::new()),
    );
    let request = PaymentRequest::new("12345678", dec!(400), PaymentScheme::Chaps);

    assert!(service.make_payment(Some(&request)).await.unwrap().success);

    let reopened = JsonFileAccountStore::new(&backup_path);
    let persisted = reopened.get_account("12345678").await.unwrap().unwrap();
    assert_eq!(persisted.balance, Balance::new(dec!(600)));

    let untouched = primary.get_account("12345678").await.unwrap().unwrap();
    assert_eq!(untouched.balance, Balance::new(dec!(1000)));
}

#[tokio::test]
async fn test_default_setting_routes_payments_to_primary() {
    let dir = tempdir().unwrap();
    let backup_path = dir.path().join("backup.json");
    let primary = InMemoryAccountStore::with_accounts([seeded_account()]);

    let factory = DataStoreFactory::with_stores(
        None,
        primary.clone(),
        JsonFileAccountStore::new(&backup_path),
    );
    let service = PaymentService::new(
        Box::new(factory),
        Box::new(PaymentValidatorProvider::new()),
    );
    let request = PaymentRequest::new("12345678", dec!(400), PaymentScheme::Chaps);

    assert!(service.make_payment(Some(&request)).await.unwrap().success);

    let updated = primary.get_account("12345678").await.unwrap().unwrap();
    assert_eq!(updated.balance, Balance::new(dec!(600)));
    assert!(!backup_path.exists());
}

#[test]
fn test_factory_from_config() {
    let dir = tempdir().unwrap();
    let cases = [
        (Some("Backup"), DataStoreType::Backup),
        (Some(""), DataStoreType::Primary),
        (Some("Primary"), DataStoreType::Primary),
        (Some("SomethingElse"), DataStoreType::Primary),
        (None, DataStoreType::Primary),
    ];

    for (setting, expected) in cases {
        let config = DataStoreConfig {
            data_store_type: setting.map(str::to_string),
            backup_path: dir.path().join("backup.json"),
        };
        let store = DataStoreFactory::new(&config).create_data_store();
        assert_eq!(store.backend(), expected, "setting {:?}", setting);
    }
}
