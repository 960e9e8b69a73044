use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payauth::application::payment_service::PaymentService;
use payauth::application::validator_provider::PaymentValidatorProvider;
use payauth::config::DataStoreConfig;
use payauth::domain::ports::AccountStoreProvider;
use payauth::infrastructure::data_store_factory::DataStoreFactory;
use payauth::interfaces::csv::account_reader::AccountReader;
use payauth::interfaces::csv::account_writer::AccountWriter;
use payauth::interfaces::csv::payment_reader::PaymentReader;
use payauth::interfaces::csv::result_writer::PaymentResultWriter;
use payauth::telemetry;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file
    payments: PathBuf,

    /// Accounts CSV used to seed the selected store before processing
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Write the final account state to this CSV file
    #[arg(long)]
    accounts_out: Option<PathBuf>,

    #[command(flatten)]
    store: DataStoreConfig,
}

async fn seed_accounts(factory: &DataStoreFactory, path: &Path) -> Result<()> {
    let store = factory.create_data_store();
    let file = File::open(path).into_diagnostic()?;
    let mut seeded = 0usize;

    for account in AccountReader::new(file).accounts() {
        match account {
            Ok(account) => {
                store.update_account(account).await.into_diagnostic()?;
                seeded += 1;
            }
            Err(e) => error!("Error reading account: {}", e),
        }
    }

    info!(seeded, store = %store.backend(), "accounts loaded");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let factory = DataStoreFactory::new(&cli.store);
    info!(store = %factory.data_store_type(), "account store selected");

    if let Some(path) = &cli.accounts {
        seed_accounts(&factory, path).await?;
    }

    let service = PaymentService::new(
        Box::new(factory.clone()),
        Box::new(PaymentValidatorProvider::new()),
    );

    // Process payments
    let file = File::open(&cli.payments).into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = PaymentResultWriter::new(stdout.lock());
    for request in PaymentReader::new(file).payments() {
        match request {
            Ok(request) => match service.make_payment(Some(&request)).await {
                Ok(result) => writer.write_result(&request, result).into_diagnostic()?,
                Err(e) => error!("Error processing payment: {}", e),
            },
            Err(e) => error!("Error reading payment: {}", e),
        }
    }
    writer.flush().into_diagnostic()?;

    if let Some(path) = &cli.accounts_out {
        let accounts = factory
            .create_data_store()
            .all_accounts()
            .await
            .into_diagnostic()?;
        let out = File::create(path).into_diagnostic()?;
        AccountWriter::new(out)
            .write_accounts(accounts)
            .into_diagnostic()?;
    }

    Ok(())
}
