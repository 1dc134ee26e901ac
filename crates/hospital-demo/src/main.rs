//! # Hospital Records Demo
//!
//! Demo driver exercising the DAOs end to end against a running
//! PostgreSQL instance: create an address and a patient, list all
//! patients, update the first one, delete the last one, list again.
//!
//! The two tables (`patient`, `address`) are assumed to pre-exist.

use hospital_config::{AppConfig, ConfigLoader};
use hospital_core::{Address, HospitalResult, Patient};
use hospital_repository::{Dao, PgAddressDao, PgPatientDao};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let loader = match ConfigLoader::from_default_location() {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    let config = loader.get().await;

    init_logging(&config.logging.filter);

    info!("Starting hospital records demo...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> HospitalResult<()> {
    let patients = PgPatientDao::new(config.database.clone());
    let addresses = PgAddressDao::new(config.database);

    let address = addresses
        .save(&Address::new("221B Baker Street", "London", "United Kingdom"))
        .await?;
    info!(address_id = address.address_id, "Address created");

    let patient = patients
        .save(&Patient::new("Jane", "Doe", "08123456789").with_address(address.address_id))
        .await?;
    info!(patient_id = patient.patient_id, "Patient created");

    let all = patients.get_all().await?;
    info!("All patients:");
    for p in &all {
        info!("  {p:?}");
    }

    if let Some(first) = all.first() {
        let mut updated = first.clone();
        updated.first_name = "John".to_string();
        updated.phone_number = "09000000000".to_string();
        patients.update(&updated).await?;
        info!(patient_id = updated.patient_id, "Patient updated");
    }

    if let Some(last) = all.last() {
        patients.delete(last).await?;
        info!(patient_id = last.patient_id, "Patient deleted");
    }

    info!("Remaining patients:");
    for p in &patients.get_all().await? {
        info!("  {p:?}");
    }

    Ok(())
}

fn init_logging(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
