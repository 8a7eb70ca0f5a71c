//! Standalone payload importer
//!
//! Runs the same seeding code path as service startup against the store
//! named by `DATABASE_URL`, then exits. Useful for loading payloads without
//! restarting the relay.

use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chat_relay::config::ServerConfig;
use chat_relay::seeder;
use chat_relay::store::{PgStore, StoreConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {}", e);
            process::exit(1);
        }
    };

    let store_config = match StoreConfig::from_connection_string(&config.database_url) {
        Ok(store_config) => store_config,
        Err(e) => {
            error!("invalid DATABASE_URL: {}", e);
            process::exit(1);
        }
    };

    let store = match PgStore::connect(store_config).await {
        Ok(store) => store,
        Err(e) => {
            error!("store connection failed: {}", e);
            process::exit(1);
        }
    };

    match seeder::seed_payload_dir(&store, &config.payload_dir).await {
        Ok(report) => info!(
            "payload import finished: {} inserted, {} skipped, {} failed",
            report.inserted, report.skipped, report.failed
        ),
        Err(e) => {
            error!("payload import failed: {}", e);
            process::exit(1);
        }
    }
}
