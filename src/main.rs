use std::process;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chat_relay::config::ServerConfig;
use chat_relay::routes::configure_routes;
use chat_relay::seeder;
use chat_relay::store::{MessageStore, PgStore, StoreConfig};

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

    // A store connection failure at startup halts launch
    let store: Arc<dyn MessageStore> = match PgStore::connect(store_config).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("store connection failed: {}", e);
            process::exit(1);
        }
    };
    info!("connected to document store");

    // Seeding problems are logged, never fatal for the server
    match seeder::seed_payload_dir(store.as_ref(), &config.payload_dir).await {
        Ok(report) => info!(
            "payload seeding done: {} inserted, {} skipped, {} failed",
            report.inserted, report.skipped, report.failed
        ),
        Err(e) => error!("payload seeding aborted: {}", e),
    }

    let routes = configure_routes(store);

    info!("listening on http://0.0.0.0:{}", config.port);
    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;
}
