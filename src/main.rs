//! `coincap` - prints CoinCap assets, one line each
//!
//! With no argument every tracked asset is printed; with an asset id only that
//! asset is. The first error is logged and the process exits with status 1.

use coincap_client::{Asset, ClientConfig, ClientError, CoinCapClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment variables
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "No .env file loaded");
    }

    let asset_id = std::env::args().nth(1);

    match run(asset_id.as_deref()).await {
        Ok(assets) => {
            for asset in assets {
                println!("{}", asset);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "coincap request failed");
            std::process::exit(1);
        }
    }
}

async fn run(asset_id: Option<&str>) -> Result<Vec<Asset>, ClientError> {
    let config = ClientConfig::from_env()?;
    let client = CoinCapClient::from_config(config)?;

    match asset_id {
        Some(id) => Ok(vec![client.fetch_asset(id).await?]),
        None => client.fetch_assets().await,
    }
}
