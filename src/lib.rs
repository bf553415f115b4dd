//! # CoinCap Client
//!
//! Minimal async client for the CoinCap v3 assets REST API. It authenticates
//! with a bearer token, fetches either every tracked asset or a single asset by
//! id, and decodes the JSON envelope into [`Asset`] records.
//!
//! Numeric-looking fields (price, supply, market cap, ...) stay as the text the
//! server sent. The `*_decimal` helpers on [`Asset`] parse them on demand.
//!
//! ## Usage
//!
//! ```no_run
//! use coincap_client::{ClientConfig, CoinCapClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CoinCapClient::from_config(ClientConfig::from_env()?)?;
//!
//! let bitcoin = client.fetch_asset("bitcoin").await?;
//! println!("{}", bitcoin);
//!
//! for asset in client.fetch_assets().await? {
//!     println!("{}: ${}", asset.symbol, asset.price_usd);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns a [`ClientError`]; nothing in the library exits the
//! process or retries.
//!
//! ```no_run
//! use coincap_client::{ClientError, CoinCapClient};
//!
//! # async fn example(client: CoinCapClient) {
//! match client.fetch_asset("bitcoin").await {
//!     Ok(asset) => println!("{}", asset),
//!     Err(ClientError::NotFound(id)) => println!("no such asset: {}", id),
//!     Err(e) if e.is_transport() => eprintln!("request failed: {}", e),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! CoinCapClient (fetch_assets, fetch_asset)
//!     ↓
//! LoggingTransport (one tracing event per exchange)
//!     ↓
//! ReqwestTransport (timeout, full body read)
//!     ↓
//! https://rest.coincap.io/v3/assets
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use client::CoinCapClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use logging::LoggingTransport;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{Asset, AssetResponse, AssetsResponse};
