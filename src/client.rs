//! CoinCap API client
//!
//! One authenticated GET per call, decoded into [`Asset`] records. No retries,
//! no caching: every error goes straight back to the caller.

use crate::{
    config::ClientConfig,
    constants::ASSETS_ENDPOINT,
    error::ClientError,
    logging::LoggingTransport,
    transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport},
    types::{Asset, AssetResponse, AssetsResponse},
};
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use std::sync::Arc;
use std::time::Duration;

/// Client for the CoinCap assets API
///
/// Holds no per-request state, so it can be cloned and shared across tasks.
///
/// # Example
/// ```no_run
/// use coincap_client::CoinCapClient;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), coincap_client::ClientError> {
/// let client = CoinCapClient::new(Duration::from_secs(10), "my-api-key")?;
/// for asset in client.fetch_assets().await? {
///     println!("{}", asset);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CoinCapClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    auth_header: HeaderValue,
}

impl CoinCapClient {
    /// Creates a client for the public CoinCap API
    ///
    /// Fails with `InvalidConfiguration` when the timeout is zero or the token
    /// is empty.
    pub fn new(timeout: Duration, api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::from_config(ClientConfig::new(timeout, api_key))
    }

    /// Creates a client from a full config, using the `reqwest` transport
    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        let config = config.validate()?;
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::build(config, Arc::new(transport))
    }

    /// Creates a client on top of a custom transport
    ///
    /// The config is validated before the transport is used.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, ClientError> {
        let config = config.validate()?;
        Self::build(config, transport)
    }

    fn build(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Result<Self, ClientError> {
        let mut auth_header = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| {
                ClientError::invalid_configuration("API key contains invalid header characters")
            })?;
        auth_header.set_sensitive(true);

        tracing::debug!(
            base_url = %config.base_url,
            timeout_ms = config.timeout.as_millis() as u64,
            transport = transport.name(),
            "CoinCap client created"
        );

        Ok(Self {
            transport: Arc::new(LoggingTransport::new(transport)),
            base_url: config.base_url,
            auth_header,
        })
    }

    /// Fetches all tracked assets, in the order the server returns them
    pub async fn fetch_assets(&self) -> Result<Vec<Asset>, ClientError> {
        let url = format!("{}{}/", self.base_url, ASSETS_ENDPOINT);
        let response = self.get(url).await?;

        if !response.status.is_success() {
            return Err(ClientError::Api {
                status: response.status.as_u16(),
                body: response.body_text(),
            });
        }

        let envelope: AssetsResponse = serde_json::from_slice(&response.body)?;

        tracing::debug!(
            count = envelope.data.len(),
            timestamp = envelope.timestamp,
            "Fetched assets from CoinCap"
        );

        Ok(envelope.into_data())
    }

    /// Fetches a single asset by its identifier (e.g. `bitcoin`)
    ///
    /// The server decides whether the identifier exists; a 404 is reported as
    /// `NotFound`. Empty ids and the dot segments `.`/`..` are rejected locally
    /// because they cannot address a per-asset URL.
    pub async fn fetch_asset(&self, id: &str) -> Result<Asset, ClientError> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(ClientError::InvalidAssetId(id.to_string()));
        }

        let url = self.asset_url(id)?;
        let response = self.get(url).await?;

        if response.status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id.to_string()));
        }

        if !response.status.is_success() {
            return Err(ClientError::Api {
                status: response.status.as_u16(),
                body: response.body_text(),
            });
        }

        let envelope: AssetResponse = serde_json::from_slice(&response.body)?;

        tracing::debug!(
            id = %envelope.data.id,
            timestamp = envelope.timestamp,
            "Fetched asset from CoinCap"
        );

        Ok(envelope.into_data())
    }

    /// Builds `{base}/assets/{id}` with the id as a single encoded segment
    fn asset_url(&self, id: &str) -> Result<String, ClientError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, ASSETS_ENDPOINT))
            .map_err(|e| ClientError::invalid_configuration(format!("invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_configuration("base URL cannot be a base"))?
            .push(id);
        Ok(url.into())
    }

    async fn get(&self, url: String) -> Result<HttpResponse, ClientError> {
        let mut request = HttpRequest::get(url);
        request
            .headers
            .insert(AUTHORIZATION, self.auth_header.clone());
        request
            .headers
            .insert(ACCEPT, HeaderValue::from_static("application/json"));

        self.transport.execute(request).await
    }
}
