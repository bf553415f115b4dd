//! Constants for the CoinCap client
//!
//! Endpoint locations, defaults and the names of the environment variables
//! read by [`ClientConfig::from_env`](crate::config::ClientConfig::from_env).

/// CoinCap REST API base URL
pub const COINCAP_API_URL: &str = "https://rest.coincap.io/v3";

/// Assets collection endpoint, relative to the base URL
pub const ASSETS_ENDPOINT: &str = "/assets";

/// HTTP request timeout used when none is configured (in seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the bearer token
pub const API_KEY_ENV: &str = "API_KEY";

/// Environment variable overriding the request timeout (in seconds)
pub const TIMEOUT_ENV: &str = "COINCAP_TIMEOUT_SECS";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "COINCAP_BASE_URL";

/// User agent for HTTP requests
pub const USER_AGENT: &str = "coincap-client/0.1.0";
