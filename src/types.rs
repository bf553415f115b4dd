//! Types for the CoinCap assets API
//!
//! Every numeric-looking field is kept as the text the server sent. Use the
//! `*_decimal` helpers when a number is actually needed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market data snapshot for one tracked cryptocurrency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique identifier, e.g. `bitcoin`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,

    /// Rank by market capitalization
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rank: String,

    /// Ticker symbol
    #[serde(default, deserialize_with = "null_as_empty")]
    pub symbol: String,

    /// Display name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Available supply for trading
    #[serde(default, deserialize_with = "null_as_empty")]
    pub supply: String,

    /// Total quantity of the asset ever issued; empty when unbounded
    #[serde(default, deserialize_with = "null_as_empty")]
    pub max_supply: String,

    /// Supply multiplied by price, in USD
    #[serde(default, deserialize_with = "null_as_empty")]
    pub market_cap_usd: String,

    /// Trading volume over the last 24 hours, in USD
    #[serde(
        rename = "volumeUsd24Hr",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub volume_usd_24h: String,

    /// Volume-weighted price, in USD
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price_usd: String,
}

impl Asset {
    /// Rank parsed as an integer
    pub fn rank_number(&self) -> Option<u32> {
        self.rank.trim().parse().ok()
    }

    /// Supply parsed as a decimal
    pub fn supply_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.supply)
    }

    /// Max supply parsed as a decimal, `None` for unbounded assets
    pub fn max_supply_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.max_supply)
    }

    /// Market capitalization parsed as a decimal
    pub fn market_cap_usd_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.market_cap_usd)
    }

    /// 24h volume parsed as a decimal
    pub fn volume_usd_24h_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.volume_usd_24h)
    }

    /// Price parsed as a decimal
    pub fn price_usd_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.price_usd)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id ~ {} | Rank ~ {} | Symbol ~ {} | Name ~ {} | Supply ~ {} | MaxSupply ~ {} | MaketCapUsd ~ {} | VolumeUsd24Hr ~ {} | PriceUsd ~ {}|",
            self.id,
            self.rank,
            self.symbol,
            self.name,
            self.supply,
            self.max_supply,
            self.market_cap_usd,
            self.volume_usd_24h,
            self.price_usd
        )
    }
}

/// Response envelope for `GET /assets`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsResponse {
    /// Assets in the order the server ranked them
    pub data: Vec<Asset>,

    /// Server time in milliseconds since the Unix epoch
    #[serde(default)]
    pub timestamp: i64,
}

impl AssetsResponse {
    /// Server time of the snapshot
    pub fn server_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    pub fn into_data(self) -> Vec<Asset> {
        self.data
    }
}

/// Response envelope for `GET /assets/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetResponse {
    pub data: Asset,

    /// Server time in milliseconds since the Unix epoch
    #[serde(default)]
    pub timestamp: i64,
}

impl AssetResponse {
    /// Server time of the snapshot
    pub fn server_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    pub fn into_data(self) -> Asset {
        self.data
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn parse_decimal(value: &str) -> Option<Decimal> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}
