//! Metrics collaborator: fetches numeric signals for a contract address.
//!
//! The concrete implementation talks to the DexScreener public token API;
//! the trait seam keeps the pipeline testable with fixed-response stubs.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{Error, Result};

/// Numeric signals for one token, as consumed by the score aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenMetrics {
    pub price_usd: f64,
    pub liquidity_usd: f64,
    pub volume_h24_usd: f64,
    pub price_change_h24: f64,
    pub txns_h24: u32,
    pub market_cap_usd: f64,
    pub social_links: u32,
}

/// Capability interface for the external metrics service.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn fetch(&self, ca: &str) -> Result<TokenMetrics>;
}

/// DexScreener-backed metrics source.
pub struct DexScreenerSource {
    http: Client,
    base_url: String,
}

impl DexScreenerSource {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MetricsSource for DexScreenerSource {
    #[instrument(skip(self), fields(ca = %ca))]
    async fn fetch(&self, ca: &str) -> Result<TokenMetrics> {
        let url = format!("{}/latest/dex/tokens/{}", self.base_url, ca);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Metrics(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Metrics(format!(
                "metrics API returned {}",
                response.status()
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::Metrics(format!("invalid metrics response: {e}")))?;

        let metrics = metrics_from_response(body)?;
        debug!(
            liquidity = metrics.liquidity_usd,
            volume = metrics.volume_h24_usd,
            "fetched token metrics"
        );
        Ok(metrics)
    }
}

/// Reduce the pair list to one metrics record, keyed on the deepest pool.
fn metrics_from_response(body: TokenResponse) -> Result<TokenMetrics> {
    let pair = body
        .pairs
        .unwrap_or_default()
        .into_iter()
        .max_by(|a, b| {
            a.liquidity_usd()
                .partial_cmp(&b.liquidity_usd())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .ok_or_else(|| Error::Metrics("no trading pairs found for address".to_string()))?;

    let txns = pair
        .txns
        .as_ref()
        .and_then(|t| t.h24.as_ref())
        .map(|c| c.buys + c.sells)
        .unwrap_or(0);

    let social_links = pair
        .info
        .as_ref()
        .map(|i| {
            i.socials.as_ref().map(Vec::len).unwrap_or(0)
                + i.websites.as_ref().map(Vec::len).unwrap_or(0)
        })
        .unwrap_or(0) as u32;

    Ok(TokenMetrics {
        price_usd: pair
            .price_usd
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(0.0),
        liquidity_usd: pair.liquidity_usd(),
        volume_h24_usd: pair.volume.as_ref().and_then(|v| v.h24).unwrap_or(0.0),
        price_change_h24: pair.price_change.as_ref().and_then(|v| v.h24).unwrap_or(0.0),
        txns_h24: txns,
        market_cap_usd: pair.market_cap.unwrap_or(0.0),
        social_links,
    })
}

// Wire types for the DexScreener token endpoint. Only the fields the
// aggregator consumes are modeled.

#[derive(Debug, Deserialize)]
struct TokenResponse {
    pairs: Option<Vec<PairData>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PairData {
    price_usd: Option<String>,
    liquidity: Option<PairLiquidity>,
    volume: Option<PairWindow>,
    price_change: Option<PairWindow>,
    txns: Option<PairTxns>,
    market_cap: Option<f64>,
    info: Option<PairInfo>,
}

impl PairData {
    fn liquidity_usd(&self) -> f64 {
        self.liquidity.as_ref().and_then(|l| l.usd).unwrap_or(0.0)
    }
}

#[derive(Debug, Deserialize)]
struct PairLiquidity {
    usd: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PairWindow {
    h24: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PairTxns {
    h24: Option<TxnCounts>,
}

#[derive(Debug, Deserialize)]
struct TxnCounts {
    buys: u32,
    sells: u32,
}

#[derive(Debug, Deserialize)]
struct PairInfo {
    socials: Option<Vec<serde_json::Value>>,
    websites: Option<Vec<serde_json::Value>>,
}
