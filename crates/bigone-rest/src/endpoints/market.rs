//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use tracing::instrument;

use bigone_types::CandlePeriod;

use crate::error::RestResult;
use crate::request::{self, Params};
use crate::types::{AssetPair, Candle, OrderBook, Ticker, Trade};

/// Maximum order book levels per side (default 50)
const MAX_DEPTH_LEVELS: u32 = 200;

/// Maximum candles per request (default 100)
const MAX_CANDLES: u32 = 500;

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> MarketEndpoints<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Get the ticker for one asset pair
    ///
    /// # Arguments
    /// * `pair` - Asset pair name (e.g., "BTC-USDT")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, pair: &str) -> RestResult<Ticker> {
        let path = format!("asset_pairs/{}/ticker", pair);
        request::public_get(self.http, self.base_url, &path, Params::new()).await
    }

    /// Get tickers for multiple asset pairs
    ///
    /// # Arguments
    /// * `pairs` - Asset pair names (e.g., ["BTC-USDT", "ETH-USDT"])
    #[instrument(skip(self, pairs), fields(count = pairs.len()))]
    pub async fn get_tickers(&self, pairs: &[&str]) -> RestResult<Vec<Ticker>> {
        let params = Params::new().insert("pair_names", pairs.join(","));
        request::public_get(self.http, self.base_url, "asset_pairs/tickers", params).await
    }

    /// Get the order book of one asset pair
    ///
    /// # Arguments
    /// * `pair` - Asset pair name
    /// * `limit` - Number of levels per side (default 50, max 200)
    #[instrument(skip(self))]
    pub async fn get_order_book(&self, pair: &str, limit: Option<u32>) -> RestResult<OrderBook> {
        let path = format!("asset_pairs/{}/depth", pair);
        let params = Params::new().insert_opt("limit", limit.map(|l| l.min(MAX_DEPTH_LEVELS)));
        request::public_get(self.http, self.base_url, &path, params).await
    }

    /// Get recent trades of one asset pair
    ///
    /// The exchange returns at most the 50 latest trades.
    #[instrument(skip(self))]
    pub async fn get_trades(&self, pair: &str) -> RestResult<Vec<Trade>> {
        let path = format!("asset_pairs/{}/trades", pair);
        request::public_get(self.http, self.base_url, &path, Params::new()).await
    }

    /// Get candles of one asset pair
    ///
    /// # Arguments
    /// * `pair` - Asset pair name
    /// * `period` - Candle period (exchange default min1)
    /// * `time` - Latest candle time, current time by default
    /// * `limit` - Number of candles (default 100, max 500)
    #[instrument(skip(self))]
    pub async fn get_candles(
        &self,
        pair: &str,
        period: Option<CandlePeriod>,
        time: Option<DateTime<Utc>>,
        limit: Option<u32>,
    ) -> RestResult<Vec<Candle>> {
        let path = format!("asset_pairs/{}/candles", pair);
        let params = Params::new()
            .insert_opt("period", period.map(|p| p.as_str()))
            .insert_opt(
                "time",
                time.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
            )
            .insert_opt("limit", limit.map(|l| l.min(MAX_CANDLES)));

        request::public_get(self.http, self.base_url, &path, params).await
    }

    /// List all asset pairs
    #[instrument(skip(self))]
    pub async fn get_asset_pairs(&self) -> RestResult<Vec<AssetPair>> {
        request::public_get(self.http, self.base_url, "asset_pairs", Params::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_candle_time_renders_iso8601() {
        let time = Utc.with_ymd_and_hms(2019, 1, 29, 6, 5, 56).unwrap();
        assert_eq!(
            time.to_rfc3339_opts(SecondsFormat::Secs, true),
            "2019-01-29T06:05:56Z"
        );
    }

    #[test]
    fn test_depth_limit_is_clamped() {
        let params = Params::new().insert_opt("limit", Some(1000u32.min(MAX_DEPTH_LEVELS)));
        assert_eq!(params.to_query(), vec![("limit", "200".to_string())]);
    }
}
