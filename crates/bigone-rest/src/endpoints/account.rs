//! Private account endpoints
//!
//! These endpoints require authentication.

use reqwest::Client;
use tracing::instrument;

use bigone_auth::Credentials;

use crate::error::RestResult;
use crate::request::{self, Params};
use crate::types::{AccountBalance, TradingFee};

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    http: &'a Client,
    base_url: &'a str,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, credentials: &'a Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// Get spot account balances of all assets
    #[instrument(skip(self))]
    pub async fn get_spot_balances(&self) -> RestResult<Vec<AccountBalance>> {
        request::private_get(
            self.http,
            self.base_url,
            self.credentials,
            "viewer/accounts",
            Params::new(),
        )
        .await
    }

    /// Get the spot account balance of one asset
    ///
    /// # Arguments
    /// * `asset` - Asset symbol (e.g., "BTC")
    #[instrument(skip(self))]
    pub async fn get_spot_balance(&self, asset: &str) -> RestResult<AccountBalance> {
        let path = format!("viewer/accounts/{}", asset);
        request::private_get(self.http, self.base_url, self.credentials, &path, Params::new())
            .await
    }

    /// Get fund account balances of all assets
    #[instrument(skip(self))]
    pub async fn get_fund_balances(&self) -> RestResult<Vec<AccountBalance>> {
        request::private_get(
            self.http,
            self.base_url,
            self.credentials,
            "viewer/fund/accounts",
            Params::new(),
        )
        .await
    }

    /// Get the fund account balance of one asset
    #[instrument(skip(self))]
    pub async fn get_fund_balance(&self, asset: &str) -> RestResult<AccountBalance> {
        let path = format!("viewer/fund/accounts/{}", asset);
        request::private_get(self.http, self.base_url, self.credentials, &path, Params::new())
            .await
    }

    /// Get maker/taker fee rates for the given asset pairs
    ///
    /// # Arguments
    /// * `pairs` - Asset pair names (e.g., ["BTC-USDT", "ETH-USDT"])
    #[instrument(skip(self, pairs), fields(count = pairs.len()))]
    pub async fn get_trading_fees(&self, pairs: &[&str]) -> RestResult<Vec<TradingFee>> {
        let params = Params::new().insert("asset_pair_names", pairs.join(","));
        request::private_get(
            self.http,
            self.base_url,
            self.credentials,
            "viewer/trading_fees",
            params,
        )
        .await
    }
}
