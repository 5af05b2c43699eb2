//! Main REST client implementation

use reqwest::Client;
use std::time::Duration;
use tracing::info;

use bigone_auth::Credentials;
use bigone_types::{OrderSide, OrderStateFilter};

use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::request::BASE_URL;
use crate::types::{
    AccountBalance, AssetPair, CancelAllResult, Order, OrderBook, OrderRequest, PageOptions,
    Ticker, Trade,
};

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// BigONE REST API client
///
/// Provides access to both public and private endpoints. The client holds no
/// mutable state beyond the connection pool and can be cloned and shared
/// across tasks freely.
///
/// # Example
///
/// ```no_run
/// use bigone_rest::{BigOneClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BigOneClient::new();
///     let ticker = client.get_ticker("BTC-USDT").await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = BigOneClient::with_credentials(creds);
///     let balances = auth_client.get_spot_balances().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BigOneClient {
    http: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl BigOneClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_deref().unwrap_or("bigone-rest/0.1.0"))
            .build()
            .expect("Failed to create HTTP client");

        info!("Created BigONE REST client");

        Self {
            http,
            base_url: config.base_url,
            credentials: config.credentials,
        }
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    fn credentials(&self) -> RestResult<&Credentials> {
        self.credentials.as_ref().ok_or(RestError::AuthRequired)
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Get market data endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.http, &self.base_url)
    }

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        Ok(AccountEndpoints::new(
            &self.http,
            &self.base_url,
            self.credentials()?,
        ))
    }

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        Ok(TradingEndpoints::new(
            &self.http,
            &self.base_url,
            self.credentials()?,
        ))
    }

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> RestResult<FundingEndpoints<'_>> {
        Ok(FundingEndpoints::new(
            &self.http,
            &self.base_url,
            self.credentials()?,
        ))
    }

    // ========================================================================
    // Public Market Convenience Methods
    // ========================================================================

    /// Get the ticker for one asset pair
    pub async fn get_ticker(&self, pair: &str) -> RestResult<Ticker> {
        self.market().get_ticker(pair).await
    }

    /// Get tickers for multiple asset pairs
    pub async fn get_tickers(&self, pairs: &[&str]) -> RestResult<Vec<Ticker>> {
        self.market().get_tickers(pairs).await
    }

    /// Get the order book of one asset pair
    pub async fn get_order_book(&self, pair: &str, limit: Option<u32>) -> RestResult<OrderBook> {
        self.market().get_order_book(pair, limit).await
    }

    /// Get recent trades of one asset pair
    pub async fn get_trades(&self, pair: &str) -> RestResult<Vec<Trade>> {
        self.market().get_trades(pair).await
    }

    /// List all asset pairs
    pub async fn get_asset_pairs(&self) -> RestResult<Vec<AssetPair>> {
        self.market().get_asset_pairs().await
    }

    // ========================================================================
    // Private Convenience Methods
    // ========================================================================

    /// Get spot account balances of all assets
    pub async fn get_spot_balances(&self) -> RestResult<Vec<AccountBalance>> {
        self.account()?.get_spot_balances().await
    }

    /// List open orders in one asset pair
    pub async fn get_open_orders(&self, pair: &str) -> RestResult<Vec<Order>> {
        self.trading()?
            .get_orders(
                Some(pair),
                None::<OrderSide>,
                Some(OrderStateFilter::Pending),
                &PageOptions::new(),
            )
            .await
    }

    /// Place a new order
    pub async fn create_order(&self, order: &OrderRequest) -> RestResult<Order> {
        self.trading()?.create_order(order).await
    }

    /// Cancel one order by id
    pub async fn cancel_order(&self, order_id: u64) -> RestResult<Order> {
        self.trading()?.cancel_order(order_id).await
    }

    /// Cancel all orders in one asset pair
    pub async fn cancel_all_orders(&self, pair: &str) -> RestResult<CancelAllResult> {
        self.trading()?.cancel_all_orders(pair).await
    }
}

impl Default for BigOneClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BigOneClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BigOneClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// REST root, `https://big.one/api/v3` unless overridden
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Point the client at a different REST root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
