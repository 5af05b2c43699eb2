//! REST API client for the BigONE cryptocurrency exchange
//!
//! This crate provides a complete client for BigONE's spot REST API (v3),
//! including market data, account management, order execution, and funding
//! operations.
//!
//! # Features
//!
//! - **Market Data**: Tickers, order book, recent trades, candles, asset pairs
//! - **Account**: Spot/fund balances, trading fees
//! - **Trading**: Place, cancel, and list orders; own trade history
//! - **Funding**: Withdrawals, deposits, deposit addresses, transfers
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Each private call carries an
//! `Authorization: Bearer` header with an HS256-signed token minted for that
//! request, as specified by BigONE's API documentation.
//!
//! # Example
//!
//! ```no_run
//! use bigone_rest::{BigOneClient, Credentials, OrderRequest};
//! use bigone_types::OrderSide;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BigOneClient::new();
//!     let ticker = client.get_ticker("BTC-USDT").await?;
//!     println!("BTC-USDT: {:?}", ticker.close);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = BigOneClient::with_credentials(creds);
//!     let order = OrderRequest::limit(
//!         "BTC-USDT",
//!         OrderSide::Bid,
//!         Decimal::ONE,
//!         Decimal::from(50_000),
//!     )
//!     .with_client_order_id("abc123");
//!     let placed = auth_client.create_order(&order).await?;
//!     println!("Order id: {}", placed.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Rate Limiting
//!
//! The client performs no throttling or retries. BigONE allows 500
//! requests/second per IP and 2000 requests/hour per account; see
//! `bigone_types::limits` for the documented constants.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod types;

// Re-export main types
pub use client::{BigOneClient, ClientConfig};
pub use error::{RestError, RestResult};
pub use request::BASE_URL;

// Re-export the auth surface so callers need one import
pub use bigone_auth::{AuthError, Credentials};

// Re-export endpoint-specific types
pub use types::{
    // Envelope
    ApiResponse,
    // Market data
    Asset, AssetPair, Candle, OrderBook, PriceLevel, Ticker, Trade,
    // Account
    AccountBalance, TradingFee,
    // Trading
    AccountTrade, CancelAllResult, Order, OrderRequest, PageOptions,
    // Funding
    Deposit, DepositAddress, TransferRequest, Withdrawal, WithdrawalRequest,
};
