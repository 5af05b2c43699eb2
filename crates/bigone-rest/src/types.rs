//! Types for BigONE REST API requests and responses

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use bigone_types::{AccountType, FundingState, OrderSide, OrderState, OrderType, StopOperator};

use crate::error::{RestError, RestResult};

// ============================================================================
// API Response Envelope
// ============================================================================

/// Standard BigONE response envelope
///
/// Every endpoint returns `{code, data}` on success and `{code, message}` on
/// failure; `code == 0` signals success.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// Envelope code (0 = success)
    pub code: i64,
    /// Result payload (present on success)
    pub data: Option<T>,
    /// Error message (present on failure)
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Check if the envelope indicates success
    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Get the payload, returning an error for a non-zero code
    pub fn into_result(self) -> RestResult<T> {
        if self.code == 0 {
            self.data
                .ok_or_else(|| RestError::Parse("No data in response".to_string()))
        } else {
            Err(RestError::Api {
                code: self.code,
                message: self
                    .message
                    .unwrap_or_else(|| "unknown error".to_string()),
            })
        }
    }

    /// Check the code only, for endpoints whose success payload is empty
    pub fn into_empty(self) -> RestResult<()> {
        if self.code == 0 {
            Ok(())
        } else {
            Err(RestError::Api {
                code: self.code,
                message: self
                    .message
                    .unwrap_or_else(|| "unknown error".to_string()),
            })
        }
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Cursor options for paginated list endpoints
///
/// `page_token` is an opaque cursor returned by the exchange; `limit` has an
/// endpoint-specific default and maximum. Both pass through verbatim.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Request the page after this cursor
    pub page_token: Option<String>,
    /// Page size
    pub limit: Option<u32>,
}

impl PageOptions {
    /// Create empty page options (first page, default size)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page cursor
    pub fn with_page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// One side of a quote or one order book level
#[derive(Debug, Clone, Deserialize)]
pub struct PriceLevel {
    /// Price
    pub price: Decimal,
    /// Number of orders at this price
    pub order_count: Option<u32>,
    /// Total quantity at this price
    pub quantity: Decimal,
}

/// Ticker for one asset pair
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// Asset pair name, e.g. "BTC-USDT"
    pub asset_pair_name: String,
    /// Best bid
    pub bid: Option<PriceLevel>,
    /// Best ask
    pub ask: Option<PriceLevel>,
    /// 24h opening price
    pub open: Option<Decimal>,
    /// 24h high
    pub high: Option<Decimal>,
    /// 24h low
    pub low: Option<Decimal>,
    /// Last trade price
    pub close: Option<Decimal>,
    /// 24h volume
    pub volume: Option<Decimal>,
    /// 24h price change
    pub daily_change: Option<Decimal>,
    /// 24h price change percentage
    pub daily_change_perc: Option<Decimal>,
}

impl Ticker {
    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bid.as_ref().map(|level| level.price)
    }

    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.ask.as_ref().map(|level| level.price)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// Order book snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct OrderBook {
    /// Asset pair name
    pub asset_pair_name: String,
    /// Bid levels, best first
    pub bids: Vec<PriceLevel>,
    /// Ask levels, best first
    pub asks: Vec<PriceLevel>,
}

impl OrderBook {
    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|level| level.price)
    }

    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|level| level.price)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// A public trade
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    /// Trade id
    pub id: u64,
    /// Execution price
    pub price: Decimal,
    /// Executed amount
    pub amount: Decimal,
    /// Side of the taker order
    pub taker_side: OrderSide,
    /// Execution time
    pub created_at: DateTime<Utc>,
}

/// OHLCV candle
#[derive(Debug, Clone, Deserialize)]
pub struct Candle {
    /// Open price
    pub open: Decimal,
    /// High price
    pub high: Decimal,
    /// Low price
    pub low: Decimal,
    /// Close price
    pub close: Decimal,
    /// Volume
    pub volume: Decimal,
    /// Candle close time
    pub time: DateTime<Utc>,
}

/// Asset reference data
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    /// Asset id
    pub id: Option<String>,
    /// Asset symbol, e.g. "BTC"
    pub symbol: String,
    /// Display name
    pub name: Option<String>,
}

/// Asset pair reference data
#[derive(Debug, Clone, Deserialize)]
pub struct AssetPair {
    /// Pair id
    pub id: Option<String>,
    /// Pair name, e.g. "BTC-USDT"
    pub name: String,
    /// Decimal places for quote prices
    pub quote_scale: u32,
    /// Decimal places for base amounts
    pub base_scale: u32,
    /// Minimum order value in quote units
    pub min_quote_value: Option<Decimal>,
    /// Base asset
    pub base_asset: Asset,
    /// Quote asset
    pub quote_asset: Asset,
}

// ============================================================================
// Account Types
// ============================================================================

/// Balance of one asset in a spot or fund account
#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalance {
    /// Asset symbol
    pub asset_symbol: String,
    /// Available balance
    pub balance: Decimal,
    /// Balance locked by open orders or pending withdrawals
    pub locked_balance: Decimal,
}

/// Maker/taker fee rates for one asset pair
#[derive(Debug, Clone, Deserialize)]
pub struct TradingFee {
    /// Asset pair name
    pub asset_pair_name: String,
    /// Maker fee rate
    pub maker_fee_rate: Decimal,
    /// Taker fee rate
    pub taker_fee_rate: Decimal,
}

// ============================================================================
// Trading Types
// ============================================================================

/// An order as reported by the exchange
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Order id
    pub id: u64,
    /// Asset pair name
    pub asset_pair_name: String,
    /// Limit price (zero for market orders)
    pub price: Option<Decimal>,
    /// Order amount
    pub amount: Decimal,
    /// Filled amount
    pub filled_amount: Decimal,
    /// Average fill price
    pub avg_deal_price: Option<Decimal>,
    /// Order side
    pub side: OrderSide,
    /// Order state
    pub state: OrderState,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: Option<OrderType>,
    /// Caller-supplied idempotency key
    pub client_order_id: Option<String>,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    pub updated_at: Option<DateTime<Utc>>,
}

/// A fill on one of the account's own orders
#[derive(Debug, Clone, Deserialize)]
pub struct AccountTrade {
    /// Trade id
    pub id: u64,
    /// Asset pair name
    pub asset_pair_name: String,
    /// Execution price
    pub price: Decimal,
    /// Executed amount
    pub amount: Decimal,
    /// Side of the taker order
    pub taker_side: OrderSide,
    /// Maker order id, when the account was maker
    pub maker_order_id: Option<u64>,
    /// Taker order id, when the account was taker
    pub taker_order_id: Option<u64>,
    /// Fee paid as maker
    pub maker_fee: Option<Decimal>,
    /// Fee paid as taker
    pub taker_fee: Option<Decimal>,
    /// The account's role in this trade as reported by the exchange
    pub side: Option<String>,
    /// Execution time
    pub created_at: Option<DateTime<Utc>>,
}

/// Result of cancelling all orders in one asset pair
#[derive(Debug, Clone, Deserialize)]
pub struct CancelAllResult {
    /// Ids of cancelled orders
    #[serde(default)]
    pub cancelled: Vec<u64>,
    /// Ids the exchange failed to cancel
    #[serde(default)]
    pub failed: Vec<u64>,
}

/// Request to place an order
///
/// `client_order_id` must match `^[a-zA-Z0-9-_]{1,36}$` and is unique per
/// 24 hours; the exchange validates it server-side.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Asset pair name, e.g. "BTC-USDT"
    pub asset_pair_name: String,
    /// Order side
    pub side: OrderSide,
    /// Order type
    pub order_type: OrderType,
    /// Order amount, must be greater than zero
    pub amount: Decimal,
    /// Limit price (required for LIMIT and STOP_LIMIT)
    pub price: Option<Decimal>,
    /// Trigger price, only for stop orders
    pub stop_price: Option<Decimal>,
    /// Trigger operator, only for stop orders
    pub operator: Option<StopOperator>,
    /// Cancel any unfilled remainder immediately (LIMIT only, excludes post_only)
    pub immediate_or_cancel: bool,
    /// Reject the order instead of taking liquidity (LIMIT only)
    pub post_only: bool,
    /// Caller-supplied idempotency key
    pub client_order_id: Option<String>,
}

impl OrderRequest {
    /// Create a limit order
    pub fn limit(
        asset_pair_name: impl Into<String>,
        side: OrderSide,
        amount: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            asset_pair_name: asset_pair_name.into(),
            side,
            order_type: OrderType::Limit,
            amount,
            price: Some(price),
            stop_price: None,
            operator: None,
            immediate_or_cancel: false,
            post_only: false,
            client_order_id: None,
        }
    }

    /// Create a market order
    pub fn market(asset_pair_name: impl Into<String>, side: OrderSide, amount: Decimal) -> Self {
        Self {
            asset_pair_name: asset_pair_name.into(),
            side,
            order_type: OrderType::Market,
            amount,
            price: None,
            stop_price: None,
            operator: None,
            immediate_or_cancel: false,
            post_only: false,
            client_order_id: None,
        }
    }

    /// Create a stop-limit order
    ///
    /// On the BID side the price cannot exceed 110% of the stop price; on the
    /// ASK side it cannot fall below 90% of it.
    pub fn stop_limit(
        asset_pair_name: impl Into<String>,
        side: OrderSide,
        amount: Decimal,
        price: Decimal,
        stop_price: Decimal,
        operator: StopOperator,
    ) -> Self {
        Self {
            asset_pair_name: asset_pair_name.into(),
            side,
            order_type: OrderType::StopLimit,
            amount,
            price: Some(price),
            stop_price: Some(stop_price),
            operator: Some(operator),
            immediate_or_cancel: false,
            post_only: false,
            client_order_id: None,
        }
    }

    /// Set the idempotency key
    pub fn with_client_order_id(mut self, client_order_id: impl Into<String>) -> Self {
        self.client_order_id = Some(client_order_id.into());
        self
    }

    /// Cancel any unfilled remainder immediately
    pub fn immediate_or_cancel(mut self) -> Self {
        self.immediate_or_cancel = true;
        self
    }

    /// Make this a maker-only order
    pub fn post_only(mut self) -> Self {
        self.post_only = true;
        self
    }
}

// ============================================================================
// Funding Types
// ============================================================================

/// A withdrawal record
#[derive(Debug, Clone, Deserialize)]
pub struct Withdrawal {
    /// Withdrawal id
    pub id: u64,
    /// Asset symbol
    pub asset_symbol: String,
    /// Withdrawn amount
    pub amount: Decimal,
    /// Confirmation state
    pub state: FundingState,
    /// On-chain transaction id
    pub txid: Option<String>,
    /// Destination address
    pub target_address: Option<String>,
    /// Destination memo/tag
    pub memo: Option<String>,
    /// Withdrawal kind
    pub kind: Option<String>,
    /// Completion time
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation time
    pub inserted_at: Option<DateTime<Utc>>,
}

/// A deposit record
#[derive(Debug, Clone, Deserialize)]
pub struct Deposit {
    /// Deposit id
    pub id: u64,
    /// Asset symbol
    pub asset_symbol: String,
    /// Deposited amount
    pub amount: Decimal,
    /// Confirmation state
    pub state: FundingState,
    /// On-chain transaction id
    pub txid: Option<String>,
    /// Confirmations seen so far
    pub confirms: Option<u32>,
    /// Deposit kind
    pub kind: Option<String>,
    /// First-seen time
    pub inserted_at: Option<DateTime<Utc>>,
    /// Confirmation time
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// A deposit address for one chain
#[derive(Debug, Clone, Deserialize)]
pub struct DepositAddress {
    /// Chain name
    pub chain: Option<String>,
    /// The address itself
    pub value: String,
    /// Memo/tag required alongside the address, when the chain needs one
    pub memo: Option<String>,
}

/// Request to withdraw an asset
#[derive(Debug, Clone)]
pub struct WithdrawalRequest {
    /// Asset symbol, e.g. "BTC"
    pub symbol: String,
    /// Destination address
    pub target_address: String,
    /// Amount to withdraw
    pub amount: Decimal,
    /// Destination memo/tag
    pub memo: Option<String>,
    /// Caller-supplied idempotency key
    pub guid: Option<String>,
    /// Gateway to withdraw through, when the asset has several
    pub gateway_name: Option<String>,
}

impl WithdrawalRequest {
    /// Create a withdrawal request
    pub fn new(
        symbol: impl Into<String>,
        target_address: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            target_address: target_address.into(),
            amount,
            memo: None,
            guid: None,
            gateway_name: None,
        }
    }

    /// Set the destination memo/tag
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Set the idempotency key
    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }

    /// Set the gateway
    pub fn with_gateway(mut self, gateway_name: impl Into<String>) -> Self {
        self.gateway_name = Some(gateway_name.into());
        self
    }
}

/// Request to move funds between the account's own sub-accounts
#[derive(Debug, Clone)]
pub struct TransferRequest {
    /// Asset symbol, e.g. "BTC"
    pub symbol: String,
    /// Amount to move
    pub amount: Decimal,
    /// Source account
    pub from: AccountType,
    /// Destination account
    pub to: AccountType,
    /// Caller-supplied idempotency key
    pub guid: Option<String>,
    /// Transfer type, pass-through
    pub transfer_type: Option<String>,
    /// Target sub-account id
    pub sub_account: Option<String>,
}

impl TransferRequest {
    /// Create a transfer request
    pub fn new(
        symbol: impl Into<String>,
        amount: Decimal,
        from: AccountType,
        to: AccountType,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
            from,
            to,
            guid: None,
            transfer_type: None,
            sub_account: None,
        }
    }

    /// Set the idempotency key
    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }

    /// Set the transfer type
    pub fn with_type(mut self, transfer_type: impl Into<String>) -> Self {
        self.transfer_type = Some(transfer_type.into());
        self
    }

    /// Set the target sub-account
    pub fn with_sub_account(mut self, sub_account: impl Into<String>) -> Self {
        self.sub_account = Some(sub_account.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success() {
        let response: ApiResponse<Vec<u64>> =
            serde_json::from_str(r#"{"code":0,"data":[1,2,3]}"#).unwrap();
        assert!(response.is_success());
        assert_eq!(response.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_error() {
        let response: ApiResponse<Vec<u64>> =
            serde_json::from_str(r#"{"code":10013,"message":"order not found"}"#).unwrap();
        assert!(!response.is_success());

        match response.into_result() {
            Err(RestError::Api { code, message }) => {
                assert_eq!(code, 10013);
                assert_eq!(message, "order not found");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_envelope_empty_data() {
        let response: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"code":0,"data":null}"#).unwrap();
        assert!(response.into_empty().is_ok());
    }

    #[test]
    fn test_ticker_accessors() {
        let ticker: Ticker = serde_json::from_str(
            r#"{
                "asset_pair_name": "BTC-USDT",
                "bid": {"price": "49999", "order_count": 2, "quantity": "1.5"},
                "ask": {"price": "50001", "order_count": 1, "quantity": "0.5"},
                "close": "50000"
            }"#,
        )
        .unwrap();

        assert_eq!(ticker.best_bid(), Some(Decimal::from(49999)));
        assert_eq!(ticker.best_ask(), Some(Decimal::from(50001)));
        assert_eq!(ticker.spread(), Some(Decimal::from(2)));
    }

    #[test]
    fn test_order_book_accessors() {
        let book: OrderBook = serde_json::from_str(
            r#"{
                "asset_pair_name": "BTC-USDT",
                "bids": [{"price": "100", "quantity": "1"}],
                "asks": []
            }"#,
        )
        .unwrap();

        assert_eq!(book.best_bid(), Some(Decimal::from(100)));
        assert_eq!(book.best_ask(), None);
        assert_eq!(book.spread(), None);
    }

    #[test]
    fn test_order_request_builder() {
        let order = OrderRequest::limit("BTC-USDT", OrderSide::Bid, Decimal::ONE, Decimal::from(100))
            .post_only()
            .with_client_order_id("abc123");

        assert_eq!(order.asset_pair_name, "BTC-USDT");
        assert_eq!(order.side, OrderSide::Bid);
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.price, Some(Decimal::from(100)));
        assert!(order.post_only);
        assert!(!order.immediate_or_cancel);
        assert_eq!(order.client_order_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_stop_limit_builder() {
        let order = OrderRequest::stop_limit(
            "BTC-USDT",
            OrderSide::Ask,
            Decimal::ONE,
            Decimal::from(95),
            Decimal::from(100),
            StopOperator::Lte,
        );

        assert_eq!(order.order_type, OrderType::StopLimit);
        assert_eq!(order.stop_price, Some(Decimal::from(100)));
        assert_eq!(order.operator, Some(StopOperator::Lte));
    }

    #[test]
    fn test_order_deserializes_wire_shape() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 10,
                "asset_pair_name": "EOS-BTC",
                "price": "10.00",
                "amount": "10.00",
                "filled_amount": "9.0",
                "avg_deal_price": "12.0",
                "side": "ASK",
                "state": "FILLED",
                "type": "LIMIT",
                "created_at": "2019-01-29T06:05:56Z",
                "updated_at": "2019-01-29T06:05:56Z"
            }"#,
        )
        .unwrap();

        assert_eq!(order.id, 10);
        assert_eq!(order.side, OrderSide::Ask);
        assert_eq!(order.state, OrderState::Filled);
        assert_eq!(order.order_type, Some(OrderType::Limit));
    }
}
