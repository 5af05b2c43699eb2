//! Order, candle, and funding enums
//!
//! All enums serialize to the exact strings the exchange expects and expose
//! `as_str()` for building query parameters.

use serde::{Deserialize, Serialize};

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Buy order
    Bid,
    /// Sell order
    Ask,
}

impl OrderSide {
    /// Returns the side as used in API parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bid => "BID",
            Self::Ask => "ASK",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Bid => Self::Ask,
            Self::Ask => Self::Bid,
        }
    }
}

/// Order state as reported by the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    /// Resting on the book, not fully filled
    Pending,
    /// Completely filled
    Filled,
    /// Cancelled by the user or the exchange
    Canceled,
}

impl OrderState {
    /// Returns the state as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Filled => "FILLED",
            Self::Canceled => "CANCELED",
        }
    }
}

/// Order state filter for list queries
///
/// These are query-only aggregates: `CLOSED` matches `FILLED` and `CANCELED`
/// orders, `NONE_FILLED` matches closed orders with zero filled amount, and
/// `ALL` matches everything. The exchange defaults to `PENDING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStateFilter {
    /// Open orders (default)
    Pending,
    /// Fired and pending orders
    Opening,
    /// Filled and cancelled orders
    Closed,
    /// Closed orders with zero filled amount
    NoneFilled,
    /// All orders
    All,
}

impl OrderStateFilter {
    /// Returns the filter as used in query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Opening => "OPENING",
            Self::Closed => "CLOSED",
            Self::NoneFilled => "NONE_FILLED",
            Self::All => "ALL",
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Limit order - executes at the specified price or better
    Limit,
    /// Market order - executes immediately at the best available price
    Market,
    /// Stop-limit order - places a limit order once the stop price triggers
    StopLimit,
    /// Stop-market order - places a market order once the stop price triggers
    StopMarket,
}

impl OrderType {
    /// Returns the order type as used in API parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "LIMIT",
            Self::Market => "MARKET",
            Self::StopLimit => "STOP_LIMIT",
            Self::StopMarket => "STOP_MARKET",
        }
    }

    /// Returns true if this type requires a stop price
    pub fn is_stop(&self) -> bool {
        matches!(self, Self::StopLimit | Self::StopMarket)
    }
}

/// Stop trigger operator, only used with stop orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StopOperator {
    /// Trigger when the market price is greater than or equal to the stop price
    Gte,
    /// Trigger when the market price is less than or equal to the stop price
    Lte,
}

impl StopOperator {
    /// Returns the operator as used in API parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gte => "GTE",
            Self::Lte => "LTE",
        }
    }
}

/// Candlestick period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandlePeriod {
    /// 1 minute
    #[serde(rename = "min1")]
    Min1,
    /// 5 minutes
    #[serde(rename = "min5")]
    Min5,
    /// 15 minutes
    #[serde(rename = "min15")]
    Min15,
    /// 30 minutes
    #[serde(rename = "min30")]
    Min30,
    /// 1 hour
    #[serde(rename = "hour1")]
    Hour1,
    /// 3 hours
    #[serde(rename = "hour3")]
    Hour3,
    /// 4 hours
    #[serde(rename = "hour4")]
    Hour4,
    /// 6 hours
    #[serde(rename = "hour6")]
    Hour6,
    /// 12 hours
    #[serde(rename = "hour12")]
    Hour12,
    /// 1 day
    #[serde(rename = "day1")]
    Day1,
    /// 1 week
    #[serde(rename = "week1")]
    Week1,
    /// 1 month
    #[serde(rename = "month1")]
    Month1,
}

impl CandlePeriod {
    /// Returns the period as used in query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Min1 => "min1",
            Self::Min5 => "min5",
            Self::Min15 => "min15",
            Self::Min30 => "min30",
            Self::Hour1 => "hour1",
            Self::Hour3 => "hour3",
            Self::Hour4 => "hour4",
            Self::Hour6 => "hour6",
            Self::Hour12 => "hour12",
            Self::Day1 => "day1",
            Self::Week1 => "week1",
            Self::Month1 => "month1",
        }
    }
}

/// Account type for internal transfers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Spot trading account
    Spot,
    /// Fund (custody) account
    Fund,
}

impl AccountType {
    /// Returns the account type as used in API parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "SPOT",
            Self::Fund => "FUND",
        }
    }
}

/// Withdrawal and deposit state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FundingState {
    /// Confirmed on chain
    Confirmed,
    /// Awaiting confirmation
    Unconfirmed,
}

impl FundingState {
    /// Returns the state as used in API messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Unconfirmed => "UNCONFIRMED",
        }
    }
}
