//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use reqwest::Client;
use tracing::{debug, instrument};

use bigone_auth::Credentials;
use bigone_types::{OrderSide, OrderStateFilter};

use crate::error::RestResult;
use crate::request::{self, Params};
use crate::types::{AccountTrade, CancelAllResult, Order, OrderRequest, PageOptions};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    http: &'a Client,
    base_url: &'a str,
    credentials: &'a Credentials,
}

impl<'a> TradingEndpoints<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, credentials: &'a Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// List the account's orders
    ///
    /// # Arguments
    /// * `pair` - Filter by asset pair name
    /// * `side` - Filter by order side
    /// * `state` - Filter by state (exchange default PENDING)
    /// * `page` - Cursor options (limit default 20, max 200)
    #[instrument(skip(self, page))]
    pub async fn get_orders(
        &self,
        pair: Option<&str>,
        side: Option<OrderSide>,
        state: Option<OrderStateFilter>,
        page: &PageOptions,
    ) -> RestResult<Vec<Order>> {
        let params = Params::new()
            .insert_opt("asset_pair_name", pair)
            .insert_opt("side", side.map(|s| s.as_str()))
            .insert_opt("state", state.map(|s| s.as_str()))
            .page(page);

        request::private_get(self.http, self.base_url, self.credentials, "viewer/orders", params)
            .await
    }

    /// Fetch one order by id
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: u64) -> RestResult<Order> {
        let path = format!("viewer/orders/{}", order_id);
        request::private_get(self.http, self.base_url, self.credentials, &path, Params::new())
            .await
    }

    /// Place a new order
    ///
    /// Optional fields that are unset never appear in the body; the stop
    /// fields only apply to STOP_LIMIT/STOP_MARKET orders and the
    /// time-in-force flags only to LIMIT orders.
    #[instrument(
        skip(self, order),
        fields(pair = %order.asset_pair_name, side = ?order.side, order_type = ?order.order_type)
    )]
    pub async fn create_order(&self, order: &OrderRequest) -> RestResult<Order> {
        let params = Params::new()
            .insert("asset_pair_name", order.asset_pair_name.as_str())
            .insert("side", order.side.as_str())
            .insert_opt("price", order.price.map(|p| p.to_string()))
            .insert("amount", order.amount.to_string())
            .insert("type", order.order_type.as_str())
            .insert_opt("stop_price", order.stop_price.map(|p| p.to_string()))
            .insert_opt("operator", order.operator.map(|o| o.as_str()))
            .insert_opt(
                "immediate_or_cancel",
                order.immediate_or_cancel.then_some(true),
            )
            .insert_opt("post_only", order.post_only.then_some(true))
            .insert_opt("client_order_id", order.client_order_id.as_deref());

        debug!(
            "Placing {} {} order for {} {}",
            order.side.as_str(),
            order.order_type.as_str(),
            order.amount,
            order.asset_pair_name
        );

        request::private_post(self.http, self.base_url, self.credentials, "viewer/orders", params)
            .await
    }

    /// Cancel one order by id
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: u64) -> RestResult<Order> {
        let path = format!("viewer/orders/{}/cancel", order_id);
        debug!("Cancelling order {}", order_id);
        request::private_post(self.http, self.base_url, self.credentials, &path, Params::new())
            .await
    }

    /// Cancel all orders in one asset pair
    #[instrument(skip(self))]
    pub async fn cancel_all_orders(&self, pair: &str) -> RestResult<CancelAllResult> {
        let params = Params::new().insert("asset_pair_name", pair);
        debug!("Cancelling all {} orders", pair);
        request::private_post(
            self.http,
            self.base_url,
            self.credentials,
            "viewer/orders/cancel_all",
            params,
        )
        .await
    }

    /// List the account's own trades
    ///
    /// # Arguments
    /// * `pair` - Filter by asset pair name
    /// * `page` - Cursor options (limit default 20, max 200)
    #[instrument(skip(self, page))]
    pub async fn get_trade_history(
        &self,
        pair: Option<&str>,
        page: &PageOptions,
    ) -> RestResult<Vec<AccountTrade>> {
        let params = Params::new().insert_opt("asset_pair_name", pair).page(page);
        request::private_get(self.http, self.base_url, self.credentials, "viewer/trades", params)
            .await
    }
}
