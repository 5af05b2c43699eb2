//! Integration tests against a mock HTTP server
//!
//! These verify the wire contract: request paths, query parameters, JSON
//! bodies, bearer tokens, and envelope unwrapping.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64_URL, Engine};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bigone_rest::{BigOneClient, ClientConfig, Credentials, OrderRequest, PageOptions, RestError};
use bigone_types::{CandlePeriod, OrderSide, OrderStateFilter};

const API_KEY: &str = "test-key-id";

fn public_client(server: &MockServer) -> BigOneClient {
    BigOneClient::with_config(ClientConfig::new().with_base_url(server.uri()))
}

fn private_client(server: &MockServer) -> BigOneClient {
    let credentials = Credentials::new(API_KEY, "test-secret").unwrap();
    BigOneClient::with_config(
        ClientConfig::new()
            .with_base_url(server.uri())
            .with_credentials(credentials),
    )
}

fn ok_envelope(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "code": 0, "data": data }))
}

#[tokio::test]
async fn ticker_request_hits_documented_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/asset_pairs/BTC-USDT/ticker"))
        .respond_with(ok_envelope(json!({
            "asset_pair_name": "BTC-USDT",
            "bid": {"price": "49999", "order_count": 2, "quantity": "1.5"},
            "ask": {"price": "50001", "order_count": 1, "quantity": "0.5"},
            "close": "50000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ticker = assert_ok!(public_client(&server).get_ticker("BTC-USDT").await);
    assert_eq!(ticker.asset_pair_name, "BTC-USDT");
    assert_eq!(ticker.best_bid(), Some(Decimal::from(49999)));
}

#[tokio::test]
async fn multi_ticker_request_joins_pair_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/asset_pairs/tickers"))
        .and(query_param("pair_names", "BTC-USDT,ETH-USDT"))
        .respond_with(ok_envelope(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let tickers = assert_ok!(
        public_client(&server)
            .get_tickers(&["BTC-USDT", "ETH-USDT"])
            .await
    );
    assert!(tickers.is_empty());
}

#[tokio::test]
async fn candle_options_pass_through_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/asset_pairs/BTC-USDT/candles"))
        .and(query_param("period", "hour1"))
        .and(query_param("time", "2019-01-29T06:05:56Z"))
        .and(query_param("limit", "200"))
        .respond_with(ok_envelope(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let time = Utc.with_ymd_and_hms(2019, 1, 29, 6, 5, 56).unwrap();
    let candles = assert_ok!(
        public_client(&server)
            .market()
            .get_candles("BTC-USDT", Some(CandlePeriod::Hour1), Some(time), Some(200))
            .await
    );
    assert!(candles.is_empty());
}

#[tokio::test]
async fn trading_fees_request_joins_pair_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/viewer/trading_fees"))
        .and(query_param("asset_pair_names", "BTC-USDT,ETH-USDT"))
        .respond_with(ok_envelope(json!([{
            "asset_pair_name": "BTC-USDT",
            "maker_fee_rate": "0.001",
            "taker_fee_rate": "0.002"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = private_client(&server);
    let fees = assert_ok!(
        client
            .account()
            .unwrap()
            .get_trading_fees(&["BTC-USDT", "ETH-USDT"])
            .await
    );
    assert_eq!(fees.len(), 1);
    assert_eq!(fees[0].maker_fee_rate, Decimal::new(1, 3));
}

#[tokio::test]
async fn absent_filters_never_reach_the_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/viewer/orders"))
        .respond_with(ok_envelope(json!([])))
        .mount(&server)
        .await;

    let client = private_client(&server);
    let orders = assert_ok!(
        client
            .trading()
            .unwrap()
            .get_orders(Some("BTC-USDT"), None, None, &PageOptions::new())
            .await
    );
    assert!(orders.is_empty());

    let requests = server.received_requests().await.unwrap();
    let query: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    assert_eq!(
        query,
        vec![("asset_pair_name".to_string(), "BTC-USDT".to_string())]
    );
}

#[tokio::test]
async fn order_filters_pass_through_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/viewer/orders"))
        .and(query_param("asset_pair_name", "BTC-USDT"))
        .and(query_param("side", "ASK"))
        .and(query_param("state", "NONE_FILLED"))
        .and(query_param("page_token", "cursor=="))
        .and(query_param("limit", "100"))
        .respond_with(ok_envelope(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let page = PageOptions::new().with_page_token("cursor==").with_limit(100);
    let client = private_client(&server);
    assert_ok!(
        client
            .trading()
            .unwrap()
            .get_orders(
                Some("BTC-USDT"),
                Some(OrderSide::Ask),
                Some(OrderStateFilter::NoneFilled),
                &page,
            )
            .await
    );
}

#[tokio::test]
async fn create_order_body_matches_documented_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/viewer/orders"))
        .respond_with(ok_envelope(json!({
            "id": 10,
            "asset_pair_name": "BTC-USDT",
            "price": "100",
            "amount": "1",
            "filled_amount": "0",
            "side": "BID",
            "state": "PENDING",
            "type": "LIMIT",
            "client_order_id": "abc123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let order = OrderRequest::limit("BTC-USDT", OrderSide::Bid, Decimal::ONE, Decimal::from(100))
        .with_client_order_id("abc123");

    let placed = assert_ok!(private_client(&server).create_order(&order).await);
    assert_eq!(placed.id, 10);

    // The body must contain exactly the set fields; unset optionals
    // (stop_price, operator, flags) must be omitted, not null.
    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        body,
        json!({
            "asset_pair_name": "BTC-USDT",
            "side": "BID",
            "price": "100",
            "amount": "1",
            "type": "LIMIT",
            "client_order_id": "abc123"
        })
    );
}

#[tokio::test]
async fn private_calls_carry_a_decodable_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/viewer/accounts"))
        .respond_with(ok_envelope(json!([])))
        .mount(&server)
        .await;

    assert_ok!(private_client(&server).get_spot_balances().await);

    let requests = server.received_requests().await.unwrap();
    let authorization = requests[0]
        .headers
        .get("authorization")
        .expect("missing Authorization header")
        .to_str()
        .unwrap();

    let token = authorization
        .strip_prefix("Bearer ")
        .expect("not a bearer credential");
    let segments: Vec<&str> = token.split('.').collect();
    assert_eq!(segments.len(), 3);

    let payload: serde_json::Value =
        serde_json::from_slice(&BASE64_URL.decode(segments[1]).unwrap()).unwrap();
    assert_eq!(payload["sub"], API_KEY);
    assert_eq!(payload["type"], "OpenAPIV2");
    assert!(payload["nonce"].is_u64());
}

#[tokio::test]
async fn nonzero_envelope_code_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/asset_pairs/BTC-USDT/ticker"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "code": 10013, "message": "asset pair not found" })),
        )
        .mount(&server)
        .await;

    let result = public_client(&server).get_ticker("BTC-USDT").await;
    match result {
        Err(RestError::Api { code, message }) => {
            assert_eq!(code, 10013);
            assert_eq!(message, "asset pair not found");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn transport_failure_becomes_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/asset_pairs/BTC-USDT/ticker"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = public_client(&server).get_ticker("BTC-USDT").await;
    assert!(matches!(result, Err(RestError::Http(_))));
}

#[tokio::test]
async fn empty_payload_endpoints_succeed_on_code_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/viewer/withdrawals/100/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "code": 0, "data": null })))
        .expect(1)
        .mount(&server)
        .await;

    let client = private_client(&server);
    assert_ok!(client.funding().unwrap().cancel_withdrawal(100).await);
}

#[tokio::test]
async fn balance_path_substitutes_asset_symbol() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/viewer/accounts/BTC"))
        .respond_with(ok_envelope(json!({
            "asset_symbol": "BTC",
            "balance": "1.5",
            "locked_balance": "0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = private_client(&server);
    let balance = assert_ok!(client.account().unwrap().get_spot_balance("BTC").await);
    assert_eq!(balance.asset_symbol, "BTC");
    assert_eq!(balance.balance, Decimal::new(15, 1));
}
