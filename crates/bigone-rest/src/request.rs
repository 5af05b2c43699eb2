//! Shared request dispatch
//!
//! Every endpoint funnels through the three functions here: unauthenticated
//! GET, authenticated GET, and authenticated POST. Private calls mint a fresh
//! bearer token per request; a signing failure surfaces before any network
//! I/O happens.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use bigone_auth::{sign_token, Credentials};

use crate::error::RestResult;
use crate::types::{ApiResponse, PageOptions};

/// Versioned BigONE REST root
pub const BASE_URL: &str = "https://big.one/api/v3";

/// Ordered request parameters with an omit-if-absent rule
///
/// Keys with absent values never reach the query string or body; nothing is
/// ever serialized as a literal null.
#[derive(Debug, Default)]
pub(crate) struct Params {
    entries: Vec<(&'static str, Value)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.entries.push((key, value.into()));
        self
    }

    pub fn insert_opt(self, key: &'static str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.insert(key, value),
            None => self,
        }
    }

    pub fn page(self, page: &PageOptions) -> Self {
        self.insert_opt("page_token", page.page_token.as_deref())
            .insert_opt("limit", page.limit)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Query-string view; string values are rendered without JSON quoting
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        self.entries
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (*key, rendered)
            })
            .collect()
    }

    /// JSON object view for POST bodies
    pub fn into_body(self) -> Value {
        let mut body = Map::with_capacity(self.entries.len());
        for (key, value) in self.entries {
            body.insert(key.to_string(), value);
        }
        Value::Object(body)
    }
}

/// Issue an unauthenticated GET and unwrap the envelope
pub(crate) async fn public_get<T: DeserializeOwned>(
    http: &Client,
    base_url: &str,
    path: &str,
    params: Params,
) -> RestResult<T> {
    let url = format!("{}/{}", base_url, path);
    debug!("GET {}", path);

    let mut request = http.get(&url);
    if !params.is_empty() {
        request = request.query(&params.to_query());
    }

    let response: ApiResponse<T> = request
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    response.into_result()
}

/// Issue an authenticated GET and unwrap the envelope
pub(crate) async fn private_get<T: DeserializeOwned>(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    path: &str,
    params: Params,
) -> RestResult<T> {
    let token = sign_token(credentials)?;
    let url = format!("{}/{}", base_url, path);
    debug!("GET {} (authenticated)", path);

    let mut request = http.get(&url).bearer_auth(token);
    if !params.is_empty() {
        request = request.query(&params.to_query());
    }

    let response: ApiResponse<T> = request
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    response.into_result()
}

/// Issue an authenticated POST with a JSON body and unwrap the envelope
pub(crate) async fn private_post<T: DeserializeOwned>(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    path: &str,
    params: Params,
) -> RestResult<T> {
    let response = private_post_raw(http, base_url, credentials, path, params).await?;
    response.into_result()
}

/// Authenticated POST for endpoints whose success payload is empty
pub(crate) async fn private_post_empty(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    path: &str,
    params: Params,
) -> RestResult<()> {
    let response: ApiResponse<Value> =
        private_post_raw(http, base_url, credentials, path, params).await?;
    response.into_empty()
}

async fn private_post_raw<T: DeserializeOwned>(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    path: &str,
    params: Params,
) -> RestResult<ApiResponse<T>> {
    let token = sign_token(credentials)?;
    let url = format!("{}/{}", base_url, path);
    debug!("POST {} (authenticated)", path);

    let response = http
        .post(&url)
        .bearer_auth(token)
        .json(&params.into_body())
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_are_omitted() {
        let params = Params::new()
            .insert("asset_pair_name", "BTC-USDT")
            .insert_opt("side", None::<&str>)
            .insert_opt("limit", Some(20u32));

        let query = params.to_query();
        assert_eq!(
            query,
            vec![
                ("asset_pair_name", "BTC-USDT".to_string()),
                ("limit", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_body_keeps_scalar_types() {
        let body = Params::new()
            .insert("price", "100")
            .insert("post_only", true)
            .into_body();

        assert_eq!(body["price"], "100");
        assert_eq!(body["post_only"], true);
        assert!(body.get("stop_price").is_none());
    }

    #[test]
    fn test_page_options_pass_through() {
        let page = PageOptions::new().with_page_token("cursor==").with_limit(50);
        let query = Params::new().page(&page).to_query();

        assert_eq!(
            query,
            vec![
                ("page_token", "cursor==".to_string()),
                ("limit", "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_page_options_add_nothing() {
        let params = Params::new().page(&PageOptions::new());
        assert!(params.is_empty());
    }
}
