//! Funding endpoints for withdrawals, deposits, and transfers
//!
//! These endpoints require authentication.

use reqwest::Client;
use tracing::{debug, instrument};

use bigone_auth::Credentials;

use crate::error::RestResult;
use crate::request::{self, Params};
use crate::types::{
    Deposit, DepositAddress, PageOptions, TransferRequest, Withdrawal, WithdrawalRequest,
};

/// Funding endpoints for withdrawals, deposits, and transfers
pub struct FundingEndpoints<'a> {
    http: &'a Client,
    base_url: &'a str,
    credentials: &'a Credentials,
}

impl<'a> FundingEndpoints<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, credentials: &'a Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// List the account's withdrawals
    ///
    /// # Arguments
    /// * `asset` - Filter by asset symbol
    /// * `kind` - Filter by withdrawal kind, pass-through
    /// * `page` - Cursor options
    #[instrument(skip(self, page))]
    pub async fn get_withdrawals(
        &self,
        asset: Option<&str>,
        kind: Option<&str>,
        page: &PageOptions,
    ) -> RestResult<Vec<Withdrawal>> {
        let params = Params::new()
            .insert_opt("asset_symbol", asset)
            .insert_opt("kind", kind)
            .page(page);

        request::private_get(
            self.http,
            self.base_url,
            self.credentials,
            "viewer/withdrawals",
            params,
        )
        .await
    }

    /// Fetch one withdrawal by id
    #[instrument(skip(self))]
    pub async fn get_withdrawal(&self, withdrawal_id: u64) -> RestResult<Withdrawal> {
        let path = format!("viewer/withdrawals/{}", withdrawal_id);
        request::private_get(self.http, self.base_url, self.credentials, &path, Params::new())
            .await
    }

    /// Request a withdrawal
    #[instrument(skip(self, withdrawal), fields(symbol = %withdrawal.symbol))]
    pub async fn create_withdrawal(
        &self,
        withdrawal: &WithdrawalRequest,
    ) -> RestResult<Withdrawal> {
        let params = Params::new()
            .insert("symbol", withdrawal.symbol.as_str())
            .insert("target_address", withdrawal.target_address.as_str())
            .insert("amount", withdrawal.amount.to_string())
            .insert_opt("memo", withdrawal.memo.as_deref())
            .insert_opt("guid", withdrawal.guid.as_deref())
            .insert_opt("gateway_name", withdrawal.gateway_name.as_deref());

        debug!(
            "Requesting withdrawal of {} {}",
            withdrawal.amount, withdrawal.symbol
        );

        request::private_post(
            self.http,
            self.base_url,
            self.credentials,
            "viewer/withdrawals",
            params,
        )
        .await
    }

    /// Cancel a pending withdrawal by id
    #[instrument(skip(self))]
    pub async fn cancel_withdrawal(&self, withdrawal_id: u64) -> RestResult<()> {
        let path = format!("viewer/withdrawals/{}/cancel", withdrawal_id);
        debug!("Cancelling withdrawal {}", withdrawal_id);
        request::private_post_empty(self.http, self.base_url, self.credentials, &path, Params::new())
            .await
    }

    /// List the account's deposits
    ///
    /// # Arguments
    /// * `asset` - Filter by asset symbol
    /// * `kind` - Filter by deposit kind, pass-through
    /// * `page` - Cursor options
    #[instrument(skip(self, page))]
    pub async fn get_deposits(
        &self,
        asset: Option<&str>,
        kind: Option<&str>,
        page: &PageOptions,
    ) -> RestResult<Vec<Deposit>> {
        let params = Params::new()
            .insert_opt("asset_symbol", asset)
            .insert_opt("kind", kind)
            .page(page);

        request::private_get(
            self.http,
            self.base_url,
            self.credentials,
            "viewer/deposits",
            params,
        )
        .await
    }

    /// Get deposit addresses for one asset, one per chain
    #[instrument(skip(self))]
    pub async fn get_deposit_address(&self, asset: &str) -> RestResult<Vec<DepositAddress>> {
        let path = format!("viewer/assets/{}/address", asset);
        request::private_get(self.http, self.base_url, self.credentials, &path, Params::new())
            .await
    }

    /// Move funds between the account's own sub-accounts
    #[instrument(skip(self, transfer), fields(symbol = %transfer.symbol))]
    pub async fn create_transfer(&self, transfer: &TransferRequest) -> RestResult<()> {
        let params = Params::new()
            .insert("symbol", transfer.symbol.as_str())
            .insert("amount", transfer.amount.to_string())
            .insert("from", transfer.from.as_str())
            .insert("to", transfer.to.as_str())
            .insert_opt("guid", transfer.guid.as_deref())
            .insert_opt("type", transfer.transfer_type.as_deref())
            .insert_opt("sub_account", transfer.sub_account.as_deref());

        debug!(
            "Transferring {} {} from {} to {}",
            transfer.amount,
            transfer.symbol,
            transfer.from.as_str(),
            transfer.to.as_str()
        );

        request::private_post_empty(
            self.http,
            self.base_url,
            self.credentials,
            "viewer/transfer",
            params,
        )
        .await
    }
}
