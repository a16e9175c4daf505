//! HTTP client for the Stacks node API.
//!
//! Only the three endpoints the pool flows need:
//! - `POST /v2/contracts/call-read/{address}/{name}/{function}`
//! - `GET  /extended/v1/tx/{txid}`
//! - `GET  /extended/v1/address/{principal}/balances`
//!
//! Every request carries a timeout, 10 seconds unless built with
//! [`StacksClient::with_timeout`]. Nothing is retried.

use crate::clarity::ClarityValue;
use crate::error::ClientError;
use crate::principal::{ContractPrincipal, PrincipalData};
use crate::tx::TxRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct ReadOnlyRequest<'a> {
    sender: &'a str,
    arguments: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ReadOnlyResponse {
    okay: bool,
    result: Option<String>,
    cause: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StxBalance {
    #[serde(with = "crate::u128_str")]
    pub balance: u128,
    #[serde(with = "crate::u128_str", default)]
    pub locked: u128,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    #[serde(with = "crate::u128_str")]
    pub balance: u128,
}

/// `/extended/v1/address/{p}/balances`. Fungible tokens are keyed by
/// `"{contract}::{asset}"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalances {
    pub stx: StxBalance,
    #[serde(default)]
    pub fungible_tokens: HashMap<String, TokenBalance>,
}

impl AccountBalances {
    /// Balance of a SIP-010 token, 0 when the account never held it.
    pub fn token(&self, token: &ContractPrincipal) -> u128 {
        let prefix = format!("{}::", token);
        self.fungible_tokens
            .iter()
            .find(|(key, _)| key.starts_with(&prefix))
            .map(|(_, b)| b.balance)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct StacksClient {
    http: reqwest::Client,
    api_url: String,
}

impl StacksClient {
    pub fn new(api_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(api_url, REQUEST_TIMEOUT)
    }

    /// Same as [`StacksClient::new`] with a custom per-request timeout.
    pub fn with_timeout(api_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Evaluate a read-only function and decode its Clarity result.
    pub async fn call_read_only(
        &self,
        contract: &ContractPrincipal,
        function: &str,
        args: &[ClarityValue],
        sender: &PrincipalData,
    ) -> Result<ClarityValue, ClientError> {
        let url = format!(
            "{}/v2/contracts/call-read/{}/{}/{}",
            self.api_url, contract.issuer, contract.name, function
        );
        log::debug!("POST {} ({} args)", url, args.len());

        let sender = sender.to_string();
        let body = ReadOnlyRequest {
            sender: &sender,
            arguments: args
                .iter()
                .map(ClarityValue::to_hex)
                .collect::<Result<_, _>>()?,
        };
        let response = self.http.post(&url).json(&body).send().await?;
        let parsed: ReadOnlyResponse = Self::check(response).await?.json().await?;

        if !parsed.okay {
            return Err(ClientError::ReadOnlyFailed(
                parsed.cause.unwrap_or_else(|| "unknown cause".to_string()),
            ));
        }
        let hex = parsed
            .result
            .ok_or_else(|| ClientError::MalformedResponse("okay without result".to_string()))?;
        Ok(ClarityValue::from_hex(&hex)?)
    }

    pub async fn get_transaction(&self, tx_id: &str) -> Result<TxRecord, ClientError> {
        let tx_id = normalize_tx_id(tx_id)?;
        let url = format!("{}/extended/v1/tx/{}", self.api_url, tx_id);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::TxNotFound(tx_id));
        }
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn get_balances(&self, principal: &PrincipalData) -> Result<AccountBalances, ClientError> {
        let url = format!("{}/extended/v1/address/{}/balances", self.api_url, principal);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn token_balance(
        &self,
        principal: &PrincipalData,
        token: &ContractPrincipal,
    ) -> Result<u128, ClientError> {
        Ok(self.get_balances(principal).await?.token(token))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

/// Lowercase `0x`-prefixed 64-hex-char txid.
pub fn normalize_tx_id(tx_id: &str) -> Result<String, ClientError> {
    let raw = tx_id.trim();
    let raw = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    if raw.len() != 64 || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ClientError::InvalidTxId(tx_id.to_string()));
    }
    Ok(format!("0x{}", raw.to_ascii_lowercase()))
}
