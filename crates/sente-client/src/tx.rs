//! Transaction status tracking.
//!
//! The wallet broadcasts and hands back a txid; from then on the explorer
//! API is polled until the transaction settles.

use crate::client::StacksClient;
use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Polls that may answer 404 before the tx reaches the node's mempool
pub const NOT_FOUND_GRACE_POLLS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TxStatus {
    Pending,
    Success,
    AbortByResponse,
    AbortByPostCondition,
    /// `dropped_*`, carrying the reason suffix
    Dropped(String),
}

impl TxStatus {
    pub fn from_api(s: &str) -> Self {
        match s {
            "success" => TxStatus::Success,
            "abort_by_response" => TxStatus::AbortByResponse,
            "abort_by_post_condition" => TxStatus::AbortByPostCondition,
            other => match other.strip_prefix("dropped_") {
                Some(reason) => TxStatus::Dropped(reason.to_string()),
                None => TxStatus::Pending,
            },
        }
    }

    pub fn as_api(&self) -> String {
        match self {
            TxStatus::Pending => "pending".to_string(),
            TxStatus::Success => "success".to_string(),
            TxStatus::AbortByResponse => "abort_by_response".to_string(),
            TxStatus::AbortByPostCondition => "abort_by_post_condition".to_string(),
            TxStatus::Dropped(reason) => format!("dropped_{}", reason),
        }
    }

    /// Anything but Pending; polling stops here.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TxStatus::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TxStatus::Success)
    }
}

impl From<String> for TxStatus {
    fn from(s: String) -> Self {
        TxStatus::from_api(&s)
    }
}

impl From<TxStatus> for String {
    fn from(s: TxStatus) -> Self {
        s.as_api()
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_api())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxResult {
    pub hex: String,
    pub repr: String,
}

/// The subset of `/extended/v1/tx/{txid}` the client reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRecord {
    pub tx_id: String,
    pub tx_status: TxStatus,
    pub sender_address: String,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(with = "crate::u128_str")]
    pub fee_rate: u128,
    #[serde(default)]
    pub burn_block_time: Option<u64>,
    #[serde(default)]
    pub tx_result: Option<TxResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_attempts: 150,
        }
    }
}

/// Poll until the transaction reaches a terminal status.
///
/// A 404 during the first [`NOT_FOUND_GRACE_POLLS`] polls counts as
/// pending. Returns `WaitTimeout` once `max_attempts` polls are spent.
pub async fn wait_for_transaction(
    client: &StacksClient,
    tx_id: &str,
    options: WaitOptions,
) -> Result<TxRecord, ClientError> {
    for attempt in 1..=options.max_attempts {
        match client.get_transaction(tx_id).await {
            Ok(record) if record.tx_status.is_terminal() => {
                log::info!("{} settled as {} after {} polls", tx_id, record.tx_status, attempt);
                return Ok(record);
            }
            Ok(record) => {
                log::info!(
                    "{} still {} (poll {}/{})",
                    tx_id, record.tx_status, attempt, options.max_attempts
                );
            }
            Err(ClientError::TxNotFound(_)) if attempt <= NOT_FOUND_GRACE_POLLS => {
                log::info!("{} not visible yet (poll {}/{})", tx_id, attempt, options.max_attempts);
            }
            Err(e) => return Err(e),
        }
        if attempt < options.max_attempts {
            tokio::time::sleep(options.interval).await;
        }
    }
    Err(ClientError::WaitTimeout {
        attempts: options.max_attempts,
    })
}
