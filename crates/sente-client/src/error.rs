use sente_core::AmmError;
use thiserror::Error;

/// Failures decoding Clarity values or principals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClarityError {
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    #[error("Unknown Clarity type prefix 0x{0:02x}")]
    UnknownTypePrefix(u8),

    #[error("{0} trailing bytes after Clarity value")]
    TrailingBytes(usize),

    #[error("Clarity value nested too deeply")]
    DepthExceeded,

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Invalid UTF-8 in string value")]
    InvalidUtf8,

    #[error("Non-ASCII byte in string-ascii value")]
    NotAscii,

    #[error("Invalid name '{0}'")]
    InvalidName(String),

    #[error("Duplicate tuple key '{0}'")]
    DuplicateKey(String),

    #[error("Expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Tuple has no field '{0}'")]
    MissingField(String),

    #[error("Invalid address '{0}'")]
    InvalidAddress(String),

    #[error("Address checksum mismatch")]
    BadChecksum,

    #[error("Contract returned (err {0})")]
    ErrResponse(String),
}

/// Everything that can go wrong talking to the node or the pool contract.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Node returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Read-only call failed: {0}")]
    ReadOnlyFailed(String),

    #[error("Malformed node response: {0}")]
    MalformedResponse(String),

    #[error("Decode error: {0}")]
    Decode(ClarityError),

    #[error(transparent)]
    Amm(#[from] AmmError),

    #[error("Contract returned error {0}")]
    ContractError(String),

    #[error("Pool not found")]
    PoolNotFound,

    #[error("Invalid transaction id '{0}'")]
    InvalidTxId(String),

    #[error("Transaction {0} not found")]
    TxNotFound(String),

    #[error("Transaction still pending after {attempts} polls")]
    WaitTimeout { attempts: u32 },

    #[error("Wallet not connected")]
    WalletNotConnected,

    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: u128, need: u128 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClarityError> for ClientError {
    fn from(e: ClarityError) -> Self {
        match e {
            ClarityError::ErrResponse(code) => ClientError::ContractError(code),
            other => ClientError::Decode(other),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Http(e)
        }
    }
}
