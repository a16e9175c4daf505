// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SENTE DEX - STACKS CLIENT
//
// Talks to a Stacks node API on behalf of the Sente pool contract:
// - Clarity value codec (hex wire format) with strict accessors
// - c32check principals
// - Read-only contract calls, balances and transaction status over HTTP
// - Contract-call requests built for an external wallet to sign
// - Wallet connection state published to subscribers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub mod call;
pub mod clarity;
pub mod client;
pub mod error;
pub mod network;
pub mod pool;
pub mod principal;
pub mod tx;
pub mod u128_str;
pub mod wallet;

pub use call::{ContractCallRequest, PostConditionMode};
pub use clarity::ClarityValue;
pub use client::{AccountBalances, StacksClient, REQUEST_TIMEOUT};
pub use error::{ClarityError, ClientError};
pub use network::Network;
pub use pool::{LiquidityInfo, PoolContract, PreparedLiquidity, PreparedSwap, PreparedWithdrawal};
pub use principal::{ContractPrincipal, PrincipalData, StandardPrincipal};
pub use tx::{wait_for_transaction, TxRecord, TxStatus, WaitOptions};
pub use wallet::{WalletSession, WalletState};
