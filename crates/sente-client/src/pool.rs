// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SENTE POOL CONTRACT BINDINGS
//
// Typed wrappers over the deployed pool contract:
//   read-only : get-pool-info, get-liquidity
//   public    : swap-tokens, add-liquidity, remove-liquidity
//
// Public functions are never sent from here. They become ContractCallRequest
// values that the user's wallet signs and broadcasts. The prepare_* flows
// fetch live state, run the sente-core math and attach slippage bounds.
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use crate::call::ContractCallRequest;
use crate::clarity::ClarityValue;
use crate::client::StacksClient;
use crate::error::{ClarityError, ClientError};
use crate::network::Network;
use crate::principal::{ContractPrincipal, PrincipalData, StandardPrincipal};
use crate::wallet::WalletSession;
use sente_core::{
    compute_burn_amounts, compute_mint_shares, estimate_output, position, PoolState, Position,
    Quote, SlippageTolerance,
};
use serde::Serialize;

pub const FN_GET_POOL_INFO: &str = "get-pool-info";
pub const FN_GET_LIQUIDITY: &str = "get-liquidity";
pub const FN_SWAP_TOKENS: &str = "swap-tokens";
pub const FN_ADD_LIQUIDITY: &str = "add-liquidity";
pub const FN_REMOVE_LIQUIDITY: &str = "remove-liquidity";

/// A user's LP holding as reported by `get-liquidity`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LiquidityInfo {
    pub liquidity: u128,
    pub token0_amount: u128,
    pub token1_amount: u128,
    pub value: u128,
    pub unclaimed_fees: u128,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedSwap {
    pub quote: Quote,
    pub min_amount_out: u128,
    pub call: ContractCallRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedLiquidity {
    pub expected_shares: u128,
    pub min_liquidity: u128,
    pub call: ContractCallRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedWithdrawal {
    pub amount0: u128,
    pub amount1: u128,
    pub min_amount0: u128,
    pub min_amount1: u128,
    pub call: ContractCallRequest,
}

// ─────────────────────────────────────────────────────────────
// RESULT DECODING
// ─────────────────────────────────────────────────────────────

/// Peel `(ok …)` / `(some …)` wrappers off a read-only result.
///
/// `none` → `Ok(None)`, `(err code)` → `ErrResponse`, and anything that does
/// not end in a tuple is a type mismatch.
fn read_tuple(value: &ClarityValue) -> Result<Option<&ClarityValue>, ClarityError> {
    match value {
        ClarityValue::Tuple(_) => Ok(Some(value)),
        ClarityValue::ResponseOk(_) | ClarityValue::ResponseErr(_) => {
            read_tuple(value.unwrap_response()?)
        }
        ClarityValue::OptionalNone | ClarityValue::OptionalSome(_) => {
            match value.unwrap_optional()? {
                Some(inner) => read_tuple(inner),
                None => Ok(None),
            }
        }
        other => Err(ClarityError::TypeMismatch {
            expected: "tuple",
            found: other.type_name(),
        }),
    }
}

/// `{reserve0, reserve1, total-supply}` → PoolState. `none` means the pair
/// has no pool yet.
pub fn decode_pool_info(value: &ClarityValue) -> Result<PoolState, ClientError> {
    let tuple = read_tuple(value)?.ok_or(ClientError::PoolNotFound)?;
    Ok(PoolState::new(
        tuple.field_uint("reserve0")?,
        tuple.field_uint("reserve1")?,
        tuple.field_uint("total-supply")?,
    ))
}

/// `get-liquidity` result. `none` means the user holds no shares.
pub fn decode_liquidity(value: &ClarityValue) -> Result<LiquidityInfo, ClientError> {
    let tuple = match read_tuple(value)? {
        Some(t) => t,
        None => return Ok(LiquidityInfo::default()),
    };
    Ok(LiquidityInfo {
        liquidity: tuple.field_uint("liquidity")?,
        token0_amount: tuple.field_uint("token0-amount")?,
        token1_amount: tuple.field_uint("token1-amount")?,
        value: tuple.field_uint("value")?,
        unclaimed_fees: tuple.field_uint("unclaimed-fees")?,
    })
}

// ─────────────────────────────────────────────────────────────
// POOL CONTRACT
// ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PoolContract {
    client: StacksClient,
    contract: ContractPrincipal,
    network: Network,
}

impl PoolContract {
    pub fn new(client: StacksClient, contract: ContractPrincipal, network: Network) -> Self {
        Self {
            client,
            contract,
            network,
        }
    }

    pub fn client(&self) -> &StacksClient {
        &self.client
    }

    pub fn contract(&self) -> &ContractPrincipal {
        &self.contract
    }

    pub fn network(&self) -> Network {
        self.network
    }

    // ── Read-only ───────────────────────────────────────────────

    /// Reserves for the pair, in the order the tokens are passed.
    pub async fn get_pool_info(
        &self,
        token0: &ContractPrincipal,
        token1: &ContractPrincipal,
    ) -> Result<PoolState, ClientError> {
        // Read-only calls need a sender; the deployer is always valid.
        let sender = PrincipalData::Standard(self.contract.issuer.clone());
        let result = self
            .client
            .call_read_only(
                &self.contract,
                FN_GET_POOL_INFO,
                &[token0.clone().into(), token1.clone().into()],
                &sender,
            )
            .await?;
        decode_pool_info(&result)
    }

    pub async fn get_liquidity(
        &self,
        user: &StandardPrincipal,
        token0: &ContractPrincipal,
        token1: &ContractPrincipal,
    ) -> Result<LiquidityInfo, ClientError> {
        let sender = PrincipalData::Standard(user.clone());
        let result = self
            .client
            .call_read_only(
                &self.contract,
                FN_GET_LIQUIDITY,
                &[user.clone().into(), token0.clone().into(), token1.clone().into()],
                &sender,
            )
            .await?;
        decode_liquidity(&result)
    }

    /// Quote without a wallet; no balance check, no call request.
    pub async fn quote(
        &self,
        token_in: &ContractPrincipal,
        token_out: &ContractPrincipal,
        amount_in: u128,
    ) -> Result<Quote, ClientError> {
        let pool = self.get_pool_info(token_in, token_out).await?;
        Ok(estimate_output(amount_in, pool.reserve0, pool.reserve1)?)
    }

    /// LP holding plus its current share of the pool.
    pub async fn fetch_position(
        &self,
        user: &StandardPrincipal,
        token0: &ContractPrincipal,
        token1: &ContractPrincipal,
    ) -> Result<(LiquidityInfo, Position), ClientError> {
        let info = self.get_liquidity(user, token0, token1).await?;
        let pool = match self.get_pool_info(token0, token1).await {
            Ok(pool) => pool,
            Err(ClientError::PoolNotFound) => PoolState::default(),
            Err(e) => return Err(e),
        };
        Ok((info, position(info.liquidity, &pool)?))
    }

    // ── Call builders ───────────────────────────────────────────

    fn call(
        &self,
        function: &str,
        args: &[ClarityValue],
    ) -> Result<ContractCallRequest, ClarityError> {
        ContractCallRequest::new(&self.contract, function, args, self.network)
    }

    pub fn swap_tokens_call(
        &self,
        token_in: &ContractPrincipal,
        token_out: &ContractPrincipal,
        amount_in: u128,
        min_amount_out: u128,
    ) -> Result<ContractCallRequest, ClarityError> {
        self.call(
            FN_SWAP_TOKENS,
            &[
                token_in.clone().into(),
                token_out.clone().into(),
                ClarityValue::UInt(amount_in),
                ClarityValue::UInt(min_amount_out),
            ],
        )
    }

    pub fn add_liquidity_call(
        &self,
        token0: &ContractPrincipal,
        token1: &ContractPrincipal,
        amount0: u128,
        amount1: u128,
        min_liquidity: u128,
    ) -> Result<ContractCallRequest, ClarityError> {
        self.call(
            FN_ADD_LIQUIDITY,
            &[
                token0.clone().into(),
                token1.clone().into(),
                ClarityValue::UInt(amount0),
                ClarityValue::UInt(amount1),
                ClarityValue::UInt(min_liquidity),
            ],
        )
    }

    pub fn remove_liquidity_call(
        &self,
        token0: &ContractPrincipal,
        token1: &ContractPrincipal,
        liquidity: u128,
        min_amount0: u128,
        min_amount1: u128,
    ) -> Result<ContractCallRequest, ClarityError> {
        self.call(
            FN_REMOVE_LIQUIDITY,
            &[
                token0.clone().into(),
                token1.clone().into(),
                ClarityValue::UInt(liquidity),
                ClarityValue::UInt(min_amount0),
                ClarityValue::UInt(min_amount1),
            ],
        )
    }

    // ── Prepared flows ──────────────────────────────────────────

    pub async fn prepare_swap(
        &self,
        session: &WalletSession,
        token_in: &ContractPrincipal,
        token_out: &ContractPrincipal,
        amount_in: u128,
        tolerance: SlippageTolerance,
    ) -> Result<PreparedSwap, ClientError> {
        let user = session.require_address()?;

        let have = self
            .client
            .token_balance(&PrincipalData::Standard(user.clone()), token_in)
            .await?;
        if have < amount_in {
            return Err(ClientError::InsufficientBalance {
                have,
                need: amount_in,
            });
        }

        let pool = self.get_pool_info(token_in, token_out).await?;
        let quote = estimate_output(amount_in, pool.reserve0, pool.reserve1)?;
        let min_amount_out = tolerance.min_acceptable(quote.amount_out);
        log::debug!(
            "swap {} -> {} (min {}), impact {} bps",
            amount_in,
            quote.amount_out,
            min_amount_out,
            quote.price_impact_bps
        );

        let call = self
            .swap_tokens_call(token_in, token_out, amount_in, min_amount_out)?
            .with_sender(&user);
        Ok(PreparedSwap {
            quote,
            min_amount_out,
            call,
        })
    }

    /// A missing pool is treated as empty: this deposit creates it.
    pub async fn prepare_add_liquidity(
        &self,
        session: &WalletSession,
        token0: &ContractPrincipal,
        token1: &ContractPrincipal,
        amount0: u128,
        amount1: u128,
        tolerance: SlippageTolerance,
    ) -> Result<PreparedLiquidity, ClientError> {
        let user = session.require_address()?;

        let balances = self
            .client
            .get_balances(&PrincipalData::Standard(user.clone()))
            .await?;
        for (token, need) in [(token0, amount0), (token1, amount1)] {
            let have = balances.token(token);
            if have < need {
                return Err(ClientError::InsufficientBalance { have, need });
            }
        }

        let pool = match self.get_pool_info(token0, token1).await {
            Ok(pool) => pool,
            Err(ClientError::PoolNotFound) => {
                log::info!("no pool for {} / {}, first deposit creates it", token0, token1);
                PoolState::default()
            }
            Err(e) => return Err(e),
        };

        let expected_shares = compute_mint_shares(
            amount0,
            amount1,
            pool.reserve0,
            pool.reserve1,
            pool.total_supply,
        )?;
        let min_liquidity = tolerance.min_acceptable(expected_shares);

        let call = self
            .add_liquidity_call(token0, token1, amount0, amount1, min_liquidity)?
            .with_sender(&user);
        Ok(PreparedLiquidity {
            expected_shares,
            min_liquidity,
            call,
        })
    }

    pub async fn prepare_remove_liquidity(
        &self,
        session: &WalletSession,
        token0: &ContractPrincipal,
        token1: &ContractPrincipal,
        shares: u128,
        tolerance: SlippageTolerance,
    ) -> Result<PreparedWithdrawal, ClientError> {
        let user = session.require_address()?;

        let held = self.get_liquidity(&user, token0, token1).await?;
        if held.liquidity < shares {
            return Err(ClientError::InsufficientBalance {
                have: held.liquidity,
                need: shares,
            });
        }

        let pool = self.get_pool_info(token0, token1).await?;
        let (amount0, amount1) =
            compute_burn_amounts(shares, pool.reserve0, pool.reserve1, pool.total_supply)?;
        let min_amount0 = tolerance.min_acceptable(amount0);
        let min_amount1 = tolerance.min_acceptable(amount1);

        let call = self
            .remove_liquidity_call(token0, token1, shares, min_amount0, min_amount1)?
            .with_sender(&user);
        Ok(PreparedWithdrawal {
            amount0,
            amount1,
            min_amount0,
            min_amount1,
            call,
        })
    }
}

// ─────────────────────────────────────────────────────────────
// TESTS
// ─────────────────────────────────────────────────────────────
