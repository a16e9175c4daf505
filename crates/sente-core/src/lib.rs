// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// SENTE DEX - CORE MODULE
//
// Client-side constant-product AMM math: swap quotes, LP-share mint/burn,
// slippage bounds and micro-unit conversion.
// All on-chain arithmetic uses u128 micro-units (no floating-point).
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub mod amm;
pub mod error;
pub mod units;

pub use amm::{
    apply_slippage, compute_burn_amounts, compute_mint_shares, estimate_output, isqrt, position,
    quote_counterpart, spot_price, PoolState, Position, Quote, SlippageTolerance,
};
pub use error::AmmError;
pub use units::{format_micro_units, to_micro_units};

/// 1 token = 1_000_000 micro-units (10^6 precision, matches the pool contract)
pub const MICRO_UNITS_PER_TOKEN: u128 = 1_000_000;

/// Number of fractional digits carried by a micro-unit amount
pub const TOKEN_DECIMALS: usize = 6;

// ─────────────────────────────────────────────────────────────────
// POOL FEE CONSTANTS
// ─────────────────────────────────────────────────────────────────
// The pool contract charges 0.3% of every swap input. The fee stays in
// the pool and accrues to liquidity providers.
// ─────────────────────────────────────────────────────────────────

/// Swap fee: 30 bps = 0.3%
pub const SWAP_FEE_BPS: u128 = 30;

/// Basis point denominator (10_000 bps = 100%)
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Parts-per-million denominator for slippage tolerances (10^6 = 100%)
pub const PPM_DENOMINATOR: u128 = 1_000_000;

/// Fixed-point scale for spot prices (10^12)
pub const PRICE_PRECISION: u128 = 1_000_000_000_000;

/// Default slippage tolerance offered to users: 50 bps = 0.5%
pub const DEFAULT_SLIPPAGE_BPS: u128 = 50;
