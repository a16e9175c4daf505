//! # Constant-Product AMM Math
//!
//! Every quote, share estimate and slippage bound the client shows or sends
//! to the pool contract is computed here. The contract holds the
//! authoritative version of the same x·y=k rules; these functions predict
//! its results so the user can set minimum amounts before signing.
//!
//! - Integer math only (u128 micro-units), rounding in favour of the pool
//! - 0.3% swap fee deducted from the input before pricing
//! - First deposit mints `isqrt(amount0 * amount1)` shares
//! - Later deposits mint the smaller of the two proportional contributions

use crate::error::AmmError;
use crate::{
    BPS_DENOMINATOR, DEFAULT_SLIPPAGE_BPS, PPM_DENOMINATOR, PRICE_PRECISION, SWAP_FEE_BPS,
};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────
// TYPES
// ─────────────────────────────────────────────────────────────

/// Reserves and LP supply of one pool (micro-units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    pub reserve0: u128,
    pub reserve1: u128,
    pub total_supply: u128,
}

impl PoolState {
    pub fn new(reserve0: u128, reserve1: u128, total_supply: u128) -> Self {
        Self {
            reserve0,
            reserve1,
            total_supply,
        }
    }

    /// True when no shares have been minted yet.
    pub fn is_empty(&self) -> bool {
        self.total_supply == 0
    }

    /// Pool state after a deposit of `(amount0, amount1)` minting `shares`.
    pub fn deposit(&self, amount0: u128, amount1: u128, shares: u128) -> Result<Self, AmmError> {
        Ok(Self {
            reserve0: self.reserve0.checked_add(amount0).ok_or(AmmError::Overflow)?,
            reserve1: self.reserve1.checked_add(amount1).ok_or(AmmError::Overflow)?,
            total_supply: self
                .total_supply
                .checked_add(shares)
                .ok_or(AmmError::Overflow)?,
        })
    }

    /// Pool state after `shares` are burned for `(amount0, amount1)`.
    pub fn withdraw(&self, amount0: u128, amount1: u128, shares: u128) -> Result<Self, AmmError> {
        Ok(Self {
            reserve0: self
                .reserve0
                .checked_sub(amount0)
                .ok_or(AmmError::InsufficientLiquidity)?,
            reserve1: self
                .reserve1
                .checked_sub(amount1)
                .ok_or(AmmError::InsufficientLiquidity)?,
            total_supply: self
                .total_supply
                .checked_sub(shares)
                .ok_or(AmmError::InsufficientLiquidity)?,
        })
    }
}

/// Expected result of an exact-input swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub amount_in: u128,
    pub amount_out: u128,
    /// Fee retained by the pool, in input-token micro-units
    pub fee: u128,
    /// Deviation of the execution price from the spot price (0..=10_000)
    pub price_impact_bps: u128,
}

impl Quote {
    /// Price impact as a percentage (e.g. `0.98` for 98 bps).
    pub fn price_impact_percent(&self) -> f64 {
        self.price_impact_bps as f64 / 100.0
    }

    /// Minimum output the user accepts under `tolerance`.
    pub fn minimum_received(&self, tolerance: SlippageTolerance) -> u128 {
        tolerance.min_acceptable(self.amount_out)
    }
}

/// A user's slice of a pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub shares: u128,
    pub amount0: u128,
    pub amount1: u128,
    /// Share of total supply in bps, clamped to 0..=10_000
    pub share_of_pool_bps: u128,
}

impl Position {
    /// Share of the pool as a fraction in [0, 1].
    pub fn share_of_pool(&self) -> f64 {
        self.share_of_pool_bps as f64 / BPS_DENOMINATOR as f64
    }
}

/// Slippage tolerance stored in parts per million of the quoted value
/// (0..=1_000_000, so 1 ppm = 0.0001%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlippageTolerance(u128);

impl SlippageTolerance {
    /// Build from a percentage such as `0.5`. Anything finer than 1 ppm
    /// is truncated, which only ever tightens the bound.
    pub fn from_percent(percent: f64) -> Result<Self, AmmError> {
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(AmmError::InvalidSlippage(percent));
        }
        let scaled = percent * (PPM_DENOMINATOR / 100) as f64;
        let nearest = scaled.round();
        // 0.29 * 10_000 lands a hair under 2900 in f64
        let ppm = if (scaled - nearest).abs() < 1e-6 {
            nearest
        } else {
            scaled.floor()
        };
        Ok(Self((ppm as u128).min(PPM_DENOMINATOR)))
    }

    pub fn from_bps(bps: u128) -> Result<Self, AmmError> {
        if bps > BPS_DENOMINATOR {
            return Err(AmmError::InvalidSlippage(bps as f64 / 100.0));
        }
        Ok(Self(bps * (PPM_DENOMINATOR / BPS_DENOMINATOR)))
    }

    pub fn ppm(&self) -> u128 {
        self.0
    }

    /// Whole basis points, truncated.
    pub fn bps(&self) -> u128 {
        self.0 / (PPM_DENOMINATOR / BPS_DENOMINATOR)
    }

    pub fn percent(&self) -> f64 {
        self.0 as f64 / (PPM_DENOMINATOR / 100) as f64
    }

    /// `quoted * (1 - tolerance)`, floored. Never overflows.
    pub fn min_acceptable(&self, quoted: u128) -> u128 {
        let keep = PPM_DENOMINATOR - self.0;
        (quoted / PPM_DENOMINATOR) * keep + (quoted % PPM_DENOMINATOR) * keep / PPM_DENOMINATOR
    }
}

impl Default for SlippageTolerance {
    fn default() -> Self {
        Self(DEFAULT_SLIPPAGE_BPS * (PPM_DENOMINATOR / BPS_DENOMINATOR))
    }
}

// ─────────────────────────────────────────────────────────────
// INTEGER HELPERS (NO f32/f64)
// ─────────────────────────────────────────────────────────────

/// Integer square root — Newton's method. Returns floor(√n).
pub fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// floor(a * b / c) without intermediate overflow when the result fits.
/// A zero divisor is reported as `Overflow`; callers reject empty reserves first.
pub(crate) fn mul_div(a: u128, b: u128, c: u128) -> Result<u128, AmmError> {
    if c == 0 {
        return Err(AmmError::Overflow);
    }
    if let Some(product) = a.checked_mul(b) {
        return Ok(product / c);
    }
    // a*b/c = (a/c)*b + (a%c)*b/c
    let high = (a / c).checked_mul(b).ok_or(AmmError::Overflow)?;
    let low = (a % c).checked_mul(b).ok_or(AmmError::Overflow)? / c;
    high.checked_add(low).ok_or(AmmError::Overflow)
}

/// Fee charged on `amount_in` (floored).
pub fn swap_fee(amount_in: u128) -> Result<u128, AmmError> {
    mul_div(amount_in, SWAP_FEE_BPS, BPS_DENOMINATOR)
}

// ─────────────────────────────────────────────────────────────
// QUOTE ESTIMATOR
// ─────────────────────────────────────────────────────────────

/// Constant-product output for an exact-input swap.
///
/// `amount_out = reserve_out - k / (reserve_in + amount_in * (1 - fee))`,
/// evaluated as `a' * reserve_out / (reserve_in + a')` with `a'` the input
/// after fee. The result is always strictly below `reserve_out`.
pub fn estimate_output(
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
) -> Result<Quote, AmmError> {
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }
    if amount_in == 0 {
        return Err(AmmError::InsufficientInputAmount);
    }

    let fee = swap_fee(amount_in)?;
    let after_fee = amount_in - fee;
    let denominator = reserve_in
        .checked_add(after_fee)
        .ok_or(AmmError::Overflow)?;

    let amount_out = mul_div(after_fee, reserve_out, denominator)?;

    // spot = out/in, exec = a'·out/(in+a')/a'  ⇒  1 - exec/spot = a'/(in+a')
    let price_impact_bps = mul_div(after_fee, BPS_DENOMINATOR, denominator)?.min(BPS_DENOMINATOR);

    Ok(Quote {
        amount_in,
        amount_out,
        fee,
        price_impact_bps,
    })
}

/// Spot price of the input token in output-token units, scaled by `PRICE_PRECISION`.
pub fn spot_price(reserve_in: u128, reserve_out: u128) -> Result<u128, AmmError> {
    if reserve_in == 0 || reserve_out == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }
    mul_div(reserve_out, PRICE_PRECISION, reserve_in)
}

/// Token1 amount matching a token0 deposit at the current pool ratio.
pub fn quote_counterpart(amount0: u128, reserve0: u128, reserve1: u128) -> Result<u128, AmmError> {
    if reserve0 == 0 || reserve1 == 0 {
        return Err(AmmError::EmptyPool);
    }
    mul_div(amount0, reserve1, reserve0)
}

// ─────────────────────────────────────────────────────────────
// LIQUIDITY MATH
// ─────────────────────────────────────────────────────────────

/// LP shares minted for a deposit of `(amount0, amount1)`.
pub fn compute_mint_shares(
    amount0: u128,
    amount1: u128,
    reserve0: u128,
    reserve1: u128,
    total_supply: u128,
) -> Result<u128, AmmError> {
    if total_supply == 0 {
        let product = amount0.checked_mul(amount1).ok_or(AmmError::Overflow)?;
        return Ok(isqrt(product));
    }
    if reserve0 == 0 || reserve1 == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }

    let from0 = mul_div(amount0, total_supply, reserve0)?;
    let from1 = mul_div(amount1, total_supply, reserve1)?;
    Ok(from0.min(from1))
}

/// Token amounts redeemed by burning `shares`. An empty pool redeems nothing.
pub fn compute_burn_amounts(
    shares: u128,
    reserve0: u128,
    reserve1: u128,
    total_supply: u128,
) -> Result<(u128, u128), AmmError> {
    if total_supply == 0 {
        return Ok((0, 0));
    }
    if shares > total_supply {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok((
        mul_div(shares, reserve0, total_supply)?,
        mul_div(shares, reserve1, total_supply)?,
    ))
}

/// Value of `shares` in `pool`. Shares above the supply are capped at 100%.
pub fn position(shares: u128, pool: &PoolState) -> Result<Position, AmmError> {
    if pool.total_supply == 0 {
        return Ok(Position {
            shares,
            ..Position::default()
        });
    }
    let counted = shares.min(pool.total_supply);
    let (amount0, amount1) =
        compute_burn_amounts(counted, pool.reserve0, pool.reserve1, pool.total_supply)?;
    let share_of_pool_bps =
        mul_div(counted, BPS_DENOMINATOR, pool.total_supply)?.min(BPS_DENOMINATOR);

    Ok(Position {
        shares,
        amount0,
        amount1,
        share_of_pool_bps,
    })
}

// ─────────────────────────────────────────────────────────────
// SLIPPAGE GUARD
// ─────────────────────────────────────────────────────────────

/// `quoted_value * (1 - tolerance_percent / 100)`, floored.
pub fn apply_slippage(quoted_value: u128, tolerance_percent: f64) -> Result<u128, AmmError> {
    Ok(SlippageTolerance::from_percent(tolerance_percent)?.min_acceptable(quoted_value))
}

// ─────────────────────────────────────────────────────────────
// TESTS
// ─────────────────────────────────────────────────────────────
