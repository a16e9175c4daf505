use thiserror::Error;

/// Failures of the pure AMM computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmmError {
    /// One of the pool reserves is zero
    #[error("Insufficient liquidity: pool reserves must be non-zero")]
    InsufficientLiquidity,

    #[error("Input amount must be greater than zero")]
    InsufficientInputAmount,

    /// Tolerance outside [0, 100] percent (or not a number)
    #[error("Invalid slippage tolerance {0}% (must be between 0 and 100)")]
    InvalidSlippage(f64),

    #[error("Pool is empty: no price ratio to follow")]
    EmptyPool,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Arithmetic overflow")]
    Overflow,
}
