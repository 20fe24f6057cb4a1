#![no_std]

mod pool;

pub use pool::*;

/// Fee-adjusted input numerator: 0.3% of every swap input stays in the pool
pub const FEE_NUMERATOR: i128 = 997;

/// Denominator paired with `FEE_NUMERATOR`
pub const FEE_DENOMINATOR: i128 = 1000;
