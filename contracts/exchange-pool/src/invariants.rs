// ============================================================================
// INVARIANTS
// ============================================================================
//
// Pure predicates checked by the entry points before any state is mutated.
//
// 1. INPUT
//    - Amounts that move funds or shares are strictly positive
//
// 2. SLIPPAGE
//    - Buying tokens: output must be strictly above the caller's minimum
//    - Selling tokens: output must be at least the caller's minimum
//
// 3. RESERVES
//    - A swap never lowers reserve_currency * reserve_token
//    - A withdrawal takes both reserves in the same proportion
//
// ============================================================================

use exchange_math::{cross_product_gap, mul_wide};
use exchange_types::Reserves;
use soroban_sdk::{Env, I256};

// ============================================================================
// INPUT INVARIANTS
// ============================================================================

/// Invariant: amount is strictly positive
pub fn amount_positive(amount: i128) -> bool {
    amount > 0
}

// ============================================================================
// SLIPPAGE INVARIANTS
// ============================================================================

/// Currency -> token bound is strict: an output equal to the minimum fails
pub fn token_out_acceptable(token_out: i128, min_token_out: i128) -> bool {
    token_out > min_token_out
}

/// Token -> currency bound is inclusive: an output equal to the minimum passes
pub fn currency_out_acceptable(currency_out: i128, min_currency_out: i128) -> bool {
    currency_out >= min_currency_out
}

// ============================================================================
// RESERVE INVARIANTS
// ============================================================================

/// Invariant: constant product never decreases across a swap
///
/// Property:
///   after.currency * after.token >= before.currency * before.token
pub fn product_non_decreasing(env: &Env, before: &Reserves, after: &Reserves) -> bool {
    if after.currency < 0 || after.token < 0 {
        return false;
    }
    mul_wide(env, after.currency, after.token) >= mul_wide(env, before.currency, before.token)
}

/// Invariant: a withdrawal keeps the pool ratio
///
/// Property:
///   |token_reserve * currency_out - token_out * currency_reserve| < max(token_reserve, currency_reserve)
///
/// Both outputs are floors of exact proportional claims, so the cross
/// products may differ by less than one unit of the larger reserve. Anything
/// beyond that means one side is being over-withdrawn.
pub fn withdrawal_proportional(
    env: &Env,
    reserves: &Reserves,
    currency_out: i128,
    token_out: i128,
) -> bool {
    if currency_out > reserves.currency || token_out > reserves.token {
        return false;
    }
    let gap = cross_product_gap(env, reserves.token, currency_out, token_out, reserves.currency);
    let tolerance = I256::from_i128(env, reserves.token.max(reserves.currency).max(1));
    gap < tolerance
}

// ============================================================================
// TESTS
// ============================================================================
