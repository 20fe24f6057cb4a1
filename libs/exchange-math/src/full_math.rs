use soroban_sdk::{Env, I256};

/// Widen `a * b` to 256 bits so the product can never overflow
pub fn mul_wide(env: &Env, a: i128, b: i128) -> I256 {
    I256::from_i128(env, a).mul(&I256::from_i128(env, b))
}

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator for non-negative operands
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> i128 {
    if denominator == 0 {
        panic!("Division by zero");
    }
    let result = mul_wide(env, a, b).div(&I256::from_i128(env, denominator));
    i128_from_i256(&result)
}

/// |a * b - c * d| computed without overflow
pub fn cross_product_gap(env: &Env, a: i128, b: i128, c: i128, d: i128) -> I256 {
    let lhs = mul_wide(env, a, b);
    let rhs = mul_wide(env, c, d);
    if lhs > rhs {
        lhs.sub(&rhs)
    } else {
        rhs.sub(&lhs)
    }
}

/// Convert I256 to i128, panics if out of range
pub fn i128_from_i256(value: &I256) -> i128 {
    match value.to_i128() {
        Some(v) => v,
        None => panic!("I256 overflow when converting to i128"),
    }
}
