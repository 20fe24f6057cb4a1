use crate::full_math::{i128_from_i256, mul_div};
use exchange_types::{FEE_DENOMINATOR, FEE_NUMERATOR};
use soroban_sdk::{Env, I256};

/// Scale applied to spot prices returned by `get_price`
pub const PRICE_PRECISION: i128 = 1000;

/// Output amount of a constant-product swap with the 0.3% fee
///
/// output = floor(input * 997 * output_reserve / (input_reserve * 1000 + input * 997))
///
/// Reserves must be the pre-trade balances. Truncation always favors the
/// pool, and the result is strictly below `output_reserve`.
///
/// # Panics
/// If `input_amount` is negative or either reserve is not positive
pub fn get_amount(env: &Env, input_amount: i128, input_reserve: i128, output_reserve: i128) -> i128 {
    if input_amount < 0 {
        panic!("Input amount must be non-negative");
    }
    if input_reserve <= 0 || output_reserve <= 0 {
        panic!("Reserves must be positive");
    }

    let input_with_fee = I256::from_i128(env, input_amount).mul(&I256::from_i128(env, FEE_NUMERATOR));
    let numerator = input_with_fee.mul(&I256::from_i128(env, output_reserve));
    let denominator = I256::from_i128(env, input_reserve)
        .mul(&I256::from_i128(env, FEE_DENOMINATOR))
        .add(&input_with_fee);

    i128_from_i256(&numerator.div(&denominator))
}

/// Spot price of the output asset in input units, scaled by `PRICE_PRECISION`
///
/// # Panics
/// If either reserve is not positive
pub fn get_price(env: &Env, input_reserve: i128, output_reserve: i128) -> i128 {
    if input_reserve <= 0 || output_reserve <= 0 {
        panic!("Reserves must be positive");
    }
    mul_div(env, input_reserve, PRICE_PRECISION, output_reserve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_get_amount_reference_value() {
        let env = Env::default();
        // floor(9_970_000_000 / 10_997_000) = 906
        assert_eq!(get_amount(&env, 1000, 10000, 10000), 906);
    }

    #[test]
    fn test_get_amount_asymmetric_reserves() {
        let env = Env::default();
        // floor(100 * 997 * 2000 / (1000 * 1000 + 100 * 997)) = floor(199_400_000 / 1_099_700) = 181
        assert_eq!(get_amount(&env, 100, 1000, 2000), 181);
    }

    #[test]
    fn test_get_amount_zero_input() {
        let env = Env::default();
        assert_eq!(get_amount(&env, 0, 1000, 1000), 0);
    }

    #[test]
    fn test_get_amount_dust_rounds_to_zero() {
        let env = Env::default();
        // floor(997_000 / 1_000_997) = 0
        assert_eq!(get_amount(&env, 1, 1000, 1000), 0);
    }

    #[test]
    fn test_get_amount_non_decreasing_in_input() {
        let env = Env::default();
        let mut previous = 0;
        for step in 0..200i128 {
            let input = step * 37;
            let out = get_amount(&env, input, 10_000, 5_000);
            assert!(out >= previous, "output decreased at input {}", input);
            previous = out;
        }
    }

    #[test]
    fn test_get_amount_never_drains_reserve() {
        let env = Env::default();
        let output_reserve = 10_000;
        for input in [1i128, 10_000, 1_000_000_000, 1_000_000_000_000_000_000_000_000_000] {
            assert!(get_amount(&env, input, 10_000, output_reserve) < output_reserve);
        }
    }

    #[test]
    fn test_get_amount_large_reserves_do_not_overflow() {
        let env = Env::default();
        let reserve = 1_000_000_000_000_000_000_000_000_000i128; // 1e36
        let out = get_amount(&env, reserve, reserve, reserve);
        // Doubling the input reserve yields just under half the output
        assert!(out < reserve / 2);
        assert!(out > reserve / 2 - reserve / 100);
    }

    #[test]
    #[should_panic(expected = "Reserves must be positive")]
    fn test_get_amount_empty_input_reserve() {
        let env = Env::default();
        get_amount(&env, 100, 0, 1000);
    }

    #[test]
    #[should_panic(expected = "Input amount must be non-negative")]
    fn test_get_amount_negative_input() {
        let env = Env::default();
        get_amount(&env, -1, 1000, 1000);
    }

    #[test]
    fn test_get_price() {
        let env = Env::default();
        assert_eq!(get_price(&env, 2000, 1000), 2000);
        assert_eq!(get_price(&env, 1000, 2000), 500);
        // Truncates
        assert_eq!(get_price(&env, 1, 3), 333);
    }
}
