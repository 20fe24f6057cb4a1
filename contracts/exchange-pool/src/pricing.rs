use crate::error::PoolError;
use exchange_types::Reserves;
use soroban_sdk::Env;

/// Validated constant-product quote
///
/// Negative input is rejected with `InvalidAmount`; an empty side on either
/// reserve cannot price a trade and yields `InsufficientLiquidity`.
pub fn quote(
    env: &Env,
    input_amount: i128,
    input_reserve: i128,
    output_reserve: i128,
) -> Result<i128, PoolError> {
    if input_amount < 0 {
        return Err(PoolError::InvalidAmount);
    }
    if input_reserve <= 0 || output_reserve <= 0 {
        return Err(PoolError::InsufficientLiquidity);
    }
    Ok(exchange_math::get_amount(env, input_amount, input_reserve, output_reserve))
}

/// Tokens paid for `currency_in`, against pre-trade reserves
pub fn token_out(env: &Env, reserves: &Reserves, currency_in: i128) -> Result<i128, PoolError> {
    quote(env, currency_in, reserves.currency, reserves.token)
}

/// Currency paid for `token_in`, against pre-trade reserves
pub fn currency_out(env: &Env, reserves: &Reserves, token_in: i128) -> Result<i128, PoolError> {
    quote(env, token_in, reserves.token, reserves.currency)
}

/// Spot price of the output asset in input units, scaled by 1000
pub fn price(env: &Env, input_reserve: i128, output_reserve: i128) -> Result<i128, PoolError> {
    if input_reserve <= 0 || output_reserve <= 0 {
        return Err(PoolError::InsufficientLiquidity);
    }
    Ok(exchange_math::get_price(env, input_reserve, output_reserve))
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_quote_matches_math() {
        let env = Env::default();
        assert_eq!(quote(&env, 1000, 10000, 10000), Ok(906));
    }

    #[test]
    fn test_quote_rejects_bad_inputs() {
        let env = Env::default();
        assert_eq!(quote(&env, -1, 10000, 10000), Err(PoolError::InvalidAmount));
        assert_eq!(quote(&env, 10, 0, 10000), Err(PoolError::InsufficientLiquidity));
        assert_eq!(quote(&env, 10, 10000, 0), Err(PoolError::InsufficientLiquidity));
    }

    #[test]
    fn test_directional_quotes_use_matching_reserve() {
        let env = Env::default();
        let reserves = Reserves::new(2000, 1000);
        // currency in: input reserve is the currency side
        assert_eq!(token_out(&env, &reserves, 100), Ok(47));
        // token in: input reserve is the token side
        assert_eq!(currency_out(&env, &reserves, 100), Ok(181));
    }

    #[test]
    fn test_price() {
        let env = Env::default();
        assert_eq!(price(&env, 2000, 1000), Ok(2000));
        assert_eq!(price(&env, 0, 1000), Err(PoolError::InsufficientLiquidity));
    }
}
