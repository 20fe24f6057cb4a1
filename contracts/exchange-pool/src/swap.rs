use crate::assets;
use crate::error::PoolError;
use crate::events;
use crate::invariants::{
    amount_positive, currency_out_acceptable, product_non_decreasing, token_out_acceptable,
};
use crate::pricing;
use crate::storage::get_config;
use exchange_types::Reserves;
use soroban_sdk::{log, Address, Env};

/// Sell `currency_in` for tokens delivered to `recipient`
///
/// Fails with `SlippageExceeded` unless the output is strictly greater than
/// `min_token_out`.
///
/// # Returns
/// Tokens paid out
pub fn swap_currency_for_token(
    env: &Env,
    buyer: &Address,
    currency_in: i128,
    min_token_out: i128,
    recipient: &Address,
) -> Result<i128, PoolError> {
    if !amount_positive(currency_in) {
        return Err(PoolError::InvalidAmount);
    }

    let config = get_config(env)?;
    let reserves = assets::reserves(env, &config)?;
    let token_out = pricing::token_out(env, &reserves, currency_in)?;

    log!(env, "swap_currency_for_token: in {} out {}", currency_in, token_out);

    if !token_out_acceptable(token_out, min_token_out) {
        return Err(PoolError::SlippageExceeded);
    }
    assets::ensure_balance(env, &config.currency, buyer, currency_in)?;

    let currency_after = reserves
        .currency
        .checked_add(currency_in)
        .ok_or(PoolError::InvalidAmount)?;
    let after = Reserves::new(currency_after, reserves.token - token_out);
    if !product_non_decreasing(env, &reserves, &after) {
        return Err(PoolError::InvariantViolation);
    }

    assets::pull(env, &config.currency, buyer, currency_in)?;
    assets::pay(env, &config.token, recipient, token_out)?;

    events::token_purchased(env, buyer, currency_in, token_out);
    Ok(token_out)
}

/// Sell `token_in` for currency paid to `seller`
///
/// Fails with `SlippageExceeded` when the output is below `min_currency_out`;
/// an output exactly at the minimum is accepted.
///
/// # Returns
/// Currency paid out
pub fn swap_token_for_currency(
    env: &Env,
    seller: &Address,
    token_in: i128,
    min_currency_out: i128,
) -> Result<i128, PoolError> {
    if !amount_positive(token_in) {
        return Err(PoolError::InvalidAmount);
    }

    let config = get_config(env)?;
    let reserves = assets::reserves(env, &config)?;
    let currency_out = pricing::currency_out(env, &reserves, token_in)?;

    log!(env, "swap_token_for_currency: in {} out {}", token_in, currency_out);

    if !currency_out_acceptable(currency_out, min_currency_out) {
        return Err(PoolError::SlippageExceeded);
    }
    assets::ensure_balance(env, &config.token, seller, token_in)?;

    let token_after = reserves
        .token
        .checked_add(token_in)
        .ok_or(PoolError::InvalidAmount)?;
    let after = Reserves::new(reserves.currency - currency_out, token_after);
    if !product_non_decreasing(env, &reserves, &after) {
        return Err(PoolError::InvariantViolation);
    }

    assets::pull(env, &config.token, seller, token_in)?;
    assets::pay(env, &config.currency, seller, currency_out)?;

    events::token_sold(env, seller, token_in, currency_out);
    Ok(currency_out)
}
