use crate::assets;
use crate::error::PoolError;
use crate::events;
use crate::invariants::{amount_positive, withdrawal_proportional};
use crate::shares;
use crate::storage::get_config;
use exchange_math::{amounts_for_shares, shares_for_deposit};
use soroban_sdk::{log, Address, Env};

/// Deposit both assets and mint shares to `provider`
///
/// An empty pool (no tokens held) takes any ratio and mints one share per
/// unit of currency. Afterwards shares are proportional to the currency
/// contributed; `token_amount` is accepted as given and not checked against
/// the pool ratio.
///
/// # Returns
/// Shares minted
pub fn add_liquidity(
    env: &Env,
    provider: &Address,
    token_amount: i128,
    currency_amount: i128,
) -> Result<i128, PoolError> {
    if !amount_positive(token_amount) || !amount_positive(currency_amount) {
        return Err(PoolError::InvalidAmount);
    }

    let config = get_config(env)?;
    let reserves = assets::reserves(env, &config)?;

    assets::ensure_balance(env, &config.currency, provider, currency_amount)?;
    assets::ensure_balance(env, &config.token, provider, token_amount)?;

    let shares_minted = if reserves.token == 0 {
        currency_amount
    } else {
        let total_shares = shares::total_supply(env);
        if !reserves.is_priced() || total_shares == 0 {
            return Err(PoolError::InsufficientLiquidity);
        }
        shares_for_deposit(env, currency_amount, reserves.currency, total_shares)
    };

    log!(
        env,
        "add_liquidity: currency {} token {} shares {}",
        currency_amount,
        token_amount,
        shares_minted
    );

    // A deposit too small to earn a whole share is rejected by the ledger
    shares::mint(env, provider, shares_minted)?;

    assets::pull(env, &config.currency, provider, currency_amount)?;
    assets::pull(env, &config.token, provider, token_amount)?;

    events::liquidity_added(env, provider, currency_amount, token_amount);
    Ok(shares_minted)
}

/// Burn `share_amount` of `provider`'s shares and pay out the proportional reserves
///
/// Shares are burned before either asset leaves the pool.
///
/// # Returns
/// (currency_amount, token_amount) - Amounts withdrawn
pub fn remove_liquidity(
    env: &Env,
    provider: &Address,
    share_amount: i128,
) -> Result<(i128, i128), PoolError> {
    if !amount_positive(share_amount) {
        return Err(PoolError::InvalidAmount);
    }

    let config = get_config(env)?;
    if shares::balance_of(env, provider) < share_amount {
        return Err(PoolError::InsufficientBalance);
    }

    let total_shares = shares::total_supply(env);
    let reserves = assets::reserves(env, &config)?;
    let (currency_amount, token_amount) =
        amounts_for_shares(env, &reserves, share_amount, total_shares);

    if !withdrawal_proportional(env, &reserves, currency_amount, token_amount) {
        return Err(PoolError::InvariantViolation);
    }

    log!(
        env,
        "remove_liquidity: shares {} currency {} token {}",
        share_amount,
        currency_amount,
        token_amount
    );

    shares::burn(env, provider, share_amount)?;

    assets::pay(env, &config.currency, provider, currency_amount)?;
    assets::pay(env, &config.token, provider, token_amount)?;

    events::liquidity_removed(env, provider, currency_amount, token_amount);
    Ok((currency_amount, token_amount))
}
