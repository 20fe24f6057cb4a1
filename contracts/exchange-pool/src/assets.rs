//! Calls into the currency and token asset contracts.
//!
//! Any collaborator failure (host error, contract panic, bad return value) is
//! reported as `TransferFailed` so the calling entry point aborts as a whole.

use crate::error::PoolError;
use exchange_types::{PoolConfig, Reserves};
use soroban_sdk::{token, Address, Env};

/// Balance of `owner` on `asset`
pub fn balance(env: &Env, asset: &Address, owner: &Address) -> Result<i128, PoolError> {
    match token::Client::new(env, asset).try_balance(owner) {
        Ok(Ok(amount)) => Ok(amount),
        _ => Err(PoolError::TransferFailed),
    }
}

/// Balances currently held by the pool on both assets
pub fn reserves(env: &Env, config: &PoolConfig) -> Result<Reserves, PoolError> {
    let pool = env.current_contract_address();
    let currency = balance(env, &config.currency, &pool)?;
    let token = balance(env, &config.token, &pool)?;
    Ok(Reserves::new(currency, token))
}

/// Fail with `InsufficientBalance` unless `owner` holds `amount` of `asset`
pub fn ensure_balance(
    env: &Env,
    asset: &Address,
    owner: &Address,
    amount: i128,
) -> Result<(), PoolError> {
    if balance(env, asset, owner)? < amount {
        return Err(PoolError::InsufficientBalance);
    }
    Ok(())
}

/// Move `amount` of `asset` from `from` into the pool
pub fn pull(env: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), PoolError> {
    let pool = env.current_contract_address();
    transfer(env, asset, from, &pool, amount)
}

/// Pay `amount` of `asset` out of the pool to `to`
pub fn pay(env: &Env, asset: &Address, to: &Address, amount: i128) -> Result<(), PoolError> {
    if amount == 0 {
        return Ok(());
    }
    let pool = env.current_contract_address();
    transfer(env, asset, &pool, to, amount)
}

fn transfer(
    env: &Env,
    asset: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), PoolError> {
    match token::Client::new(env, asset).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(PoolError::TransferFailed),
    }
}
