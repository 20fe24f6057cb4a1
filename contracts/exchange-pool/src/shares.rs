//! Mint/burn-only ledger of liquidity shares.
//!
//! Shares are claims on the pool's reserves and cannot be transferred between
//! holders; supply only moves through `mint` and `burn`.

use crate::error::PoolError;
use crate::storage::{get_share_balance, get_total_shares, set_share_balance, set_total_shares};
use soroban_sdk::{Address, Env};

pub fn total_supply(env: &Env) -> i128 {
    get_total_shares(env)
}

pub fn balance_of(env: &Env, owner: &Address) -> i128 {
    get_share_balance(env, owner)
}

/// Issue `amount` new shares to `to`
pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), PoolError> {
    if amount <= 0 {
        return Err(PoolError::InvalidAmount);
    }
    set_share_balance(env, to, balance_of(env, to) + amount);
    set_total_shares(env, total_supply(env) + amount);
    Ok(())
}

/// Redeem `amount` shares held by `from`
pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), PoolError> {
    if amount <= 0 {
        return Err(PoolError::InvalidAmount);
    }
    let balance = balance_of(env, from);
    if balance < amount {
        return Err(PoolError::InsufficientBalance);
    }
    set_share_balance(env, from, balance - amount);
    set_total_shares(env, total_supply(env) - amount);
    Ok(())
}
