#![no_std]

mod assets;
mod error;
mod events;
mod guard;
mod invariants;
mod liquidity;
mod pricing;
mod shares;
mod storage;
mod swap;

#[cfg(test)]
mod test_tokens;

pub use error::PoolError;

use exchange_types::{PoolConfig, PoolState};
use guard::CriticalSection;
use soroban_sdk::{contract, contractimpl, Address, Env};
use storage::{get_config, has_config, set_config};

#[contract]
pub struct ExchangePool;

#[contractimpl]
impl ExchangePool {
    /// Initialize the pool with its currency and token asset contracts
    pub fn initialize(env: Env, currency: Address, token: Address) -> Result<(), PoolError> {
        if has_config(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if currency == token {
            return Err(PoolError::InvalidConfig);
        }
        set_config(&env, &PoolConfig { currency, token });
        Ok(())
    }

    // === Mutating Functions ===
    //
    // Each one holds the pool lock for its whole body. The lock is taken
    // before anything else so a re-entrant call fails before it reads state.

    /// Deposit `currency_amount` currency and `token_amount` tokens
    ///
    /// # Returns
    /// Shares minted to `provider`
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        token_amount: i128,
        currency_amount: i128,
    ) -> Result<i128, PoolError> {
        let _section = CriticalSection::enter(&env)?;
        provider.require_auth();
        liquidity::add_liquidity(&env, &provider, token_amount, currency_amount)
    }

    /// Burn shares for the proportional part of both reserves
    ///
    /// # Returns
    /// (currency_amount, token_amount) - Amounts paid to `provider`
    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        share_amount: i128,
    ) -> Result<(i128, i128), PoolError> {
        let _section = CriticalSection::enter(&env)?;
        provider.require_auth();
        liquidity::remove_liquidity(&env, &provider, share_amount)
    }

    /// Swap currency paid by `buyer` for tokens sent to `recipient`
    ///
    /// # Returns
    /// Tokens paid out
    pub fn swap_currency_for_token(
        env: Env,
        buyer: Address,
        currency_in: i128,
        min_token_out: i128,
        recipient: Address,
    ) -> Result<i128, PoolError> {
        let _section = CriticalSection::enter(&env)?;
        buyer.require_auth();
        swap::swap_currency_for_token(&env, &buyer, currency_in, min_token_out, &recipient)
    }

    /// Swap tokens paid by `seller` for currency sent back to `seller`
    ///
    /// # Returns
    /// Currency paid out
    pub fn swap_token_for_currency(
        env: Env,
        seller: Address,
        token_in: i128,
        min_currency_out: i128,
    ) -> Result<i128, PoolError> {
        let _section = CriticalSection::enter(&env)?;
        seller.require_auth();
        swap::swap_token_for_currency(&env, &seller, token_in, min_currency_out)
    }

    // === View Functions ===

    /// Constant-product output for arbitrary reserves (0.3% fee)
    pub fn get_amount(
        env: Env,
        input_amount: i128,
        input_reserve: i128,
        output_reserve: i128,
    ) -> Result<i128, PoolError> {
        pricing::quote(&env, input_amount, input_reserve, output_reserve)
    }

    /// Tokens a swap of `currency_in` would pay at current reserves
    pub fn get_token_amount(env: Env, currency_in: i128) -> Result<i128, PoolError> {
        let reserves = assets::reserves(&env, &get_config(&env)?)?;
        pricing::token_out(&env, &reserves, currency_in)
    }

    /// Currency a swap of `token_in` would pay at current reserves
    pub fn get_currency_amount(env: Env, token_in: i128) -> Result<i128, PoolError> {
        let reserves = assets::reserves(&env, &get_config(&env)?)?;
        pricing::currency_out(&env, &reserves, token_in)
    }

    /// Spot price of the output asset in input units, scaled by 1000
    pub fn get_price(env: Env, input_reserve: i128, output_reserve: i128) -> Result<i128, PoolError> {
        pricing::price(&env, input_reserve, output_reserve)
    }

    /// Tokens held by the pool
    pub fn get_token_reserves(env: Env) -> Result<i128, PoolError> {
        let config = get_config(&env)?;
        assets::balance(&env, &config.token, &env.current_contract_address())
    }

    /// Currency held by the pool
    pub fn get_currency_reserve(env: Env) -> Result<i128, PoolError> {
        let config = get_config(&env)?;
        assets::balance(&env, &config.currency, &env.current_contract_address())
    }

    /// Reserves and share supply
    pub fn get_state(env: Env) -> Result<PoolState, PoolError> {
        let reserves = assets::reserves(&env, &get_config(&env)?)?;
        Ok(PoolState::new(reserves, shares::total_supply(&env)))
    }

    /// Pool configuration
    pub fn get_config(env: Env) -> Result<PoolConfig, PoolError> {
        get_config(&env)
    }

    /// Total outstanding shares
    pub fn total_shares(env: Env) -> i128 {
        shares::total_supply(&env)
    }

    /// Shares held by `owner`
    pub fn share_balance(env: Env, owner: Address) -> i128 {
        shares::balance_of(&env, &owner)
    }
}
