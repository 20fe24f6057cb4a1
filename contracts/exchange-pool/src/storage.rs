use crate::error::PoolError;
use exchange_types::PoolConfig;
use soroban_sdk::{contracttype, Address, Env};

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Critical section flag (Instance storage)
    Locked,
    /// Total outstanding shares (Instance storage)
    TotalShares,
    /// Share balance per provider (Persistent storage)
    Shares(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<PoolConfig, PoolError> {
    let config: PoolConfig = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PoolError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Lock ===

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env) {
    env.storage().instance().set(&DataKey::Locked, &true);
}

pub fn clear_locked(env: &Env) {
    env.storage().instance().remove(&DataKey::Locked);
}

// === Shares ===

pub fn get_total_shares(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalShares)
        .unwrap_or(0)
}

pub fn set_total_shares(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalShares, &total);
    extend_instance_ttl(env);
}

pub fn get_share_balance(env: &Env, owner: &Address) -> i128 {
    let key = DataKey::Shares(owner.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_share_balance(env: &Env, owner: &Address, balance: i128) {
    let key = DataKey::Shares(owner.clone());
    if balance == 0 {
        // Remove empty balance
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}
