use crate::error::PoolError;
use crate::storage::{clear_locked, is_locked, set_locked};
use soroban_sdk::Env;

/// Pool-wide mutual exclusion for mutating entry points.
///
/// Holding a `CriticalSection` means the `Locked` flag is set. Dropping it
/// clears the flag, so every exit path of the holder releases the pool,
/// including early `?` returns.
pub struct CriticalSection {
    env: Env,
}

impl CriticalSection {
    /// Take the pool lock, failing fast if it is already held
    pub fn enter(env: &Env) -> Result<Self, PoolError> {
        if is_locked(env) {
            return Err(PoolError::ReentrancyBlocked);
        }
        set_locked(env);
        Ok(Self { env: env.clone() })
    }
}

impl Drop for CriticalSection {
    fn drop(&mut self) {
        clear_locked(&self.env);
    }
}
