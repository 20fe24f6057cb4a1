use soroban_sdk::{contracttype, Address};

/// Pool configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Settlement currency asset contract (e.g. the native XLM asset contract)
    pub currency: Address,
    /// Token asset contract traded against the currency
    pub token: Address,
}

/// Balances held by the pool at one point in time.
///
/// Read once at the start of a critical section, before any deposit is pulled
/// from the caller, so prices and share amounts are always computed against
/// pre-trade reserves.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Reserves {
    /// Currency held by the pool
    pub currency: i128,
    /// Tokens held by the pool
    pub token: i128,
}

impl Reserves {
    pub fn new(currency: i128, token: i128) -> Self {
        Self { currency, token }
    }

    /// True when both sides hold funds, i.e. a spot price exists
    pub fn is_priced(&self) -> bool {
        self.currency > 0 && self.token > 0
    }
}

/// Accounting snapshot exposed by the pool's `get_state` view
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Currency reserve
    pub currency_reserve: i128,
    /// Token reserve
    pub token_reserve: i128,
    /// Total outstanding liquidity shares
    pub total_shares: i128,
}

impl PoolState {
    pub fn new(reserves: Reserves, total_shares: i128) -> Self {
        Self {
            currency_reserve: reserves.currency,
            token_reserve: reserves.token,
            total_shares,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserves_priced_needs_both_sides() {
        assert!(Reserves::new(1000, 500).is_priced());
        assert!(!Reserves::new(0, 500).is_priced());
        assert!(!Reserves::new(1000, 0).is_priced());
        assert!(!Reserves::default().is_priced());
    }

    #[test]
    fn test_pool_state_from_reserves() {
        let state = PoolState::new(Reserves::new(1000, 500), 1000);
        assert_eq!(state.currency_reserve, 1000);
        assert_eq!(state.token_reserve, 500);
        assert_eq!(state.total_shares, 1000);
    }
}
