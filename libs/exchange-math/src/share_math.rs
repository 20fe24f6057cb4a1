use exchange_types::Reserves;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::Env;

/// Shares minted for a currency deposit into a funded pool
///
/// shares = floor(currency_amount * total_shares / currency_reserve)
///
/// `currency_reserve` is the balance before the deposit arrives.
pub fn shares_for_deposit(
    env: &Env,
    currency_amount: i128,
    currency_reserve: i128,
    total_shares: i128,
) -> i128 {
    currency_amount.fixed_mul_floor(env, &total_shares, &currency_reserve)
}

/// Reserve amounts redeemed by burning `share_amount` of `total_shares`
///
/// Both sides round down, so a redemption never pays out more than its
/// proportional claim.
///
/// # Returns
/// (currency_amount, token_amount)
pub fn amounts_for_shares(
    env: &Env,
    reserves: &Reserves,
    share_amount: i128,
    total_shares: i128,
) -> (i128, i128) {
    let currency_amount = reserves.currency.fixed_mul_floor(env, &share_amount, &total_shares);
    let token_amount = reserves.token.fixed_mul_floor(env, &share_amount, &total_shares);
    (currency_amount, token_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_shares_for_deposit_proportional() {
        let env = Env::default();
        assert_eq!(shares_for_deposit(&env, 100, 1000, 1000), 100);
        assert_eq!(shares_for_deposit(&env, 100, 2000, 1000), 50);
    }

    #[test]
    fn test_shares_for_deposit_rounds_down() {
        let env = Env::default();
        // 10 * 1000 / 3000 = 3.33
        assert_eq!(shares_for_deposit(&env, 10, 3000, 1000), 3);
        assert_eq!(shares_for_deposit(&env, 1, 3000, 1000), 0);
    }

    #[test]
    fn test_amounts_for_all_shares_drain_pool() {
        let env = Env::default();
        let reserves = Reserves::new(1000, 500);
        assert_eq!(amounts_for_shares(&env, &reserves, 1000, 1000), (1000, 500));
    }

    #[test]
    fn test_amounts_for_shares_round_down() {
        let env = Env::default();
        let reserves = Reserves::new(1000, 500);
        // 1000 * 333 / 1000 = 333, 500 * 333 / 1000 = 166.5
        assert_eq!(amounts_for_shares(&env, &reserves, 333, 1000), (333, 166));
    }

    #[test]
    fn test_split_redemption_never_exceeds_reserves() {
        let env = Env::default();
        let reserves = Reserves::new(1001, 577);
        let total_shares = 997;
        let (c1, t1) = amounts_for_shares(&env, &reserves, 500, total_shares);
        let (c2, t2) = amounts_for_shares(&env, &reserves, 497, total_shares);
        assert!(c1 + c2 <= reserves.currency);
        assert!(t1 + t2 <= reserves.token);
    }
}
