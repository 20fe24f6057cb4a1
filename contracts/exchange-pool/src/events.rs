use soroban_sdk::{Address, Env, Symbol};

pub fn liquidity_added(env: &Env, provider: &Address, currency_amount: i128, token_amount: i128) {
    env.events().publish(
        (Symbol::new(env, "liquidity_added"), provider.clone()),
        (currency_amount, token_amount),
    );
}

pub fn liquidity_removed(
    env: &Env,
    provider: &Address,
    currency_amount: i128,
    token_amount: i128,
) {
    env.events().publish(
        (Symbol::new(env, "liquidity_removed"), provider.clone()),
        (currency_amount, token_amount),
    );
}

pub fn token_purchased(env: &Env, buyer: &Address, currency_amount: i128, token_amount: i128) {
    env.events().publish(
        (Symbol::new(env, "token_purchased"), buyer.clone()),
        (currency_amount, token_amount),
    );
}

pub fn token_sold(env: &Env, seller: &Address, token_amount: i128, currency_amount: i128) {
    env.events().publish(
        (Symbol::new(env, "token_sold"), seller.clone()),
        (token_amount, currency_amount),
    );
}
