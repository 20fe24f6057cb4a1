//! Asset contracts with scripted misbehavior, used to exercise the pool
//! against failing and re-entering collaborators.

use crate::ExchangePoolClient;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenMode {
    /// Plain balance-moving token
    Normal,
    /// Every transfer panics
    Fail,
    /// Every transfer calls back into the pool before returning
    Reenter,
}

#[contracttype]
#[derive(Clone)]
enum TokenKey {
    Balance(Address),
    Mode,
    Pool,
}

#[contract]
pub struct ScriptedToken;

#[contractimpl]
impl ScriptedToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&TokenKey::Balance(to), &(balance + amount));
    }

    pub fn set_mode(env: Env, mode: TokenMode, pool: Address) {
        env.storage().instance().set(&TokenKey::Mode, &mode);
        env.storage().instance().set(&TokenKey::Pool, &pool);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .get(&TokenKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        let mode: TokenMode = env
            .storage()
            .instance()
            .get(&TokenKey::Mode)
            .unwrap_or(TokenMode::Normal);

        match mode {
            TokenMode::Normal => {}
            TokenMode::Fail => panic!("transfer rejected"),
            TokenMode::Reenter => {
                let pool: Address = env.storage().instance().get(&TokenKey::Pool).unwrap();
                ExchangePoolClient::new(&env, &pool).swap_token_for_currency(&from, &1, &0);
            }
        }

        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            panic!("insufficient balance");
        }
        let to_balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&TokenKey::Balance(from), &(from_balance - amount));
        env.storage()
            .instance()
            .set(&TokenKey::Balance(to), &(to_balance + amount));
    }
}
