use soroban_sdk::{contractclient, Address, Env, Vec};

/// Subset of the lending market the strategy supplies into.
#[contractclient(name = "LendingPoolClient")]
pub trait LendingPool {
    /// Pulls `amount` of `asset` from `from` through its allowance to the pool.
    fn supply(env: Env, from: Address, asset: Address, amount: i128);

    fn withdraw(env: Env, from: Address, asset: Address, amount: i128, to: Address) -> i128;

    /// Interest-bearing position of `owner`, in `asset` units.
    fn position_balance(env: Env, asset: Address, owner: Address) -> i128;

    /// Asset the pool can pay out right now.
    fn liquid_balance(env: Env, asset: Address) -> i128;

    /// Remaining supply headroom, `i128::MAX` when uncapped.
    fn max_supply(env: Env, asset: Address) -> i128;

    fn reward_tokens(env: Env, asset: Address) -> Vec<Address>;

    fn claim_rewards(env: Env, asset: Address, owner: Address, to: Address);
}
