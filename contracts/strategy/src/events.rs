use soroban_sdk::{Address, Env, Symbol};

pub struct StrategyEvents {}

impl StrategyEvents {
    /// Emitted once when the strategy is deployed
    ///
    /// - topics - `["initialize", asset: Address]`
    /// - data - `[lending_pool: Address, management: Address]`
    pub fn initialize(env: &Env, asset: Address, lending_pool: Address, management: Address) {
        let topics = (Symbol::new(env, "initialize"), asset);
        env.events().publish(topics, (lending_pool, management));
    }

    /// Emitted when assets are deposited for shares
    ///
    /// - topics - `["deposit", caller: Address, owner: Address]`
    /// - data - `[assets: i128, shares: i128]`
    pub fn deposit(env: &Env, caller: Address, owner: Address, assets: i128, shares: i128) {
        let topics = (Symbol::new(env, "deposit"), caller, owner);
        env.events().publish(topics, (assets, shares));
    }

    /// Emitted when shares are burned for assets
    ///
    /// - topics - `["withdraw", caller: Address, owner: Address]`
    /// - data - `[receiver: Address, assets: i128, shares: i128]`
    pub fn withdraw(
        env: &Env,
        caller: Address,
        receiver: Address,
        owner: Address,
        assets: i128,
        shares: i128,
    ) {
        let topics = (Symbol::new(env, "withdraw"), caller, owner);
        env.events().publish(topics, (receiver, assets, shares));
    }

    /// Emitted when a keeper settles a harvest
    ///
    /// - topics - `["reported"]`
    /// - data - `[profit: i128, loss: i128, fee_shares: i128]`
    pub fn reported(env: &Env, profit: i128, loss: i128, fee_shares: i128) {
        let topics = (Symbol::new(env, "reported"),);
        env.events().publish(topics, (profit, loss, fee_shares));
    }

    /// - topics - `["shutdown", caller: Address]`
    /// - data - ()
    pub fn shutdown(env: &Env, caller: Address) {
        let topics = (Symbol::new(env, "shutdown"), caller);
        env.events().publish(topics, ());
    }

    /// - topics - `["emergency_withdraw", caller: Address]`
    /// - data - `[freed: i128]`
    pub fn emergency_withdraw(env: &Env, caller: Address, freed: i128) {
        let topics = (Symbol::new(env, "emergency_withdraw"), caller);
        env.events().publish(topics, freed);
    }

    /// - topics - `["tend", caller: Address]`
    /// - data - `[deployed: i128]`
    pub fn tend(env: &Env, caller: Address, deployed: i128) {
        let topics = (Symbol::new(env, "tend"), caller);
        env.events().publish(topics, deployed);
    }

    /// Emitted when a reward token is swapped into the asset
    ///
    /// - topics - `["reward_sold", token: Address]`
    /// - data - `[amount_in: i128, amount_out: i128]`
    pub fn reward_sold(env: &Env, token: Address, amount_in: i128, amount_out: i128) {
        let topics = (Symbol::new(env, "reward_sold"), token);
        env.events().publish(topics, (amount_in, amount_out));
    }

    /// - topics - `["auction_kicked", token: Address]`
    /// - data - `[auction: Address, amount: i128]`
    pub fn auction_kicked(env: &Env, token: Address, auction: Address, amount: i128) {
        let topics = (Symbol::new(env, "auction_kicked"), token);
        env.events().publish(topics, (auction, amount));
    }

    /// Emitted when a role or a management-owned parameter changes
    ///
    /// - topics - `["update", name: Symbol]`
    /// - data - `value`
    pub fn update<V>(env: &Env, name: &str, value: V)
    where
        V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        let topics = (Symbol::new(env, "update"), Symbol::new(env, name));
        env.events().publish(topics, value);
    }
}
