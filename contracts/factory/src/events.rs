use soroban_sdk::{Address, Env, Symbol};

pub struct FactoryEvents {}

impl FactoryEvents {
    /// Emitted when the factory is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - ()
    pub fn initialize(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, ());
    }

    /// Emitted when a strategy is deployed
    ///
    /// - topics - `["new_lender", asset: Address]`
    /// - data - `strategy: Address`
    pub fn new_lender(env: &Env, asset: Address, strategy: Address) {
        let topics = (Symbol::new(env, "new_lender"), asset);
        env.events().publish(topics, strategy);
    }
}
