use lender_common::error::ErrorCode;
use soroban_sdk::{contractclient, Address, BytesN, Env, String, Vec};

use crate::storage::Config;

#[contractclient(name = "LenderFactoryClient")]
pub trait LenderFactoryTrait {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        strategy_wasm_hash: BytesN<32>,
        management: Address,
        performance_fee_recipient: Address,
        keeper: Address,
        emergency_admin: Option<Address>,
        router: Address,
        base_token: Address,
    );

    /// Deploys a strategy for `asset` on `lending_pool`. The configured
    /// management still has to accept the role on the new strategy.
    fn new_lender(
        env: Env,
        sender: Address,
        asset: Address,
        lending_pool: Address,
        name: String,
        symbol: String,
    ) -> Result<Address, ErrorCode>;

    /// Roles handed to strategies deployed from now on.
    fn set_addresses(
        env: Env,
        sender: Address,
        management: Address,
        performance_fee_recipient: Address,
        keeper: Address,
        emergency_admin: Option<Address>,
    ) -> Result<(), ErrorCode>;

    fn update_wasm_hash(env: Env, sender: Address, strategy_wasm_hash: BytesN<32>) -> Result<(), ErrorCode>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn deployment(env: Env, asset: Address, lending_pool: Address) -> Option<Address>;

    fn is_deployed_strategy(env: Env, strategy: Address) -> bool;

    fn query_strategies(env: Env) -> Vec<Address>;

    fn get_admin(env: Env) -> Address;

    fn get_config(env: Env) -> Config;
}
