use crate::{
    events::FactoryEvents,
    factory::LenderFactoryTrait,
    interface::StrategyClient,
    storage::{
        get_config, get_deployment, get_strategy_vec, is_initialized, save_config,
        save_deployment, save_strategy_vec, set_initialized, Config,
    },
    utils::deploy_strategy_contract,
};
use lender_common::{
    constants::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    error::ErrorCode,
    types::{MarketInitInfo, RoleInitInfo},
    validate,
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, BytesN, Env, String, Vec,
};

contractmeta!(
    key = "Description",
    val = "Factory for lending strategies, one per asset and lending pool"
);

#[contract]
pub struct LenderFactory;

fn require_admin(env: &Env, config: &Config, sender: &Address) -> Result<(), ErrorCode> {
    validate!(
        env,
        *sender == config.admin,
        ErrorCode::NotAuthorized,
        "Factory: sender is not the admin"
    )
}

#[contractimpl]
impl LenderFactoryTrait for LenderFactory {
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
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Factory: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            Config {
                admin: admin.clone(),
                strategy_wasm_hash,
                management,
                performance_fee_recipient,
                keeper,
                emergency_admin,
                router,
                base_token,
            },
        );

        save_strategy_vec(&env, Vec::new(&env));

        FactoryEvents::initialize(&env, admin);
    }

    fn new_lender(
        env: Env,
        sender: Address,
        asset: Address,
        lending_pool: Address,
        name: String,
        symbol: String,
    ) -> Result<Address, ErrorCode> {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        require_admin(&env, &config, &sender)?;
        validate!(
            &env,
            get_deployment(&env, &asset, &lending_pool).is_none(),
            ErrorCode::StrategyAlreadyExists,
            "Factory: new_lender: a strategy already exists for this asset and pool"
        )?;

        let factory = env.current_contract_address();
        let strategy = deploy_strategy_contract(
            &env,
            config.strategy_wasm_hash,
            &asset,
            name,
            symbol,
            MarketInitInfo {
                lending_pool: lending_pool.clone(),
                router: config.router,
                base_token: config.base_token,
            },
            RoleInitInfo {
                management: factory.clone(),
                keeper: config.keeper,
                emergency_admin: config.emergency_admin,
                performance_fee_recipient: config.performance_fee_recipient,
            },
        );

        StrategyClient::new(&env, &strategy).set_pending_management(&factory, &config.management);

        let mut strategy_vec = get_strategy_vec(&env);
        strategy_vec.push_back(strategy.clone());
        save_strategy_vec(&env, strategy_vec);
        save_deployment(&env, &asset, &lending_pool, &strategy);

        FactoryEvents::new_lender(&env, asset, strategy.clone());

        Ok(strategy)
    }

    fn set_addresses(
        env: Env,
        sender: Address,
        management: Address,
        performance_fee_recipient: Address,
        keeper: Address,
        emergency_admin: Option<Address>,
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        require_admin(&env, &config, &sender)?;

        save_config(
            &env,
            Config {
                management,
                performance_fee_recipient,
                keeper,
                emergency_admin,
                ..config
            },
        );

        Ok(())
    }

    fn update_wasm_hash(env: Env, sender: Address, strategy_wasm_hash: BytesN<32>) -> Result<(), ErrorCode> {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        require_admin(&env, &config, &sender)?;

        save_config(
            &env,
            Config {
                strategy_wasm_hash,
                ..config
            },
        );

        Ok(())
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn deployment(env: Env, asset: Address, lending_pool: Address) -> Option<Address> {
        get_deployment(&env, &asset, &lending_pool)
    }

    /// True only for strategies this factory deployed that still point at
    /// the pair they were recorded under.
    fn is_deployed_strategy(env: Env, strategy: Address) -> bool {
        if !get_strategy_vec(&env).contains(&strategy) {
            return false;
        }

        let client = StrategyClient::new(&env, &strategy);
        get_deployment(&env, &client.asset(), &client.lending_pool()) == Some(strategy)
    }

    fn query_strategies(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_strategy_vec(&env)
    }

    fn get_admin(env: Env) -> Address {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_config(&env).admin
    }

    fn get_config(env: Env) -> Config {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_config(&env)
    }
}

#[contractimpl]
impl LenderFactory {
    pub fn update(env: Env, new_wasm_hash: BytesN<32>) {
        let admin = get_config(&env).admin;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}
