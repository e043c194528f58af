use lender_common::{
    constants::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD},
    error::ErrorCode,
};
use soroban_sdk::{
    contracttype, log, panic_with_error, Address, BytesN, ConversionError, Env, TryFromVal, Val,
    Vec,
};

#[derive(Clone, Copy)]
#[repr(u32)]
pub enum DataKey {
    Config = 1,
    StrategyVec = 2,
    Initialized = 3,
}

impl TryFromVal<Env, DataKey> for Val {
    type Error = ConversionError;

    fn try_from_val(_env: &Env, v: &DataKey) -> Result<Self, Self::Error> {
        Ok((*v as u32).into())
    }
}

#[derive(Clone)]
#[contracttype]
pub struct DeploymentKey {
    pub asset: Address,
    pub lending_pool: Address,
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub admin: Address,
    pub strategy_wasm_hash: BytesN<32>,
    /// Handed pending management of every new strategy
    pub management: Address,
    pub performance_fee_recipient: Address,
    pub keeper: Address,
    pub emergency_admin: Option<Address>,
    pub router: Address,
    pub base_token: Address,
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().persistent().set(&DataKey::Config, &config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Factory: Config not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        });

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

// ################################################################
//                           Deployments
// ################################################################

pub fn get_strategy_vec(env: &Env) -> Vec<Address> {
    let strategy_vec = env
        .storage()
        .persistent()
        .get(&DataKey::StrategyVec)
        .unwrap_or(Vec::new(env));

    if env.storage().persistent().has(&DataKey::StrategyVec) {
        env.storage().persistent().extend_ttl(
            &DataKey::StrategyVec,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    strategy_vec
}

pub fn save_strategy_vec(env: &Env, strategy_vec: Vec<Address>) {
    env.storage()
        .persistent()
        .set(&DataKey::StrategyVec, &strategy_vec);
    env.storage().persistent().extend_ttl(
        &DataKey::StrategyVec,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn save_deployment(env: &Env, asset: &Address, lending_pool: &Address, strategy: &Address) {
    let key = DeploymentKey {
        asset: asset.clone(),
        lending_pool: lending_pool.clone(),
    };
    env.storage().persistent().set(&key, strategy);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_deployment(env: &Env, asset: &Address, lending_pool: &Address) -> Option<Address> {
    let key = DeploymentKey {
        asset: asset.clone(),
        lending_pool: lending_pool.clone(),
    };
    let strategy = env.storage().persistent().get(&key);
    if strategy.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    strategy
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(e: &Env) {
    e.storage().persistent().set(&DataKey::Initialized, &true);

    e.storage().persistent().extend_ttl(
        &DataKey::Initialized,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}
