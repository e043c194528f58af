use lender_common::{
    constants::{
        INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::ErrorCode,
};
use soroban_sdk::{contracttype, log, panic_with_error, Address, Env};

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    State,
    Schedule,
    Roles,
    Market,
    Rewards,
    Balance(Address),
    Allowance(AllowanceDataKey),
    DontSell(Address),
    MinAmountToSell(Address),
    SwapFee(Address, Address),
}

// ################################################################
//                             State
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyState {
    pub asset: Address,
    pub decimals: u32,
    /// Asset held by the strategy and accounted for at the last report or ledger movement
    pub total_idle: i128,
    /// Asset supplied to the lending pool as of the last report or ledger movement
    pub total_debt: i128,
    /// Raw share supply, including shares the strategy holds for locked profit
    pub total_shares: i128,
    pub performance_fee: u32,
    pub profit_max_unlock_time: u64,
    pub is_shutdown: bool,
}

/// Linear release of profit shares held by the strategy.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UnlockSchedule {
    pub full_profit_unlock_date: u64,
    /// Shares per second, scaled by `MAX_BPS_EXTENDED`
    pub profit_unlocking_rate: i128,
    pub last_report: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Roles {
    pub management: Address,
    pub pending_management: Option<Address>,
    pub keeper: Address,
    pub emergency_admin: Option<Address>,
    pub performance_fee_recipient: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketConfig {
    pub lending_pool: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardConfig {
    pub claim_rewards: bool,
    pub use_auction: bool,
    pub auction: Option<Address>,
    pub router: Address,
    pub base_token: Address,
    pub min_amount_to_sell: i128,
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn save_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn get_persistent<V>(env: &Env, key: &DataKey) -> V
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get(key).unwrap_or_else(|| {
        log!(env, "Strategy: storage entry not set");
        panic_with_error!(env, ErrorCode::NotInitialized)
    });
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    value
}

pub fn save_state(env: &Env, state: &StrategyState) {
    save_persistent(env, &DataKey::State, state);
}

pub fn get_state(env: &Env) -> StrategyState {
    get_persistent(env, &DataKey::State)
}

pub fn save_schedule(env: &Env, schedule: &UnlockSchedule) {
    save_persistent(env, &DataKey::Schedule, schedule);
}

pub fn get_schedule(env: &Env) -> UnlockSchedule {
    get_persistent(env, &DataKey::Schedule)
}

pub fn save_roles(env: &Env, roles: &Roles) {
    save_persistent(env, &DataKey::Roles, roles);
}

pub fn get_roles(env: &Env) -> Roles {
    get_persistent(env, &DataKey::Roles)
}

pub fn save_market(env: &Env, market: &MarketConfig) {
    save_persistent(env, &DataKey::Market, market);
}

pub fn get_market(env: &Env) -> MarketConfig {
    get_persistent(env, &DataKey::Market)
}

pub fn save_reward_config(env: &Env, config: &RewardConfig) {
    save_persistent(env, &DataKey::Rewards, config);
}

pub fn get_reward_config(env: &Env) -> RewardConfig {
    get_persistent(env, &DataKey::Rewards)
}

// ################################################################
//                        Reward token flags
// ################################################################

pub fn set_dont_sell(env: &Env, token: &Address, dont_sell: bool) {
    let key = DataKey::DontSell(token.clone());
    if dont_sell {
        save_persistent(env, &key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn get_dont_sell(env: &Env, token: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::DontSell(token.clone()))
        .unwrap_or(false)
}

pub fn set_min_amount_to_sell_for(env: &Env, token: &Address, amount: Option<i128>) {
    let key = DataKey::MinAmountToSell(token.clone());
    match amount {
        Some(amount) => save_persistent(env, &key, &amount),
        None => env.storage().persistent().remove(&key),
    }
}

pub fn get_min_amount_to_sell_for(env: &Env, token: &Address) -> Option<i128> {
    env.storage()
        .persistent()
        .get(&DataKey::MinAmountToSell(token.clone()))
}

/// Fee tiers are stored under both orderings so lookups are symmetric.
pub fn set_swap_fee(env: &Env, token0: &Address, token1: &Address, fee: u32) {
    save_persistent(env, &DataKey::SwapFee(token0.clone(), token1.clone()), &fee);
    save_persistent(env, &DataKey::SwapFee(token1.clone(), token0.clone()), &fee);
}

pub fn get_swap_fee(env: &Env, token_in: &Address, token_out: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::SwapFee(token_in.clone(), token_out.clone()))
        .unwrap_or(0)
}
