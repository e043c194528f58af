use lender_common::error::ErrorCode;
use soroban_sdk::{Address, Bytes, Env};

pub trait LenderStrategyTrait {
    // ################################################################
    //                             Ledger
    // ################################################################

    /// Deposit `assets` from `caller` and mint shares to `receiver`.
    fn deposit(env: Env, caller: Address, assets: i128, receiver: Address) -> Result<i128, ErrorCode>;

    /// Mint exactly `shares` to `receiver`, pulling the assets they cost.
    fn mint(env: Env, caller: Address, shares: i128, receiver: Address) -> Result<i128, ErrorCode>;

    /// Withdraw `assets` of `owner` to `receiver`. `max_loss` is in basis points.
    fn withdraw(
        env: Env,
        caller: Address,
        assets: i128,
        receiver: Address,
        owner: Address,
        max_loss: u32,
    ) -> Result<i128, ErrorCode>;

    /// Redeem `shares` of `owner` for assets sent to `receiver`. `max_loss` is
    /// in basis points.
    fn redeem(
        env: Env,
        caller: Address,
        shares: i128,
        receiver: Address,
        owner: Address,
        max_loss: u32,
    ) -> Result<i128, ErrorCode>;

    fn report(env: Env, caller: Address) -> Result<(i128, i128), ErrorCode>;

    // ################################################################
    //                            Lifecycle
    // ################################################################

    fn tend(env: Env, caller: Address) -> Result<i128, ErrorCode>;

    fn tend_trigger(env: Env) -> (bool, Bytes);

    fn shutdown_strategy(env: Env, caller: Address) -> Result<(), ErrorCode>;

    fn emergency_withdraw(env: Env, caller: Address, amount: i128) -> Result<i128, ErrorCode>;

    // ################################################################
    //                              Roles
    // ################################################################

    fn set_pending_management(env: Env, caller: Address, management: Address) -> Result<(), ErrorCode>;

    fn accept_management(env: Env, caller: Address) -> Result<(), ErrorCode>;

    fn set_keeper(env: Env, caller: Address, keeper: Address) -> Result<(), ErrorCode>;

    fn set_emergency_admin(
        env: Env,
        caller: Address,
        emergency_admin: Option<Address>,
    ) -> Result<(), ErrorCode>;

    fn set_performance_fee(env: Env, caller: Address, performance_fee: u32) -> Result<(), ErrorCode>;

    fn set_performance_fee_recipient(
        env: Env,
        caller: Address,
        recipient: Address,
    ) -> Result<(), ErrorCode>;

    /// Zero disables locking and releases every locked share at once.
    fn set_profit_max_unlock_time(
        env: Env,
        caller: Address,
        profit_max_unlock_time: u64,
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             Rewards
    // ################################################################

    fn set_claim_rewards(env: Env, caller: Address, claim_rewards: bool) -> Result<(), ErrorCode>;

    fn set_min_amount_to_sell(env: Env, caller: Address, amount: i128) -> Result<(), ErrorCode>;

    /// `None` falls back to the global minimum.
    fn set_min_amount_to_sell_for(
        env: Env,
        caller: Address,
        token: Address,
        amount: Option<i128>,
    ) -> Result<(), ErrorCode>;

    fn set_dont_sell(env: Env, caller: Address, token: Address, dont_sell: bool) -> Result<(), ErrorCode>;

    /// Fee tier used between `token0` and `token1` in both directions. Zero
    /// disables automatic selling over that pair.
    fn set_swap_fees(
        env: Env,
        caller: Address,
        token0: Address,
        token1: Address,
        fee: u32,
    ) -> Result<(), ErrorCode>;

    fn set_auction(env: Env, caller: Address, auction: Option<Address>) -> Result<(), ErrorCode>;

    fn set_use_auction(env: Env, caller: Address, use_auction: bool) -> Result<(), ErrorCode>;

    fn enable_auction_token(env: Env, caller: Address, token: Address) -> Result<(), ErrorCode>;

    fn kick_auction(env: Env, caller: Address, token: Address) -> Result<i128, ErrorCode>;

    fn sell_reward_manually(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
        min_amount_out: i128,
        fee: u32,
    ) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn asset(env: Env) -> Address;

    fn lending_pool(env: Env) -> Address;

    fn total_assets(env: Env) -> Result<i128, ErrorCode>;

    fn total_idle(env: Env) -> i128;

    fn total_debt(env: Env) -> i128;

    /// Share supply net of released profit shares.
    fn total_supply(env: Env) -> Result<i128, ErrorCode>;

    fn price_per_share(env: Env) -> Result<i128, ErrorCode>;

    fn convert_to_shares(env: Env, assets: i128) -> Result<i128, ErrorCode>;

    fn convert_to_assets(env: Env, shares: i128) -> Result<i128, ErrorCode>;

    fn preview_deposit(env: Env, assets: i128) -> Result<i128, ErrorCode>;

    fn preview_mint(env: Env, shares: i128) -> Result<i128, ErrorCode>;

    fn preview_withdraw(env: Env, assets: i128) -> Result<i128, ErrorCode>;

    fn preview_redeem(env: Env, shares: i128) -> Result<i128, ErrorCode>;

    fn max_deposit(env: Env, receiver: Address) -> i128;

    fn max_mint(env: Env, receiver: Address) -> Result<i128, ErrorCode>;

    fn max_withdraw(env: Env, owner: Address) -> Result<i128, ErrorCode>;

    fn max_redeem(env: Env, owner: Address) -> Result<i128, ErrorCode>;

    fn available_deposit_limit(env: Env, owner: Address) -> i128;

    fn available_withdraw_limit(env: Env, owner: Address) -> Result<i128, ErrorCode>;

    fn unlocked_shares(env: Env) -> Result<i128, ErrorCode>;

    fn full_profit_unlock_date(env: Env) -> u64;

    fn profit_unlocking_rate(env: Env) -> i128;

    fn last_report(env: Env) -> u64;

    fn is_shutdown(env: Env) -> bool;

    fn management(env: Env) -> Address;

    fn pending_management(env: Env) -> Option<Address>;

    fn keeper(env: Env) -> Address;

    fn emergency_admin(env: Env) -> Option<Address>;

    fn performance_fee_recipient(env: Env) -> Address;

    fn performance_fee(env: Env) -> u32;

    fn profit_max_unlock_time(env: Env) -> u64;

    fn claim_rewards(env: Env) -> bool;

    fn min_amount_to_sell(env: Env) -> i128;

    /// Threshold applied to `token`: its override, else the global minimum.
    fn min_amount_to_sell_for(env: Env, token: Address) -> i128;

    fn dont_sell(env: Env, token: Address) -> bool;

    fn swap_fee(env: Env, token_in: Address, token_out: Address) -> u32;

    fn use_auction(env: Env) -> bool;

    fn auction(env: Env) -> Option<Address>;

    fn auction_amount_needed(env: Env, token: Address, amount: i128) -> Result<i128, ErrorCode>;
}
