use lender_common::{
    constants::{
        DEFAULT_MIN_AMOUNT_TO_SELL, DEFAULT_PERFORMANCE_FEE, DEFAULT_PROFIT_MAX_UNLOCK_TIME,
        SECONDS_PER_YEAR,
    },
    error::ErrorCode,
    math::helpers::Rounding,
    types::{MarketInitInfo, RoleInitInfo},
    validate, validate_bps,
};
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Bytes, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

use crate::{
    allowance::{read_allowance, spend_allowance, write_allowance},
    balance::{read_balance, receive_balance, spend_balance},
    controller::{
        ledger::{self, burn_shares},
        lifecycle, report, rewards,
    },
    events::StrategyEvents,
    roles::{require_emergency_authorized, require_keepers, require_management},
    storage::{
        bump_instance, get_dont_sell, get_market, get_min_amount_to_sell_for, get_reward_config,
        get_roles, get_schedule, get_state, get_swap_fee, save_market, save_reward_config,
        save_roles, save_schedule, save_state, set_dont_sell, set_min_amount_to_sell_for,
        set_swap_fee, MarketConfig, RewardConfig, Roles, StrategyState, UnlockSchedule,
    },
    strategy::LenderStrategyTrait,
};

contractmeta!(
    key = "Description",
    val = "Single asset strategy lending into a money market with linearly unlocked profit"
);

#[contract]
pub struct LenderStrategy;

#[contractimpl]
impl LenderStrategy {
    pub fn __constructor(
        env: Env,
        asset: Address,
        name: String,
        symbol: String,
        market: MarketInitInfo,
        roles: RoleInitInfo,
    ) {
        let decimals = token::Client::new(&env, &asset).decimals();

        save_state(
            &env,
            &StrategyState {
                asset: asset.clone(),
                decimals,
                total_idle: 0,
                total_debt: 0,
                total_shares: 0,
                performance_fee: DEFAULT_PERFORMANCE_FEE,
                profit_max_unlock_time: DEFAULT_PROFIT_MAX_UNLOCK_TIME,
                is_shutdown: false,
            },
        );
        save_schedule(
            &env,
            &UnlockSchedule {
                last_report: env.ledger().timestamp(),
                ..UnlockSchedule::default()
            },
        );
        save_roles(
            &env,
            &Roles {
                management: roles.management.clone(),
                pending_management: None,
                keeper: roles.keeper,
                emergency_admin: roles.emergency_admin,
                performance_fee_recipient: roles.performance_fee_recipient,
            },
        );
        save_market(
            &env,
            &MarketConfig {
                lending_pool: market.lending_pool.clone(),
            },
        );
        save_reward_config(
            &env,
            &RewardConfig {
                claim_rewards: true,
                use_auction: false,
                auction: None,
                router: market.router,
                base_token: market.base_token,
                min_amount_to_sell: DEFAULT_MIN_AMOUNT_TO_SELL,
            },
        );

        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata {
            decimal: decimals,
            name,
            symbol,
        });
        bump_instance(&env);

        StrategyEvents::initialize(&env, asset, market.lending_pool, roles.management);
    }

    // ################################################################
    //                           Share token
    // ################################################################

    pub fn balance(env: Env, id: Address) -> Result<i128, ErrorCode> {
        ledger::balance_of(&env, &get_schedule(&env), &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), ErrorCode> {
        from.require_auth();
        bump_instance(&env);

        write_allowance(&env, &from, &spender, amount, expiration_ledger)?;
        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);

        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), ErrorCode> {
        from.require_auth();
        bump_instance(&env);

        move_shares(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ErrorCode> {
        spender.require_auth();
        bump_instance(&env);

        spend_allowance(&env, &from, &spender, amount)?;
        move_shares(&env, &from, &to, amount)
    }

    pub fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    pub fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    pub fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}

fn move_shares(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), ErrorCode> {
    validate!(
        env,
        amount >= 0,
        ErrorCode::InvalidParameter,
        "Strategy: transfer: negative amount is not allowed"
    )?;
    validate!(
        env,
        *to != env.current_contract_address(),
        ErrorCode::InvalidParameter,
        "Strategy: transfer: shares cannot be sent to the strategy"
    )?;

    spend_balance(env, from, amount)?;
    receive_balance(env, to, amount)?;
    TokenUtils::new(env)
        .events()
        .transfer(from.clone(), to.clone(), amount);

    Ok(())
}

#[contractimpl]
impl LenderStrategyTrait for LenderStrategy {
    fn deposit(env: Env, caller: Address, assets: i128, receiver: Address) -> Result<i128, ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        let mut state = get_state(&env);
        let schedule = get_schedule(&env);

        validate!(
            &env,
            !state.is_shutdown,
            ErrorCode::Shutdown,
            "Strategy: deposit: strategy is shut down"
        )?;
        validate!(
            &env,
            assets > 0,
            ErrorCode::ZeroAmount,
            "Strategy: deposit: amount must be positive"
        )?;

        let shares = ledger::convert_to_shares(&env, &state, &schedule, assets, Rounding::Floor)?;
        validate!(
            &env,
            shares > 0,
            ErrorCode::ZeroAmount,
            "Strategy: deposit: deposit would mint zero shares"
        )?;

        ledger::deposit_assets(
            &env,
            &mut state,
            &get_market(&env),
            &caller,
            &receiver,
            assets,
            shares,
        )?;
        save_state(&env, &state);

        Ok(shares)
    }

    fn mint(env: Env, caller: Address, shares: i128, receiver: Address) -> Result<i128, ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        let mut state = get_state(&env);
        let schedule = get_schedule(&env);

        validate!(
            &env,
            !state.is_shutdown,
            ErrorCode::Shutdown,
            "Strategy: mint: strategy is shut down"
        )?;
        validate!(
            &env,
            shares > 0,
            ErrorCode::ZeroAmount,
            "Strategy: mint: amount must be positive"
        )?;

        let assets = ledger::convert_to_assets(&env, &state, &schedule, shares, Rounding::Ceil)?;
        validate!(
            &env,
            assets > 0,
            ErrorCode::ZeroAmount,
            "Strategy: mint: shares are worth zero assets"
        )?;

        ledger::deposit_assets(
            &env,
            &mut state,
            &get_market(&env),
            &caller,
            &receiver,
            assets,
            shares,
        )?;
        save_state(&env, &state);

        Ok(assets)
    }

    fn withdraw(
        env: Env,
        caller: Address,
        assets: i128,
        receiver: Address,
        owner: Address,
        max_loss: u32,
    ) -> Result<i128, ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        let mut state = get_state(&env);
        let schedule = get_schedule(&env);
        let market = get_market(&env);

        validate!(
            &env,
            assets > 0,
            ErrorCode::ZeroAmount,
            "Strategy: withdraw: amount must be positive"
        )?;
        let max_withdraw = ledger::max_withdraw(&env, &state, &schedule, &market, &owner)?;
        validate!(
            &env,
            assets <= max_withdraw,
            ErrorCode::ExceedsMaxWithdraw,
            "Strategy: withdraw: {} exceeds the maximum withdraw of {}",
            assets,
            max_withdraw
        )?;

        let shares = ledger::convert_to_shares(&env, &state, &schedule, assets, Rounding::Ceil)?;
        validate!(
            &env,
            shares > 0,
            ErrorCode::ZeroAmount,
            "Strategy: withdraw: withdraw would burn zero shares"
        )?;

        ledger::withdraw_assets(
            &env, &mut state, &market, &caller, &receiver, &owner, assets, shares, max_loss,
        )?;
        save_state(&env, &state);

        Ok(shares)
    }

    fn redeem(
        env: Env,
        caller: Address,
        shares: i128,
        receiver: Address,
        owner: Address,
        max_loss: u32,
    ) -> Result<i128, ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        let mut state = get_state(&env);
        let schedule = get_schedule(&env);
        let market = get_market(&env);

        validate!(
            &env,
            shares > 0,
            ErrorCode::ZeroAmount,
            "Strategy: redeem: amount must be positive"
        )?;
        let max_redeem = ledger::max_redeem(&env, &state, &schedule, &market, &owner)?;
        validate!(
            &env,
            shares <= max_redeem,
            ErrorCode::ExceedsMaxRedeem,
            "Strategy: redeem: {} exceeds the maximum redeem of {}",
            shares,
            max_redeem
        )?;

        let assets = ledger::convert_to_assets(&env, &state, &schedule, shares, Rounding::Floor)?;
        validate!(
            &env,
            assets > 0,
            ErrorCode::ZeroAmount,
            "Strategy: redeem: shares are worth zero assets"
        )?;

        let withdrawn = ledger::withdraw_assets(
            &env, &mut state, &market, &caller, &receiver, &owner, assets, shares, max_loss,
        )?;
        save_state(&env, &state);

        Ok(withdrawn)
    }

    fn report(env: Env, caller: Address) -> Result<(i128, i128), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        report::report(&env, &get_roles(&env), &caller)
    }

    // ################################################################
    //                            Lifecycle
    // ################################################################

    fn tend(env: Env, caller: Address) -> Result<i128, ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        lifecycle::tend(&env, &get_roles(&env), &caller)
    }

    fn tend_trigger(env: Env) -> (bool, Bytes) {
        lifecycle::tend_trigger(&env)
    }

    fn shutdown_strategy(env: Env, caller: Address) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        lifecycle::shutdown(&env, &get_roles(&env), &caller)
    }

    fn emergency_withdraw(env: Env, caller: Address, amount: i128) -> Result<i128, ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        lifecycle::emergency_withdraw(&env, &get_roles(&env), &caller, amount)
    }

    // ################################################################
    //                              Roles
    // ################################################################

    fn set_pending_management(env: Env, caller: Address, management: Address) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        let mut roles = get_roles(&env);
        require_management(&env, &roles, &caller)?;

        roles.pending_management = Some(management.clone());
        save_roles(&env, &roles);

        StrategyEvents::update(&env, "pending_management", management);

        Ok(())
    }

    fn accept_management(env: Env, caller: Address) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        let mut roles = get_roles(&env);
        validate!(
            &env,
            roles.pending_management.as_ref() == Some(&caller),
            ErrorCode::NotAuthorized,
            "Strategy: accept_management: caller is not the pending management"
        )?;

        roles.management = caller.clone();
        roles.pending_management = None;
        save_roles(&env, &roles);

        StrategyEvents::update(&env, "management", caller);

        Ok(())
    }

    fn set_keeper(env: Env, caller: Address, keeper: Address) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        let mut roles = get_roles(&env);
        require_management(&env, &roles, &caller)?;

        roles.keeper = keeper.clone();
        save_roles(&env, &roles);

        StrategyEvents::update(&env, "keeper", keeper);

        Ok(())
    }

    fn set_emergency_admin(
        env: Env,
        caller: Address,
        emergency_admin: Option<Address>,
    ) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        let mut roles = get_roles(&env);
        require_management(&env, &roles, &caller)?;

        roles.emergency_admin = emergency_admin.clone();
        save_roles(&env, &roles);

        StrategyEvents::update(&env, "emergency_admin", emergency_admin);

        Ok(())
    }

    fn set_performance_fee(env: Env, caller: Address, performance_fee: u32) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        require_management(&env, &get_roles(&env), &caller)?;
        validate_bps!(&env, performance_fee)?;

        let mut state = get_state(&env);
        state.performance_fee = performance_fee;
        save_state(&env, &state);

        StrategyEvents::update(&env, "performance_fee", performance_fee);

        Ok(())
    }

    fn set_performance_fee_recipient(
        env: Env,
        caller: Address,
        recipient: Address,
    ) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        let mut roles = get_roles(&env);
        require_management(&env, &roles, &caller)?;
        validate!(
            &env,
            recipient != env.current_contract_address(),
            ErrorCode::InvalidParameter,
            "Strategy: set_performance_fee_recipient: cannot be the strategy"
        )?;

        roles.performance_fee_recipient = recipient.clone();
        save_roles(&env, &roles);

        StrategyEvents::update(&env, "performance_fee_recipient", recipient);

        Ok(())
    }

    fn set_profit_max_unlock_time(
        env: Env,
        caller: Address,
        profit_max_unlock_time: u64,
    ) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        require_management(&env, &get_roles(&env), &caller)?;
        validate!(
            &env,
            profit_max_unlock_time <= SECONDS_PER_YEAR,
            ErrorCode::InvalidParameter,
            "Strategy: set_profit_max_unlock_time: {} is longer than a year",
            profit_max_unlock_time
        )?;

        let mut state = get_state(&env);
        if profit_max_unlock_time == 0 {
            let this = env.current_contract_address();
            let locked = read_balance(&env, &this);
            if locked > 0 {
                burn_shares(&env, &mut state, &this, locked)?;
            }

            let schedule = get_schedule(&env);
            save_schedule(
                &env,
                &UnlockSchedule {
                    full_profit_unlock_date: 0,
                    profit_unlocking_rate: 0,
                    last_report: schedule.last_report,
                },
            );
        }

        state.profit_max_unlock_time = profit_max_unlock_time;
        save_state(&env, &state);

        StrategyEvents::update(&env, "profit_max_unlock_time", profit_max_unlock_time);

        Ok(())
    }

    // ################################################################
    //                             Rewards
    // ################################################################

    fn set_claim_rewards(env: Env, caller: Address, claim_rewards: bool) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        require_management(&env, &get_roles(&env), &caller)?;

        let mut config = get_reward_config(&env);
        config.claim_rewards = claim_rewards;
        save_reward_config(&env, &config);

        StrategyEvents::update(&env, "claim_rewards", claim_rewards);

        Ok(())
    }

    fn set_min_amount_to_sell(env: Env, caller: Address, amount: i128) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        require_management(&env, &get_roles(&env), &caller)?;
        validate!(
            &env,
            amount >= 0,
            ErrorCode::InvalidParameter,
            "Strategy: set_min_amount_to_sell: negative amount"
        )?;

        let mut config = get_reward_config(&env);
        config.min_amount_to_sell = amount;
        save_reward_config(&env, &config);

        StrategyEvents::update(&env, "min_amount_to_sell", amount);

        Ok(())
    }

    fn set_min_amount_to_sell_for(
        env: Env,
        caller: Address,
        token: Address,
        amount: Option<i128>,
    ) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        require_management(&env, &get_roles(&env), &caller)?;
        validate!(
            &env,
            amount.unwrap_or(0) >= 0,
            ErrorCode::InvalidParameter,
            "Strategy: set_min_amount_to_sell_for: negative amount"
        )?;

        set_min_amount_to_sell_for(&env, &token, amount);

        StrategyEvents::update(&env, "min_amount_to_sell_for", (token, amount));

        Ok(())
    }

    fn set_dont_sell(env: Env, caller: Address, token: Address, dont_sell: bool) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        require_management(&env, &get_roles(&env), &caller)?;

        set_dont_sell(&env, &token, dont_sell);

        StrategyEvents::update(&env, "dont_sell", (token, dont_sell));

        Ok(())
    }

    fn set_swap_fees(
        env: Env,
        caller: Address,
        token0: Address,
        token1: Address,
        fee: u32,
    ) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        require_management(&env, &get_roles(&env), &caller)?;
        validate!(
            &env,
            token0 != token1,
            ErrorCode::InvalidParameter,
            "Strategy: set_swap_fees: identical tokens"
        )?;

        set_swap_fee(&env, &token0, &token1, fee);

        StrategyEvents::update(&env, "swap_fees", (token0, token1, fee));

        Ok(())
    }

    fn set_auction(env: Env, caller: Address, auction: Option<Address>) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        require_management(&env, &get_roles(&env), &caller)?;
        if let Some(auction) = &auction {
            rewards::validate_auction(&env, auction, &get_state(&env).asset)?;
        }

        let mut config = get_reward_config(&env);
        config.auction = auction.clone();
        save_reward_config(&env, &config);

        StrategyEvents::update(&env, "auction", auction);

        Ok(())
    }

    fn set_use_auction(env: Env, caller: Address, use_auction: bool) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        require_management(&env, &get_roles(&env), &caller)?;

        let mut config = get_reward_config(&env);
        config.use_auction = use_auction;
        save_reward_config(&env, &config);

        StrategyEvents::update(&env, "use_auction", use_auction);

        Ok(())
    }

    fn enable_auction_token(env: Env, caller: Address, token: Address) -> Result<(), ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        require_management(&env, &get_roles(&env), &caller)?;

        rewards::enable_auction_token(&env, &get_reward_config(&env), &get_state(&env).asset, &token)
    }

    fn kick_auction(env: Env, caller: Address, token: Address) -> Result<i128, ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        require_keepers(&env, &get_roles(&env), &caller)?;

        rewards::kick_auction(&env, &get_reward_config(&env), &get_state(&env).asset, &token)
    }

    fn sell_reward_manually(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
        min_amount_out: i128,
        fee: u32,
    ) -> Result<i128, ErrorCode> {
        caller.require_auth();
        bump_instance(&env);

        require_emergency_authorized(&env, &get_roles(&env), &caller)?;

        rewards::sell_reward_manually(
            &env,
            &get_reward_config(&env),
            &get_state(&env).asset,
            &token,
            amount,
            min_amount_out,
            fee,
        )
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn asset(env: Env) -> Address {
        get_state(&env).asset
    }

    fn lending_pool(env: Env) -> Address {
        get_market(&env).lending_pool
    }

    fn total_assets(env: Env) -> Result<i128, ErrorCode> {
        ledger::total_assets(&env, &get_state(&env))
    }

    fn total_idle(env: Env) -> i128 {
        get_state(&env).total_idle
    }

    fn total_debt(env: Env) -> i128 {
        get_state(&env).total_debt
    }

    fn total_supply(env: Env) -> Result<i128, ErrorCode> {
        ledger::total_supply(&env, &get_state(&env), &get_schedule(&env))
    }

    fn price_per_share(env: Env) -> Result<i128, ErrorCode> {
        let state = get_state(&env);
        let one_share = 10_i128
            .checked_pow(state.decimals)
            .ok_or(ErrorCode::MathError)?;

        ledger::convert_to_assets(&env, &state, &get_schedule(&env), one_share, Rounding::Floor)
    }

    fn convert_to_shares(env: Env, assets: i128) -> Result<i128, ErrorCode> {
        ledger::convert_to_shares(&env, &get_state(&env), &get_schedule(&env), assets, Rounding::Floor)
    }

    fn convert_to_assets(env: Env, shares: i128) -> Result<i128, ErrorCode> {
        ledger::convert_to_assets(&env, &get_state(&env), &get_schedule(&env), shares, Rounding::Floor)
    }

    fn preview_deposit(env: Env, assets: i128) -> Result<i128, ErrorCode> {
        ledger::convert_to_shares(&env, &get_state(&env), &get_schedule(&env), assets, Rounding::Floor)
    }

    fn preview_mint(env: Env, shares: i128) -> Result<i128, ErrorCode> {
        ledger::convert_to_assets(&env, &get_state(&env), &get_schedule(&env), shares, Rounding::Ceil)
    }

    fn preview_withdraw(env: Env, assets: i128) -> Result<i128, ErrorCode> {
        ledger::convert_to_shares(&env, &get_state(&env), &get_schedule(&env), assets, Rounding::Ceil)
    }

    fn preview_redeem(env: Env, shares: i128) -> Result<i128, ErrorCode> {
        ledger::convert_to_assets(&env, &get_state(&env), &get_schedule(&env), shares, Rounding::Floor)
    }

    fn max_deposit(env: Env, _receiver: Address) -> i128 {
        ledger::max_deposit(&get_state(&env))
    }

    fn max_mint(env: Env, _receiver: Address) -> Result<i128, ErrorCode> {
        ledger::max_mint(&env, &get_state(&env), &get_schedule(&env))
    }

    fn max_withdraw(env: Env, owner: Address) -> Result<i128, ErrorCode> {
        ledger::max_withdraw(
            &env,
            &get_state(&env),
            &get_schedule(&env),
            &get_market(&env),
            &owner,
        )
    }

    fn max_redeem(env: Env, owner: Address) -> Result<i128, ErrorCode> {
        ledger::max_redeem(
            &env,
            &get_state(&env),
            &get_schedule(&env),
            &get_market(&env),
            &owner,
        )
    }

    fn available_deposit_limit(env: Env, _owner: Address) -> i128 {
        ledger::available_deposit_limit(&get_state(&env))
    }

    fn available_withdraw_limit(env: Env, _owner: Address) -> Result<i128, ErrorCode> {
        ledger::available_withdraw_limit(&env, &get_state(&env), &get_market(&env))
    }

    fn unlocked_shares(env: Env) -> Result<i128, ErrorCode> {
        ledger::unlocked_shares(&env, &get_schedule(&env))
    }

    fn full_profit_unlock_date(env: Env) -> u64 {
        get_schedule(&env).full_profit_unlock_date
    }

    fn profit_unlocking_rate(env: Env) -> i128 {
        get_schedule(&env).profit_unlocking_rate
    }

    fn last_report(env: Env) -> u64 {
        get_schedule(&env).last_report
    }

    fn is_shutdown(env: Env) -> bool {
        get_state(&env).is_shutdown
    }

    fn management(env: Env) -> Address {
        get_roles(&env).management
    }

    fn pending_management(env: Env) -> Option<Address> {
        get_roles(&env).pending_management
    }

    fn keeper(env: Env) -> Address {
        get_roles(&env).keeper
    }

    fn emergency_admin(env: Env) -> Option<Address> {
        get_roles(&env).emergency_admin
    }

    fn performance_fee_recipient(env: Env) -> Address {
        get_roles(&env).performance_fee_recipient
    }

    fn performance_fee(env: Env) -> u32 {
        get_state(&env).performance_fee
    }

    fn profit_max_unlock_time(env: Env) -> u64 {
        get_state(&env).profit_max_unlock_time
    }

    fn claim_rewards(env: Env) -> bool {
        get_reward_config(&env).claim_rewards
    }

    fn min_amount_to_sell(env: Env) -> i128 {
        get_reward_config(&env).min_amount_to_sell
    }

    fn min_amount_to_sell_for(env: Env, token: Address) -> i128 {
        get_min_amount_to_sell_for(&env, &token)
            .unwrap_or_else(|| get_reward_config(&env).min_amount_to_sell)
    }

    fn dont_sell(env: Env, token: Address) -> bool {
        get_dont_sell(&env, &token)
    }

    fn swap_fee(env: Env, token_in: Address, token_out: Address) -> u32 {
        get_swap_fee(&env, &token_in, &token_out)
    }

    fn use_auction(env: Env) -> bool {
        get_reward_config(&env).use_auction
    }

    fn auction(env: Env) -> Option<Address> {
        get_reward_config(&env).auction
    }

    fn auction_amount_needed(env: Env, token: Address, amount: i128) -> Result<i128, ErrorCode> {
        rewards::auction_amount_needed(&env, &get_reward_config(&env), &token, amount)
    }
}
