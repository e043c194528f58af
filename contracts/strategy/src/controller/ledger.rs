use lender_common::{
    error::{ErrorCode, LenderResult},
    math::{helpers::Rounding, safe_math::SafeMath},
    safe_decrement, safe_increment, validate,
};
use soroban_sdk::{token, Address, Env};
use soroban_token_sdk::TokenUtils;

use crate::{
    allowance::spend_allowance,
    balance::{read_balance, receive_balance, spend_balance},
    controller::market::MarketAdapter,
    events::StrategyEvents,
    math::{shares, unlock},
    storage::{MarketConfig, StrategyState, UnlockSchedule},
};

// ################################################################
//                           Share views
// ################################################################

pub fn unlocked_shares(env: &Env, schedule: &UnlockSchedule) -> LenderResult<i128> {
    let locked_balance = read_balance(env, &env.current_contract_address());
    unlock::unlocked_shares(env, schedule, locked_balance, env.ledger().timestamp())
}

/// Share supply used for pricing: raw supply net of released profit shares.
pub fn total_supply(env: &Env, state: &StrategyState, schedule: &UnlockSchedule) -> LenderResult<i128> {
    state
        .total_shares
        .safe_sub(unlocked_shares(env, schedule)?, env)
}

pub fn total_assets(env: &Env, state: &StrategyState) -> LenderResult<i128> {
    state.total_idle.safe_add(state.total_debt, env)
}

/// Balance of `owner`; the strategy's own balance excludes released shares.
pub fn balance_of(
    env: &Env,
    schedule: &UnlockSchedule,
    owner: &Address,
) -> LenderResult<i128> {
    let balance = read_balance(env, owner);
    if *owner == env.current_contract_address() {
        return balance.safe_sub(unlocked_shares(env, schedule)?, env);
    }

    Ok(balance)
}

pub fn convert_to_shares(
    env: &Env,
    state: &StrategyState,
    schedule: &UnlockSchedule,
    assets: i128,
    rounding: Rounding,
) -> LenderResult<i128> {
    shares::convert_to_shares(
        env,
        assets,
        total_supply(env, state, schedule)?,
        total_assets(env, state)?,
        rounding,
    )
}

pub fn convert_to_assets(
    env: &Env,
    state: &StrategyState,
    schedule: &UnlockSchedule,
    shares: i128,
    rounding: Rounding,
) -> LenderResult<i128> {
    shares::convert_to_assets(
        env,
        shares,
        total_supply(env, state, schedule)?,
        total_assets(env, state)?,
        rounding,
    )
}

// ################################################################
//                             Limits
// ################################################################

pub fn available_deposit_limit(state: &StrategyState) -> i128 {
    if state.is_shutdown {
        0
    } else {
        i128::MAX
    }
}

/// Idle funds plus whatever the pool could pay out right now.
pub fn available_withdraw_limit(
    env: &Env,
    state: &StrategyState,
    market: &MarketConfig,
) -> LenderResult<i128> {
    let adapter = MarketAdapter::new(env, &market.lending_pool, &state.asset);
    state.total_idle.safe_add(adapter.withdrawable(), env)
}

pub fn max_deposit(state: &StrategyState) -> i128 {
    available_deposit_limit(state)
}

pub fn max_mint(env: &Env, state: &StrategyState, schedule: &UnlockSchedule) -> LenderResult<i128> {
    let limit = available_deposit_limit(state);
    if limit == i128::MAX || limit == 0 {
        return Ok(limit);
    }

    convert_to_shares(env, state, schedule, limit, Rounding::Floor)
}

pub fn max_withdraw(
    env: &Env,
    state: &StrategyState,
    schedule: &UnlockSchedule,
    market: &MarketConfig,
    owner: &Address,
) -> LenderResult<i128> {
    let owned = convert_to_assets(
        env,
        state,
        schedule,
        balance_of(env, schedule, owner)?,
        Rounding::Floor,
    )?;

    Ok(owned.min(available_withdraw_limit(env, state, market)?))
}

pub fn max_redeem(
    env: &Env,
    state: &StrategyState,
    schedule: &UnlockSchedule,
    market: &MarketConfig,
    owner: &Address,
) -> LenderResult<i128> {
    let balance = balance_of(env, schedule, owner)?;
    let limit = convert_to_shares(
        env,
        state,
        schedule,
        available_withdraw_limit(env, state, market)?,
        Rounding::Floor,
    )?;

    Ok(balance.min(limit))
}

// ################################################################
//                          Share ledger
// ################################################################

pub fn mint_shares(env: &Env, state: &mut StrategyState, to: &Address, shares: i128) -> LenderResult {
    receive_balance(env, to, shares)?;
    safe_increment!(env, state.total_shares, shares);
    TokenUtils::new(env)
        .events()
        .mint(env.current_contract_address(), to.clone(), shares);
    Ok(())
}

pub fn burn_shares(env: &Env, state: &mut StrategyState, from: &Address, shares: i128) -> LenderResult {
    spend_balance(env, from, shares)?;
    safe_decrement!(env, state.total_shares, shares);
    TokenUtils::new(env).events().burn(from.clone(), shares);
    Ok(())
}

// ################################################################
//                       Deposit / withdraw
// ################################################################

/// Pulls `assets` from `caller`, books them as idle, sweeps what the pool
/// accepts and mints `shares` to `receiver`.
pub fn deposit_assets(
    env: &Env,
    state: &mut StrategyState,
    market: &MarketConfig,
    caller: &Address,
    receiver: &Address,
    assets: i128,
    shares: i128,
) -> LenderResult {
    let this = env.current_contract_address();
    token::Client::new(env, &state.asset).transfer(caller, &this, &assets);
    safe_increment!(env, state.total_idle, assets);

    let adapter = MarketAdapter::new(env, &market.lending_pool, &state.asset);
    let deployed = adapter.deploy(state.total_idle)?;
    safe_decrement!(env, state.total_idle, deployed);
    safe_increment!(env, state.total_debt, deployed);

    mint_shares(env, state, receiver, shares)?;

    StrategyEvents::deposit(env, caller.clone(), receiver.clone(), assets, shares);

    Ok(())
}

/// Burns `shares` of `owner` and pays out `assets`, idle first then from the
/// pool. A shortfall beyond `max_loss` basis points of `assets` is rejected.
/// Returns the assets actually sent to `receiver`.
#[allow(clippy::too_many_arguments)]
pub fn withdraw_assets(
    env: &Env,
    state: &mut StrategyState,
    market: &MarketConfig,
    caller: &Address,
    receiver: &Address,
    owner: &Address,
    assets: i128,
    shares: i128,
    max_loss: u32,
) -> LenderResult<i128> {
    validate!(
        env,
        max_loss <= lender_common::constants::MAX_BPS,
        ErrorCode::InvalidParameter,
        "Strategy: withdraw: max_loss {} is above 10_000 bps",
        max_loss
    )?;

    if caller != owner {
        spend_allowance(env, owner, caller, shares)?;
    }

    let mut assets_out = assets;
    let mut loss = 0;

    if state.total_idle < assets {
        let adapter = MarketAdapter::new(env, &market.lending_pool, &state.asset);
        let freed = adapter.free(assets - state.total_idle)?;
        safe_increment!(env, state.total_idle, freed);
        state.total_debt = state.total_debt.safe_sub(freed.min(state.total_debt), env)?;

        if state.total_idle < assets {
            loss = assets - state.total_idle;
            let tolerated = lender_common::math::helpers::get_bps_portion(env, assets, max_loss)?;
            validate!(
                env,
                loss <= tolerated,
                ErrorCode::InsufficientLiquidity,
                "Strategy: withdraw: shortfall {} exceeds the tolerated loss {}",
                loss,
                tolerated
            )?;
            assets_out = state.total_idle;
        }
    }

    safe_decrement!(env, state.total_idle, assets_out);
    // Assets that could not be freed are written off against the debt.
    state.total_debt = state.total_debt.safe_sub(loss.min(state.total_debt), env)?;

    burn_shares(env, state, owner, shares)?;

    if assets_out > 0 {
        token::Client::new(env, &state.asset).transfer(
            &env.current_contract_address(),
            receiver,
            &assets_out,
        );
    }

    StrategyEvents::withdraw(
        env,
        caller.clone(),
        receiver.clone(),
        owner.clone(),
        assets_out,
        shares,
    );

    Ok(assets_out)
}
