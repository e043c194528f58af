use lender_common::{
    error::LenderResult,
    math::{
        helpers::{get_bps_portion, Rounding},
        safe_math::SafeMath,
    },
};
use soroban_sdk::{log, token, Address, Env};

use crate::{
    balance::read_balance,
    controller::{
        ledger::{burn_shares, mint_shares},
        market::MarketAdapter,
        rewards::{disposal_for, DisposalContext},
    },
    events::StrategyEvents,
    math::{shares::convert_to_shares, unlock},
    roles::require_keepers,
    storage::{
        get_market, get_reward_config, get_schedule, get_state, save_schedule, save_state,
        Roles,
    },
};

/// Harvest and settle: dispose of rewards, redeploy idle funds, then book the
/// change in total assets since the last report.
///
/// Profit mints performance fee shares to the fee recipient and locks the
/// remainder as strategy-held shares that release linearly over
/// `profit_max_unlock_time`. Loss burns released shares plus locked shares
/// worth the loss, capped at what the strategy holds.
///
/// Returns `(profit, loss)` in asset units.
pub fn report(env: &Env, roles: &Roles, caller: &Address) -> LenderResult<(i128, i128)> {
    require_keepers(env, roles, caller)?;

    let mut state = get_state(env);
    let schedule = get_schedule(env);
    let market = get_market(env);
    let reward_config = get_reward_config(env);

    let this = env.current_contract_address();
    let now = env.ledger().timestamp();
    let adapter = MarketAdapter::new(env, &market.lending_pool, &state.asset);
    let asset = token::Client::new(env, &state.asset);

    if reward_config.claim_rewards {
        adapter.claim_rewards();
    }

    let sold = disposal_for(&reward_config).dispose(
        env,
        &DisposalContext {
            asset: &state.asset,
            config: &reward_config,
            reward_tokens: adapter.reward_tokens(),
        },
    );
    if sold > 0 {
        log!(env, "Strategy: report: sold {} reward tokens", sold);
    }

    if !state.is_shutdown {
        adapter.deploy(asset.balance(&this))?;
    }

    let new_idle = asset.balance(&this);
    let new_debt = adapter.position();
    let new_total_assets = new_idle.safe_add(new_debt, env)?;
    let old_total_assets = state.total_idle.safe_add(state.total_debt, env)?;

    // Price everything at the pre-report rate.
    let locked_balance = read_balance(env, &this);
    let unlocked = unlock::unlocked_shares(env, &schedule, locked_balance, now)?;
    let total_supply = state.total_shares.safe_sub(unlocked, env)?;

    let mut shares_to_burn = unlocked;
    let mut shares_to_lock = 0;
    let mut fee_shares = 0;
    let mut profit = 0;
    let mut loss = 0;

    if new_total_assets > old_total_assets {
        profit = new_total_assets - old_total_assets;
        let profit_shares = convert_to_shares(
            env,
            profit,
            total_supply,
            old_total_assets,
            Rounding::Floor,
        )?;
        fee_shares = get_bps_portion(env, profit_shares, state.performance_fee)?;
        if state.profit_max_unlock_time != 0 {
            shares_to_lock = profit_shares.safe_sub(fee_shares, env)?;
        }
    } else if old_total_assets > new_total_assets {
        loss = old_total_assets - new_total_assets;
        let loss_shares = convert_to_shares(
            env,
            loss,
            total_supply,
            old_total_assets,
            Rounding::Ceil,
        )?;
        shares_to_burn = shares_to_burn
            .safe_add(loss_shares, env)?
            .min(locked_balance);
    }

    if shares_to_lock > shares_to_burn {
        mint_shares(env, &mut state, &this, shares_to_lock - shares_to_burn)?;
    } else if shares_to_burn > shares_to_lock {
        burn_shares(env, &mut state, &this, shares_to_burn - shares_to_lock)?;
    }

    if fee_shares > 0 {
        mint_shares(env, &mut state, &roles.performance_fee_recipient, fee_shares)?;
    }

    let schedule = unlock::rebase_schedule(
        env,
        &schedule,
        read_balance(env, &this),
        shares_to_lock,
        state.profit_max_unlock_time,
        now,
    )?;

    state.total_idle = new_idle;
    state.total_debt = new_debt;

    save_state(env, &state);
    save_schedule(env, &schedule);

    StrategyEvents::reported(env, profit, loss, fee_shares);

    Ok((profit, loss))
}
