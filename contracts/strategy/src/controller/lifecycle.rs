use lender_common::{
    error::{ErrorCode, LenderResult},
    math::safe_math::SafeMath,
    safe_decrement, safe_increment, validate,
};
use soroban_sdk::{xdr::ToXdr, Address, Bytes, Env, Symbol};

use crate::{
    controller::market::MarketAdapter,
    events::StrategyEvents,
    roles::{require_emergency_authorized, require_keepers},
    storage::{get_market, get_state, save_state, Roles},
};

/// One-way switch: deposits stop and reports no longer redeploy idle funds.
/// Withdrawals stay open.
pub fn shutdown(env: &Env, roles: &Roles, caller: &Address) -> LenderResult {
    require_emergency_authorized(env, roles, caller)?;

    let mut state = get_state(env);
    state.is_shutdown = true;
    save_state(env, &state);

    StrategyEvents::shutdown(env, caller.clone());

    Ok(())
}

/// Pulls up to `amount` out of the pool into idle after a shutdown, capped at
/// the reported debt. Total assets are unchanged; only the idle/debt split
/// moves. Unreported interest stays in the pool for the next report.
pub fn emergency_withdraw(env: &Env, roles: &Roles, caller: &Address, amount: i128) -> LenderResult<i128> {
    require_emergency_authorized(env, roles, caller)?;

    let mut state = get_state(env);
    validate!(
        env,
        state.is_shutdown,
        ErrorCode::NotShutdown,
        "Strategy: emergency_withdraw: strategy is not shut down"
    )?;
    validate!(
        env,
        amount > 0,
        ErrorCode::ZeroAmount,
        "Strategy: emergency_withdraw: amount must be positive"
    )?;

    let market = get_market(env);
    let freed = MarketAdapter::new(env, &market.lending_pool, &state.asset)
        .free(amount.min(state.total_debt))?;

    safe_increment!(env, state.total_idle, freed);
    state.total_debt = state.total_debt.safe_sub(freed.min(state.total_debt), env)?;
    save_state(env, &state);

    StrategyEvents::emergency_withdraw(env, caller.clone(), freed);

    Ok(freed)
}

/// Sweeps idle funds into the pool between reports.
pub fn tend(env: &Env, roles: &Roles, caller: &Address) -> LenderResult<i128> {
    require_keepers(env, roles, caller)?;

    let mut state = get_state(env);
    validate!(
        env,
        !state.is_shutdown,
        ErrorCode::Shutdown,
        "Strategy: tend: strategy is shut down"
    )?;

    let market = get_market(env);
    let deployed = MarketAdapter::new(env, &market.lending_pool, &state.asset).deploy(state.total_idle)?;
    safe_decrement!(env, state.total_idle, deployed);
    safe_increment!(env, state.total_debt, deployed);
    save_state(env, &state);

    StrategyEvents::tend(env, caller.clone(), deployed);

    Ok(deployed)
}

/// True while idle funds are waiting and the pool would take them. The
/// calldata is the XDR encoded name of the function to call.
pub fn tend_trigger(env: &Env) -> (bool, Bytes) {
    let state = get_state(env);
    if state.is_shutdown || state.total_idle <= 0 {
        return (false, Bytes::new(env));
    }

    let market = get_market(env);
    if MarketAdapter::new(env, &market.lending_pool, &state.asset).deposit_headroom() <= 0 {
        return (false, Bytes::new(env));
    }

    (true, Symbol::new(env, "tend").to_xdr(env))
}
