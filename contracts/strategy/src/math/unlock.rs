use lender_common::{
    constants::MAX_BPS_EXTENDED,
    error::LenderResult,
    math::{
        casting::Cast,
        helpers::{mul_div, Rounding},
        safe_math::SafeMath,
    },
};
use soroban_sdk::Env;

use crate::storage::UnlockSchedule;

/// Profit shares released since the last report.
///
/// `locked_balance` is the strategy's raw balance of its own shares. Once the
/// full unlock date has passed everything it holds counts as released.
pub fn unlocked_shares(
    env: &Env,
    schedule: &UnlockSchedule,
    locked_balance: i128,
    now: u64,
) -> LenderResult<i128> {
    if schedule.full_profit_unlock_date > now {
        let elapsed = now
            .safe_sub(schedule.last_report, env)?
            .cast::<i128>(env)?;
        let unlocked = mul_div(
            env,
            schedule.profit_unlocking_rate,
            elapsed,
            MAX_BPS_EXTENDED,
            Rounding::Floor,
        )?;

        Ok(unlocked.min(locked_balance))
    } else if schedule.full_profit_unlock_date != 0 {
        Ok(locked_balance)
    } else {
        Ok(0)
    }
}

/// Blend the still-locked remainder of the running schedule with freshly
/// locked profit into one schedule starting at `now`.
///
/// `total_locked` is the strategy's own share balance after the report's
/// mint/burn, `shares_to_lock` the part of it locked by this report.
pub fn rebase_schedule(
    env: &Env,
    schedule: &UnlockSchedule,
    total_locked: i128,
    shares_to_lock: i128,
    profit_max_unlock_time: u64,
    now: u64,
) -> LenderResult<UnlockSchedule> {
    if total_locked <= 0 {
        return Ok(UnlockSchedule {
            full_profit_unlock_date: 0,
            profit_unlocking_rate: 0,
            last_report: now,
        });
    }

    let previously_locked_time = if schedule.full_profit_unlock_date > now {
        let remaining = (schedule.full_profit_unlock_date - now).cast::<i128>(env)?;
        remaining.safe_mul(total_locked.safe_sub(shares_to_lock, env)?.max(0), env)?
    } else {
        0
    };

    let new_locked_time =
        shares_to_lock.safe_mul(profit_max_unlock_time.cast::<i128>(env)?, env)?;

    let new_period = previously_locked_time
        .safe_add(new_locked_time, env)?
        .safe_div(total_locked, env)?
        .max(1);

    let profit_unlocking_rate = mul_div(
        env,
        total_locked,
        MAX_BPS_EXTENDED,
        new_period,
        Rounding::Floor,
    )?;

    Ok(UnlockSchedule {
        full_profit_unlock_date: now.safe_add(new_period.cast::<u64>(env)?, env)?,
        profit_unlocking_rate,
        last_report: now,
    })
}
