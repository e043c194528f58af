use crate::storage::{AllowanceDataKey, AllowanceValue, DataKey};
use lender_common::{
    error::{ErrorCode, LenderResult},
    validate,
};
use soroban_sdk::{Address, Env};

pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger < env.ledger().sequence() => {
            AllowanceValue {
                amount: 0,
                expiration_ledger: allowance.expiration_ledger,
            }
        }
        Some(allowance) => allowance,
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> LenderResult {
    validate!(
        env,
        amount >= 0,
        ErrorCode::InvalidParameter,
        "Strategy: approve: negative amount is not allowed"
    )?;
    validate!(
        env,
        amount == 0 || expiration_ledger >= env.ledger().sequence(),
        ErrorCode::InvalidParameter,
        "Strategy: approve: expiration_ledger is less than ledger seq when amount > 0"
    )?;

    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    env.storage().temporary().set(
        &key,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    if amount > 0 {
        let live_for = expiration_ledger - env.ledger().sequence();
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }

    Ok(())
}

pub fn spend_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) -> LenderResult {
    let allowance = read_allowance(env, from, spender);
    validate!(
        env,
        allowance.amount >= amount,
        ErrorCode::InsufficientAllowance,
        "Strategy: spend_allowance: insufficient allowance"
    )?;
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}
