use lender_common::{
    error::{ErrorCode, LenderResult},
    validate,
};
use soroban_sdk::{Address, Env};

use crate::storage::Roles;

pub fn is_management(roles: &Roles, addr: &Address) -> bool {
    roles.management == *addr
}

pub fn is_keeper_or_management(roles: &Roles, addr: &Address) -> bool {
    roles.keeper == *addr || is_management(roles, addr)
}

pub fn is_emergency_authorized(roles: &Roles, addr: &Address) -> bool {
    roles.emergency_admin.as_ref() == Some(addr) || is_management(roles, addr)
}

pub fn require_management(env: &Env, roles: &Roles, addr: &Address) -> LenderResult {
    validate!(
        env,
        is_management(roles, addr),
        ErrorCode::NotAuthorized,
        "Strategy: caller is not management"
    )
}

pub fn require_keepers(env: &Env, roles: &Roles, addr: &Address) -> LenderResult {
    validate!(
        env,
        is_keeper_or_management(roles, addr),
        ErrorCode::NotAuthorized,
        "Strategy: caller is not a keeper"
    )
}

pub fn require_emergency_authorized(env: &Env, roles: &Roles, addr: &Address) -> LenderResult {
    validate!(
        env,
        is_emergency_authorized(roles, addr),
        ErrorCode::NotAuthorized,
        "Strategy: caller is not emergency authorized"
    )
}
