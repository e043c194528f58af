use lender_common::{
    error::LenderResult,
    math::helpers::{mul_div, Rounding},
};
use soroban_sdk::Env;

/// Shares worth `assets` at the price implied by `total_supply / total_assets`.
///
/// An empty vault prices 1:1. A vault with shares but no assets prices every
/// share at zero, so no shares can be issued against it.
pub fn convert_to_shares(
    env: &Env,
    assets: i128,
    total_supply: i128,
    total_assets: i128,
    rounding: Rounding,
) -> LenderResult<i128> {
    if total_supply == 0 {
        return Ok(assets);
    }
    if total_assets == 0 {
        return Ok(0);
    }

    mul_div(env, assets, total_supply, total_assets, rounding)
}

pub fn convert_to_assets(
    env: &Env,
    shares: i128,
    total_supply: i128,
    total_assets: i128,
    rounding: Rounding,
) -> LenderResult<i128> {
    if total_supply == 0 {
        return Ok(shares);
    }

    mul_div(env, shares, total_assets, total_supply, rounding)
}
