use lender_common::types::{MarketInitInfo, RoleInitInfo};
use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, String};

/// Deterministic per (asset, pool): the salt is the hash of both addresses.
pub fn deploy_strategy_contract(
    env: &Env,
    wasm_hash: BytesN<32>,
    asset: &Address,
    name: String,
    symbol: String,
    market: MarketInitInfo,
    roles: RoleInitInfo,
) -> Address {
    let mut salt = Bytes::new(env);
    salt.append(&asset.clone().to_xdr(env));
    salt.append(&market.lending_pool.clone().to_xdr(env));
    let salt = env.crypto().sha256(&salt);

    env.deployer()
        .with_current_contract(salt)
        .deploy_v2(wasm_hash, (asset.clone(), name, symbol, market, roles))
}
