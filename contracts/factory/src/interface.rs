use lender_common::error::ErrorCode;
use soroban_sdk::{contractclient, Address, Env};

/// The part of a deployed strategy the factory talks to.
#[allow(dead_code)]
#[contractclient(name = "StrategyClient")]
pub trait Strategy {
    fn set_pending_management(env: Env, caller: Address, management: Address) -> Result<(), ErrorCode>;

    fn asset(env: Env) -> Address;

    fn lending_pool(env: Env) -> Address;

    fn management(env: Env) -> Address;

    fn pending_management(env: Env) -> Option<Address>;
}
