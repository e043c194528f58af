use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouter {
    /// Single-hop exact-input swap. `token_in` is pulled from `sender`
    /// through its allowance and the output is sent back to `sender`.
    fn swap(
        env: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        fee: u32,
        min_amount_out: i128,
    ) -> i128;
}
