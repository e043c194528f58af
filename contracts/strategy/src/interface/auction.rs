use soroban_sdk::{contractclient, Address, Env};

/// Dutch auction selling enabled tokens for `want`, proceeds paid to `receiver`.
#[contractclient(name = "AuctionClient")]
pub trait Auction {
    fn want(env: Env) -> Address;

    fn receiver(env: Env) -> Address;

    fn enable(env: Env, from: Address);

    fn kickable(env: Env, from: Address) -> i128;

    fn kick(env: Env, from: Address) -> i128;

    fn get_amount_needed(env: Env, from: Address, amount_to_take: i128) -> i128;
}
