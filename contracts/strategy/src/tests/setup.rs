use lender_common::types::{MarketInitInfo, RoleInitInfo};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger},
    token, Address, Env, String, Vec,
};

use crate::contract::{LenderStrategy, LenderStrategyClient};

pub const DAY: u64 = 86_400;
pub const START: u64 = 1_700_000_000;
/// 100 tokens at 7 decimals
pub const AMOUNT: i128 = 1_000_000_000;
pub const REWARD: i128 = 20_000_000_000;

// ################################################################
//                          Lending pool
// ################################################################

#[contracttype]
enum PoolKey {
    Position(Address, Address),
    Supplied(Address),
    Cap(Address),
    Rewards,
    Shortfall,
}

#[contract]
pub struct MockLendingPool;

#[contractimpl]
impl MockLendingPool {
    pub fn supply(env: Env, from: Address, asset: Address, amount: i128) {
        from.require_auth();
        let pool = env.current_contract_address();
        token::Client::new(&env, &asset).transfer_from(&pool, &from, &pool, &amount);

        add_position(&env, &asset, &from, amount);
    }

    pub fn withdraw(env: Env, from: Address, asset: Address, amount: i128, to: Address) -> i128 {
        from.require_auth();
        let position = Self::position_balance(env.clone(), asset.clone(), from.clone());
        assert!(position >= amount, "withdraw exceeds position");

        let shortfall: i128 = env.storage().instance().get(&PoolKey::Shortfall).unwrap_or(0);
        let paid = (amount - shortfall).max(0);

        add_position(&env, &asset, &from, -amount);
        token::Client::new(&env, &asset).transfer(&env.current_contract_address(), &to, &paid);

        paid
    }

    pub fn position_balance(env: Env, asset: Address, owner: Address) -> i128 {
        env.storage()
            .instance()
            .get(&PoolKey::Position(asset, owner))
            .unwrap_or(0)
    }

    pub fn liquid_balance(env: Env, asset: Address) -> i128 {
        token::Client::new(&env, &asset).balance(&env.current_contract_address())
    }

    pub fn max_supply(env: Env, asset: Address) -> i128 {
        match env
            .storage()
            .instance()
            .get::<_, i128>(&PoolKey::Cap(asset.clone()))
        {
            Some(cap) => {
                let supplied: i128 = env
                    .storage()
                    .instance()
                    .get(&PoolKey::Supplied(asset))
                    .unwrap_or(0);
                (cap - supplied).max(0)
            }
            None => i128::MAX,
        }
    }

    pub fn reward_tokens(env: Env, _asset: Address) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&PoolKey::Rewards)
            .unwrap_or(Vec::new(&env))
    }

    /// Pays out everything the pool holds of each reward token.
    pub fn claim_rewards(env: Env, asset: Address, _owner: Address, to: Address) {
        let pool = env.current_contract_address();
        for reward in Self::reward_tokens(env.clone(), asset).iter() {
            let client = token::Client::new(&env, &reward);
            let balance = client.balance(&pool);
            if balance > 0 {
                client.transfer(&pool, &to, &balance);
            }
        }
    }

    pub fn set_supply_cap(env: Env, asset: Address, cap: Option<i128>) {
        match cap {
            Some(cap) => env.storage().instance().set(&PoolKey::Cap(asset), &cap),
            None => env.storage().instance().remove(&PoolKey::Cap(asset)),
        }
    }

    pub fn set_reward_tokens(env: Env, tokens: Vec<Address>) {
        env.storage().instance().set(&PoolKey::Rewards, &tokens);
    }

    /// Interest credited to a position. The caller funds the pool separately.
    pub fn accrue_interest(env: Env, asset: Address, owner: Address, amount: i128) {
        add_position(&env, &asset, &owner, amount);
    }

    pub fn realize_loss(env: Env, asset: Address, owner: Address, amount: i128) {
        add_position(&env, &asset, &owner, -amount);
    }

    /// Every withdrawal burns the full position amount but pays `shortfall` less.
    pub fn set_withdraw_shortfall(env: Env, shortfall: i128) {
        env.storage().instance().set(&PoolKey::Shortfall, &shortfall);
    }

    /// Lends pool liquidity out, leaving positions untouched.
    pub fn borrow(env: Env, asset: Address, amount: i128, to: Address) {
        token::Client::new(&env, &asset).transfer(&env.current_contract_address(), &to, &amount);
    }
}

fn add_position(env: &Env, asset: &Address, owner: &Address, delta: i128) {
    let key = PoolKey::Position(asset.clone(), owner.clone());
    let position: i128 = env.storage().instance().get(&key).unwrap_or(0);
    env.storage().instance().set(&key, &(position + delta));

    let key = PoolKey::Supplied(asset.clone());
    let supplied: i128 = env.storage().instance().get(&key).unwrap_or(0);
    env.storage().instance().set(&key, &(supplied + delta));
}

// ################################################################
//                           Swap router
// ################################################################

#[contracttype]
enum RouterKey {
    Broken,
    LastFee,
    Swaps,
}

/// Swaps 1:1 out of its own inventory.
#[contract]
pub struct MockSwapRouter;

#[contractimpl]
impl MockSwapRouter {
    pub fn swap(
        env: Env,
        sender: Address,
        token_in: Address,
        token_out: Address,
        amount_in: i128,
        fee: u32,
        min_amount_out: i128,
    ) -> i128 {
        let broken: bool = env.storage().instance().get(&RouterKey::Broken).unwrap_or(false);
        assert!(!broken, "router is broken");
        assert!(amount_in >= min_amount_out, "insufficient output amount");

        let router = env.current_contract_address();
        token::Client::new(&env, &token_in).transfer_from(&router, &sender, &router, &amount_in);
        token::Client::new(&env, &token_out).transfer(&router, &sender, &amount_in);

        let swaps = Self::swaps(env.clone());
        env.storage().instance().set(&RouterKey::Swaps, &(swaps + 1));
        env.storage().instance().set(&RouterKey::LastFee, &fee);

        amount_in
    }

    pub fn set_broken(env: Env, broken: bool) {
        env.storage().instance().set(&RouterKey::Broken, &broken);
    }

    pub fn swaps(env: Env) -> u32 {
        env.storage().instance().get(&RouterKey::Swaps).unwrap_or(0)
    }

    pub fn last_fee(env: Env) -> u32 {
        env.storage().instance().get(&RouterKey::LastFee).unwrap_or(0)
    }
}

// ################################################################
//                             Auction
// ################################################################

#[contracttype]
enum AuctionKey {
    Want,
    Receiver,
    Enabled(Address),
    Kicked(Address),
}

#[contract]
pub struct MockAuction;

#[contractimpl]
impl MockAuction {
    pub fn __constructor(env: Env, want: Address, receiver: Address) {
        env.storage().instance().set(&AuctionKey::Want, &want);
        env.storage().instance().set(&AuctionKey::Receiver, &receiver);
    }

    pub fn want(env: Env) -> Address {
        env.storage().instance().get(&AuctionKey::Want).unwrap()
    }

    pub fn receiver(env: Env) -> Address {
        env.storage().instance().get(&AuctionKey::Receiver).unwrap()
    }

    pub fn enable(env: Env, from: Address) {
        env.storage().instance().set(&AuctionKey::Enabled(from), &true);
    }

    pub fn is_enabled(env: Env, from: Address) -> bool {
        env.storage()
            .instance()
            .get(&AuctionKey::Enabled(from))
            .unwrap_or(false)
    }

    pub fn kickable(env: Env, from: Address) -> i128 {
        if !Self::is_enabled(env.clone(), from.clone()) {
            return 0;
        }
        token::Client::new(&env, &from).balance(&env.current_contract_address())
    }

    pub fn kick(env: Env, from: Address) -> i128 {
        let available = Self::kickable(env.clone(), from.clone());
        assert!(available > 0, "nothing to kick");
        env.storage().instance().set(&AuctionKey::Kicked(from), &available);
        available
    }

    pub fn kicked(env: Env, from: Address) -> i128 {
        env.storage()
            .instance()
            .get(&AuctionKey::Kicked(from))
            .unwrap_or(0)
    }

    /// Fixed price of two `want` per token.
    pub fn get_amount_needed(_env: Env, _from: Address, amount_to_take: i128) -> i128 {
        amount_to_take * 2
    }
}

// ################################################################
//                              Setup
// ################################################################

pub fn create_token<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let contract = env.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(env, &contract.address()),
        token::StellarAssetClient::new(env, &contract.address()),
    )
}

pub struct Setup<'a> {
    pub env: Env,
    pub strategy: LenderStrategyClient<'a>,
    pub asset: token::Client<'a>,
    pub asset_admin: token::StellarAssetClient<'a>,
    pub reward: token::Client<'a>,
    pub reward_admin: token::StellarAssetClient<'a>,
    pub base: token::Client<'a>,
    pub base_admin: token::StellarAssetClient<'a>,
    pub pool: MockLendingPoolClient<'a>,
    pub router: MockSwapRouterClient<'a>,
    pub management: Address,
    pub keeper: Address,
    pub emergency_admin: Address,
    pub fee_recipient: Address,
    pub user: Address,
}

impl Setup<'_> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();
        env.ledger().with_mut(|li| li.timestamp = START);

        let token_admin = Address::generate(&env);
        let (asset, asset_admin) = create_token(&env, &token_admin);
        let (reward, reward_admin) = create_token(&env, &token_admin);
        let (base, base_admin) = create_token(&env, &token_admin);

        let pool = MockLendingPoolClient::new(&env, &env.register(MockLendingPool, ()));
        let router = MockSwapRouterClient::new(&env, &env.register(MockSwapRouter, ()));
        pool.set_reward_tokens(&Vec::from_array(&env, [reward.address.clone()]));

        // swap inventory
        asset_admin.mint(&router.address, &(100 * REWARD));
        base_admin.mint(&router.address, &(100 * REWARD));

        let management = Address::generate(&env);
        let keeper = Address::generate(&env);
        let emergency_admin = Address::generate(&env);
        let fee_recipient = Address::generate(&env);
        let user = Address::generate(&env);

        let strategy_id = env.register(
            LenderStrategy,
            (
                asset.address.clone(),
                String::from_str(&env, "Lender USD"),
                String::from_str(&env, "lUSD"),
                MarketInitInfo {
                    lending_pool: pool.address.clone(),
                    router: router.address.clone(),
                    base_token: base.address.clone(),
                },
                RoleInitInfo {
                    management: management.clone(),
                    keeper: keeper.clone(),
                    emergency_admin: Some(emergency_admin.clone()),
                    performance_fee_recipient: fee_recipient.clone(),
                },
            ),
        );
        let strategy = LenderStrategyClient::new(&env, &strategy_id);

        Setup {
            env,
            strategy,
            asset,
            asset_admin,
            reward,
            reward_admin,
            base,
            base_admin,
            pool,
            router,
            management,
            keeper,
            emergency_admin,
            fee_recipient,
            user,
        }
    }

    pub fn deposit(&self, user: &Address, amount: i128) -> i128 {
        self.asset_admin.mint(user, &amount);
        self.strategy.deposit(user, &amount, user)
    }

    /// Credits interest to the strategy's position and funds the pool for it.
    pub fn accrue_interest(&self, amount: i128) {
        self.asset_admin.mint(&self.pool.address, &amount);
        self.pool
            .accrue_interest(&self.asset.address, &self.strategy.address, &amount);
    }

    pub fn realize_loss(&self, amount: i128) {
        self.pool
            .realize_loss(&self.asset.address, &self.strategy.address, &amount);
    }

    pub fn position(&self) -> i128 {
        self.pool
            .position_balance(&self.asset.address, &self.strategy.address)
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn jump(&self, seconds: u64) {
        self.env.ledger().with_mut(|li| li.timestamp += seconds);
    }

    pub fn report(&self) -> (i128, i128) {
        self.strategy.report(&self.keeper)
    }

    pub fn register_auction(&self, want: &Address, receiver: &Address) -> MockAuctionClient<'_> {
        MockAuctionClient::new(
            &self.env,
            &self
                .env
                .register(MockAuction, (want.clone(), receiver.clone())),
        )
    }
}
