use lender_common::{
    constants::APPROVAL_LEDGERS,
    error::LenderResult,
    math::safe_math::SafeMath,
};
use soroban_sdk::{log, token, Address, Env, Vec};

use crate::interface::lending_pool::LendingPoolClient;

/// Moves the strategy's asset in and out of the lending pool.
pub struct MarketAdapter<'a> {
    env: &'a Env,
    pool: LendingPoolClient<'a>,
    asset: Address,
}

impl<'a> MarketAdapter<'a> {
    pub fn new(env: &'a Env, lending_pool: &Address, asset: &Address) -> Self {
        MarketAdapter {
            env,
            pool: LendingPoolClient::new(env, lending_pool),
            asset: asset.clone(),
        }
    }

    pub fn position(&self) -> i128 {
        self.pool
            .position_balance(&self.asset, &self.env.current_contract_address())
    }

    pub fn liquidity(&self) -> i128 {
        self.pool.liquid_balance(&self.asset)
    }

    pub fn deposit_headroom(&self) -> i128 {
        self.pool.max_supply(&self.asset).max(0)
    }

    /// What could be pulled out of the pool right now.
    pub fn withdrawable(&self) -> i128 {
        self.position().min(self.liquidity()).max(0)
    }

    /// Supplies up to `amount`, bounded by the pool's headroom. Returns the
    /// amount actually supplied.
    pub fn deploy(&self, amount: i128) -> LenderResult<i128> {
        let amount = amount.min(self.deposit_headroom());
        if amount <= 0 {
            return Ok(0);
        }

        let this = self.env.current_contract_address();
        let asset = token::Client::new(self.env, &self.asset);
        let expiration_ledger = self.env.ledger().sequence().safe_add(APPROVAL_LEDGERS, self.env)?;
        asset.approve(&this, &self.pool.address, &amount, &expiration_ledger);
        self.pool.supply(&this, &self.asset, &amount);

        Ok(amount)
    }

    /// Pulls up to `amount` back, bounded by position and liquidity. Returns
    /// the amount that actually arrived.
    pub fn free(&self, amount: i128) -> LenderResult<i128> {
        let amount = amount.min(self.withdrawable());
        if amount <= 0 {
            return Ok(0);
        }

        let this = self.env.current_contract_address();
        let asset = token::Client::new(self.env, &self.asset);
        let before = asset.balance(&this);
        self.pool.withdraw(&this, &self.asset, &amount, &this);

        asset.balance(&this).safe_sub(before, self.env)
    }

    pub fn claim_rewards(&self) -> bool {
        let this = self.env.current_contract_address();
        let claimed = self.pool.try_claim_rewards(&self.asset, &this, &this).is_ok();
        if !claimed {
            log!(self.env, "Strategy: claim_rewards: lending pool claim failed");
        }

        claimed
    }

    pub fn reward_tokens(&self) -> Vec<Address> {
        match self.pool.try_reward_tokens(&self.asset) {
            Ok(Ok(tokens)) => tokens,
            _ => {
                log!(self.env, "Strategy: reward_tokens: lending pool query failed");
                Vec::new(self.env)
            }
        }
    }
}
