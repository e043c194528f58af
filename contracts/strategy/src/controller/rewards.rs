use lender_common::{
    constants::APPROVAL_LEDGERS,
    error::{ErrorCode, LenderResult},
    validate,
};
use soroban_sdk::{log, token, Address, Env, Vec};

use crate::{
    events::StrategyEvents,
    interface::{auction::AuctionClient, swap_router::SwapRouterClient},
    storage::{get_dont_sell, get_min_amount_to_sell_for, get_swap_fee, RewardConfig},
};

pub struct DisposalContext<'a> {
    pub asset: &'a Address,
    pub config: &'a RewardConfig,
    pub reward_tokens: Vec<Address>,
}

/// Turns reward tokens held by the strategy into the asset during a report.
/// Implementations never fail the report; a token that cannot be handled is
/// left in place.
pub trait RewardDisposal {
    /// Returns how many reward tokens were converted.
    fn dispose(&self, env: &Env, ctx: &DisposalContext) -> u32;
}

/// Sells every eligible reward token through the swap router.
pub struct SwapDisposal;

/// Leaves reward tokens for the auction; proceeds arrive as idle asset.
pub struct AuctionDisposal;

pub fn disposal_for(config: &RewardConfig) -> &'static dyn RewardDisposal {
    if config.use_auction {
        &AuctionDisposal
    } else {
        &SwapDisposal
    }
}

impl RewardDisposal for SwapDisposal {
    fn dispose(&self, env: &Env, ctx: &DisposalContext) -> u32 {
        let this = env.current_contract_address();
        let mut sold = 0;

        for reward in ctx.reward_tokens.iter() {
            if reward == *ctx.asset || get_dont_sell(env, &reward) {
                continue;
            }

            let Ok(Ok(balance)) = token::Client::new(env, &reward).try_balance(&this) else {
                log!(env, "Strategy: reward token balance query failed");
                continue;
            };
            let min_amount_to_sell = get_min_amount_to_sell_for(env, &reward)
                .unwrap_or(ctx.config.min_amount_to_sell);
            if balance <= min_amount_to_sell {
                continue;
            }

            let Some(route) = swap_route(env, ctx.config, &reward, ctx.asset) else {
                continue;
            };

            if let Some(amount_out) = execute_route(env, &ctx.config.router, &route, balance) {
                StrategyEvents::reward_sold(env, reward.clone(), balance, amount_out);
                sold += 1;
            }
        }

        sold
    }
}

impl RewardDisposal for AuctionDisposal {
    fn dispose(&self, _env: &Env, _ctx: &DisposalContext) -> u32 {
        0
    }
}

// ################################################################
//                              Swaps
// ################################################################

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Hop {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Route {
    Direct(Hop),
    ViaBase(Hop, Hop),
}

/// Direct hop when either side is the base token, otherwise through the base
/// token. `None` when any hop has no fee tier configured.
pub fn swap_route(
    env: &Env,
    config: &RewardConfig,
    token_in: &Address,
    token_out: &Address,
) -> Option<Route> {
    let hop = |from: &Address, to: &Address| -> Option<Hop> {
        let fee = get_swap_fee(env, from, to);
        (fee != 0).then(|| Hop {
            token_in: from.clone(),
            token_out: to.clone(),
            fee,
        })
    };

    if *token_in == config.base_token || *token_out == config.base_token {
        Some(Route::Direct(hop(token_in, token_out)?))
    } else {
        Some(Route::ViaBase(
            hop(token_in, &config.base_token)?,
            hop(&config.base_token, token_out)?,
        ))
    }
}

/// Runs each hop through the router, swallowing router failures.
fn execute_route(env: &Env, router: &Address, route: &Route, amount_in: i128) -> Option<i128> {
    match route {
        Route::Direct(hop) => try_swap(env, router, hop, amount_in, 0),
        Route::ViaBase(first, second) => {
            let intermediate = try_swap(env, router, first, amount_in, 0)?;
            try_swap(env, router, second, intermediate, 0)
        }
    }
}

fn approve_router(env: &Env, router: &Address, token_in: &Address, amount: i128) -> Option<()> {
    let expiration_ledger = env.ledger().sequence().checked_add(APPROVAL_LEDGERS)?;
    match token::Client::new(env, token_in).try_approve(
        &env.current_contract_address(),
        router,
        &amount,
        &expiration_ledger,
    ) {
        Ok(Ok(())) => Some(()),
        _ => {
            log!(env, "Strategy: router approval failed");
            None
        }
    }
}

fn try_swap(env: &Env, router: &Address, hop: &Hop, amount_in: i128, min_amount_out: i128) -> Option<i128> {
    approve_router(env, router, &hop.token_in, amount_in)?;

    let result = SwapRouterClient::new(env, router).try_swap(
        &env.current_contract_address(),
        &hop.token_in,
        &hop.token_out,
        &amount_in,
        &hop.fee,
        &min_amount_out,
    );

    match result {
        Ok(Ok(amount_out)) => Some(amount_out),
        _ => {
            log!(env, "Strategy: swap failed for fee tier {}", hop.fee);
            None
        }
    }
}

/// Single direct hop at the given fee tier, outside of any report. Ignores
/// do-not-sell flags and thresholds and surfaces router failures.
pub fn sell_reward_manually(
    env: &Env,
    config: &RewardConfig,
    asset: &Address,
    token: &Address,
    amount: i128,
    min_amount_out: i128,
    fee: u32,
) -> LenderResult<i128> {
    validate!(
        env,
        token != asset,
        ErrorCode::InvalidParameter,
        "Strategy: sell_reward_manually: the asset cannot be sold"
    )?;
    validate!(
        env,
        fee != 0,
        ErrorCode::InvalidParameter,
        "Strategy: sell_reward_manually: fee tier must be set"
    )?;

    let balance = token::Client::new(env, token).balance(&env.current_contract_address());
    let amount = amount.min(balance);
    validate!(
        env,
        amount > 0,
        ErrorCode::ZeroAmount,
        "Strategy: sell_reward_manually: nothing to sell"
    )?;

    let hop = Hop {
        token_in: token.clone(),
        token_out: asset.clone(),
        fee,
    };
    let amount_out = try_swap(env, &config.router, &hop, amount, min_amount_out)
        .ok_or(ErrorCode::SwapFailed)?;

    StrategyEvents::reward_sold(env, token.clone(), amount, amount_out);

    Ok(amount_out)
}

// ################################################################
//                             Auction
// ################################################################

pub fn validate_auction(env: &Env, auction: &Address, asset: &Address) -> LenderResult {
    let client = AuctionClient::new(env, auction);
    validate!(
        env,
        client.want() == *asset,
        ErrorCode::InvalidAuction,
        "Strategy: set_auction: auction does not buy the asset"
    )?;
    validate!(
        env,
        client.receiver() == env.current_contract_address(),
        ErrorCode::InvalidAuction,
        "Strategy: set_auction: auction does not pay the strategy"
    )
}

fn configured_auction(env: &Env, config: &RewardConfig) -> LenderResult<Address> {
    config.auction.clone().ok_or_else(|| {
        log!(env, "Strategy: no auction configured");
        ErrorCode::AuctionNotSet
    })
}

pub fn enable_auction_token(env: &Env, config: &RewardConfig, asset: &Address, token: &Address) -> LenderResult {
    validate!(
        env,
        token != asset,
        ErrorCode::InvalidParameter,
        "Strategy: enable_auction_token: the asset cannot be auctioned"
    )?;
    let auction = configured_auction(env, config)?;
    AuctionClient::new(env, &auction).enable(token);
    Ok(())
}

/// Moves the strategy's whole balance of `token` into the auction and starts
/// a round. Returns the amount offered.
pub fn kick_auction(env: &Env, config: &RewardConfig, asset: &Address, token: &Address) -> LenderResult<i128> {
    validate!(
        env,
        token != asset,
        ErrorCode::InvalidParameter,
        "Strategy: kick_auction: the asset cannot be auctioned"
    )?;
    let auction = configured_auction(env, config)?;
    let client = AuctionClient::new(env, &auction);

    let this = env.current_contract_address();
    let reward = token::Client::new(env, token);
    let balance = reward.balance(&this);
    if balance > 0 {
        reward.transfer(&this, &auction, &balance);
    }

    let kickable = client.kickable(token);
    validate!(
        env,
        kickable > 0,
        ErrorCode::ZeroAmount,
        "Strategy: kick_auction: nothing to kick"
    )?;

    let kicked = client.kick(token);
    StrategyEvents::auction_kicked(env, token.clone(), auction, kicked);

    Ok(kicked)
}

pub fn auction_amount_needed(
    env: &Env,
    config: &RewardConfig,
    token: &Address,
    amount: i128,
) -> LenderResult<i128> {
    let auction = configured_auction(env, config)?;
    Ok(AuctionClient::new(env, &auction).get_amount_needed(token, &amount))
}
