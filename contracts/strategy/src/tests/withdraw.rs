use lender_common::error::ErrorCode;
use soroban_sdk::{testutils::Address as _, Address};
use test_case::test_case;

use crate::tests::setup::{Setup, AMOUNT};

#[test]
fn full_redeem_returns_everything() {
    let setup = Setup::new();
    setup.deposit(&setup.user, AMOUNT);

    let assets = setup
        .strategy
        .redeem(&setup.user, &AMOUNT, &setup.user, &setup.user, &0);

    assert_eq!(assets, AMOUNT);
    assert_eq!(setup.asset.balance(&setup.user), AMOUNT);
    assert_eq!(setup.strategy.balance(&setup.user), 0);
    assert_eq!(setup.strategy.total_supply(), 0);
    assert_eq!(setup.strategy.total_assets(), 0);
    assert_eq!(setup.position(), 0);
}

#[test]
fn partial_withdraw_burns_matching_shares() {
    let setup = Setup::new();
    setup.deposit(&setup.user, AMOUNT);
    let receiver = Address::generate(&setup.env);

    let shares = setup
        .strategy
        .withdraw(&setup.user, &(AMOUNT / 4), &receiver, &setup.user, &0);

    assert_eq!(shares, AMOUNT / 4);
    assert_eq!(setup.asset.balance(&receiver), AMOUNT / 4);
    assert_eq!(setup.strategy.balance(&setup.user), AMOUNT - AMOUNT / 4);
    assert_eq!(setup.strategy.total_debt(), AMOUNT - AMOUNT / 4);
    assert_eq!(setup.strategy.total_idle(), 0);
}

#[test]
fn withdraw_limited_by_pool_liquidity() {
    let setup = Setup::new();
    setup.deposit(&setup.user, AMOUNT);
    let borrower = Address::generate(&setup.env);
    setup
        .pool
        .borrow(&setup.asset.address, &700_000_000, &borrower);

    assert_eq!(
        setup.strategy.available_withdraw_limit(&setup.user),
        300_000_000
    );
    assert_eq!(setup.strategy.max_withdraw(&setup.user), 300_000_000);
    assert_eq!(setup.strategy.max_redeem(&setup.user), 300_000_000);
    assert_eq!(
        setup
            .strategy
            .try_withdraw(&setup.user, &500_000_000, &setup.user, &setup.user, &0),
        Err(Ok(ErrorCode::ExceedsMaxWithdraw))
    );
    assert_eq!(
        setup
            .strategy
            .try_redeem(&setup.user, &500_000_000, &setup.user, &setup.user, &0),
        Err(Ok(ErrorCode::ExceedsMaxRedeem))
    );

    setup
        .strategy
        .withdraw(&setup.user, &300_000_000, &setup.user, &setup.user, &0);

    assert_eq!(setup.asset.balance(&setup.user), 300_000_000);
    assert_eq!(setup.strategy.max_withdraw(&setup.user), 0);
}

#[test]
fn redeem_more_than_balance_fails() {
    let setup = Setup::new();
    setup.deposit(&setup.user, AMOUNT);

    assert_eq!(
        setup
            .strategy
            .try_redeem(&setup.user, &(AMOUNT + 1), &setup.user, &setup.user, &0),
        Err(Ok(ErrorCode::ExceedsMaxRedeem))
    );
    assert_eq!(
        setup
            .strategy
            .try_withdraw(&setup.user, &0, &setup.user, &setup.user, &0),
        Err(Ok(ErrorCode::ZeroAmount))
    );
}

#[test]
fn max_loss_above_max_bps_fails() {
    let setup = Setup::new();
    setup.deposit(&setup.user, AMOUNT);

    assert_eq!(
        setup
            .strategy
            .try_redeem(&setup.user, &AMOUNT, &setup.user, &setup.user, &10_001),
        Err(Ok(ErrorCode::InvalidParameter))
    );
}

const SHORTFALL: i128 = 100_000_000;

#[test_case(0 ; "no tolerance")]
#[test_case(999 ; "just below the shortfall")]
fn shortfall_above_max_loss_fails(max_loss: u32) {
    let setup = Setup::new();
    setup.deposit(&setup.user, AMOUNT);
    setup.pool.set_withdraw_shortfall(&SHORTFALL);

    assert_eq!(
        setup
            .strategy
            .try_redeem(&setup.user, &AMOUNT, &setup.user, &setup.user, &max_loss),
        Err(Ok(ErrorCode::InsufficientLiquidity))
    );
    assert_eq!(setup.strategy.balance(&setup.user), AMOUNT);
    assert_eq!(setup.strategy.total_debt(), AMOUNT);
}

#[test_case(1_000 ; "exactly the shortfall")]
#[test_case(10_000 ; "any loss")]
fn shortfall_within_max_loss_is_written_off(max_loss: u32) {
    let setup = Setup::new();
    setup.deposit(&setup.user, AMOUNT);
    setup.pool.set_withdraw_shortfall(&SHORTFALL);

    let assets = setup
        .strategy
        .redeem(&setup.user, &AMOUNT, &setup.user, &setup.user, &max_loss);

    assert_eq!(assets, AMOUNT - SHORTFALL);
    assert_eq!(setup.asset.balance(&setup.user), AMOUNT - SHORTFALL);
    assert_eq!(setup.strategy.balance(&setup.user), 0);
    assert_eq!(setup.strategy.total_idle(), 0);
    assert_eq!(setup.strategy.total_debt(), 0);
    assert_eq!(setup.strategy.total_assets(), 0);
    assert_eq!(setup.strategy.total_supply(), 0);
}

#[test]
fn redeem_on_behalf_spends_allowance() {
    let setup = Setup::new();
    setup.deposit(&setup.user, AMOUNT);
    let spender = Address::generate(&setup.env);
    let expiration = setup.env.ledger().sequence() + 1_000;

    assert_eq!(
        setup
            .strategy
            .try_redeem(&spender, &(AMOUNT / 2), &spender, &setup.user, &0),
        Err(Ok(ErrorCode::InsufficientAllowance))
    );

    setup
        .strategy
        .approve(&setup.user, &spender, &(AMOUNT / 2), &expiration);
    let assets = setup
        .strategy
        .redeem(&spender, &(AMOUNT / 2), &spender, &setup.user, &0);

    assert_eq!(assets, AMOUNT / 2);
    assert_eq!(setup.asset.balance(&spender), AMOUNT / 2);
    assert_eq!(setup.strategy.balance(&setup.user), AMOUNT / 2);
    assert_eq!(setup.strategy.allowance(&setup.user, &spender), 0);
}

#[test]
fn idle_funds_are_paid_before_the_pool() {
    let setup = Setup::new();
    setup
        .pool
        .set_supply_cap(&setup.asset.address, &Some(600_000_000));
    setup.deposit(&setup.user, AMOUNT);

    setup
        .strategy
        .withdraw(&setup.user, &300_000_000, &setup.user, &setup.user, &0);

    assert_eq!(setup.strategy.total_idle(), 100_000_000);
    assert_eq!(setup.strategy.total_debt(), 600_000_000);
    assert_eq!(setup.position(), 600_000_000);

    setup
        .strategy
        .withdraw(&setup.user, &300_000_000, &setup.user, &setup.user, &0);

    assert_eq!(setup.strategy.total_idle(), 0);
    assert_eq!(setup.strategy.total_debt(), 400_000_000);
    assert_eq!(setup.position(), 400_000_000);
}
