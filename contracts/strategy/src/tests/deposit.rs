use lender_common::error::ErrorCode;
use soroban_sdk::{testutils::Address as _, Address};

use crate::tests::setup::{Setup, AMOUNT};

#[test]
fn deposit_mints_one_to_one_and_supplies() {
    let setup = Setup::new();

    let shares = setup.deposit(&setup.user, AMOUNT);

    assert_eq!(shares, AMOUNT);
    assert_eq!(setup.strategy.balance(&setup.user), AMOUNT);
    assert_eq!(setup.strategy.total_supply(), AMOUNT);
    assert_eq!(setup.strategy.total_assets(), AMOUNT);
    assert_eq!(setup.strategy.total_idle(), 0);
    assert_eq!(setup.strategy.total_debt(), AMOUNT);
    assert_eq!(setup.position(), AMOUNT);
    assert_eq!(setup.asset.balance(&setup.strategy.address), 0);
    assert_eq!(setup.strategy.price_per_share(), 10_000_000);
}

#[test]
fn deposit_to_another_receiver() {
    let setup = Setup::new();
    let receiver = Address::generate(&setup.env);

    setup.asset_admin.mint(&setup.user, &AMOUNT);
    setup.strategy.deposit(&setup.user, &AMOUNT, &receiver);

    assert_eq!(setup.strategy.balance(&setup.user), 0);
    assert_eq!(setup.strategy.balance(&receiver), AMOUNT);
    assert_eq!(setup.asset.balance(&setup.user), 0);
}

#[test]
fn mint_pulls_the_share_price() {
    let setup = Setup::new();
    setup.deposit(&setup.user, AMOUNT);
    setup.accrue_interest(AMOUNT);
    setup.strategy.set_performance_fee(&setup.management, &0);
    setup.strategy.set_profit_max_unlock_time(&setup.management, &0);
    setup.report();

    // two assets per share now
    let other = Address::generate(&setup.env);
    setup.asset_admin.mint(&other, &AMOUNT);
    let assets = setup.strategy.mint(&other, &(AMOUNT / 4), &other);

    assert_eq!(assets, AMOUNT / 2);
    assert_eq!(setup.strategy.balance(&other), AMOUNT / 4);
    assert_eq!(setup.asset.balance(&other), AMOUNT / 2);
}

#[test]
fn deposit_zero_fails() {
    let setup = Setup::new();

    assert_eq!(
        setup.strategy.try_deposit(&setup.user, &0, &setup.user),
        Err(Ok(ErrorCode::ZeroAmount))
    );
    assert_eq!(
        setup.strategy.try_mint(&setup.user, &0, &setup.user),
        Err(Ok(ErrorCode::ZeroAmount))
    );
}

#[test]
fn supply_cap_leaves_funds_idle_until_tended() {
    let setup = Setup::new();
    setup
        .pool
        .set_supply_cap(&setup.asset.address, &Some(600_000_000));

    setup.deposit(&setup.user, AMOUNT);

    assert_eq!(setup.strategy.total_idle(), 400_000_000);
    assert_eq!(setup.strategy.total_debt(), 600_000_000);
    assert_eq!(setup.strategy.total_assets(), AMOUNT);
    let (should_tend, _) = setup.strategy.tend_trigger();
    assert!(!should_tend);

    setup.pool.set_supply_cap(&setup.asset.address, &None);
    let (should_tend, _) = setup.strategy.tend_trigger();
    assert!(should_tend);

    let deployed = setup.strategy.tend(&setup.keeper);

    assert_eq!(deployed, 400_000_000);
    assert_eq!(setup.strategy.total_idle(), 0);
    assert_eq!(setup.strategy.total_debt(), AMOUNT);
    assert_eq!(setup.position(), AMOUNT);
    let (should_tend, _) = setup.strategy.tend_trigger();
    assert!(!should_tend);
}

#[test]
fn tend_requires_keeper() {
    let setup = Setup::new();
    let stranger = Address::generate(&setup.env);

    assert_eq!(
        setup.strategy.try_tend(&stranger),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(setup.strategy.tend(&setup.management), 0);
}

#[test]
fn deposit_limits_while_active() {
    let setup = Setup::new();

    assert_eq!(setup.strategy.max_deposit(&setup.user), i128::MAX);
    assert_eq!(setup.strategy.max_mint(&setup.user), i128::MAX);
    assert_eq!(setup.strategy.available_deposit_limit(&setup.user), i128::MAX);
}
