#![cfg(test)]
extern crate std;

use crate::testutils::{create_token_contract, Setup, POOL_FEE};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, Bytes, IntoVal, Symbol};

#[test]
fn test_set_buy_path() {
    let setup = Setup::default();
    let e = setup.env.clone();
    let fund = setup.fund.address.clone();
    let buy = setup.route(&[&setup.base.address, &setup.token0.address]);

    setup
        .controller
        .set_path(&setup.manager, &fund, &setup.token0.address, &buy);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                setup.controller.address.clone(),
                (
                    Symbol::new(&e, "set_path"),
                    fund.clone(),
                    setup.token0.address.clone()
                )
                    .into_val(&e),
                (buy.clone(),).into_val(&e),
            ),
        ]
    );

    assert_eq!(
        setup.controller.get_buy_path(&fund, &setup.token0.address),
        Some(buy)
    );
    assert_eq!(
        setup.controller.get_sell_path(&fund, &setup.token0.address),
        Some(setup.route(&[&setup.token0.address, &setup.base.address]))
    );
}

#[test]
fn test_set_sell_path() {
    let setup = Setup::default();
    let fund = setup.fund.address.clone();
    let sell = setup.route(&[
        &setup.token0.address,
        &setup.token1.address,
        &setup.base.address,
    ]);

    setup
        .controller
        .set_path(&setup.manager, &fund, &setup.token0.address, &sell);

    assert_eq!(
        setup.controller.get_sell_path(&fund, &setup.token0.address),
        Some(sell)
    );
    assert_eq!(
        setup.controller.get_buy_path(&fund, &setup.token0.address),
        Some(setup.route(&[
            &setup.base.address,
            &setup.token1.address,
            &setup.token0.address,
        ]))
    );
}

#[test]
fn test_set_path_overwrites() {
    let setup = Setup::default();
    let fund = setup.fund.address.clone();
    let direct = setup.route(&[&setup.base.address, &setup.token0.address]);
    let via_token1 = setup.route(&[
        &setup.base.address,
        &setup.token1.address,
        &setup.token0.address,
    ]);

    setup
        .controller
        .set_path(&setup.manager, &fund, &setup.token0.address, &direct);
    setup
        .controller
        .set_path(&setup.manager, &fund, &setup.token0.address, &via_token1);
    assert_eq!(
        setup.controller.get_buy_path(&fund, &setup.token0.address),
        Some(via_token1)
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_buy_path_wrong_last_token() {
    let setup = Setup::default();
    let route = setup.route(&[&setup.base.address, &setup.token1.address]);
    setup.controller.set_path(
        &setup.manager,
        &setup.fund.address,
        &setup.token0.address,
        &route,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_sell_path_wrong_first_token() {
    let setup = Setup::default();
    let route = setup.route(&[&setup.token1.address, &setup.base.address]);
    setup.controller.set_path(
        &setup.manager,
        &setup.fund.address,
        &setup.token0.address,
        &route,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_sell_path_wrong_last_token() {
    let setup = Setup::default();
    let route = setup.route(&[&setup.token0.address, &setup.token1.address]);
    setup.controller.set_path(
        &setup.manager,
        &setup.fund.address,
        &setup.token0.address,
        &route,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_path_for_base_token() {
    let setup = Setup::default();
    let route = setup.route(&[&setup.base.address, &setup.token0.address]);
    setup.controller.set_path(
        &setup.manager,
        &setup.fund.address,
        &setup.base.address,
        &route,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #302)")]
fn test_path_unverified_intermediate() {
    let setup = Setup::default();
    setup
        .controller
        .set_verified_token(&setup.governance, &setup.token1.address, &false);

    let route = setup.route(&[
        &setup.base.address,
        &setup.token1.address,
        &setup.token0.address,
    ]);
    setup.controller.set_path(
        &setup.manager,
        &setup.fund.address,
        &setup.token0.address,
        &route,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #302)")]
fn test_path_unverified_destination() {
    let setup = Setup::default();
    let e = &setup.env;
    let token = create_token_contract(e, &Address::generate(e));
    setup.pool_factory.add_pool(
        &setup.base.address,
        &token.address,
        &POOL_FEE,
        &Address::generate(e),
    );

    let route = setup.route(&[&setup.base.address, &token.address]);
    setup
        .controller
        .set_path(&setup.manager, &setup.fund.address, &token.address, &route);
}

#[test]
#[should_panic(expected = "Error(Contract, #303)")]
fn test_path_pool_not_exist() {
    let setup = Setup::default();
    setup
        .controller
        .set_verified_token(&setup.governance, &setup.reward.address, &true);

    let route = setup.route(&[&setup.base.address, &setup.reward.address]);
    setup.controller.set_path(
        &setup.manager,
        &setup.fund.address,
        &setup.reward.address,
        &route,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #320)")]
fn test_path_malformed() {
    let setup = Setup::default();
    let route = setup.route(&[&setup.base.address, &setup.token0.address]);
    setup.controller.set_path(
        &setup.manager,
        &setup.fund.address,
        &setup.token0.address,
        &route.slice(0..route.len() - 1),
    );
}

#[test]
fn test_set_harvest_path() {
    let setup = Setup::default();
    let e = setup.env.clone();
    let route = setup.route(&[
        &setup.token0.address,
        &setup.bridge.address,
        &setup.reward.address,
    ]);

    assert_eq!(
        setup.controller.get_harvest_path(&setup.token0.address),
        None
    );
    setup
        .controller
        .set_harvest_path(&setup.governance, &setup.token0.address, &route);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                setup.controller.address.clone(),
                (
                    Symbol::new(&e, "set_harvest_path"),
                    setup.token0.address.clone()
                )
                    .into_val(&e),
                (route.clone(),).into_val(&e),
            ),
        ]
    );
    assert_eq!(
        setup.controller.get_harvest_path(&setup.token0.address),
        Some(route)
    );
}

#[test]
fn test_harvest_path_from_bridge() {
    let setup = Setup::default();
    let route = setup.route(&[&setup.bridge.address, &setup.reward.address]);

    setup
        .controller
        .set_harvest_path(&setup.governance, &setup.bridge.address, &route);
    assert_eq!(
        setup.controller.get_harvest_path(&setup.bridge.address),
        Some(route)
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_harvest_path_without_bridge_hop() {
    let setup = Setup::default();
    setup.pool_factory.add_pool(
        &setup.token0.address,
        &setup.reward.address,
        &POOL_FEE,
        &Address::generate(&setup.env),
    );

    let route = setup.route(&[&setup.token0.address, &setup.reward.address]);
    setup
        .controller
        .set_harvest_path(&setup.governance, &setup.token0.address, &route);
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_harvest_path_not_ending_in_reward() {
    let setup = Setup::default();
    let route = setup.route(&[&setup.token0.address, &setup.bridge.address]);
    setup
        .controller
        .set_harvest_path(&setup.governance, &setup.token0.address, &route);
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_harvest_path_other_source_token() {
    let setup = Setup::default();
    let route = setup.route(&[
        &setup.token0.address,
        &setup.bridge.address,
        &setup.reward.address,
    ]);
    setup
        .controller
        .set_harvest_path(&setup.governance, &setup.token1.address, &route);
}

#[test]
#[should_panic(expected = "Error(Contract, #303)")]
fn test_harvest_path_pool_not_exist() {
    let setup = Setup::default();
    let route = setup.route(&[
        &setup.token1.address,
        &setup.bridge.address,
        &setup.reward.address,
    ]);
    setup
        .controller
        .set_harvest_path(&setup.governance, &setup.token1.address, &route);
}

#[test]
#[should_panic(expected = "Error(Contract, #320)")]
fn test_harvest_path_malformed() {
    let setup = Setup::default();
    setup.controller.set_harvest_path(
        &setup.governance,
        &setup.token0.address,
        &Bytes::from_array(&setup.env, &[0u8; 10]),
    );
}
