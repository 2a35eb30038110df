#![cfg(test)]
extern crate std;

use crate::testutils::Setup;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, IntoVal, Symbol};

#[test]
fn test_constructor() {
    let setup = Setup::default();
    let controller = setup.controller;

    assert_eq!(controller.get_governance(), setup.governance);
    assert_eq!(controller.get_pool_factory(), setup.pool_factory.address);
    assert_eq!(controller.get_swap_router(), setup.router.address);
    assert_eq!(controller.get_quoter(), setup.quoter.address);
    assert_eq!(
        controller.get_position_service(),
        setup.position_service.address
    );
    assert_eq!(controller.get_reward_token(), setup.reward.address);
    assert_eq!(controller.get_bridge_token(), setup.bridge.address);
    assert_eq!(controller.get_max_price_impact(), 100);
    assert_eq!(controller.get_max_sqrt_slippage(), 9974);
    assert_eq!(controller.version(), 100);
}

#[test]
fn test_set_governance() {
    let setup = Setup::default();
    let e = setup.env;
    let controller = setup.controller;
    let new_governance = Address::generate(&e);

    controller.set_governance(&setup.governance, &new_governance);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                controller.address.clone(),
                (Symbol::new(&e, "set_governance"),).into_val(&e),
                (new_governance.clone(),).into_val(&e),
            ),
        ]
    );
    assert_eq!(controller.get_governance(), new_governance);

    // new governance is effective immediately, previous one is not
    controller.set_max_price_impact(&new_governance, &200);
    assert!(controller
        .try_set_max_price_impact(&setup.governance, &300)
        .is_err());
    assert_eq!(controller.get_max_price_impact(), 200);
}

#[test]
fn test_set_verified_token() {
    let setup = Setup::default();
    let e = setup.env;
    let controller = setup.controller;
    let token = Address::generate(&e);

    assert!(!controller.get_verified_token(&token));

    controller.set_verified_token(&setup.governance, &token, &true);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                controller.address.clone(),
                (Symbol::new(&e, "change_verified_token"), token.clone()).into_val(&e),
                (true,).into_val(&e),
            ),
        ]
    );
    assert!(controller.get_verified_token(&token));

    // same value again still emits
    controller.set_verified_token(&setup.governance, &token, &true);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                controller.address.clone(),
                (Symbol::new(&e, "change_verified_token"), token.clone()).into_val(&e),
                (true,).into_val(&e),
            ),
        ]
    );

    controller.set_verified_token(&setup.governance, &token, &false);
    assert!(!controller.get_verified_token(&token));
}

#[test]
fn test_set_max_price_impact() {
    let setup = Setup::default();
    let e = setup.env;
    let controller = setup.controller;

    controller.set_max_price_impact(&setup.governance, &10_000);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                controller.address.clone(),
                (Symbol::new(&e, "set_max_price_impact"),).into_val(&e),
                (10_000_u32,).into_val(&e),
            ),
        ]
    );
    assert_eq!(controller.get_max_price_impact(), 10_000);

    controller.set_max_price_impact(&setup.governance, &0);
    assert_eq!(controller.get_max_price_impact(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #308)")]
fn test_set_max_price_impact_out_of_range() {
    let setup = Setup::default();
    setup
        .controller
        .set_max_price_impact(&setup.governance, &10_001);
}

#[test]
fn test_set_max_sqrt_slippage() {
    let setup = Setup::default();
    let e = setup.env;
    let controller = setup.controller;

    controller.set_max_sqrt_slippage(&setup.governance, &9970);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                controller.address.clone(),
                (Symbol::new(&e, "set_max_sqrt_slippage"),).into_val(&e),
                (9970_u32,).into_val(&e),
            ),
        ]
    );
    assert_eq!(controller.get_max_sqrt_slippage(), 9970);
}

#[test]
#[should_panic(expected = "Error(Contract, #308)")]
fn test_set_max_sqrt_slippage_out_of_range() {
    let setup = Setup::default();
    setup
        .controller
        .set_max_sqrt_slippage(&setup.governance, &10_001);
}

#[test]
fn test_set_deposit_deadline() {
    let setup = Setup::default();
    let e = setup.env;
    let controller = setup.controller;

    controller.set_deposit_deadline(&setup.manager, &setup.fund.address, &1_700_000_000);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                controller.address.clone(),
                (
                    Symbol::new(&e, "set_deposit_deadline"),
                    setup.fund.address.clone()
                )
                    .into_val(&e),
                (1_700_000_000_u64,).into_val(&e),
            ),
        ]
    );
    assert_eq!(setup.fund.get_deadline(), 1_700_000_000);
}
