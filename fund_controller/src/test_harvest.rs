#![cfg(test)]
extern crate std;

use crate::testutils::Setup;
use soroban_sdk::testutils::Events;
use soroban_sdk::{vec, IntoVal, Symbol, TryFromVal};

#[test]
fn test_harvest() {
    let setup = Setup::default();
    let e = setup.env.clone();
    setup.set_harvest_path();
    setup.mint(&setup.token0, &setup.controller.address, 100_0000000);
    let router_reward_before = setup.reward.balance(&setup.router.address);

    let burned = setup
        .controller
        .harvest(&setup.token0.address, &100_0000000);
    assert_eq!(burned, 100_0000000);

    let events = e.events().all();
    assert_eq!(
        vec![&e, events.last().unwrap()],
        vec![
            &e,
            (
                setup.controller.address.clone(),
                (Symbol::new(&e, "harvest"), setup.token0.address.clone()).into_val(&e),
                (100_0000000_u128, 100_0000000_u128).into_val(&e),
            ),
        ]
    );
    let burn_events = events
        .iter()
        .filter(|(contract, topics, _)| {
            *contract == setup.reward.address
                && Symbol::try_from_val(&e, &topics.get(0).unwrap())
                    .map(|name| name == Symbol::new(&e, "burn"))
                    .unwrap_or(false)
        })
        .count();
    assert_eq!(burn_events, 1);

    assert_eq!(setup.token0.balance(&setup.controller.address), 0);
    assert_eq!(setup.reward.balance(&setup.controller.address), 0);
    assert_eq!(
        setup.reward.balance(&setup.router.address),
        router_reward_before - 100_0000000
    );
}

#[test]
fn test_harvest_part_of_balance() {
    let setup = Setup::default();
    setup.set_harvest_path();
    setup.mint(&setup.token0, &setup.controller.address, 100);

    setup.controller.harvest(&setup.token0.address, &40);
    assert_eq!(setup.token0.balance(&setup.controller.address), 60);
    assert_eq!(setup.reward.balance(&setup.controller.address), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #2019)")]
fn test_harvest_more_than_balance() {
    let setup = Setup::default();
    setup.set_harvest_path();
    setup.mint(&setup.token0, &setup.controller.address, 100);

    setup.controller.harvest(&setup.token0.address, &101);
}

#[test]
#[should_panic(expected = "Error(Contract, #308)")]
fn test_harvest_zero_amount() {
    let setup = Setup::default();
    setup.set_harvest_path();

    setup.controller.harvest(&setup.token0.address, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #304)")]
fn test_harvest_no_route() {
    let setup = Setup::default();
    setup.mint(&setup.token1, &setup.controller.address, 100);

    setup.controller.harvest(&setup.token1.address, &100);
}

#[test]
#[should_panic(expected = "Error(Contract, #307)")]
fn test_harvest_half_of_quote() {
    let setup = Setup::default();
    setup.set_harvest_path();
    setup.mint(&setup.token0, &setup.controller.address, 100_0000000);
    setup.router.set_rate(&setup.reward.address, &5_000);

    setup
        .controller
        .harvest(&setup.token0.address, &100_0000000);
}

#[test]
fn test_harvest_close_to_quote() {
    let setup = Setup::default();
    setup.set_harvest_path();
    setup.mint(&setup.token0, &setup.controller.address, 100_0000000);
    setup.router.set_rate(&setup.reward.address, &9_980);

    assert_eq!(
        setup
            .controller
            .harvest(&setup.token0.address, &100_0000000),
        99_8000000
    );
}

#[test]
fn test_harvest_slippage_boundary() {
    let setup = Setup::default();
    setup.set_harvest_path();
    setup.mint(&setup.token0, &setup.controller.address, 200_0000000);

    // 9974^2 / 10^8 = 0.99480676, so 99.48% fails and 99.49% passes
    setup.router.set_rate(&setup.reward.address, &9_948);
    assert!(setup
        .controller
        .try_harvest(&setup.token0.address, &100_0000000)
        .is_err());

    setup.router.set_rate(&setup.reward.address, &9_949);
    assert_eq!(
        setup
            .controller
            .harvest(&setup.token0.address, &100_0000000),
        99_4900000
    );
}

#[test]
fn test_harvest_custom_sqrt_slippage() {
    let setup = Setup::default();
    setup.set_harvest_path();
    setup.mint(&setup.token0, &setup.controller.address, 200_0000000);
    setup
        .controller
        .set_max_sqrt_slippage(&setup.governance, &9_970);

    setup.router.set_rate(&setup.reward.address, &5_000);
    assert!(setup
        .controller
        .try_harvest(&setup.token0.address, &100_0000000)
        .is_err());

    setup.router.set_rate(&setup.reward.address, &9_980);
    setup
        .controller
        .harvest(&setup.token0.address, &100_0000000);
    assert_eq!(setup.token0.balance(&setup.controller.address), 100_0000000);
}

#[test]
fn test_harvest_failure_keeps_balance() {
    let setup = Setup::default();
    setup.set_harvest_path();
    setup.mint(&setup.token0, &setup.controller.address, 100);
    setup.router.set_rate(&setup.reward.address, &5_000);

    assert!(setup
        .controller
        .try_harvest(&setup.token0.address, &100)
        .is_err());
    assert_eq!(setup.token0.balance(&setup.controller.address), 100);
    assert_eq!(setup.reward.balance(&setup.controller.address), 0);
}

#[test]
fn test_harvest_reentry_rejected() {
    let setup = Setup::default();
    setup.set_harvest_path();
    setup.mint(&setup.token0, &setup.controller.address, 100);
    setup
        .router
        .set_reentry_target(&setup.controller.address);

    assert!(setup
        .controller
        .try_harvest(&setup.token0.address, &100)
        .is_err());
    assert_eq!(setup.token0.balance(&setup.controller.address), 100);
}
