#![cfg(test)]
extern crate std;

use crate::testutils::Setup;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN};

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_governance_third_party_user() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup.controller.set_governance(&user, &user);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_governance_by_manager() {
    let setup = Setup::default();
    setup
        .controller
        .set_governance(&setup.manager, &setup.manager);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_verified_token_third_party_user() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup
        .controller
        .set_verified_token(&user, &setup.reward.address, &true);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_harvest_path_third_party_user() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    let route = setup.route(&[
        &setup.token0.address,
        &setup.bridge.address,
        &setup.reward.address,
    ]);
    setup
        .controller
        .set_harvest_path(&user, &setup.token0.address, &route);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_max_price_impact_third_party_user() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup.controller.set_max_price_impact(&user, &200);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_max_sqrt_slippage_third_party_user() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup.controller.set_max_sqrt_slippage(&user, &9900);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_upgrade_third_party_user() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup
        .controller
        .upgrade(&user, &BytesN::from_array(&setup.env, &[1u8; 32]));
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_path_by_governance() {
    let setup = Setup::default();
    let route = setup.route(&[&setup.base.address, &setup.token0.address]);
    setup.controller.set_path(
        &setup.governance,
        &setup.fund.address,
        &setup.token0.address,
        &route,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_deposit_deadline_third_party_user() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup
        .controller
        .set_deposit_deadline(&user, &setup.fund.address, &100);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_init_third_party_user() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup.controller.init(
        &user,
        &setup.fund.address,
        &setup.position_params(-100, 100),
        &0,
        &setup.deadline(),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_add_third_party_user() {
    let setup = Setup::default();
    setup.set_fund_paths();
    setup.controller.init(
        &setup.manager,
        &setup.fund.address,
        &setup.position_params(-100, 100),
        &0,
        &setup.deadline(),
    );

    let user = Address::generate(&setup.env);
    setup.controller.add(
        &user,
        &setup.fund.address,
        &0,
        &0,
        &1000,
        &false,
        &setup.deadline(),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_sub_by_governance() {
    let setup = Setup::default();
    setup.set_fund_paths();
    setup.controller.init(
        &setup.manager,
        &setup.fund.address,
        &setup.position_params(-100, 100),
        &1000,
        &setup.deadline(),
    );

    setup.controller.sub(
        &setup.governance,
        &setup.fund.address,
        &0,
        &0,
        &500,
        &0,
        &0,
        &setup.deadline(),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_move_third_party_user() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup.controller.move_liquidity(
        &user,
        &setup.fund.address,
        &0,
        &0,
        &1,
        &500,
        &setup.deadline(),
    );
}

#[test]
fn test_harvest_is_public() {
    let setup = Setup::default();
    setup.set_harvest_path();
    setup.mint(&setup.token0, &setup.controller.address, 100);

    // no role involved; only the controller balance matters
    assert_eq!(setup.controller.harvest(&setup.token0.address, &100), 100);
}
