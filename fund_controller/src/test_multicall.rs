#![cfg(test)]
extern crate std;

use crate::testutils::Setup;
use crate::Call;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address};

#[test]
fn test_multicall_governance() {
    let setup = Setup::default();
    let e = &setup.env;
    let token = Address::generate(e);

    setup.controller.multicall(
        &setup.governance,
        &vec![
            e,
            Call::SetVerifiedToken(token.clone(), true),
            Call::SetMaxPriceImpact(250),
            Call::SetMaxSqrtSlippage(9_900),
        ],
    );

    assert!(setup.controller.get_verified_token(&token));
    assert_eq!(setup.controller.get_max_price_impact(), 250);
    assert_eq!(setup.controller.get_max_sqrt_slippage(), 9_900);
}

#[test]
fn test_multicall_rollback() {
    let setup = Setup::default();
    let e = &setup.env;
    let token = Address::generate(e);

    assert!(setup
        .controller
        .try_multicall(
            &setup.governance,
            &vec![
                e,
                Call::SetVerifiedToken(token.clone(), true),
                Call::SetMaxPriceImpact(10_001),
            ],
        )
        .is_err());

    assert!(!setup.controller.get_verified_token(&token));
    assert_eq!(setup.controller.get_max_price_impact(), 100);
}

#[test]
fn test_multicall_manager_flow() {
    let setup = Setup::default();
    let e = &setup.env;
    let fund = setup.fund.address.clone();

    setup.controller.multicall(
        &setup.manager,
        &vec![
            e,
            Call::SetPath(
                fund.clone(),
                setup.token0.address.clone(),
                setup.route(&[&setup.base.address, &setup.token0.address]),
            ),
            Call::SetPath(
                fund.clone(),
                setup.token1.address.clone(),
                setup.route(&[&setup.base.address, &setup.token1.address]),
            ),
            Call::Init(
                fund.clone(),
                setup.position_params(-100, 100),
                0,
                setup.deadline(),
            ),
            Call::Add(fund.clone(), 0, 0, 1000, false, setup.deadline()),
            Call::Sub(fund.clone(), 0, 0, 200, 0, 0, setup.deadline()),
            Call::SetDepositDeadline(fund.clone(), 5_000),
        ],
    );

    assert_eq!(setup.position_service.liquidity(&1), 800);
    assert_eq!(setup.fund.get_deadline(), 5_000);
}

#[test]
fn test_multicall_move_and_harvest() {
    let setup = Setup::default();
    let e = &setup.env;
    let fund = setup.fund.address.clone();
    setup.set_fund_paths();
    setup.set_harvest_path();
    setup.mint(&setup.token0, &setup.controller.address, 100);

    setup.controller.multicall(
        &setup.manager,
        &vec![
            e,
            Call::Init(
                fund.clone(),
                setup.position_params(-100, 100),
                1000,
                setup.deadline(),
            ),
            Call::Init(
                fund.clone(),
                setup.position_params(-200, 200),
                0,
                setup.deadline(),
            ),
            Call::Move(fund.clone(), 0, 0, 1, 1000, setup.deadline()),
            Call::Harvest(setup.token0.address.clone(), 100),
        ],
    );

    assert_eq!(setup.position_service.liquidity(&1), 0);
    assert_eq!(setup.position_service.liquidity(&2), 1000);
    assert_eq!(setup.token0.balance(&setup.controller.address), 0);
}

#[test]
fn test_multicall_checks_every_call() {
    let setup = Setup::default();
    let e = &setup.env;
    let fund = setup.fund.address.clone();

    // manager may set paths but not governance parameters
    assert!(setup
        .controller
        .try_multicall(
            &setup.manager,
            &vec![
                e,
                Call::SetPath(
                    fund.clone(),
                    setup.token0.address.clone(),
                    setup.route(&[&setup.base.address, &setup.token0.address]),
                ),
                Call::SetMaxPriceImpact(500),
            ],
        )
        .is_err());

    assert_eq!(
        setup
            .controller
            .get_buy_path(&fund, &setup.token0.address),
        None
    );
    assert_eq!(setup.controller.get_max_price_impact(), 100);
}

#[test]
fn test_multicall_governance_transfer_applies_to_later_calls() {
    let setup = Setup::default();
    let e = &setup.env;
    let new_governance = Address::generate(e);

    assert!(setup
        .controller
        .try_multicall(
            &setup.governance,
            &vec![
                e,
                Call::SetGovernance(new_governance.clone()),
                Call::SetMaxPriceImpact(500),
            ],
        )
        .is_err());
    assert_eq!(setup.controller.get_governance(), setup.governance);
}

#[test]
fn test_multicall_empty() {
    let setup = Setup::default();
    setup
        .controller
        .multicall(&setup.governance, &vec![&setup.env]);
}
