#![cfg(test)]
extern crate std;

use crate::testutils::Setup;
use crate::{Position, PositionParams};
use soroban_sdk::testutils::Events;
use soroban_sdk::{vec, IntoVal, Symbol};
use utils::test_utils::jump;

const FUND_BALANCE: i128 = 1_000_0000000;

#[test]
fn test_init_empty_position() {
    let setup = Setup::default();
    let e = setup.env.clone();
    let fund = setup.fund.address.clone();

    let (pool_index, position_index) = setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &0,
        &setup.deadline(),
    );
    assert_eq!((pool_index, position_index), (0, 0));

    let event = e.events().all().last().unwrap();
    let pool = setup.controller.get_fund_pools(&fund).get(0).unwrap();
    assert_eq!(
        vec![&e, event],
        vec![
            &e,
            (
                setup.controller.address.clone(),
                (Symbol::new(&e, "init_position"), fund.clone()).into_val(&e),
                (pool, 0_u32, 0_u32, 1_u64).into_val(&e),
            ),
        ]
    );
    assert_eq!(
        setup.controller.get_position(&fund, &0, &0),
        Position {
            id: 1,
            token0: setup.token0.address.clone(),
            token1: setup.token1.address.clone(),
            fee: 3000,
            tick_lower: -100,
            tick_upper: 100,
        }
    );
    assert_eq!(setup.position_service.liquidity(&1), 0);
    assert_eq!(setup.base.balance(&fund), FUND_BALANCE);
}

#[test]
fn test_init_groups_positions_by_pool() {
    let setup = Setup::default();
    let fund = setup.fund.address.clone();

    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &0,
        &setup.deadline(),
    );
    let second = setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-200, 200),
        &0,
        &setup.deadline(),
    );
    let other_pool = setup.controller.init(
        &setup.manager,
        &fund,
        &PositionParams {
            token0: setup.base.address.clone(),
            token1: setup.token0.address.clone(),
            fee: 3000,
            tick_lower: -10,
            tick_upper: 10,
        },
        &0,
        &setup.deadline(),
    );

    assert_eq!(second, (0, 1));
    assert_eq!(other_pool, (1, 0));
    assert_eq!(setup.controller.get_fund_pools(&fund).len(), 2);
    assert_eq!(setup.controller.get_positions(&fund, &0).len(), 2);
    assert_eq!(setup.controller.get_positions(&fund, &1).len(), 1);
}

#[test]
fn test_init_with_amount() {
    let setup = Setup::default();
    setup.set_fund_paths();
    let fund = setup.fund.address.clone();

    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &1000,
        &setup.deadline(),
    );

    assert_eq!(setup.position_service.liquidity(&1), 1000);
    assert_eq!(setup.base.balance(&fund), FUND_BALANCE - 1000);
    assert_eq!(setup.token0.balance(&setup.position_service.address), 500);
    assert_eq!(setup.token1.balance(&setup.position_service.address), 500);
}

#[test]
#[should_panic(expected = "Error(Contract, #305)")]
fn test_init_expired_deadline() {
    let setup = Setup::default();
    jump(&setup.env, 1000);

    setup.controller.init(
        &setup.manager,
        &setup.fund.address,
        &setup.position_params(-100, 100),
        &0,
        &999,
    );
}

#[test]
fn test_deadline_is_inclusive() {
    let setup = Setup::default();
    jump(&setup.env, 1000);

    setup.controller.init(
        &setup.manager,
        &setup.fund.address,
        &setup.position_params(-100, 100),
        &0,
        &1000,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #303)")]
fn test_init_pool_not_exist() {
    let setup = Setup::default();
    setup.controller.init(
        &setup.manager,
        &setup.fund.address,
        &PositionParams {
            token0: setup.token0.address.clone(),
            token1: setup.token1.address.clone(),
            fee: 500,
            tick_lower: -100,
            tick_upper: 100,
        },
        &0,
        &setup.deadline(),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #308)")]
fn test_init_bad_range() {
    let setup = Setup::default();
    setup.controller.init(
        &setup.manager,
        &setup.fund.address,
        &setup.position_params(100, 100),
        &0,
        &setup.deadline(),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #304)")]
fn test_init_with_amount_no_route() {
    let setup = Setup::default();
    setup.controller.init(
        &setup.manager,
        &setup.fund.address,
        &setup.position_params(-100, 100),
        &1000,
        &setup.deadline(),
    );
}

#[test]
fn test_add() {
    let setup = Setup::default();
    let e = setup.env.clone();
    setup.set_fund_paths();
    let fund = setup.fund.address.clone();
    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &0,
        &setup.deadline(),
    );
    setup.position_service.set_token0_share(&1, &2_500);

    let liquidity = setup
        .controller
        .add(&setup.manager, &fund, &0, &0, &1000, &false, &setup.deadline());
    assert_eq!(liquidity, 1000);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                setup.controller.address.clone(),
                (Symbol::new(&e, "add_liquidity"), fund.clone()).into_val(&e),
                (0_u32, 0_u32, 1000_u128, 1000_u128).into_val(&e),
            ),
        ]
    );

    assert_eq!(setup.token0.balance(&setup.position_service.address), 250);
    assert_eq!(setup.token1.balance(&setup.position_service.address), 750);
    assert_eq!(setup.base.balance(&fund), FUND_BALANCE - 1000);
    assert_eq!(setup.position_service.collect_count(&1), 0);
}

#[test]
fn test_add_base_token_position() {
    let setup = Setup::default();
    setup.set_fund_paths();
    let fund = setup.fund.address.clone();
    setup.controller.init(
        &setup.manager,
        &fund,
        &PositionParams {
            token0: setup.base.address.clone(),
            token1: setup.token0.address.clone(),
            fee: 3000,
            tick_lower: -10,
            tick_upper: 10,
        },
        &0,
        &setup.deadline(),
    );

    setup
        .controller
        .add(&setup.manager, &fund, &0, &0, &1000, &true, &setup.deadline());

    // base share goes in untouched, only token0 is bought
    let position = setup.position_service.get_position(&1);
    assert_eq!(position.reserve0, 500);
    assert_eq!(position.reserve1, 500);
    assert_eq!(setup.base.balance(&setup.position_service.address), 500);
    assert_eq!(setup.position_service.collect_count(&1), 1);
}

#[test]
#[should_panic(expected = "Error(Contract, #309)")]
fn test_add_position_not_found() {
    let setup = Setup::default();
    setup.set_fund_paths();
    setup.controller.add(
        &setup.manager,
        &setup.fund.address,
        &0,
        &0,
        &1000,
        &false,
        &setup.deadline(),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #308)")]
fn test_add_zero_amount() {
    let setup = Setup::default();
    setup.set_fund_paths();
    setup.controller.init(
        &setup.manager,
        &setup.fund.address,
        &setup.position_params(-100, 100),
        &0,
        &setup.deadline(),
    );
    setup.controller.add(
        &setup.manager,
        &setup.fund.address,
        &0,
        &0,
        &0,
        &false,
        &setup.deadline(),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #302)")]
fn test_add_token_unverified_after_path_set() {
    let setup = Setup::default();
    setup.set_fund_paths();
    setup.controller.init(
        &setup.manager,
        &setup.fund.address,
        &setup.position_params(-100, 100),
        &0,
        &setup.deadline(),
    );
    setup
        .controller
        .set_verified_token(&setup.governance, &setup.token1.address, &false);

    setup.controller.add(
        &setup.manager,
        &setup.fund.address,
        &0,
        &0,
        &1000,
        &false,
        &setup.deadline(),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #306)")]
fn test_add_price_impact_exceeded() {
    let setup = Setup::default();
    setup.set_fund_paths();
    setup.controller.init(
        &setup.manager,
        &setup.fund.address,
        &setup.position_params(-100, 100),
        &0,
        &setup.deadline(),
    );
    // 2% worse than quoted
    setup.router.set_rate(&setup.token0.address, &9_800);

    setup.controller.add(
        &setup.manager,
        &setup.fund.address,
        &0,
        &0,
        &1000,
        &false,
        &setup.deadline(),
    );
}

#[test]
fn test_add_price_impact_within_bound() {
    let setup = Setup::default();
    setup.set_fund_paths();
    setup.controller.init(
        &setup.manager,
        &setup.fund.address,
        &setup.position_params(-100, 100),
        &0,
        &setup.deadline(),
    );
    setup.router.set_rate(&setup.token0.address, &9_900);

    let liquidity = setup.controller.add(
        &setup.manager,
        &setup.fund.address,
        &0,
        &0,
        &1000,
        &false,
        &setup.deadline(),
    );
    assert_eq!(liquidity, 495 + 500);

    // tighter bound rejects the same execution
    setup
        .controller
        .set_max_price_impact(&setup.governance, &50);
    assert!(setup
        .controller
        .try_add(
            &setup.manager,
            &setup.fund.address,
            &0,
            &0,
            &1000,
            &false,
            &setup.deadline(),
        )
        .is_err());
}

#[test]
fn test_sub() {
    let setup = Setup::default();
    let e = setup.env.clone();
    setup.set_fund_paths();
    let fund = setup.fund.address.clone();
    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &1000,
        &setup.deadline(),
    );

    let base_amount = setup.controller.sub(
        &setup.manager,
        &fund,
        &0,
        &0,
        &400,
        &200,
        &200,
        &setup.deadline(),
    );
    assert_eq!(base_amount, 400);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                setup.controller.address.clone(),
                (Symbol::new(&e, "sub_liquidity"), fund.clone()).into_val(&e),
                (0_u32, 0_u32, 400_u128, 400_u128).into_val(&e),
            ),
        ]
    );

    assert_eq!(setup.position_service.liquidity(&1), 600);
    assert_eq!(setup.base.balance(&fund), FUND_BALANCE - 1000 + 400);
    assert_eq!(setup.token0.balance(&fund), 0);
    assert_eq!(setup.token1.balance(&fund), 0);
}

#[test]
fn test_sub_whole_position() {
    let setup = Setup::default();
    setup.set_fund_paths();
    let fund = setup.fund.address.clone();
    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &1000,
        &setup.deadline(),
    );

    setup
        .controller
        .sub(&setup.manager, &fund, &0, &0, &1000, &0, &0, &setup.deadline());
    assert_eq!(setup.position_service.liquidity(&1), 0);
    assert_eq!(setup.base.balance(&fund), FUND_BALANCE);
}

#[test]
#[should_panic(expected = "Error(Contract, #308)")]
fn test_sub_more_than_position() {
    let setup = Setup::default();
    setup.set_fund_paths();
    let fund = setup.fund.address.clone();
    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &1000,
        &setup.deadline(),
    );

    setup
        .controller
        .sub(&setup.manager, &fund, &0, &0, &1001, &0, &0, &setup.deadline());
}

#[test]
#[should_panic(expected = "Error(Contract, #2006)")]
fn test_sub_below_minimum() {
    let setup = Setup::default();
    setup.set_fund_paths();
    let fund = setup.fund.address.clone();
    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &1000,
        &setup.deadline(),
    );

    setup
        .controller
        .sub(&setup.manager, &fund, &0, &0, &400, &201, &0, &setup.deadline());
}

#[test]
#[should_panic(expected = "Error(Contract, #305)")]
fn test_sub_expired_deadline() {
    let setup = Setup::default();
    setup.set_fund_paths();
    let fund = setup.fund.address.clone();
    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &1000,
        &setup.deadline(),
    );
    let deadline = setup.deadline();
    jump(&setup.env, 101);

    setup
        .controller
        .sub(&setup.manager, &fund, &0, &0, &400, &0, &0, &deadline);
}

#[test]
fn test_move_liquidity() {
    let setup = Setup::default();
    let e = setup.env.clone();
    setup.set_fund_paths();
    let fund = setup.fund.address.clone();
    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &1000,
        &setup.deadline(),
    );
    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-200, 200),
        &0,
        &setup.deadline(),
    );

    let base_amount = setup.controller.move_liquidity(
        &setup.manager,
        &fund,
        &0,
        &0,
        &1,
        &600,
        &setup.deadline(),
    );
    assert_eq!(base_amount, 600);
    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                setup.controller.address.clone(),
                (Symbol::new(&e, "move_liquidity"), fund.clone()).into_val(&e),
                (0_u32, 0_u32, 1_u32, 600_u128, 600_u128).into_val(&e),
            ),
        ]
    );

    assert_eq!(setup.position_service.liquidity(&1), 400);
    assert_eq!(setup.position_service.liquidity(&2), 600);
    assert_eq!(setup.base.balance(&fund), FUND_BALANCE - 1000);
}

#[test]
fn test_move_liquidity_reverts_both_legs() {
    let setup = Setup::default();
    setup.set_fund_paths();
    let fund = setup.fund.address.clone();
    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &1000,
        &setup.deadline(),
    );
    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-200, 200),
        &0,
        &setup.deadline(),
    );
    // selling into base is fine, buying token0 back costs 10%
    setup.router.set_rate(&setup.token0.address, &9_000);

    assert!(setup
        .controller
        .try_move_liquidity(&setup.manager, &fund, &0, &0, &1, &600, &setup.deadline())
        .is_err());

    assert_eq!(setup.position_service.liquidity(&1), 1000);
    assert_eq!(setup.position_service.liquidity(&2), 0);
    assert_eq!(setup.base.balance(&fund), FUND_BALANCE - 1000);
}

#[test]
#[should_panic(expected = "Error(Contract, #308)")]
fn test_move_liquidity_same_position() {
    let setup = Setup::default();
    setup.set_fund_paths();
    let fund = setup.fund.address.clone();
    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &1000,
        &setup.deadline(),
    );

    setup
        .controller
        .move_liquidity(&setup.manager, &fund, &0, &0, &0, &500, &setup.deadline());
}

#[test]
#[should_panic(expected = "Error(Contract, #309)")]
fn test_move_liquidity_missing_destination() {
    let setup = Setup::default();
    setup.set_fund_paths();
    let fund = setup.fund.address.clone();
    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &1000,
        &setup.deadline(),
    );

    setup
        .controller
        .move_liquidity(&setup.manager, &fund, &0, &0, &1, &500, &setup.deadline());
}

#[test]
fn test_lifecycle_with_root_auth_only() {
    let setup = Setup::default();
    setup.set_fund_paths();
    let fund = setup.fund.address.clone();

    // only the manager's own signature is mocked, the fund has to authorize its own transfers
    setup.env.mock_all_auths();

    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-100, 100),
        &1000,
        &setup.deadline(),
    );
    setup.controller.init(
        &setup.manager,
        &fund,
        &setup.position_params(-200, 200),
        &0,
        &setup.deadline(),
    );
    setup
        .controller
        .add(&setup.manager, &fund, &0, &0, &1000, &true, &setup.deadline());
    setup.controller.sub(
        &setup.manager,
        &fund,
        &0,
        &0,
        &500,
        &0,
        &0,
        &setup.deadline(),
    );
    setup.controller.move_liquidity(
        &setup.manager,
        &fund,
        &0,
        &0,
        &1,
        &500,
        &setup.deadline(),
    );
    setup
        .controller
        .set_deposit_deadline(&setup.manager, &fund, &1_700_000_000);

    assert_eq!(setup.position_service.liquidity(&1), 1000);
    assert_eq!(setup.position_service.liquidity(&2), 500);
    assert_eq!(setup.position_service.collect_count(&1), 1);
    assert_eq!(setup.base.balance(&fund), FUND_BALANCE - 1500);
    assert_eq!(setup.fund.get_deadline(), 1_700_000_000);
}

#[test]
fn test_fund_rejects_other_callers() {
    let setup = Setup::default();
    setup.set_fund_paths();

    // no signatures at all: only the controller as direct invoker can pass
    setup.env.set_auths(&[]);
    assert!(setup
        .fund
        .try_swap(
            &setup.router.address,
            &setup.route(&[&setup.base.address, &setup.token0.address]),
            &1000,
        )
        .is_err());
    assert!(setup.fund.try_set_deadline(&100).is_err());
    assert_eq!(setup.base.balance(&setup.fund.address), FUND_BALANCE);
}
