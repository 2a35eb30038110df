use crate::access_utils::{require_deadline, require_manager};
use crate::errors::FundControllerError;
use crate::events::{Events, FundEvents};
use crate::external::{FundClient, PoolFactoryClient, PositionServiceClient, QuoterClient};
use crate::guard::check_price_impact;
use crate::route_validator::{decode_route, require_verified, reverse_route, validate_fund_route};
use crate::storage::{
    get_buy_path, get_fund_pools, get_pool_factory, get_position_service, get_positions,
    get_quoter, get_sell_path, get_swap_router, set_buy_path, set_fund_pools, set_positions,
    set_sell_path, Position, PositionParams,
};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Address, Bytes, Env};
use utils::constant::BPS_DENOMINATOR;

// Conversion routes for both position tokens. None where the token is the fund base.
struct Routes {
    route0: Option<Bytes>,
    route1: Option<Bytes>,
}

pub(crate) fn load_position(
    e: &Env,
    fund: &Address,
    pool_index: u32,
    position_index: u32,
) -> Position {
    match get_positions(e, fund, pool_index).get(position_index) {
        Some(position) => position,
        None => panic_with_error!(e, FundControllerError::PositionNotFound),
    }
}

fn stored_route(e: &Env, route: Option<Bytes>) -> Bytes {
    let route = match route {
        Some(v) => v,
        None => panic_with_error!(e, FundControllerError::NoRoute),
    };
    // allow-list may have changed since the route was set
    require_verified(e, &decode_route(e, &route));
    route
}

fn buy_routes(e: &Env, fund: &Address, base: &Address, position: &Position) -> Routes {
    let route_for = |token: &Address| match token == base {
        true => None,
        false => Some(stored_route(e, get_buy_path(e, fund, token))),
    };
    Routes {
        route0: route_for(&position.token0),
        route1: route_for(&position.token1),
    }
}

fn sell_routes(e: &Env, fund: &Address, base: &Address, position: &Position) -> Routes {
    let route_for = |token: &Address| match token == base {
        true => None,
        false => Some(stored_route(e, get_sell_path(e, fund, token))),
    };
    Routes {
        route0: route_for(&position.token0),
        route1: route_for(&position.token1),
    }
}

// Swap executed by the fund itself, bounded by the price impact guard.
fn swap_guarded(e: &Env, fund: &Address, route: &Option<Bytes>, amount_in: u128) -> u128 {
    let path = match route {
        Some(path) => path,
        None => return amount_in,
    };
    if amount_in == 0 {
        return 0;
    }

    let ideal_out = QuoterClient::new(e, &get_quoter(e)).quote_exact_input(path, &amount_in);
    let amount_out = FundClient::new(e, fund).swap(&get_swap_router(e), path, &amount_in);
    check_price_impact(e, ideal_out, amount_out);
    amount_out
}

// Splits `amount` of base between the position tokens and deposits it.
fn provide(e: &Env, fund: &Address, position: &Position, routes: &Routes, amount: u128) -> u128 {
    let service = PositionServiceClient::new(e, &get_position_service(e));
    let token0_share = service.token0_share(&position.id);
    if token0_share > BPS_DENOMINATOR {
        panic_with_error!(e, FundControllerError::InvalidParameter);
    }

    let amount_for_token0 =
        amount.fixed_mul_floor(e, &(token0_share as u128), &(BPS_DENOMINATOR as u128));
    let amount_for_token1 = amount - amount_for_token0;

    let amount0 = swap_guarded(e, fund, &routes.route0, amount_for_token0);
    let amount1 = swap_guarded(e, fund, &routes.route1, amount_for_token1);
    FundClient::new(e, fund).increase_liquidity(
        &service.address,
        &position.id,
        &position.token0,
        &position.token1,
        &amount0,
        &amount1,
    )
}

// Decreases the position and converts the proceeds into base.
fn withdraw(
    e: &Env,
    fund: &Address,
    position: &Position,
    routes: &Routes,
    liquidity: u128,
    amount0_min: u128,
    amount1_min: u128,
) -> u128 {
    let (amount0, amount1) = FundClient::new(e, fund).decrease_liquidity(
        &get_position_service(e),
        &position.id,
        &liquidity,
        &amount0_min,
        &amount1_min,
    );
    if amount0 < amount0_min || amount1 < amount1_min {
        panic_with_error!(e, FundControllerError::OutMinNotSatisfied);
    }

    swap_guarded(e, fund, &routes.route0, amount0) + swap_guarded(e, fund, &routes.route1, amount1)
}

fn require_withdrawable(e: &Env, position: &Position, liquidity: u128) {
    let available = PositionServiceClient::new(e, &get_position_service(e)).liquidity(&position.id);
    if liquidity == 0 || liquidity > available {
        panic_with_error!(e, FundControllerError::InvalidParameter);
    }
}

// set_path
// Registers the routes a fund uses to buy and sell `token`.
// The route may be given in either direction; the opposite one is derived by reversing it.
//
// Arguments:
//   - e: The Soroban environment.
//   - caller: Fund manager.
//   - fund: The fund contract.
//   - token: Token the fund trades against its base.
//   - route: Encoded path, base -> token or token -> base.
pub(crate) fn set_path(e: &Env, caller: &Address, fund: &Address, token: &Address, route: &Bytes) {
    require_manager(e, caller, fund);

    let base = FundClient::new(e, fund).token();
    if *token == base {
        panic_with_error!(e, FundControllerError::InvalidPath);
    }

    let starts_at_base = decode_route(e, route)
        .first()
        .map(|hop| hop.token_in == base)
        .unwrap_or(false);
    let (buy_route, sell_route) = match starts_at_base {
        true => (route.clone(), reverse_route(e, route)),
        false => (reverse_route(e, route), route.clone()),
    };

    validate_fund_route(e, &buy_route, &base, token);
    validate_fund_route(e, &sell_route, token, &base);

    set_buy_path(e, fund, token, &buy_route);
    set_sell_path(e, fund, token, &sell_route);
    Events::new(e).set_path(fund.clone(), token.clone(), route.clone());
}

pub(crate) fn set_deposit_deadline(e: &Env, caller: &Address, fund: &Address, deadline: u64) {
    require_manager(e, caller, fund);
    FundClient::new(e, fund).set_deadline(&deadline);
    Events::new(e).set_deposit_deadline(fund.clone(), deadline);
}

// init
// Mints a new position for the fund and optionally funds it with `amount` of base.
//
// Returns:
//   - (pool_index, position_index) the position is registered under.
pub(crate) fn init(
    e: &Env,
    caller: &Address,
    fund: &Address,
    params: &PositionParams,
    amount: u128,
    deadline: u64,
) -> (u32, u32) {
    require_manager(e, caller, fund);
    require_deadline(e, deadline);

    if params.token0 == params.token1 || params.tick_lower >= params.tick_upper {
        panic_with_error!(e, FundControllerError::InvalidParameter);
    }
    let pool = match PoolFactoryClient::new(e, &get_pool_factory(e)).get_pool(
        &params.token0,
        &params.token1,
        &params.fee,
    ) {
        Some(v) => v,
        None => panic_with_error!(e, FundControllerError::PoolNotFound),
    };

    let base = FundClient::new(e, fund).token();
    let mut position = Position {
        id: 0,
        token0: params.token0.clone(),
        token1: params.token1.clone(),
        fee: params.fee,
        tick_lower: params.tick_lower,
        tick_upper: params.tick_upper,
    };
    let routes = match amount > 0 {
        true => Some(buy_routes(e, fund, &base, &position)),
        false => None,
    };

    position.id = PositionServiceClient::new(e, &get_position_service(e)).mint(
        fund,
        &params.token0,
        &params.token1,
        &params.fee,
        &params.tick_lower,
        &params.tick_upper,
    );

    let mut pools = get_fund_pools(e, fund);
    let pool_index = match pools.first_index_of(&pool) {
        Some(index) => index,
        None => {
            pools.push_back(pool.clone());
            set_fund_pools(e, fund, &pools);
            pools.len() - 1
        }
    };
    let mut positions = get_positions(e, fund, pool_index);
    positions.push_back(position.clone());
    set_positions(e, fund, pool_index, &positions);
    let position_index = positions.len() - 1;

    Events::new(e).init_position(fund.clone(), pool, pool_index, position_index, position.id);

    if let Some(routes) = routes {
        let liquidity = provide(e, fund, &position, &routes, amount);
        Events::new(e).add_liquidity(fund.clone(), pool_index, position_index, amount, liquidity);
    }
    (pool_index, position_index)
}

pub(crate) fn add(
    e: &Env,
    caller: &Address,
    fund: &Address,
    pool_index: u32,
    position_index: u32,
    amount: u128,
    collect: bool,
    deadline: u64,
) -> u128 {
    require_manager(e, caller, fund);
    require_deadline(e, deadline);

    if amount == 0 {
        panic_with_error!(e, FundControllerError::InvalidParameter);
    }
    let position = load_position(e, fund, pool_index, position_index);
    let base = FundClient::new(e, fund).token();
    let routes = buy_routes(e, fund, &base, &position);

    if collect {
        FundClient::new(e, fund).collect_fees(&get_position_service(e), &position.id);
    }

    let liquidity = provide(e, fund, &position, &routes, amount);
    Events::new(e).add_liquidity(fund.clone(), pool_index, position_index, amount, liquidity);
    liquidity
}

pub(crate) fn sub(
    e: &Env,
    caller: &Address,
    fund: &Address,
    pool_index: u32,
    position_index: u32,
    liquidity: u128,
    amount0_min: u128,
    amount1_min: u128,
    deadline: u64,
) -> u128 {
    require_manager(e, caller, fund);
    require_deadline(e, deadline);

    let position = load_position(e, fund, pool_index, position_index);
    require_withdrawable(e, &position, liquidity);
    let base = FundClient::new(e, fund).token();
    let routes = sell_routes(e, fund, &base, &position);

    let base_amount = withdraw(
        e,
        fund,
        &position,
        &routes,
        liquidity,
        amount0_min,
        amount1_min,
    );
    Events::new(e).sub_liquidity(
        fund.clone(),
        pool_index,
        position_index,
        liquidity,
        base_amount,
    );
    base_amount
}

// move_liquidity
// Takes liquidity out of one position and puts the proceeds into another one of the same pool.
// A guard failure on either leg reverts both.
pub(crate) fn move_liquidity(
    e: &Env,
    caller: &Address,
    fund: &Address,
    pool_index: u32,
    sub_index: u32,
    add_index: u32,
    liquidity: u128,
    deadline: u64,
) -> u128 {
    require_manager(e, caller, fund);
    require_deadline(e, deadline);

    if sub_index == add_index {
        panic_with_error!(e, FundControllerError::InvalidParameter);
    }
    let source = load_position(e, fund, pool_index, sub_index);
    let destination = load_position(e, fund, pool_index, add_index);
    require_withdrawable(e, &source, liquidity);

    let base = FundClient::new(e, fund).token();
    let sell = sell_routes(e, fund, &base, &source);
    let buy = buy_routes(e, fund, &base, &destination);

    let base_amount = withdraw(e, fund, &source, &sell, liquidity, 0, 0);
    if base_amount > 0 {
        provide(e, fund, &destination, &buy, base_amount);
    }
    Events::new(e).move_liquidity(
        fund.clone(),
        pool_index,
        sub_index,
        add_index,
        liquidity,
        base_amount,
    );
    base_amount
}
