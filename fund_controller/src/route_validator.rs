use crate::errors::FundControllerError;
use crate::external::PoolFactoryClient;
use crate::storage::{get_bridge_token, get_pool_factory, get_reward_token, get_verified_token};
use soroban_sdk::{panic_with_error, Address, Bytes, Env, Vec};
use swap_path::SwapHop;

pub(crate) fn decode_route(e: &Env, route: &Bytes) -> Vec<SwapHop> {
    match swap_path::decode(e, route) {
        Ok(hops) => hops,
        Err(err) => panic_with_error!(e, err),
    }
}

pub(crate) fn reverse_route(e: &Env, route: &Bytes) -> Bytes {
    match swap_path::reverse(e, route) {
        Ok(reversed) => reversed,
        Err(err) => panic_with_error!(e, err),
    }
}

fn require_endpoints(e: &Env, hops: &Vec<SwapHop>, token_in: &Address, token_out: &Address) {
    let (first, last) = match (hops.first(), hops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => panic_with_error!(e, FundControllerError::InvalidPath),
    };
    if first.token_in != *token_in || last.token_out != *token_out {
        panic_with_error!(e, FundControllerError::InvalidPath);
    }
}

// Every token the route touches, endpoints included, must be on the allow-list.
pub(crate) fn require_verified(e: &Env, hops: &Vec<SwapHop>) {
    for (i, hop) in hops.iter().enumerate() {
        if i == 0 && !get_verified_token(e, &hop.token_in) {
            panic_with_error!(e, FundControllerError::UnverifiedToken);
        }
        if !get_verified_token(e, &hop.token_out) {
            panic_with_error!(e, FundControllerError::UnverifiedToken);
        }
    }
}

pub(crate) fn require_pools_exist(e: &Env, hops: &Vec<SwapHop>) {
    let factory = PoolFactoryClient::new(e, &get_pool_factory(e));
    for hop in hops.iter() {
        if factory
            .get_pool(&hop.token_in, &hop.token_out, &hop.fee)
            .is_none()
        {
            panic_with_error!(e, FundControllerError::PoolNotFound);
        }
    }
}

// validate_fund_route
// Checks a route the fund swaps through: base -> token (buy) or token -> base (sell).
//
// Arguments:
//   - e: The Soroban environment.
//   - route: Encoded path.
//   - token_in: Expected input of the first hop.
//   - token_out: Expected output of the last hop.
pub(crate) fn validate_fund_route(
    e: &Env,
    route: &Bytes,
    token_in: &Address,
    token_out: &Address,
) -> Vec<SwapHop> {
    let hops = decode_route(e, route);
    require_endpoints(e, &hops, token_in, token_out);
    require_verified(e, &hops);
    require_pools_exist(e, &hops);
    hops
}

// validate_harvest_route
// Checks a route converting `token` into the reward token. The last hop has to be bridge -> reward.
//
// Arguments:
//   - e: The Soroban environment.
//   - route: Encoded path.
//   - token: Token the route sells.
pub(crate) fn validate_harvest_route(e: &Env, route: &Bytes, token: &Address) -> Vec<SwapHop> {
    let hops = decode_route(e, route);
    require_endpoints(e, &hops, token, &get_reward_token(e));

    let last = match hops.last() {
        Some(v) => v,
        None => panic_with_error!(e, FundControllerError::InvalidPath),
    };
    if last.token_in != get_bridge_token(e) {
        panic_with_error!(e, FundControllerError::InvalidPath);
    }

    require_pools_exist(e, &hops);
    hops
}
