use crate::errors::FundControllerError;
use crate::storage::{get_max_price_impact, get_max_sqrt_slippage};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{log, panic_with_error, Env};
use utils::constant::BPS_DENOMINATOR;

pub(crate) fn require_bps(e: &Env, value: u32) {
    if value > BPS_DENOMINATOR {
        panic_with_error!(e, FundControllerError::InvalidParameter);
    }
}

// Deviation of the executed output from the quoted one, rounded up.
pub(crate) fn price_impact(e: &Env, ideal_out: u128, actual_out: u128) -> u128 {
    ideal_out
        .abs_diff(actual_out)
        .fixed_mul_ceil(e, &(BPS_DENOMINATOR as u128), &ideal_out)
}

pub(crate) fn check_price_impact(e: &Env, ideal_out: u128, actual_out: u128) {
    let max_price_impact = get_max_price_impact(e);
    log!(e, "price impact check", ideal_out, actual_out, max_price_impact);

    // no reference price, nothing to bound against
    if ideal_out == 0 {
        panic_with_error!(e, FundControllerError::PriceImpactExceeded);
    }
    if price_impact(e, ideal_out, actual_out) > max_price_impact as u128 {
        panic_with_error!(e, FundControllerError::PriceImpactExceeded);
    }
}

// Least acceptable output: quote scaled by the squared sqrt-price ratio.
pub(crate) fn min_amount_out(e: &Env, ideal_out: u128) -> u128 {
    let sqrt_slippage = get_max_sqrt_slippage(e) as u128;
    let denominator = BPS_DENOMINATOR as u128;
    ideal_out.fixed_mul_ceil(e, &(sqrt_slippage * sqrt_slippage), &(denominator * denominator))
}

pub(crate) fn check_slippage(e: &Env, ideal_out: u128, actual_out: u128) {
    let min_out = min_amount_out(e, ideal_out);
    log!(e, "slippage check", ideal_out, actual_out, min_out);

    if actual_out < min_out {
        panic_with_error!(e, FundControllerError::SlippageExceeded);
    }
}
