use crate::storage::PositionParams;
use crate::{governance, harvest, lifecycle};
use soroban_sdk::{contracttype, Address, Bytes, Env, Vec};

// One controller operation inside a batch. Arguments follow the matching entry point, minus the caller.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    SetGovernance(Address),
    SetVerifiedToken(Address, bool),
    SetHarvestPath(Address, Bytes),
    SetMaxPriceImpact(u32),
    SetMaxSqrtSlippage(u32),
    // fund, token, route
    SetPath(Address, Address, Bytes),
    // fund, deadline
    SetDepositDeadline(Address, u64),
    // fund, params, amount, deadline
    Init(Address, PositionParams, u128, u64),
    // fund, pool index, position index, amount, collect, deadline
    Add(Address, u32, u32, u128, bool, u64),
    // fund, pool index, position index, liquidity, amount0 min, amount1 min, deadline
    Sub(Address, u32, u32, u128, u128, u128, u64),
    // fund, pool index, sub index, add index, liquidity, deadline
    Move(Address, u32, u32, u32, u128, u64),
    // token, amount
    Harvest(Address, u128),
}

// Runs every call in order for an already authenticated caller.
pub(crate) fn dispatch(e: &Env, caller: &Address, calls: &Vec<Call>) {
    for call in calls.iter() {
        match call {
            Call::SetGovernance(new_governance) => {
                governance::set_governance(e, caller, &new_governance)
            }
            Call::SetVerifiedToken(token, is_verified) => {
                governance::change_verified_token(e, caller, &token, is_verified)
            }
            Call::SetHarvestPath(token, route) => {
                harvest::set_harvest_path(e, caller, &token, &route)
            }
            Call::SetMaxPriceImpact(value) => governance::change_max_price_impact(e, caller, value),
            Call::SetMaxSqrtSlippage(value) => {
                governance::change_max_sqrt_slippage(e, caller, value)
            }
            Call::SetPath(fund, token, route) => {
                lifecycle::set_path(e, caller, &fund, &token, &route)
            }
            Call::SetDepositDeadline(fund, deadline) => {
                lifecycle::set_deposit_deadline(e, caller, &fund, deadline)
            }
            Call::Init(fund, params, amount, deadline) => {
                lifecycle::init(e, caller, &fund, &params, amount, deadline);
            }
            Call::Add(fund, pool_index, position_index, amount, collect, deadline) => {
                lifecycle::add(
                    e,
                    caller,
                    &fund,
                    pool_index,
                    position_index,
                    amount,
                    collect,
                    deadline,
                );
            }
            Call::Sub(fund, pool_index, position_index, liquidity, min0, min1, deadline) => {
                lifecycle::sub(
                    e,
                    caller,
                    &fund,
                    pool_index,
                    position_index,
                    liquidity,
                    min0,
                    min1,
                    deadline,
                );
            }
            Call::Move(fund, pool_index, sub_index, add_index, liquidity, deadline) => {
                lifecycle::move_liquidity(
                    e,
                    caller,
                    &fund,
                    pool_index,
                    sub_index,
                    add_index,
                    liquidity,
                    deadline,
                );
            }
            Call::Harvest(token, amount) => {
                harvest::harvest(e, &token, amount);
            }
        }
    }
}
