use crate::constants::{DEFAULT_MAX_PRICE_IMPACT, DEFAULT_MAX_SQRT_SLIPPAGE};
use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Bytes, Env, Vec};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_setter,
    generate_persistent_storage_getter_and_setter_with_default,
    generate_persistent_storage_getter_with_default, generate_persistent_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    PoolFactory,     // resolves (token_a, token_b, fee) into a pool
    SwapRouter,      // executes multi-hop swaps
    Quoter,          // reference output for a path
    PositionService, // mints and manages concentrated liquidity positions
    RewardToken,     // harvest output, burned on arrival
    BridgeToken,     // input of the mandatory last harvest hop

    MaxPriceImpact,  // bps
    MaxSqrtSlippage, // bps of sqrt price

    VerifiedToken(Address),
    HarvestPath(Address),
    BuyPath(Address, Address),  // (fund, token) base -> token
    SellPath(Address, Address), // (fund, token) token -> base
    FundPools(Address),
    Positions(Address, u32), // (fund, pool index)
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionParams {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

// Registered position. Liquidity is tracked by the position service under `id`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub id: u64,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

generate_instance_storage_getter_and_setter!(pool_factory, DataKey::PoolFactory, Address);
generate_instance_storage_getter_and_setter!(swap_router, DataKey::SwapRouter, Address);
generate_instance_storage_getter_and_setter!(quoter, DataKey::Quoter, Address);
generate_instance_storage_getter_and_setter!(position_service, DataKey::PositionService, Address);
generate_instance_storage_getter_and_setter!(reward_token, DataKey::RewardToken, Address);
generate_instance_storage_getter_and_setter!(bridge_token, DataKey::BridgeToken, Address);
generate_instance_storage_getter_and_setter_with_default!(
    max_price_impact,
    DataKey::MaxPriceImpact,
    u32,
    DEFAULT_MAX_PRICE_IMPACT
);
generate_instance_storage_getter_and_setter_with_default!(
    max_sqrt_slippage,
    DataKey::MaxSqrtSlippage,
    u32,
    DEFAULT_MAX_SQRT_SLIPPAGE
);

generate_persistent_storage_getter_and_setter_with_default!(
    verified_token,
    DataKey::VerifiedToken,
    Address,
    bool,
    false
);

fn get_optional_bytes(e: &Env, key: &DataKey) -> Option<Bytes> {
    let value = e.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(e, key);
    }
    value
}

fn set_bytes(e: &Env, key: &DataKey, value: &Bytes) {
    e.storage().persistent().set(key, value);
    bump_persistent(e, key);
}

// harvest path
pub(crate) fn get_harvest_path(e: &Env, token: &Address) -> Option<Bytes> {
    get_optional_bytes(e, &DataKey::HarvestPath(token.clone()))
}

pub(crate) fn set_harvest_path(e: &Env, token: &Address, path: &Bytes) {
    set_bytes(e, &DataKey::HarvestPath(token.clone()), path);
}

// fund paths
pub(crate) fn get_buy_path(e: &Env, fund: &Address, token: &Address) -> Option<Bytes> {
    get_optional_bytes(e, &DataKey::BuyPath(fund.clone(), token.clone()))
}

pub(crate) fn set_buy_path(e: &Env, fund: &Address, token: &Address, path: &Bytes) {
    set_bytes(e, &DataKey::BuyPath(fund.clone(), token.clone()), path);
}

pub(crate) fn get_sell_path(e: &Env, fund: &Address, token: &Address) -> Option<Bytes> {
    get_optional_bytes(e, &DataKey::SellPath(fund.clone(), token.clone()))
}

pub(crate) fn set_sell_path(e: &Env, fund: &Address, token: &Address, path: &Bytes) {
    set_bytes(e, &DataKey::SellPath(fund.clone(), token.clone()), path);
}

// positions
pub(crate) fn get_fund_pools(e: &Env, fund: &Address) -> Vec<Address> {
    let key = DataKey::FundPools(fund.clone());
    match e.storage().persistent().get(&key) {
        Some(v) => {
            bump_persistent(e, &key);
            v
        }
        None => Vec::new(e),
    }
}

pub(crate) fn set_fund_pools(e: &Env, fund: &Address, pools: &Vec<Address>) {
    let key = DataKey::FundPools(fund.clone());
    e.storage().persistent().set(&key, pools);
    bump_persistent(e, &key);
}

pub(crate) fn get_positions(e: &Env, fund: &Address, pool_index: u32) -> Vec<Position> {
    let key = DataKey::Positions(fund.clone(), pool_index);
    match e.storage().persistent().get(&key) {
        Some(v) => {
            bump_persistent(e, &key);
            v
        }
        None => Vec::new(e),
    }
}

pub(crate) fn set_positions(e: &Env, fund: &Address, pool_index: u32, positions: &Vec<Position>) {
    let key = DataKey::Positions(fund.clone(), pool_index);
    e.storage().persistent().set(&key, positions);
    bump_persistent(e, &key);
}
