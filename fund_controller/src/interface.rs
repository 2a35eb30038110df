use crate::multicall::Call;
use crate::storage::{Position, PositionParams};
use soroban_sdk::{Address, Bytes, BytesN, Env, Vec};

pub trait UpgradeableContract {
    // Get contract version
    fn version() -> u32;

    // Replace contract code. Governance only.
    fn upgrade(e: Env, governance: Address, new_wasm_hash: BytesN<32>);
}

pub trait GovernanceInterface {
    // Add or remove a token from the allow-list of route tokens
    fn set_verified_token(e: Env, governance: Address, token: Address, is_verified: bool);

    fn get_verified_token(e: Env, token: Address) -> bool;

    // Register the route used to convert `token` into the reward token
    fn set_harvest_path(e: Env, governance: Address, token: Address, route: Bytes);

    fn get_harvest_path(e: Env, token: Address) -> Option<Bytes>;

    // Max deviation of a position swap from its quote, bps
    fn set_max_price_impact(e: Env, governance: Address, max_price_impact: u32);

    fn get_max_price_impact(e: Env) -> u32;

    // Min sqrt-price ratio kept by a harvest swap, bps
    fn set_max_sqrt_slippage(e: Env, governance: Address, max_sqrt_slippage: u32);

    fn get_max_sqrt_slippage(e: Env) -> u32;
}

pub trait ManagerInterface {
    // Register buy and sell routes between the fund base and `token`
    fn set_path(e: Env, manager: Address, fund: Address, token: Address, route: Bytes);

    fn get_buy_path(e: Env, fund: Address, token: Address) -> Option<Bytes>;

    fn get_sell_path(e: Env, fund: Address, token: Address) -> Option<Bytes>;

    // Forward a new deposit deadline to the fund
    fn set_deposit_deadline(e: Env, manager: Address, fund: Address, deadline: u64);
}

pub trait PositionInterface {
    // Open a position, optionally funded with `amount` of base
    fn init(
        e: Env,
        manager: Address,
        fund: Address,
        params: PositionParams,
        amount: u128,
        deadline: u64,
    ) -> (u32, u32);

    // Invest `amount` of base into an existing position
    fn add(
        e: Env,
        manager: Address,
        fund: Address,
        pool_index: u32,
        position_index: u32,
        amount: u128,
        collect: bool,
        deadline: u64,
    ) -> u128;

    // Withdraw liquidity back into base
    fn sub(
        e: Env,
        manager: Address,
        fund: Address,
        pool_index: u32,
        position_index: u32,
        liquidity: u128,
        amount0_min: u128,
        amount1_min: u128,
        deadline: u64,
    ) -> u128;

    // Relocate liquidity between two positions of the same pool
    fn move_liquidity(
        e: Env,
        manager: Address,
        fund: Address,
        pool_index: u32,
        sub_index: u32,
        add_index: u32,
        liquidity: u128,
        deadline: u64,
    ) -> u128;

    fn get_fund_pools(e: Env, fund: Address) -> Vec<Address>;

    fn get_positions(e: Env, fund: Address, pool_index: u32) -> Vec<Position>;

    fn get_position(e: Env, fund: Address, pool_index: u32, position_index: u32) -> Position;
}

pub trait HarvestInterface {
    // Sell accumulated `token` into the reward token and burn it
    fn harvest(e: Env, token: Address, amount: u128) -> u128;
}

pub trait BatchInterface {
    // Execute calls in order, all or nothing
    fn multicall(e: Env, caller: Address, calls: Vec<Call>);
}
