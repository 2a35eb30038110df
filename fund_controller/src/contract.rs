use crate::access_utils::require_governance;
use crate::constants::CONTRACT_VERSION;
use crate::interface::{
    BatchInterface, GovernanceInterface, HarvestInterface, ManagerInterface, PositionInterface,
    UpgradeableContract,
};
use crate::lifecycle::load_position;
use crate::multicall::{dispatch, Call};
use crate::storage::{
    get_bridge_token, get_buy_path, get_fund_pools, get_max_price_impact, get_max_sqrt_slippage,
    get_pool_factory, get_position_service, get_positions, get_quoter, get_reward_token,
    get_sell_path, get_swap_router, get_verified_token, set_bridge_token, set_pool_factory,
    set_position_service, set_quoter, set_reward_token, set_swap_router, Position,
    PositionParams,
};
use crate::{governance, harvest, lifecycle};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::interface::GovernedContract;
use access_control::role::Role;
use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, Vec};

#[contract]
pub struct FundController;

#[contractimpl]
impl FundController {
    // __constructor
    // Initializes the controller with its governance and collaborators.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - governance: Address allowed to change protocol parameters.
    //   - pool_factory: Resolves pools by token pair and fee.
    //   - swap_router: Executes multi-hop swaps.
    //   - quoter: Provides reference swap outputs.
    //   - position_service: Mints and manages liquidity positions.
    //   - reward_token: Token bought and burned by harvest.
    //   - bridge_token: Input token of the final hop of every harvest route.
    pub fn __constructor(
        e: Env,
        governance: Address,
        pool_factory: Address,
        swap_router: Address,
        quoter: Address,
        position_service: Address,
        reward_token: Address,
        bridge_token: Address,
    ) {
        AccessControl::new(&e).set_role_address(&Role::Governance, &governance);
        set_pool_factory(&e, &pool_factory);
        set_swap_router(&e, &swap_router);
        set_quoter(&e, &quoter);
        set_position_service(&e, &position_service);
        set_reward_token(&e, &reward_token);
        set_bridge_token(&e, &bridge_token);
    }

    pub fn get_pool_factory(e: Env) -> Address {
        get_pool_factory(&e)
    }

    pub fn get_swap_router(e: Env) -> Address {
        get_swap_router(&e)
    }

    pub fn get_quoter(e: Env) -> Address {
        get_quoter(&e)
    }

    pub fn get_position_service(e: Env) -> Address {
        get_position_service(&e)
    }

    pub fn get_reward_token(e: Env) -> Address {
        get_reward_token(&e)
    }

    pub fn get_bridge_token(e: Env) -> Address {
        get_bridge_token(&e)
    }
}

#[contractimpl]
impl GovernedContract for FundController {
    fn get_governance(e: Env) -> Address {
        AccessControl::new(&e).get_role(&Role::Governance)
    }

    // set_governance
    // Replaces governance in a single step.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - governance: Current governance.
    //   - new_governance: Address receiving the role.
    fn set_governance(e: Env, governance: Address, new_governance: Address) {
        governance.require_auth();
        governance::set_governance(&e, &governance, &new_governance);
    }
}

#[contractimpl]
impl GovernanceInterface for FundController {
    fn set_verified_token(e: Env, governance: Address, token: Address, is_verified: bool) {
        governance.require_auth();
        governance::change_verified_token(&e, &governance, &token, is_verified);
    }

    fn get_verified_token(e: Env, token: Address) -> bool {
        get_verified_token(&e, &token)
    }

    // set_harvest_path
    // Registers the route used to sell `token` for the reward token.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - governance: Current governance.
    //   - token: Token the route sells.
    //   - route: Encoded path, must end with the bridge -> reward hop.
    fn set_harvest_path(e: Env, governance: Address, token: Address, route: Bytes) {
        governance.require_auth();
        harvest::set_harvest_path(&e, &governance, &token, &route);
    }

    fn get_harvest_path(e: Env, token: Address) -> Option<Bytes> {
        crate::storage::get_harvest_path(&e, &token)
    }

    fn set_max_price_impact(e: Env, governance: Address, max_price_impact: u32) {
        governance.require_auth();
        governance::change_max_price_impact(&e, &governance, max_price_impact);
    }

    fn get_max_price_impact(e: Env) -> u32 {
        get_max_price_impact(&e)
    }

    fn set_max_sqrt_slippage(e: Env, governance: Address, max_sqrt_slippage: u32) {
        governance.require_auth();
        governance::change_max_sqrt_slippage(&e, &governance, max_sqrt_slippage);
    }

    fn get_max_sqrt_slippage(e: Env) -> u32 {
        get_max_sqrt_slippage(&e)
    }
}

#[contractimpl]
impl ManagerInterface for FundController {
    fn set_path(e: Env, manager: Address, fund: Address, token: Address, route: Bytes) {
        manager.require_auth();
        lifecycle::set_path(&e, &manager, &fund, &token, &route);
    }

    fn get_buy_path(e: Env, fund: Address, token: Address) -> Option<Bytes> {
        get_buy_path(&e, &fund, &token)
    }

    fn get_sell_path(e: Env, fund: Address, token: Address) -> Option<Bytes> {
        get_sell_path(&e, &fund, &token)
    }

    fn set_deposit_deadline(e: Env, manager: Address, fund: Address, deadline: u64) {
        manager.require_auth();
        lifecycle::set_deposit_deadline(&e, &manager, &fund, deadline);
    }
}

#[contractimpl]
impl PositionInterface for FundController {
    // init
    // Opens a new position for the fund.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - manager: Fund manager.
    //   - fund: The fund contract.
    //   - params: Pool tokens, fee and tick range.
    //   - amount: Base amount to invest right away, zero to only open the position.
    //   - deadline: Latest ledger timestamp the call is valid at.
    //
    // Returns:
    //   - (pool_index, position_index) of the new position.
    fn init(
        e: Env,
        manager: Address,
        fund: Address,
        params: PositionParams,
        amount: u128,
        deadline: u64,
    ) -> (u32, u32) {
        manager.require_auth();
        lifecycle::init(&e, &manager, &fund, &params, amount, deadline)
    }

    // add
    // Converts `amount` of base into the position tokens and adds them to the position.
    //
    // Returns:
    //   - Liquidity added.
    fn add(
        e: Env,
        manager: Address,
        fund: Address,
        pool_index: u32,
        position_index: u32,
        amount: u128,
        collect: bool,
        deadline: u64,
    ) -> u128 {
        manager.require_auth();
        lifecycle::add(
            &e,
            &manager,
            &fund,
            pool_index,
            position_index,
            amount,
            collect,
            deadline,
        )
    }

    // sub
    // Removes liquidity from the position and sells the proceeds for base.
    //
    // Returns:
    //   - Base amount received by the fund.
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
    ) -> u128 {
        manager.require_auth();
        lifecycle::sub(
            &e,
            &manager,
            &fund,
            pool_index,
            position_index,
            liquidity,
            amount0_min,
            amount1_min,
            deadline,
        )
    }

    fn move_liquidity(
        e: Env,
        manager: Address,
        fund: Address,
        pool_index: u32,
        sub_index: u32,
        add_index: u32,
        liquidity: u128,
        deadline: u64,
    ) -> u128 {
        manager.require_auth();
        lifecycle::move_liquidity(
            &e,
            &manager,
            &fund,
            pool_index,
            sub_index,
            add_index,
            liquidity,
            deadline,
        )
    }

    fn get_fund_pools(e: Env, fund: Address) -> Vec<Address> {
        get_fund_pools(&e, &fund)
    }

    fn get_positions(e: Env, fund: Address, pool_index: u32) -> Vec<Position> {
        get_positions(&e, &fund, pool_index)
    }

    fn get_position(e: Env, fund: Address, pool_index: u32, position_index: u32) -> Position {
        load_position(&e, &fund, pool_index, position_index)
    }
}

#[contractimpl]
impl HarvestInterface for FundController {
    fn harvest(e: Env, token: Address, amount: u128) -> u128 {
        harvest::harvest(&e, &token, amount)
    }
}

#[contractimpl]
impl BatchInterface for FundController {
    // multicall
    // Executes several controller calls with a single authorization.
    // Each call runs its own permission checks; any failure reverts the whole batch.
    //
    // Arguments:
    //   - e: The Soroban environment.
    //   - caller: Address every call is made on behalf of.
    //   - calls: Operations to execute, in order.
    fn multicall(e: Env, caller: Address, calls: Vec<Call>) {
        caller.require_auth();
        dispatch(&e, &caller, &calls);
    }
}

#[contractimpl]
impl UpgradeableContract for FundController {
    fn version() -> u32 {
        CONTRACT_VERSION
    }

    fn upgrade(e: Env, governance: Address, new_wasm_hash: BytesN<32>) {
        governance.require_auth();
        require_governance(&e, &governance);
        e.deployer().update_current_contract_wasm(new_wasm_hash);
    }
}
