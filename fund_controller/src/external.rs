use soroban_sdk::{contractclient, Address, Bytes, Env};

// Fund contract. Holds depositor capital and the AMM positions; manager is fixed at creation.
// Everything below `token` is callable by the controller only. The fund moves its own
// balances, so it authorizes the token pulls made by `router` / `position_service`.
#[contractclient(name = "FundClient")]
pub trait FundInterface {
    fn manager(e: Env) -> Address;

    // base (deposit) token
    fn token(e: Env) -> Address;

    fn set_deadline(e: Env, deadline: u64);

    // Sells `amount_in` of the first path token through `router`, returns the output.
    fn swap(e: Env, router: Address, path: Bytes, amount_in: u128) -> u128;

    fn increase_liquidity(
        e: Env,
        position_service: Address,
        position_id: u64,
        token0: Address,
        token1: Address,
        amount0: u128,
        amount1: u128,
    ) -> u128;

    fn decrease_liquidity(
        e: Env,
        position_service: Address,
        position_id: u64,
        liquidity: u128,
        amount0_min: u128,
        amount1_min: u128,
    ) -> (u128, u128);

    fn collect_fees(e: Env, position_service: Address, position_id: u64) -> (u128, u128);
}

#[contractclient(name = "PoolFactoryClient")]
pub trait PoolFactoryInterface {
    // Order of tokens doesn't matter.
    fn get_pool(e: Env, token_a: Address, token_b: Address, fee: u32) -> Option<Address>;
}

#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouterInterface {
    // Pulls `amount_in` of the first path token from `sender`, pays the last path token back to it.
    // `sender` must authorize both the call and the token transfer.
    fn swap_exact_input(
        e: Env,
        sender: Address,
        path: Bytes,
        amount_in: u128,
        amount_out_min: u128,
    ) -> u128;
}

#[contractclient(name = "QuoterClient")]
pub trait QuoterInterface {
    // Output at the current reference price, without the trade's own impact.
    fn quote_exact_input(e: Env, path: Bytes, amount_in: u128) -> u128;
}

#[contractclient(name = "PositionServiceClient")]
pub trait PositionServiceInterface {
    // `increase` / `decrease` / `collect` require auth of `fund`.
    fn mint(
        e: Env,
        fund: Address,
        token0: Address,
        token1: Address,
        fee: u32,
        tick_lower: i32,
        tick_upper: i32,
    ) -> u64;

    // Share of a deposit's value that should go to token0, in basis points.
    fn token0_share(e: Env, position_id: u64) -> u32;

    fn increase(e: Env, fund: Address, position_id: u64, amount0: u128, amount1: u128) -> u128;

    fn decrease(
        e: Env,
        fund: Address,
        position_id: u64,
        liquidity: u128,
        amount0_min: u128,
        amount1_min: u128,
    ) -> (u128, u128);

    // Sends accrued fees to the fund.
    fn collect(e: Env, fund: Address, position_id: u64) -> (u128, u128);

    fn liquidity(e: Env, position_id: u64) -> u128;
}
