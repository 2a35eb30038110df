#![cfg(test)]
extern crate std;

use crate::FundControllerClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{Address, Bytes, Env, IntoVal, Val, Vec};
use swap_path::PathHop;

pub(crate) const POOL_FEE: u32 = 3000;

pub(crate) mod fund {
    use crate::external::{FundInterface, PositionServiceClient, SwapRouterClient};
    use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
    use soroban_sdk::{
        contract, contractimpl, contracttype, vec, Address, Bytes, Env, IntoVal, Symbol, Vec,
    };

    #[derive(Clone)]
    #[contracttype]
    enum DataKey {
        Manager,
        Token,
        Controller,
        Deadline,
    }

    fn require_controller(e: &Env) {
        let controller: Address = e.storage().instance().get(&DataKey::Controller).unwrap();
        controller.require_auth();
    }

    // Lets `spender` pull `amount` of `token` from the fund during the next call.
    fn allow_transfer(
        e: &Env,
        entries: &mut Vec<InvokerContractAuthEntry>,
        token: &Address,
        spender: &Address,
        amount: u128,
    ) {
        if amount == 0 {
            return;
        }
        entries.push_back(InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token.clone(),
                fn_name: Symbol::new(e, "transfer"),
                args: (e.current_contract_address(), spender.clone(), amount as i128)
                    .into_val(e),
            },
            sub_invocations: vec![e],
        }));
    }

    #[contract]
    pub struct MockFund;

    #[contractimpl]
    impl MockFund {
        pub fn __constructor(e: Env, manager: Address, token: Address, controller: Address) {
            e.storage().instance().set(&DataKey::Manager, &manager);
            e.storage().instance().set(&DataKey::Token, &token);
            e.storage().instance().set(&DataKey::Controller, &controller);
        }

        pub fn get_deadline(e: Env) -> u64 {
            e.storage().instance().get(&DataKey::Deadline).unwrap_or(0)
        }
    }

    #[contractimpl]
    impl FundInterface for MockFund {
        fn manager(e: Env) -> Address {
            e.storage().instance().get(&DataKey::Manager).unwrap()
        }

        fn token(e: Env) -> Address {
            e.storage().instance().get(&DataKey::Token).unwrap()
        }

        fn set_deadline(e: Env, deadline: u64) {
            require_controller(&e);
            e.storage().instance().set(&DataKey::Deadline, &deadline);
            e.events()
                .publish((Symbol::new(&e, "set_deadline"),), (deadline,));
        }

        fn swap(e: Env, router: Address, path: Bytes, amount_in: u128) -> u128 {
            require_controller(&e);
            let token_in = swap_path::first_token(&e, &path).unwrap();
            let mut entries = Vec::new(&e);
            allow_transfer(&e, &mut entries, &token_in, &router, amount_in);
            e.authorize_as_current_contract(entries);
            SwapRouterClient::new(&e, &router).swap_exact_input(
                &e.current_contract_address(),
                &path,
                &amount_in,
                &0,
            )
        }

        fn increase_liquidity(
            e: Env,
            position_service: Address,
            position_id: u64,
            token0: Address,
            token1: Address,
            amount0: u128,
            amount1: u128,
        ) -> u128 {
            require_controller(&e);
            let mut entries = Vec::new(&e);
            allow_transfer(&e, &mut entries, &token0, &position_service, amount0);
            allow_transfer(&e, &mut entries, &token1, &position_service, amount1);
            e.authorize_as_current_contract(entries);
            PositionServiceClient::new(&e, &position_service).increase(
                &e.current_contract_address(),
                &position_id,
                &amount0,
                &amount1,
            )
        }

        fn decrease_liquidity(
            e: Env,
            position_service: Address,
            position_id: u64,
            liquidity: u128,
            amount0_min: u128,
            amount1_min: u128,
        ) -> (u128, u128) {
            require_controller(&e);
            PositionServiceClient::new(&e, &position_service).decrease(
                &e.current_contract_address(),
                &position_id,
                &liquidity,
                &amount0_min,
                &amount1_min,
            )
        }

        fn collect_fees(e: Env, position_service: Address, position_id: u64) -> (u128, u128) {
            require_controller(&e);
            PositionServiceClient::new(&e, &position_service)
                .collect(&e.current_contract_address(), &position_id)
        }
    }
}

pub(crate) mod pool_factory {
    use crate::external::PoolFactoryInterface;
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    fn sort(a: &Address, b: &Address) -> (Address, Address) {
        match a < b {
            true => (a.clone(), b.clone()),
            false => (b.clone(), a.clone()),
        }
    }

    #[derive(Clone)]
    #[contracttype]
    enum DataKey {
        Pool(Address, Address, u32),
    }

    #[contract]
    pub struct MockPoolFactory;

    #[contractimpl]
    impl MockPoolFactory {
        pub fn add_pool(e: Env, token_a: Address, token_b: Address, fee: u32, pool: Address) {
            let (token_a, token_b) = sort(&token_a, &token_b);
            e.storage()
                .instance()
                .set(&DataKey::Pool(token_a, token_b, fee), &pool);
        }
    }

    #[contractimpl]
    impl PoolFactoryInterface for MockPoolFactory {
        fn get_pool(e: Env, token_a: Address, token_b: Address, fee: u32) -> Option<Address> {
            if token_a == token_b {
                return None;
            }
            let (token_a, token_b) = sort(&token_a, &token_b);
            e.storage()
                .instance()
                .get(&DataKey::Pool(token_a, token_b, fee))
        }
    }
}

// Output of both the router and the quoter is `amount_in * rate / 10000`, rate keyed by output token.
fn apply_rate<K: IntoVal<Env, Val>>(e: &Env, rate_key: &K, amount_in: u128) -> u128 {
    let rate: u32 = e.storage().instance().get(rate_key).unwrap_or(10_000);
    amount_in * rate as u128 / 10_000
}

pub(crate) mod swap_router {
    use crate::external::SwapRouterInterface;
    use crate::FundControllerClient;
    use soroban_sdk::token::TokenClient as SorobanTokenClient;
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, Env};

    #[derive(Clone)]
    #[contracttype]
    enum DataKey {
        Rate(Address),
        ReentryTarget,
    }

    #[contract]
    pub struct MockSwapRouter;

    #[contractimpl]
    impl MockSwapRouter {
        pub fn set_rate(e: Env, token_out: Address, rate: u32) {
            e.storage().instance().set(&DataKey::Rate(token_out), &rate);
        }

        // Makes every swap call back into `controller` before settling.
        pub fn set_reentry_target(e: Env, controller: Address) {
            e.storage().instance().set(&DataKey::ReentryTarget, &controller);
        }
    }

    #[contractimpl]
    impl SwapRouterInterface for MockSwapRouter {
        fn swap_exact_input(
            e: Env,
            sender: Address,
            path: Bytes,
            amount_in: u128,
            amount_out_min: u128,
        ) -> u128 {
            sender.require_auth();
            let hops = swap_path::decode(&e, &path).unwrap();
            let token_in = hops.first().unwrap().token_in;
            let token_out = hops.last().unwrap().token_out;

            let reentry_target: Option<Address> =
                e.storage().instance().get(&DataKey::ReentryTarget);
            if let Some(controller) = reentry_target {
                FundControllerClient::new(&e, &controller).harvest(&token_in, &amount_in);
            }

            let amount_out = super::apply_rate(&e, &DataKey::Rate(token_out.clone()), amount_in);
            if amount_out < amount_out_min {
                panic!("out min not satisfied");
            }
            SorobanTokenClient::new(&e, &token_in).transfer(
                &sender,
                &e.current_contract_address(),
                &(amount_in as i128),
            );
            SorobanTokenClient::new(&e, &token_out).transfer(
                &e.current_contract_address(),
                &sender,
                &(amount_out as i128),
            );
            amount_out
        }
    }
}

pub(crate) mod quoter {
    use crate::external::QuoterInterface;
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, Env};

    #[derive(Clone)]
    #[contracttype]
    enum DataKey {
        Rate(Address),
    }

    #[contract]
    pub struct MockQuoter;

    #[contractimpl]
    impl MockQuoter {
        pub fn set_rate(e: Env, token_out: Address, rate: u32) {
            e.storage().instance().set(&DataKey::Rate(token_out), &rate);
        }
    }

    #[contractimpl]
    impl QuoterInterface for MockQuoter {
        fn quote_exact_input(e: Env, path: Bytes, amount_in: u128) -> u128 {
            let token_out = swap_path::last_token(&e, &path).unwrap();
            super::apply_rate(&e, &DataKey::Rate(token_out), amount_in)
        }
    }
}

pub(crate) mod position_service {
    use crate::external::PositionServiceInterface;
    use soroban_sdk::token::TokenClient as SorobanTokenClient;
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    #[derive(Clone)]
    #[contracttype]
    enum DataKey {
        NextId,
        Position(u64),
        Share(u64),
        Collected(u64),
    }

    #[contracttype]
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct MockPosition {
        pub fund: Address,
        pub token0: Address,
        pub token1: Address,
        pub liquidity: u128,
        pub reserve0: u128,
        pub reserve1: u128,
    }

    // Liquidity is measured as the plain sum of deposited token amounts.
    #[contract]
    pub struct MockPositionService;

    fn load(e: &Env, position_id: u64) -> MockPosition {
        e.storage()
            .instance()
            .get(&DataKey::Position(position_id))
            .unwrap()
    }

    fn save(e: &Env, position_id: u64, position: &MockPosition) {
        e.storage()
            .instance()
            .set(&DataKey::Position(position_id), position);
    }

    #[contractimpl]
    impl MockPositionService {
        pub fn set_token0_share(e: Env, position_id: u64, share: u32) {
            e.storage()
                .instance()
                .set(&DataKey::Share(position_id), &share);
        }

        pub fn get_position(e: Env, position_id: u64) -> MockPosition {
            load(&e, position_id)
        }

        pub fn collect_count(e: Env, position_id: u64) -> u32 {
            e.storage()
                .instance()
                .get(&DataKey::Collected(position_id))
                .unwrap_or(0)
        }
    }

    #[contractimpl]
    impl PositionServiceInterface for MockPositionService {
        fn mint(
            e: Env,
            fund: Address,
            token0: Address,
            token1: Address,
            _fee: u32,
            _tick_lower: i32,
            _tick_upper: i32,
        ) -> u64 {
            let position_id: u64 = e.storage().instance().get(&DataKey::NextId).unwrap_or(1);
            e.storage()
                .instance()
                .set(&DataKey::NextId, &(position_id + 1));
            save(
                &e,
                position_id,
                &MockPosition {
                    fund,
                    token0,
                    token1,
                    liquidity: 0,
                    reserve0: 0,
                    reserve1: 0,
                },
            );
            position_id
        }

        fn token0_share(e: Env, position_id: u64) -> u32 {
            e.storage()
                .instance()
                .get(&DataKey::Share(position_id))
                .unwrap_or(5_000)
        }

        fn increase(e: Env, fund: Address, position_id: u64, amount0: u128, amount1: u128) -> u128 {
            fund.require_auth();
            let mut position = load(&e, position_id);
            assert_eq!(position.fund, fund);
            let service = e.current_contract_address();
            if amount0 > 0 {
                SorobanTokenClient::new(&e, &position.token0).transfer(
                    &fund,
                    &service,
                    &(amount0 as i128),
                );
            }
            if amount1 > 0 {
                SorobanTokenClient::new(&e, &position.token1).transfer(
                    &fund,
                    &service,
                    &(amount1 as i128),
                );
            }
            position.reserve0 += amount0;
            position.reserve1 += amount1;
            position.liquidity += amount0 + amount1;
            save(&e, position_id, &position);
            amount0 + amount1
        }

        // Minimums are left to the caller.
        fn decrease(
            e: Env,
            fund: Address,
            position_id: u64,
            liquidity: u128,
            _amount0_min: u128,
            _amount1_min: u128,
        ) -> (u128, u128) {
            fund.require_auth();
            let mut position = load(&e, position_id);
            assert_eq!(position.fund, fund);
            let amount0 = position.reserve0 * liquidity / position.liquidity;
            let amount1 = position.reserve1 * liquidity / position.liquidity;
            position.reserve0 -= amount0;
            position.reserve1 -= amount1;
            position.liquidity -= liquidity;
            save(&e, position_id, &position);

            let service = e.current_contract_address();
            if amount0 > 0 {
                SorobanTokenClient::new(&e, &position.token0).transfer(
                    &service,
                    &fund,
                    &(amount0 as i128),
                );
            }
            if amount1 > 0 {
                SorobanTokenClient::new(&e, &position.token1).transfer(
                    &service,
                    &fund,
                    &(amount1 as i128),
                );
            }
            (amount0, amount1)
        }

        fn collect(e: Env, fund: Address, position_id: u64) -> (u128, u128) {
            fund.require_auth();
            let count: u32 = e
                .storage()
                .instance()
                .get(&DataKey::Collected(position_id))
                .unwrap_or(0);
            e.storage()
                .instance()
                .set(&DataKey::Collected(position_id), &(count + 1));
            (0, 0)
        }

        fn liquidity(e: Env, position_id: u64) -> u128 {
            load(&e, position_id).liquidity
        }
    }
}

use fund::MockFundClient;
use pool_factory::MockPoolFactoryClient;
use position_service::MockPositionServiceClient;
use quoter::MockQuoterClient;
use swap_router::MockSwapRouterClient;

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) governance: Address,
    pub(crate) manager: Address,
    pub(crate) controller: FundControllerClient<'a>,

    pub(crate) fund: MockFundClient<'a>,
    pub(crate) pool_factory: MockPoolFactoryClient<'a>,
    pub(crate) router: MockSwapRouterClient<'a>,
    pub(crate) quoter: MockQuoterClient<'a>,
    pub(crate) position_service: MockPositionServiceClient<'a>,

    pub(crate) base: SorobanTokenClient<'a>,
    pub(crate) token0: SorobanTokenClient<'a>,
    pub(crate) token1: SorobanTokenClient<'a>,
    pub(crate) bridge: SorobanTokenClient<'a>,
    pub(crate) reward: SorobanTokenClient<'a>,
}

impl Default for Setup<'_> {
    // Create setup with verified base/token0/token1/bridge and pools between them
    fn default() -> Self {
        let e: Env = Env::default();
        e.mock_all_auths_allowing_non_root_auth();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let governance = Address::generate(&e);
        let manager = Address::generate(&e);

        let base = create_token_contract(&e, &admin);
        let token0 = create_token_contract(&e, &admin);
        let token1 = create_token_contract(&e, &admin);
        let bridge = create_token_contract(&e, &admin);
        let reward = create_token_contract(&e, &admin);

        let pool_factory =
            MockPoolFactoryClient::new(&e, &e.register(pool_factory::MockPoolFactory, ()));
        let router = MockSwapRouterClient::new(&e, &e.register(swap_router::MockSwapRouter, ()));
        let quoter = MockQuoterClient::new(&e, &e.register(quoter::MockQuoter, ()));
        let position_service = MockPositionServiceClient::new(
            &e,
            &e.register(position_service::MockPositionService, ()),
        );

        for (token_a, token_b) in [
            (&base, &token0),
            (&base, &token1),
            (&token0, &token1),
            (&base, &bridge),
            (&token0, &bridge),
            (&bridge, &reward),
        ] {
            pool_factory.add_pool(
                &token_a.address,
                &token_b.address,
                &POOL_FEE,
                &Address::generate(&e),
            );
        }

        for token in [&base, &token0, &token1, &bridge, &reward] {
            get_token_admin_client(&e, &token.address).mint(&router.address, &1_000_000_0000000);
        }
        let controller = create_contract(
            &e,
            &governance,
            &pool_factory.address,
            &router.address,
            &quoter.address,
            &position_service.address,
            &reward.address,
            &bridge.address,
        );

        for token in [&base, &token0, &token1, &bridge] {
            controller.set_verified_token(&governance, &token.address, &true);
        }

        let fund = MockFundClient::new(
            &e,
            &e.register(
                fund::MockFund,
                (manager.clone(), base.address.clone(), controller.address.clone()),
            ),
        );
        get_token_admin_client(&e, &base.address).mint(&fund.address, &1_000_0000000);

        Self {
            env: e,
            governance,
            manager,
            controller,
            fund,
            pool_factory,
            router,
            quoter,
            position_service,
            base,
            token0,
            token1,
            bridge,
            reward,
        }
    }
}

impl Setup<'_> {
    pub(crate) fn route(&self, tokens: &[&Address]) -> Bytes {
        let (last, rest) = tokens.split_last().unwrap();
        let mut hops = Vec::new(&self.env);
        for token in rest {
            hops.push_back(PathHop {
                token: (*token).clone(),
                fee: POOL_FEE,
            });
        }
        swap_path::encode(&self.env, &hops, last).unwrap()
    }

    // base -> token0 and base -> token1 routes for the fund
    pub(crate) fn set_fund_paths(&self) {
        self.controller.set_path(
            &self.manager,
            &self.fund.address,
            &self.token0.address,
            &self.route(&[&self.base.address, &self.token0.address]),
        );
        self.controller.set_path(
            &self.manager,
            &self.fund.address,
            &self.token1.address,
            &self.route(&[&self.base.address, &self.token1.address]),
        );
    }

    pub(crate) fn position_params(&self, tick_lower: i32, tick_upper: i32) -> crate::PositionParams {
        crate::PositionParams {
            token0: self.token0.address.clone(),
            token1: self.token1.address.clone(),
            fee: POOL_FEE,
            tick_lower,
            tick_upper,
        }
    }

    pub(crate) fn deadline(&self) -> u64 {
        self.env.ledger().timestamp() + 100
    }

    // token0 -> bridge -> reward
    pub(crate) fn set_harvest_path(&self) {
        self.controller.set_harvest_path(
            &self.governance,
            &self.token0.address,
            &self.route(&[
                &self.token0.address,
                &self.bridge.address,
                &self.reward.address,
            ]),
        );
    }

    pub(crate) fn mint(&self, token: &SorobanTokenClient, to: &Address, amount: i128) {
        get_token_admin_client(&self.env, &token.address).mint(to, &amount);
    }
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> SorobanTokenClient<'a> {
    SorobanTokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub(crate) fn get_token_admin_client<'a>(
    e: &Env,
    address: &Address,
) -> SorobanTokenAdminClient<'a> {
    SorobanTokenAdminClient::new(e, address)
}

pub fn create_contract<'a>(
    e: &Env,
    governance: &Address,
    pool_factory: &Address,
    swap_router: &Address,
    quoter: &Address,
    position_service: &Address,
    reward_token: &Address,
    bridge_token: &Address,
) -> FundControllerClient<'a> {
    FundControllerClient::new(
        e,
        &e.register(
            crate::FundController,
            (
                governance,
                pool_factory,
                swap_router,
                quoter,
                position_service,
                reward_token,
                bridge_token,
            ),
        ),
    )
}
