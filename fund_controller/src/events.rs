use soroban_sdk::{Address, Bytes, Env, Symbol};

#[derive(Clone)]
pub(crate) struct Events(Env);

impl Events {
    #[inline(always)]
    pub(crate) fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub(crate) fn new(env: &Env) -> Events {
        Events(env.clone())
    }
}

pub(crate) trait GovernanceEvents {
    fn change_verified_token(&self, token: Address, is_verified: bool);

    fn set_harvest_path(&self, token: Address, path: Bytes);

    fn set_max_price_impact(&self, max_price_impact: u32);

    fn set_max_sqrt_slippage(&self, max_sqrt_slippage: u32);
}

pub(crate) trait FundEvents {
    fn set_path(&self, fund: Address, token: Address, path: Bytes);

    fn set_deposit_deadline(&self, fund: Address, deadline: u64);

    fn init_position(
        &self,
        fund: Address,
        pool: Address,
        pool_index: u32,
        position_index: u32,
        position_id: u64,
    );

    fn add_liquidity(
        &self,
        fund: Address,
        pool_index: u32,
        position_index: u32,
        amount: u128,
        liquidity: u128,
    );

    fn sub_liquidity(
        &self,
        fund: Address,
        pool_index: u32,
        position_index: u32,
        liquidity: u128,
        base_amount: u128,
    );

    fn move_liquidity(
        &self,
        fund: Address,
        pool_index: u32,
        sub_index: u32,
        add_index: u32,
        liquidity: u128,
        base_amount: u128,
    );
}

pub(crate) trait HarvestEvents {
    fn harvest(&self, token: Address, amount: u128, burned: u128);
}

impl GovernanceEvents for Events {
    fn change_verified_token(&self, token: Address, is_verified: bool) {
        self.env().events().publish(
            (Symbol::new(self.env(), "change_verified_token"), token),
            (is_verified,),
        );
    }

    fn set_harvest_path(&self, token: Address, path: Bytes) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_harvest_path"), token),
            (path,),
        );
    }

    fn set_max_price_impact(&self, max_price_impact: u32) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_max_price_impact"),),
            (max_price_impact,),
        );
    }

    fn set_max_sqrt_slippage(&self, max_sqrt_slippage: u32) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_max_sqrt_slippage"),),
            (max_sqrt_slippage,),
        );
    }
}

impl FundEvents for Events {
    fn set_path(&self, fund: Address, token: Address, path: Bytes) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_path"), fund, token),
            (path,),
        );
    }

    fn set_deposit_deadline(&self, fund: Address, deadline: u64) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_deposit_deadline"), fund),
            (deadline,),
        );
    }

    fn init_position(
        &self,
        fund: Address,
        pool: Address,
        pool_index: u32,
        position_index: u32,
        position_id: u64,
    ) {
        self.env().events().publish(
            (Symbol::new(self.env(), "init_position"), fund),
            (pool, pool_index, position_index, position_id),
        );
    }

    fn add_liquidity(
        &self,
        fund: Address,
        pool_index: u32,
        position_index: u32,
        amount: u128,
        liquidity: u128,
    ) {
        self.env().events().publish(
            (Symbol::new(self.env(), "add_liquidity"), fund),
            (pool_index, position_index, amount, liquidity),
        );
    }

    fn sub_liquidity(
        &self,
        fund: Address,
        pool_index: u32,
        position_index: u32,
        liquidity: u128,
        base_amount: u128,
    ) {
        self.env().events().publish(
            (Symbol::new(self.env(), "sub_liquidity"), fund),
            (pool_index, position_index, liquidity, base_amount),
        );
    }

    fn move_liquidity(
        &self,
        fund: Address,
        pool_index: u32,
        sub_index: u32,
        add_index: u32,
        liquidity: u128,
        base_amount: u128,
    ) {
        self.env().events().publish(
            (Symbol::new(self.env(), "move_liquidity"), fund),
            (pool_index, sub_index, add_index, liquidity, base_amount),
        );
    }
}

impl HarvestEvents for Events {
    fn harvest(&self, token: Address, amount: u128, burned: u128) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "harvest"), token), (amount, burned));
    }
}
