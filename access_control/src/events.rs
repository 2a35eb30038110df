use crate::role::Role;
use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }

    pub fn transfer_role(&self, role: &Role, new_address: Address) {
        let name = match role {
            Role::Governance => "set_governance",
        };
        self.env()
            .events()
            .publish((Symbol::new(self.env(), name),), (new_address,))
    }
}
