use crate::access::{AccessControl, AccessControlTrait};
use crate::role::Role;
use soroban_sdk::{Address, Env};

pub fn require_governance(e: &Env, address: &Address) {
    AccessControl::new(e).assert_address_has_role(address, &Role::Governance);
}
