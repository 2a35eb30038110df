use crate::access_utils::require_governance;
use crate::events::{Events, GovernanceEvents};
use crate::guard::require_bps;
use crate::storage::{set_max_price_impact, set_max_sqrt_slippage, set_verified_token};
use access_control::access::{AccessControl, TransferRoleTrait};
use access_control::role::Role;
use soroban_sdk::{Address, Env};

pub(crate) fn set_governance(e: &Env, caller: &Address, new_governance: &Address) {
    require_governance(e, caller);
    AccessControl::new(e).transfer_role(&Role::Governance, new_governance);
}

// Overwrites unconditionally; the event is emitted even if the flag didn't change.
pub(crate) fn change_verified_token(e: &Env, caller: &Address, token: &Address, is_verified: bool) {
    require_governance(e, caller);
    set_verified_token(e, token, &is_verified);
    Events::new(e).change_verified_token(token.clone(), is_verified);
}

pub(crate) fn change_max_price_impact(e: &Env, caller: &Address, value: u32) {
    require_governance(e, caller);
    require_bps(e, value);
    set_max_price_impact(e, &value);
    Events::new(e).set_max_price_impact(value);
}

pub(crate) fn change_max_sqrt_slippage(e: &Env, caller: &Address, value: u32) {
    require_governance(e, caller);
    require_bps(e, value);
    set_max_sqrt_slippage(e, &value);
    Events::new(e).set_max_sqrt_slippage(value);
}
