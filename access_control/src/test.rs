#![cfg(test)]
extern crate std;

use crate::access::{AccessControl, AccessControlTrait, TransferRoleTrait};
use crate::role::Role;
use crate::utils::require_governance;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{contract, vec, Address, Env, IntoVal, Symbol};

#[contract]
pub struct HostContract;

#[test]
fn test_role_not_set() {
    let e = Env::default();
    let contract_id = e.register(HostContract, ());
    let user = Address::generate(&e);

    e.as_contract(&contract_id, || {
        let access_control = AccessControl::new(&e);
        assert_eq!(access_control.get_role_safe(&Role::Governance), None);
        assert!(!access_control.address_has_role(&user, &Role::Governance));
    });
}

#[test]
#[should_panic(expected = "Error(Contract, #101)")]
fn test_get_missing_role() {
    let e = Env::default();
    let contract_id = e.register(HostContract, ());

    e.as_contract(&contract_id, || {
        AccessControl::new(&e).get_role(&Role::Governance);
    });
}

#[test]
fn test_transfer_role() {
    let e = Env::default();
    let contract_id = e.register(HostContract, ());
    let governance = Address::generate(&e);
    let new_governance = Address::generate(&e);

    e.as_contract(&contract_id, || {
        let access_control = AccessControl::new(&e);
        access_control.set_role_address(&Role::Governance, &governance);
        access_control.transfer_role(&Role::Governance, &new_governance);

        assert_eq!(access_control.get_role(&Role::Governance), new_governance);
        assert!(!access_control.address_has_role(&governance, &Role::Governance));
        require_governance(&e, &new_governance);
    });

    assert_eq!(
        vec![&e, e.events().all().last().unwrap()],
        vec![
            &e,
            (
                contract_id.clone(),
                (Symbol::new(&e, "set_governance"),).into_val(&e),
                (new_governance,).into_val(&e),
            ),
        ]
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_previous_governance_rejected() {
    let e = Env::default();
    let contract_id = e.register(HostContract, ());
    let governance = Address::generate(&e);
    let new_governance = Address::generate(&e);

    e.as_contract(&contract_id, || {
        let access_control = AccessControl::new(&e);
        access_control.set_role_address(&Role::Governance, &governance);
        access_control.transfer_role(&Role::Governance, &new_governance);
        require_governance(&e, &governance);
    });
}
