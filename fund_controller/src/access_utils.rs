use crate::errors::FundControllerError;
use crate::external::FundClient;
use access_control::errors::AccessControlError;
use soroban_sdk::{panic_with_error, Address, Env};

pub(crate) use access_control::utils::require_governance;

// Manager is owned by the fund itself, so it's resolved on every call.
pub(crate) fn require_manager(e: &Env, address: &Address, fund: &Address) {
    if FundClient::new(e, fund).manager() != *address {
        panic_with_error!(e, AccessControlError::Unauthorized);
    }
}

pub(crate) fn require_deadline(e: &Env, deadline: u64) {
    if e.ledger().timestamp() > deadline {
        panic_with_error!(e, FundControllerError::DeadlineExpired);
    }
}
