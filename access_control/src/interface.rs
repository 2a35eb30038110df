use soroban_sdk::{Address, Env};

pub trait GovernedContract {
    // Current governance address
    fn get_governance(e: Env) -> Address;

    // Hand governance over to a new address, effective immediately
    fn set_governance(e: Env, governance: Address, new_governance: Address);
}
