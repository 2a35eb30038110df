use soroban_sdk::contracttype;

#[derive(Clone)]
#[contracttype]
pub(crate) enum DataKey {
    Governance, // sets protocol parameters, allow-list and harvest routes
}
