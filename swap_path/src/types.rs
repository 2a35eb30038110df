use soroban_sdk::{contracttype, Address};

// Encoding input: a token followed by the fee of the pool it is swapped through.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathHop {
    pub token: Address,
    pub fee: u32,
}

// Decoded pool hop. `token_out` of a hop is `token_in` of the next one.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapHop {
    pub token_in: Address,
    pub fee: u32,
    pub token_out: Address,
}
