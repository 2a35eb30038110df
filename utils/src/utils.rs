use crate::math_errors::MathError;
use soroban_sdk::{panic_with_error, Env};

// token contracts speak i128, the rest of the workspace speaks u128
pub fn to_token_amount(e: &Env, amount: u128) -> i128 {
    match i128::try_from(amount) {
        Ok(v) => v,
        Err(_) => panic_with_error!(e, MathError::NumberOverflow),
    }
}

pub fn from_token_amount(e: &Env, amount: i128) -> u128 {
    match u128::try_from(amount) {
        Ok(v) => v,
        Err(_) => panic_with_error!(e, MathError::NumberOverflow),
    }
}
