#![no_std]

pub mod bump;
pub mod constant;
pub mod math_errors;
pub mod storage;
pub mod storage_errors;
pub mod test_utils;
pub mod utils;
