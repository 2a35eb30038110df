#![no_std]
pub mod access;
pub mod errors;
pub mod events;
pub mod interface;
pub mod role;
mod storage;
mod test;
pub mod utils;
