#![no_std]

mod codec;
pub mod constants;
pub mod errors;
mod test;
pub mod types;

pub use crate::codec::{decode, encode, encode_hops, first_token, last_token, num_hops, reverse, tokens};
pub use crate::errors::PathError;
pub use crate::types::{PathHop, SwapHop};
