#![no_std]

mod access_utils;
mod constants;
mod contract;
mod errors;
mod events;
pub mod external;
mod governance;
mod guard;
mod harvest;
mod interface;
mod lifecycle;
mod multicall;
mod route_validator;
mod storage;
mod test;
mod test_harvest;
mod test_lifecycle;
mod test_multicall;
mod test_permissions;
mod test_routes;
mod testutils;

pub use crate::contract::{FundController, FundControllerClient};
pub use crate::errors::FundControllerError;
pub use crate::multicall::Call;
pub use crate::storage::{Position, PositionParams};
