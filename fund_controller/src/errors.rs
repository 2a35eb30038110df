use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundControllerError {
    InvalidPath = 301,
    UnverifiedToken = 302,
    PoolNotFound = 303,
    NoRoute = 304,
    DeadlineExpired = 305,
    PriceImpactExceeded = 306,
    SlippageExceeded = 307,
    InvalidParameter = 308,
    PositionNotFound = 309,

    OutMinNotSatisfied = 2006,
    InsufficientBalance = 2019,
}
