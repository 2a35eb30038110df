// 1% deviation between quoted and executed output
pub(crate) const DEFAULT_MAX_PRICE_IMPACT: u32 = 100;

// square-root price ratio in bps; squared it is the minimum share of the quote a harvest keeps
pub(crate) const DEFAULT_MAX_SQRT_SLIPPAGE: u32 = 9974;

pub(crate) const CONTRACT_VERSION: u32 = 100;
