pub const DAY_IN_LEDGERS: u32 = 17280;
pub const MONTH_IN_LEDGERS: u32 = DAY_IN_LEDGERS * 30;

pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const MAX_PERSISTENT_TTL: u32 = MONTH_IN_LEDGERS * 6;
pub const PERSISTENT_TTL_THRESHOLD: u32 = MAX_PERSISTENT_TTL - MONTH_IN_LEDGERS;

// basis points denominator shared by every ratio parameter
pub const BPS_DENOMINATOR: u32 = 10_000;
