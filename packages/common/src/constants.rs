// ################################################################
//                             TTL
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Ledgers an allowance granted to the lending pool or swap router stays live
pub const APPROVAL_LEDGERS: u32 = 100;

// ################################################################
//                          Precision
// ################################################################

pub const MAX_BPS: u32 = 10_000;
pub const MAX_BPS_I128: i128 = MAX_BPS as i128;

/// Scale applied to the profit unlocking rate (shares per second)
pub const MAX_BPS_EXTENDED: i128 = 1_000_000_000_000;

pub const SECONDS_PER_YEAR: u64 = 31_556_952;

// ################################################################
//                           Defaults
// ################################################################

pub const DEFAULT_PERFORMANCE_FEE: u32 = 1_000;
pub const DEFAULT_PROFIT_MAX_UNLOCK_TIME: u64 = 10 * 24 * 60 * 60;
pub const DEFAULT_MIN_AMOUNT_TO_SELL: i128 = 10_000_000_000;
