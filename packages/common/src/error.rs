use soroban_sdk::contracterror;

pub type LenderResult<T = ()> = core::result::Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    Shutdown = 3,
    NotShutdown = 4,
    ZeroAmount = 5,
    InvalidParameter = 6,
    ExceedsMaxDeposit = 7,
    ExceedsMaxWithdraw = 8,
    ExceedsMaxRedeem = 9,
    InsufficientLiquidity = 10,
    InsufficientBalance = 11,
    InsufficientAllowance = 12,
    MathError = 13,
    CastingFailure = 14,
    AuctionNotSet = 15,
    InvalidAuction = 16,
    StrategyAlreadyExists = 17,
    SwapFailed = 18,
    NotInitialized = 19,
}
