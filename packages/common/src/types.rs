use soroban_sdk::{contracttype, Address};

/// Lending market wiring handed to a strategy at deployment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketInitInfo {
    pub lending_pool: Address,
    pub router: Address,
    /// Intermediate token for reward swaps that have no direct pair
    pub base_token: Address,
}

/// Role holders handed to a strategy at deployment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleInitInfo {
    pub management: Address,
    pub keeper: Address,
    pub emergency_admin: Option<Address>,
    pub performance_fee_recipient: Address,
}
