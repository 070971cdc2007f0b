use soroban_sdk::contracttype;

/// Position projected to the current ledger timestamp
#[contracttype]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionView {
    pub collateral: i128,
    /// Principal owed, excluding interest
    pub debt: i128,
    /// Interest owed, including whole periods elapsed since the last accrual
    pub interest: i128,
}
