use soroban_sdk::contracttype;

/// Stored state of a single participant.
/// A participant that was never referenced reads as `AccountPosition::default()`.
#[contracttype]
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct AccountPosition {
    pub collateral: i128,
    pub principal: i128,
    pub interest: i128,
    /// Ledger timestamp interest was last computed at, zero when there is no debt history
    pub last_accrual: u64,
}

impl AccountPosition {
    pub fn total_debt(&self) -> Option<i128> {
        self.principal.checked_add(self.interest)
    }

    pub fn has_debt(&self) -> bool {
        self.principal != 0 || self.interest != 0
    }

    pub fn is_clean(&self) -> bool {
        self.collateral == 0 && !self.has_debt() && self.last_accrual == 0
    }
}
