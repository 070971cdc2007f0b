use soroban_sdk::contracttype;

#[contracttype]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccrualPolicy {
    /// Every period charges the rate on principal only
    Simple,
    /// Every period charges the rate on principal plus interest accrued so far
    Compounding,
}
