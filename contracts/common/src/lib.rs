#![deny(warnings)]
#![no_std]

mod percent;
#[cfg(test)]
mod test;

pub use percent::*;

/// Denominator of every percentage used by the ledger
pub const PERCENT_DENOMINATOR: i128 = 100;

/// Collateral required per unit of debt, 150%
pub const COLLATERAL_RATIO: Percent = Percent::new(150);

/// Interest charged per accrual period, 5%
pub const INTEREST_RATE: Percent = Percent::new(5);

/// Accrual period length in seconds. Equal 7 * 24 * 60 * 60
pub const PERIOD_LENGTH: u64 = 604_800;

/// Collateralization ratio reported for a position without debt
pub const INFINITE_COLLATERALIZATION: i128 = i128::MAX;

/// Maximum total debt (principal + interest) the collateral can back.
/// Collateral and loan units are exchanged 1:1.
pub fn max_debt(collateral: i128) -> Option<i128> {
    COLLATERAL_RATIO.recip_mul_int(collateral)
}

/// Collateral to debt ratio expressed in percent, rounded down.
pub fn collateralization(collateral: i128, debt: i128) -> Option<i128> {
    if debt == 0 {
        return Some(INFINITE_COLLATERALIZATION);
    }

    Percent::ratio(collateral, debt)
}
