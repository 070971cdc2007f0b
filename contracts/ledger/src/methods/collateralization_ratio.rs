use common::collateralization;
use ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use super::utils::accrual::accrue_position;

/// Returns collateral / (principal + interest) in percent.
/// `INFINITE_COLLATERALIZATION` when there is no debt.
pub fn collateralization_ratio(env: &Env, who: &Address) -> Result<i128, Error> {
    let position = accrue_position(env, who)?;
    let total_debt = position.total_debt().ok_or(Error::MathOverflowError)?;

    collateralization(position.collateral, total_debt).ok_or(Error::MathOverflowError)
}
