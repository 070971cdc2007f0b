use common::max_debt;
use ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use super::utils::accrual::accrue_position;

/// Returns how much more `who` can borrow right now, never negative
pub fn max_additional_borrow(env: &Env, who: &Address) -> Result<i128, Error> {
    let position = accrue_position(env, who)?;

    let max_total = max_debt(position.collateral).ok_or(Error::MathOverflowError)?;
    let total_debt = position.total_debt().ok_or(Error::MathOverflowError)?;

    Ok(max_total
        .checked_sub(total_debt)
        .ok_or(Error::MathOverflowError)?
        .max(0))
}
