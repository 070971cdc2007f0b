use ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_collateral_asset, write_position};

use super::utils::accrual::accrue_position;
use super::utils::custody::pull_to_custody;
use super::utils::validation::{require_not_paused, require_positive_amount};

pub fn deposit_collateral(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let collateral_asset = read_collateral_asset(env)?;
    let mut position = accrue_position(env, who)?;

    position.collateral = position
        .collateral
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    // funds flow in: custody moves before the position is credited
    pull_to_custody(env, &collateral_asset, who, amount)?;
    write_position(env, who, &position)?;

    event::collateral_deposited(env, who, amount);

    Ok(())
}
