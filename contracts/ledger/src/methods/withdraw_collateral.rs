use ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_collateral_asset, write_position};

use super::utils::accrual::accrue_position;
use super::utils::custody::release_from_custody;
use super::utils::validation::{require_collateral, require_not_paused, require_zero_debt};

/// Returns the whole collateral balance. Allowed only once every debt is repaid.
pub fn withdraw_collateral(env: &Env, who: &Address) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);

    let collateral_asset = read_collateral_asset(env)?;
    let mut position = accrue_position(env, who)?;

    require_collateral(env, &position);
    require_zero_debt(env, &position);

    let amount = position.collateral;
    position.collateral = 0;

    write_position(env, who, &position)?;
    release_from_custody(env, &collateral_asset, who, amount)?;

    event::collateral_withdrawn(env, who, amount);

    Ok(())
}
