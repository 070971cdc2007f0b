use ledger_interface::types::error::Error;
use ledger_interface::types::position_view::PositionView;
use soroban_sdk::{Address, Env};

use super::utils::accrual::accrue_position;

pub fn get_position(env: &Env, who: &Address) -> Result<PositionView, Error> {
    let position = accrue_position(env, who)?;

    Ok(PositionView {
        collateral: position.collateral,
        debt: position.principal,
        interest: position.interest,
    })
}
