use ledger_interface::types::account_position::AccountPosition;
use ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_loan_asset, write_position};

use super::utils::accrual::accrue_position;
use super::utils::custody::pull_to_custody;
use super::utils::validation::{require_active_loan, require_not_paused};

/// Repays principal and interest in full. Partial repayment is not supported.
pub fn repay(env: &Env, who: &Address) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);

    let loan_asset = read_loan_asset(env)?;
    let position = accrue_position(env, who)?;

    require_active_loan(env, &position);

    let total_owed = position.total_debt().ok_or(Error::MathOverflowError)?;

    pull_to_custody(env, &loan_asset, who, total_owed)?;
    write_position(
        env,
        who,
        &AccountPosition {
            collateral: position.collateral,
            principal: 0,
            interest: 0,
            last_accrual: 0,
        },
    )?;

    event::loan_repaid(env, who, total_owed, position.interest);

    Ok(())
}
