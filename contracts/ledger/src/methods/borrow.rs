use ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_loan_asset, write_position};

use super::utils::accrual::accrue_position;
use super::utils::custody::{custody_balance, release_from_custody};
use super::utils::validation::{
    require_borrow_limit_not_exceeded, require_liquidity, require_not_paused,
    require_positive_amount,
};

pub fn borrow(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let loan_asset = read_loan_asset(env)?;
    let mut position = accrue_position(env, who)?;

    require_borrow_limit_not_exceeded(env, &position, amount)?;
    require_liquidity(env, custody_balance(env, &loan_asset), amount);

    if position.principal == 0 {
        position.last_accrual = env.ledger().timestamp();
    }

    position.principal = position
        .principal
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    // funds flow out: the debt is recorded before custody moves
    write_position(env, who, &position)?;
    release_from_custody(env, &loan_asset, who, amount)?;

    event::loan_borrowed(env, who, amount);

    Ok(())
}
