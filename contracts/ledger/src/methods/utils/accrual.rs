use common::{INTEREST_RATE, PERIOD_LENGTH};
use ledger_interface::types::account_position::AccountPosition;
use ledger_interface::types::accrual_policy::AccrualPolicy;
use ledger_interface::types::error::Error;
use soroban_sdk::{log, Address, Env};

use crate::storage::{read_accrual_policy, read_position};

use super::get_elapsed_periods::get_elapsed_periods;

/// Charges interest for every whole period elapsed since `last_accrual`.
///
/// The baseline advances by whole periods only, so the remainder of a
/// partial period is charged by a later call. A position without principal
/// is returned unchanged.
pub fn accrue(
    position: &AccountPosition,
    current_time: u64,
    policy: AccrualPolicy,
) -> Result<AccountPosition, Error> {
    let mut accrued = position.clone();

    if position.principal == 0 {
        return Ok(accrued);
    }

    let periods = get_elapsed_periods(position.last_accrual, current_time, PERIOD_LENGTH);
    if periods == 0 {
        return Ok(accrued);
    }

    accrued.interest = match policy {
        AccrualPolicy::Simple => simple_interest(position, periods),
        AccrualPolicy::Compounding => compounded_interest(position, periods),
    }
    .ok_or(Error::MathOverflowError)?;

    accrued.last_accrual = periods
        .checked_mul(PERIOD_LENGTH)
        .and_then(|elapsed| position.last_accrual.checked_add(elapsed))
        .ok_or(Error::MathOverflowError)?;

    Ok(accrued)
}

fn simple_interest(position: &AccountPosition, periods: u64) -> Option<i128> {
    INTEREST_RATE
        .mul_int(position.principal)?
        .checked_mul(i128::from(periods))?
        .checked_add(position.interest)
}

fn compounded_interest(position: &AccountPosition, periods: u64) -> Option<i128> {
    let mut interest = position.interest;

    for _ in 0..periods {
        let debt = position.principal.checked_add(interest)?;
        interest = interest.checked_add(INTEREST_RATE.mul_int(debt)?)?;
    }

    Some(interest)
}

/// Reads `who` position and brings its interest up to the current ledger timestamp.
/// Nothing is written.
pub fn accrue_position(env: &Env, who: &Address) -> Result<AccountPosition, Error> {
    let position = read_position(env, who);
    let accrued = accrue(
        &position,
        env.ledger().timestamp(),
        read_accrual_policy(env)?,
    )?;

    if accrued.interest != position.interest {
        log!(
            env,
            "interest accrued",
            who.clone(),
            accrued.interest - position.interest,
            accrued.last_accrual
        );
    }

    Ok(accrued)
}
