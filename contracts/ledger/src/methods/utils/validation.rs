use common::max_debt;
use ledger_interface::types::account_position::AccountPosition;
use ledger_interface::types::error::Error;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::{has_admin, paused, read_admin};

pub fn require_admin_not_exist(env: &Env) {
    if has_admin(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_admin(env: &Env) -> Result<(), Error> {
    let admin: Address = read_admin(env)?;
    admin.require_auth();
    Ok(())
}

pub fn require_distinct_assets(env: &Env, collateral_asset: &Address, loan_asset: &Address) {
    assert_with_error!(env, collateral_asset != loan_asset, Error::InvalidAssets);
}

pub fn require_not_paused(env: &Env) {
    assert_with_error!(env, !paused(env), Error::Paused);
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}

/// Check that principal + interest + amount <= floor(collateral * 100 / COLLATERAL_RATIO)
pub fn require_borrow_limit_not_exceeded(
    env: &Env,
    position: &AccountPosition,
    amount: i128,
) -> Result<(), Error> {
    let max_total = max_debt(position.collateral).ok_or(Error::MathOverflowError)?;
    let total_after = position
        .total_debt()
        .and_then(|debt| debt.checked_add(amount))
        .ok_or(Error::MathOverflowError)?;

    assert_with_error!(env, total_after <= max_total, Error::ExceedsBorrowLimit);

    Ok(())
}

pub fn require_liquidity(env: &Env, reserve: i128, amount: i128) {
    assert_with_error!(env, reserve >= amount, Error::InsufficientLiquidity);
}

pub fn require_active_loan(env: &Env, position: &AccountPosition) {
    assert_with_error!(env, position.has_debt(), Error::NoActiveLoan);
}

pub fn require_collateral(env: &Env, position: &AccountPosition) {
    assert_with_error!(env, position.collateral > 0, Error::NoCollateral);
}

pub fn require_zero_debt(env: &Env, position: &AccountPosition) {
    assert_with_error!(env, !position.has_debt(), Error::DebtOutstanding);
}

pub fn require_sufficient_balance(env: &Env, balance: i128, amount: i128) {
    assert_with_error!(env, balance >= amount, Error::InsufficientBalance);
}

pub fn require_sufficient_allowance(env: &Env, allowance: i128, amount: i128) {
    assert_with_error!(env, allowance >= amount, Error::InsufficientAllowance);
}
