#![deny(warnings)]
#![no_std]

use ledger_interface::types::{
    account_position::AccountPosition, accrual_policy::AccrualPolicy, error::Error,
    position_view::PositionView,
};
use ledger_interface::CollateralLedgerTrait;
use methods::{
    borrow::borrow, collateralization_ratio::collateralization_ratio,
    deposit_collateral::deposit_collateral, get_position::get_position, initialize::initialize,
    max_additional_borrow::max_additional_borrow, repay::repay, reserve_balance::reserve_balance,
    set_pause::set_pause, withdraw_collateral::withdraw_collateral,
};
use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;

#[contract]
pub struct CollateralLedger;

#[contractimpl]
impl CollateralLedgerTrait for CollateralLedger {
    fn initialize(
        env: Env,
        admin: Address,
        collateral_asset: Address,
        loan_asset: Address,
        accrual_policy: AccrualPolicy,
    ) -> Result<(), Error> {
        initialize(&env, &admin, &collateral_asset, &loan_asset, accrual_policy)
    }

    fn version() -> u32 {
        1
    }

    fn set_pause(env: Env, value: bool) -> Result<(), Error> {
        set_pause(&env, value)
    }

    fn paused(env: Env) -> bool {
        paused(&env)
    }

    fn collateral_asset(env: Env) -> Result<Address, Error> {
        read_collateral_asset(&env)
    }

    fn loan_asset(env: Env) -> Result<Address, Error> {
        read_loan_asset(&env)
    }

    fn accrual_policy(env: Env) -> Result<AccrualPolicy, Error> {
        read_accrual_policy(&env)
    }

    fn deposit_collateral(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        deposit_collateral(&env, &who, amount)
    }

    fn borrow(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        borrow(&env, &who, amount)
    }

    fn repay(env: Env, who: Address) -> Result<(), Error> {
        repay(&env, &who)
    }

    fn withdraw_collateral(env: Env, who: Address) -> Result<(), Error> {
        withdraw_collateral(&env, &who)
    }

    fn get_position(env: Env, who: Address) -> Result<PositionView, Error> {
        get_position(&env, &who)
    }

    fn max_additional_borrow(env: Env, who: Address) -> Result<i128, Error> {
        max_additional_borrow(&env, &who)
    }

    fn collateralization_ratio(env: Env, who: Address) -> Result<i128, Error> {
        collateralization_ratio(&env, &who)
    }

    fn account_position(env: Env, who: Address) -> AccountPosition {
        read_position(&env, &who)
    }

    fn reserve_balance(env: Env) -> Result<i128, Error> {
        reserve_balance(&env)
    }
}
