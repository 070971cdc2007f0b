#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::account_position::AccountPosition;
use types::accrual_policy::AccrualPolicy;
use types::error::Error;
use types::position_view::PositionView;

pub mod types;

pub struct Spec;

/// Interface for CollateralLedger
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "CollateralLedgerClient")]
pub trait CollateralLedgerTrait {
    fn initialize(
        env: Env,
        admin: Address,
        collateral_asset: Address,
        loan_asset: Address,
        accrual_policy: AccrualPolicy,
    ) -> Result<(), Error>;

    fn version() -> u32;

    fn set_pause(env: Env, value: bool) -> Result<(), Error>;

    fn paused(env: Env) -> bool;

    fn collateral_asset(env: Env) -> Result<Address, Error>;

    fn loan_asset(env: Env) -> Result<Address, Error>;

    fn accrual_policy(env: Env) -> Result<AccrualPolicy, Error>;

    fn deposit_collateral(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn borrow(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    fn repay(env: Env, who: Address) -> Result<(), Error>;

    fn withdraw_collateral(env: Env, who: Address) -> Result<(), Error>;

    fn get_position(env: Env, who: Address) -> Result<PositionView, Error>;

    fn max_additional_borrow(env: Env, who: Address) -> Result<i128, Error>;

    fn collateralization_ratio(env: Env, who: Address) -> Result<i128, Error>;

    fn account_position(env: Env, who: Address) -> AccountPosition;

    fn reserve_balance(env: Env) -> Result<i128, Error>;
}
