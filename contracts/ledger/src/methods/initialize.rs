use ledger_interface::types::accrual_policy::AccrualPolicy;
use ledger_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{
    write_accrual_policy, write_admin, write_collateral_asset, write_loan_asset, write_pause,
};

use super::utils::validation::{require_admin_not_exist, require_distinct_assets};

pub fn initialize(
    env: &Env,
    admin: &Address,
    collateral_asset: &Address,
    loan_asset: &Address,
    accrual_policy: AccrualPolicy,
) -> Result<(), Error> {
    require_admin_not_exist(env);
    require_distinct_assets(env, collateral_asset, loan_asset);

    write_admin(env, admin);
    write_collateral_asset(env, collateral_asset);
    write_loan_asset(env, loan_asset);
    write_accrual_policy(env, &accrual_policy);
    write_pause(env, false);

    event::initialized(env, admin, collateral_asset, loan_asset, accrual_policy);

    Ok(())
}
