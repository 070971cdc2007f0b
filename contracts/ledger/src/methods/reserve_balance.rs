use ledger_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::read_loan_asset;

use super::utils::custody::custody_balance;

pub fn reserve_balance(env: &Env) -> Result<i128, Error> {
    Ok(custody_balance(env, &read_loan_asset(env)?))
}
