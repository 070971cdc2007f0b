use ledger_interface::types::error::Error;
use soroban_sdk::{log, token, Address, Env};

use super::validation::{require_sufficient_allowance, require_sufficient_balance};

/// Pulls `amount` of `asset` from `from` into ledger custody.
/// `from` must have approved the ledger as spender beforehand.
pub fn pull_to_custody(env: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    let ledger = env.current_contract_address();
    let token = token::Client::new(env, asset);

    require_sufficient_balance(env, token.balance(from), amount);
    require_sufficient_allowance(env, token.allowance(from, &ledger), amount);

    log!(env, "custody in", asset.clone(), from.clone(), amount);

    match token.try_transfer_from(&ledger, from, &ledger, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

/// Sends `amount` of `asset` held by the ledger to `to`.
pub fn release_from_custody(
    env: &Env,
    asset: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let ledger = env.current_contract_address();
    let token = token::Client::new(env, asset);

    log!(env, "custody out", asset.clone(), to.clone(), amount);

    match token.try_transfer(&ledger, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

pub fn custody_balance(env: &Env, asset: &Address) -> i128 {
    token::Client::new(env, asset).balance(&env.current_contract_address())
}
