#![deny(warnings)]
#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenMockError {
    TransferRejected = 1,
}

/// Reports unlimited balance and allowance for everyone but rejects every transfer.
/// Implements only the part of the token interface the ledger calls.
#[contract]
pub struct RejectingToken;

#[contractimpl]
impl RejectingToken {
    pub fn balance(_env: Env, _id: Address) -> i128 {
        i128::MAX
    }

    pub fn allowance(_env: Env, _from: Address, _spender: Address) -> i128 {
        i128::MAX
    }

    pub fn transfer(env: Env, _from: Address, _to: Address, _amount: i128) {
        panic_with_error!(&env, TokenMockError::TransferRejected);
    }

    pub fn transfer_from(env: Env, _spender: Address, _from: Address, _to: Address, _amount: i128) {
        panic_with_error!(&env, TokenMockError::TransferRejected);
    }
}
