use ledger_interface::types::account_position::AccountPosition;
use ledger_interface::types::accrual_policy::AccrualPolicy;
use ledger_interface::types::error::Error;
use soroban_sdk::{assert_with_error, contracttype, Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    CollateralAsset,
    LoanAsset,
    AccrualPolicy,
    Pause,
    Position(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

pub fn has_admin(env: &Env) -> bool {
    bump_instance(env);

    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn write_collateral_asset(env: &Env, asset: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::CollateralAsset, asset);
}

pub fn read_collateral_asset(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::CollateralAsset)
        .ok_or(Error::Uninitialized)
}

pub fn write_loan_asset(env: &Env, asset: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::LoanAsset, asset);
}

pub fn read_loan_asset(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::LoanAsset)
        .ok_or(Error::Uninitialized)
}

pub fn write_accrual_policy(env: &Env, policy: &AccrualPolicy) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::AccrualPolicy, policy);
}

pub fn read_accrual_policy(env: &Env) -> Result<AccrualPolicy, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::AccrualPolicy)
        .ok_or(Error::Uninitialized)
}

pub fn paused(env: &Env) -> bool {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Pause)
        .unwrap_or(false)
}

pub fn write_pause(env: &Env, value: bool) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Pause, &value);
}

/// Missing positions read as all-zero
pub fn read_position(env: &Env, who: &Address) -> AccountPosition {
    let key = DataKey::Position(who.clone());
    let position = env.storage().persistent().get(&key);

    if position.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    position.unwrap_or_default()
}

pub fn write_position(env: &Env, who: &Address, position: &AccountPosition) -> Result<(), Error> {
    assert_with_error!(
        env,
        !position.collateral.is_negative()
            && !position.principal.is_negative()
            && !position.interest.is_negative(),
        Error::MustBeNonNegative
    );

    let key = DataKey::Position(who.clone());
    env.storage().persistent().set(&key, position);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );

    Ok(())
}
