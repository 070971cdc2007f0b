use ledger_interface::types::accrual_policy::AccrualPolicy;
use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn initialized(
    e: &Env,
    admin: &Address,
    collateral_asset: &Address,
    loan_asset: &Address,
    policy: AccrualPolicy,
) {
    let topics = (
        Symbol::new(e, "initialize"),
        admin.clone(),
        collateral_asset.clone(),
        loan_asset.clone(),
    );
    e.events().publish(topics, policy);
}

pub(crate) fn pause_changed(e: &Env, value: bool) {
    let topics = (Symbol::new(e, "pause_changed"),);
    e.events().publish(topics, value);
}

pub(crate) fn collateral_deposited(e: &Env, who: &Address, amount: i128) {
    let topics = (Symbol::new(e, "collateral_deposited"), who.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn loan_borrowed(e: &Env, who: &Address, amount: i128) {
    let topics = (Symbol::new(e, "loan_borrowed"), who.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn loan_repaid(e: &Env, who: &Address, total_amount: i128, interest: i128) {
    let topics = (Symbol::new(e, "loan_repaid"), who.clone());
    e.events().publish(topics, (total_amount, interest));
}

pub(crate) fn collateral_withdrawn(e: &Env, who: &Address, amount: i128) {
    let topics = (Symbol::new(e, "collateral_withdrawn"), who.clone());
    e.events().publish(topics, amount);
}
