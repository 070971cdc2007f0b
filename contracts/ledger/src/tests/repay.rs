use crate::tests::sut::{approve, init_ledger, set_time, DAY, RESERVE, START, WEEK};
use crate::*;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, Events};
use soroban_sdk::{symbol_short, vec, IntoVal, Symbol};

#[test]
fn should_require_authorized_caller() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env, AccrualPolicy::Simple);
    let user = Address::generate(&env);
    sut.deposit(&env, &user, 150);
    sut.ledger.borrow(&user, &100);
    sut.prepare_repay(&env, &user);

    sut.ledger.repay(&user);

    assert_eq!(
        env.auths().pop().map(|f| f.1.function).unwrap(),
        AuthorizedFunction::Contract((
            sut.ledger.address.clone(),
            symbol_short!("repay"),
            (user.clone(),).into_val(&env)
        )),
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #2)")]
fn should_fail_when_paused() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env, AccrualPolicy::Simple);
    let user = Address::generate(&env);
    sut.deposit(&env, &user, 150);
    sut.ledger.borrow(&user, &100);
    sut.prepare_repay(&env, &user);

    sut.ledger.set_pause(&true);
    sut.ledger.repay(&user);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #203)")]
fn should_fail_without_active_loan() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env, AccrualPolicy::Simple);
    let user = Address::generate(&env);
    sut.deposit(&env, &user, 150);

    sut.ledger.repay(&user);
}

#[test]
fn should_repay_principal_within_first_period() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env, AccrualPolicy::Simple);
    let user = Address::generate(&env);
    sut.deposit(&env, &user, 150);
    sut.ledger.borrow(&user, &100);

    set_time(&env, START + 6 * DAY);
    let owed = sut.prepare_repay(&env, &user);
    sut.ledger.repay(&user);

    assert_eq!(owed, 100);
    assert_eq!(sut.loan.balance(&user), 0);
    assert_eq!(sut.ledger.reserve_balance(), RESERVE);
    assert_eq!(
        sut.ledger.account_position(&user),
        AccountPosition {
            collateral: 150,
            principal: 0,
            interest: 0,
            last_accrual: 0,
        }
    );
}

#[test]
fn should_repay_principal_and_interest() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env, AccrualPolicy::Simple);
    let user = Address::generate(&env);
    sut.deposit(&env, &user, 150);
    sut.ledger.borrow(&user, &100);

    set_time(&env, START + WEEK);
    let owed = sut.prepare_repay(&env, &user);
    sut.ledger.repay(&user);

    let position = sut.ledger.get_position(&user);

    assert_eq!(owed, 105);
    assert_eq!(position.debt, 0);
    assert_eq!(position.interest, 0);
    assert_eq!(position.collateral, 150);
    assert_eq!(sut.loan.balance(&user), 0);
    assert_eq!(sut.ledger.reserve_balance(), RESERVE + 5);
}

#[test]
fn should_fail_when_balance_is_insufficient() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env, AccrualPolicy::Simple);
    let user = Address::generate(&env);
    sut.deposit(&env, &user, 150);
    sut.ledger.borrow(&user, &100);

    set_time(&env, START + WEEK);
    approve(&env, &sut.loan, &user, &sut.ledger.address, 105);

    assert_eq!(
        sut.ledger.try_repay(&user),
        Err(Ok(Error::InsufficientBalance))
    );
    assert_eq!(
        sut.ledger.account_position(&user),
        AccountPosition {
            collateral: 150,
            principal: 100,
            interest: 0,
            last_accrual: START,
        }
    );
}

#[test]
fn should_fail_when_allowance_is_insufficient() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env, AccrualPolicy::Simple);
    let user = Address::generate(&env);
    sut.deposit(&env, &user, 150);
    sut.ledger.borrow(&user, &100);

    set_time(&env, START + WEEK);
    sut.loan_admin.mint(&user, &5);
    approve(&env, &sut.loan, &user, &sut.ledger.address, 100);

    assert_eq!(
        sut.ledger.try_repay(&user),
        Err(Ok(Error::InsufficientAllowance))
    );
    assert_eq!(sut.ledger.get_position(&user).debt, 100);
    assert_eq!(sut.loan.balance(&user), 105);
}

#[test]
fn should_reset_accrual_baseline() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env, AccrualPolicy::Simple);
    let user = Address::generate(&env);
    sut.deposit(&env, &user, 150);
    sut.ledger.borrow(&user, &100);

    set_time(&env, START + WEEK + 3 * DAY);
    sut.prepare_repay(&env, &user);
    sut.ledger.repay(&user);

    sut.ledger.borrow(&user, &100);

    assert_eq!(
        sut.ledger.account_position(&user).last_accrual,
        START + WEEK + 3 * DAY
    );

    set_time(&env, START + 2 * WEEK + 3 * DAY - 1);
    assert_eq!(sut.ledger.get_position(&user).interest, 0);

    set_time(&env, START + 2 * WEEK + 3 * DAY);
    assert_eq!(sut.ledger.get_position(&user).interest, 5);
}

#[test]
fn should_emit_events() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env, AccrualPolicy::Simple);
    let user = Address::generate(&env);
    sut.deposit(&env, &user, 150);
    sut.ledger.borrow(&user, &100);

    set_time(&env, START + WEEK);
    sut.prepare_repay(&env, &user);
    sut.ledger.repay(&user);

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.ledger.address.clone(),
                (Symbol::new(&env, "loan_repaid"), user.clone()).into_val(&env),
                (105i128, 5i128).into_val(&env)
            ),
        ]
    );
}
