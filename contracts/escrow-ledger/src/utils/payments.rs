use crate::errors::ContractErrors;
use soroban_sdk::{panic_with_error, token, Address, Env};

fn token_amount(e: &Env, amount: &u128) -> i128 {
    i128::try_from(*amount)
        .unwrap_or_else(|_| panic_with_error!(&e, &ContractErrors::InvalidAmount))
}

pub fn receive_funds(e: &Env, asset: &Address, from: &Address, amount: &u128) {
    let result = token::Client::new(e, asset).try_transfer(
        from,
        &e.current_contract_address(),
        &token_amount(e, amount),
    );

    if result.is_err() {
        panic_with_error!(&e, &ContractErrors::FundsDepositFailed);
    }
}

pub fn send_funds(e: &Env, asset: &Address, to: &Address, amount: &u128) {
    let result = token::Client::new(e, asset).try_transfer(
        &e.current_contract_address(),
        to,
        &token_amount(e, amount),
    );

    if result.is_err() {
        panic_with_error!(&e, &ContractErrors::FundsWithdrawFailed);
    }
}
