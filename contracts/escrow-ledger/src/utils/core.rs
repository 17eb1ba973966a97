use crate::errors::ContractErrors;
use crate::storage::core::{CoreDataKeys, CoreStorageFunc, Offer};
use soroban_sdk::{log, panic_with_error, Address, Env};

pub fn can_init_contract(e: &Env) {
    if e._core().address(&CoreDataKeys::Admin).is_some() {
        panic_with_error!(&e, &ContractErrors::AlreadyInitialized);
    }
}

pub fn is_admin(e: &Env, caller: &Address) -> bool {
    match e._core().address(&CoreDataKeys::Admin) {
        Some(admin) => &admin == caller,
        None => false,
    }
}

pub fn validate_started(e: &Env) {
    if e._core().address(&CoreDataKeys::Admin).is_none() {
        panic_with_error!(&e, &ContractErrors::NotStarted);
    }
}

/// Authenticates `caller` and rejects anyone other than the stored admin.
pub fn validate_admin(e: &Env, caller: &Address) {
    validate_started(e);
    caller.require_auth();

    if !is_admin(e, caller) {
        log!(e, "admin call rejected", caller.clone());
        panic_with_error!(&e, &ContractErrors::Unauthorized);
    }
}

pub fn get_admin(e: &Env) -> Address {
    e._core()
        .address(&CoreDataKeys::Admin)
        .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::NotStarted))
}

pub fn get_asset(e: &Env) -> Address {
    e._core()
        .address(&CoreDataKeys::Asset)
        .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::NotStarted))
}

pub fn get_offer(e: &Env) -> Offer {
    e._core()
        .offer()
        .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::NotStarted))
}
