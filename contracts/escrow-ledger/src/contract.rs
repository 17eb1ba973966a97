use crate::errors::ContractErrors;
use crate::events;
use crate::storage::core::{CoreDataKeys, CoreStorageFunc, Offer};
use crate::storage::deposits::{DepositRecord, DepositsStorageFunc};
use crate::utils::core::{
    can_init_contract, get_admin, get_asset, get_offer, validate_admin, validate_started,
};
use crate::utils::deposits::{accepts_offer, calculate_due, calculate_interest};
use crate::utils::payments::{receive_funds, send_funds};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, BytesN, Env};

pub trait EscrowLedgerContractTrait {
    fn init(e: Env, admin: Address, asset: Address, rate: u32, duration: u32);

    fn upgrade(e: Env, caller: Address, hash: BytesN<32>);

    // Admin operations
    fn delegate(e: Env, caller: Address, baker: Option<Address>, amount: u128);
    fn collateralize(e: Env, caller: Address, amount: u128);
    fn uncollateralize(e: Env, caller: Address, amount: u128);
    fn set_offer(e: Env, caller: Address, rate: u32, duration: u32);

    // Depositor operations
    fn deposit(e: Env, caller: Address, amount: u128, rate: u32, duration: u32);
    fn withdraw(e: Env, caller: Address);

    // Reads
    fn get_admin(e: Env) -> Address;
    fn get_asset(e: Env) -> Address;
    fn get_collateral(e: Env) -> u128;
    fn get_offer(e: Env) -> Offer;
    fn get_baker(e: Env) -> Option<Address>;
    fn get_deposit(e: Env, depositor: Address) -> Option<DepositRecord>;
}

#[contract]
pub struct EscrowLedgerContract;

#[contractimpl]
impl EscrowLedgerContractTrait for EscrowLedgerContract {
    fn init(e: Env, admin: Address, asset: Address, rate: u32, duration: u32) {
        can_init_contract(&e);

        let offer: Offer = Offer { rate, duration };

        e._core().set_address(&CoreDataKeys::Admin, &admin);
        e._core().set_address(&CoreDataKeys::Asset, &asset);
        e._core().set_collateral(&0);
        e._core().set_offer(&offer);
        e._core().bump();

        events::initialized(&e, &admin, &asset, &offer);
    }

    fn upgrade(e: Env, caller: Address, hash: BytesN<32>) {
        validate_admin(&e, &caller);
        e.deployer().update_current_contract_wasm(hash.clone());
        e._core().bump();

        events::upgraded(&e, &hash);
    }

    fn delegate(e: Env, caller: Address, baker: Option<Address>, amount: u128) {
        validate_admin(&e, &caller);

        if amount != 0 {
            panic_with_error!(&e, &ContractErrors::UnexpectedPayment);
        }

        e._core().set_baker(&baker);
        e._core().bump();

        events::delegated(&e, &baker);
    }

    fn collateralize(e: Env, caller: Address, amount: u128) {
        validate_admin(&e, &caller);

        if amount == 0 {
            panic_with_error!(&e, &ContractErrors::InvalidAmount);
        }

        let collateral: u128 = e
            ._core()
            .collateral()
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::InvalidAmount));

        receive_funds(&e, &get_asset(&e), &caller, &amount);

        e._core().set_collateral(&collateral);
        e._core().bump();

        events::collateralized(&e, &amount, &collateral);
    }

    fn uncollateralize(e: Env, caller: Address, amount: u128) {
        validate_admin(&e, &caller);

        let current: u128 = e._core().collateral();
        let collateral: u128 = current.checked_sub(amount).unwrap_or_else(|| {
            log!(&e, "collateral release rejected", amount, current);
            panic_with_error!(&e, &ContractErrors::InsufficientCollateral)
        });

        e._core().set_collateral(&collateral);
        send_funds(&e, &get_asset(&e), &caller, &amount);
        e._core().bump();

        events::uncollateralized(&e, &amount, &collateral);
    }

    fn set_offer(e: Env, caller: Address, rate: u32, duration: u32) {
        validate_admin(&e, &caller);

        let offer: Offer = Offer { rate, duration };
        e._core().set_offer(&offer);
        e._core().bump();

        events::offer_updated(&e, &offer);
    }

    fn deposit(e: Env, caller: Address, amount: u128, rate: u32, duration: u32) {
        caller.require_auth();

        let offer: Offer = get_offer(&e);

        if amount == 0 {
            panic_with_error!(&e, &ContractErrors::InvalidAmount);
        }

        if !accepts_offer(&offer, &rate, &duration) {
            log!(&e, "terms not offered", rate, duration, offer.rate, offer.duration);
            panic_with_error!(&e, &ContractErrors::OfferMismatch);
        }

        if e._deposits().has(&caller) {
            panic_with_error!(&e, &ContractErrors::DuplicateDeposit);
        }

        let interest: u128 = calculate_interest(&amount, &offer.rate)
            .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::InvalidAmount));

        let current: u128 = e._core().collateral();
        let collateral: u128 = current.checked_sub(interest).unwrap_or_else(|| {
            log!(&e, "interest exceeds collateral", interest, current);
            panic_with_error!(&e, &ContractErrors::InsufficientCollateral)
        });

        let record: DepositRecord = DepositRecord {
            amount: amount
                .checked_add(interest)
                .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::InvalidAmount)),
            due: calculate_due(e.ledger().timestamp(), &offer.duration),
        };

        receive_funds(&e, &get_asset(&e), &caller, &amount);

        e._deposits().set(&caller, &record);
        e._deposits().bump(&caller);

        e._core().set_collateral(&collateral);
        e._core().bump();

        events::deposited(&e, &caller, &amount, &record);
    }

    fn withdraw(e: Env, caller: Address) {
        caller.require_auth();

        let record: DepositRecord = e
            ._deposits()
            .get(&caller)
            .unwrap_or_else(|| panic_with_error!(&e, &ContractErrors::NoSuchDeposit));

        if e.ledger().timestamp() < record.due {
            panic_with_error!(&e, &ContractErrors::NotYetMatured);
        }

        e._deposits().remove(&caller);
        send_funds(&e, &get_asset(&e), &caller, &record.amount);
        e._core().bump();

        events::withdrawn(&e, &caller, &record.amount);
    }

    fn get_admin(e: Env) -> Address {
        e._core().bump();
        get_admin(&e)
    }

    fn get_asset(e: Env) -> Address {
        e._core().bump();
        get_asset(&e)
    }

    fn get_collateral(e: Env) -> u128 {
        validate_started(&e);
        e._core().bump();
        e._core().collateral()
    }

    fn get_offer(e: Env) -> Offer {
        e._core().bump();
        get_offer(&e)
    }

    fn get_baker(e: Env) -> Option<Address> {
        validate_started(&e);
        e._core().bump();
        e._core().baker()
    }

    fn get_deposit(e: Env, depositor: Address) -> Option<DepositRecord> {
        validate_started(&e);
        e._core().bump();
        let record: Option<DepositRecord> = e._deposits().get(&depositor);
        if record.is_some() {
            e._deposits().bump(&depositor);
        }
        record
    }
}
