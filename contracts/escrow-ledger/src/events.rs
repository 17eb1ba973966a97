use crate::storage::core::Offer;
use crate::storage::deposits::DepositRecord;
use soroban_sdk::{symbol_short, Address, BytesN, Env};

pub fn initialized(e: &Env, admin: &Address, asset: &Address, offer: &Offer) {
    e.events().publish(
        (symbol_short!("init"), admin.clone()),
        (asset.clone(), offer.clone()),
    );
}

pub fn delegated(e: &Env, baker: &Option<Address>) {
    e.events()
        .publish((symbol_short!("delegate"),), baker.clone());
}

pub fn collateralized(e: &Env, amount: &u128, collateral: &u128) {
    e.events()
        .publish((symbol_short!("collat"),), (*amount, *collateral));
}

pub fn uncollateralized(e: &Env, amount: &u128, collateral: &u128) {
    e.events()
        .publish((symbol_short!("uncollat"),), (*amount, *collateral));
}

pub fn offer_updated(e: &Env, offer: &Offer) {
    e.events().publish((symbol_short!("offer"),), offer.clone());
}

pub fn deposited(e: &Env, depositor: &Address, principal: &u128, record: &DepositRecord) {
    e.events().publish(
        (symbol_short!("deposit"), depositor.clone()),
        (*principal, record.clone()),
    );
}

pub fn withdrawn(e: &Env, depositor: &Address, amount: &u128) {
    e.events()
        .publish((symbol_short!("withdraw"), depositor.clone()), *amount);
}

pub fn upgraded(e: &Env, hash: &BytesN<32>) {
    e.events().publish((symbol_short!("upgrade"),), hash.clone());
}
