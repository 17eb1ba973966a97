use soroban_sdk::{contracttype, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 30;
pub const INSTANCE_BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Terms applied to new deposits.
/// `rate` is expressed in basis points (1/10000) and `duration` in whole days.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Offer {
    pub rate: u32,
    pub duration: u32,
}

#[contracttype]
pub enum CoreDataKeys {
    Admin,
    Asset,
    Collateral,
    Offer,
    Baker,
}

pub struct Core {
    pub env: Env,
}

impl Core {
    #[inline(always)]
    pub fn new(e: &Env) -> Core {
        Core { env: e.clone() }
    }

    pub fn address(&self, key: &CoreDataKeys) -> Option<Address> {
        self.env.storage().instance().get(key)
    }

    pub fn set_address(&self, key: &CoreDataKeys, address: &Address) {
        self.env.storage().instance().set(key, address);
    }

    pub fn collateral(&self) -> u128 {
        self.env
            .storage()
            .instance()
            .get(&CoreDataKeys::Collateral)
            .unwrap_or(0)
    }

    pub fn set_collateral(&self, amount: &u128) {
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::Collateral, amount);
    }

    pub fn offer(&self) -> Option<Offer> {
        self.env.storage().instance().get(&CoreDataKeys::Offer)
    }

    pub fn set_offer(&self, offer: &Offer) {
        self.env.storage().instance().set(&CoreDataKeys::Offer, offer);
    }

    pub fn baker(&self) -> Option<Address> {
        self.env.storage().instance().get(&CoreDataKeys::Baker)
    }

    pub fn set_baker(&self, baker: &Option<Address>) {
        match baker {
            Some(v) => self.env.storage().instance().set(&CoreDataKeys::Baker, v),
            None => self.env.storage().instance().remove(&CoreDataKeys::Baker),
        }
    }

    pub fn bump(&self) {
        self.env
            .storage()
            .instance()
            .extend_ttl(INSTANCE_BUMP_CONSTANT_THRESHOLD, INSTANCE_BUMP_CONSTANT);
    }
}

pub trait CoreStorageFunc {
    fn _core(&self) -> Core;
}

impl CoreStorageFunc for Env {
    #[inline(always)]
    fn _core(&self) -> Core {
        Core::new(self)
    }
}
