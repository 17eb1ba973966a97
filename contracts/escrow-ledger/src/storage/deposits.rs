use soroban_sdk::{contracttype, Address, Env};

pub const PERSISTENT_BUMP_CONSTANT: u32 = 1036800;
pub const PERSISTENT_BUMP_CONSTANT_THRESHOLD: u32 = 518400;

/// Payout owed to a depositor once `due` is reached.
/// `amount` already includes the interest reserved at admission.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositRecord {
    pub amount: u128,
    pub due: u64,
}

#[contracttype]
pub enum DepositsDataKeys {
    Deposit(Address),
}

pub struct Deposits {
    pub env: Env,
}

impl Deposits {
    #[inline(always)]
    fn new(e: &Env) -> Deposits {
        Deposits { env: e.clone() }
    }

    pub fn get(&self, depositor: &Address) -> Option<DepositRecord> {
        self.env
            .storage()
            .persistent()
            .get(&DepositsDataKeys::Deposit(depositor.clone()))
    }

    pub fn has(&self, depositor: &Address) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&DepositsDataKeys::Deposit(depositor.clone()))
    }

    pub fn set(&self, depositor: &Address, record: &DepositRecord) {
        self.env
            .storage()
            .persistent()
            .set(&DepositsDataKeys::Deposit(depositor.clone()), record);
    }

    pub fn bump(&self, depositor: &Address) {
        self.env.storage().persistent().extend_ttl(
            &DepositsDataKeys::Deposit(depositor.clone()),
            PERSISTENT_BUMP_CONSTANT_THRESHOLD,
            PERSISTENT_BUMP_CONSTANT,
        );
    }

    pub fn remove(&self, depositor: &Address) {
        self.env
            .storage()
            .persistent()
            .remove(&DepositsDataKeys::Deposit(depositor.clone()))
    }
}

pub trait DepositsStorageFunc {
    fn _deposits(&self) -> Deposits;
}

impl DepositsStorageFunc for Env {
    fn _deposits(&self) -> Deposits {
        Deposits::new(self)
    }
}
