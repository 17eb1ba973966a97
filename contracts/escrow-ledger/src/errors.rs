use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractErrors {
    // Core
    NotStarted = 0,
    AlreadyInitialized = 1,

    // Admin
    Unauthorized = 10,
    UnexpectedPayment = 11,

    // Collateral
    InsufficientCollateral = 20,
    InvalidAmount = 21,

    // Deposits
    OfferMismatch = 30,
    DuplicateDeposit = 31,

    // Withdraws
    NoSuchDeposit = 40,
    NotYetMatured = 41,

    // Payments
    FundsDepositFailed = 50,
    FundsWithdrawFailed = 51,
}
