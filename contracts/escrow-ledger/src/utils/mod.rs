pub mod core;
pub mod deposits;
pub mod payments;
