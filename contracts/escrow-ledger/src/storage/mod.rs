pub mod core;
pub mod deposits;
