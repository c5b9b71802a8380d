pub mod account;
pub mod factory;
pub mod guard;
pub mod transaction;
