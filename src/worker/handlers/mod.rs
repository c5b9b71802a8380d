pub mod close;
pub mod deposit;
pub mod inquiry;
pub mod open;
pub mod withdrawal;
