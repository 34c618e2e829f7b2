pub mod mab;
pub mod payment;
pub mod time;
pub mod vault;
