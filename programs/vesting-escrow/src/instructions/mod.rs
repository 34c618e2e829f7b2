pub mod close;
pub mod configure;
pub mod create;
pub mod fill;
pub mod participate;
pub mod quote;
pub mod setup;
pub mod transfer_ownership;
pub mod withdraw;

pub use close::*;
pub use configure::*;
pub use create::*;
pub use fill::*;
pub use participate::*;
pub use quote::*;
pub use setup::*;
pub use transfer_ownership::*;
pub use withdraw::*;
