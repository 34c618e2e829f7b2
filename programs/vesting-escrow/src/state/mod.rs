pub mod escrow_state;
pub mod schedule;

pub use escrow_state::*;
pub use schedule::*;
