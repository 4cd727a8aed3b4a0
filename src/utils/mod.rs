pub mod account;
pub mod cpi;
pub mod pda;

pub use account::*;
pub use cpi::*;
pub use pda::*;
