pub mod sqrt_price;

pub use sqrt_price::*;
