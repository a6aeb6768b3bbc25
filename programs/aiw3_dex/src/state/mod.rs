pub mod config;
pub mod swap_pool;
pub mod token_info;

pub use config::*;
pub use swap_pool::*;
pub use token_info::*;
