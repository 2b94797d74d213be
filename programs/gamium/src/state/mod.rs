pub mod allocator;
pub mod category;
pub mod token_balance;
pub mod token_config;

pub use allocator::*;
pub use category::*;
pub use token_balance::*;
pub use token_config::*;
