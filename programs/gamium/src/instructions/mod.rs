pub mod balance_accounts;
pub mod initialize_token;
pub mod open_balance;
pub mod set_minter;
pub mod mint_tokens;
pub mod transfer_ownership;
pub mod initialize_allocator;
pub mod start_tge;
pub mod unlock_liquidity;
pub mod release_tokens;
pub mod views;

pub use initialize_token::*;
pub use open_balance::*;
pub use set_minter::*;
pub use mint_tokens::*;
pub use transfer_ownership::*;
pub use initialize_allocator::*;
pub use start_tge::*;
pub use unlock_liquidity::*;
pub use release_tokens::*;
pub use views::*;
