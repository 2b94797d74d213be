//! Program-wide constants.

/// Decimal places of the GMM token.
pub const DECIMALS: u8 = 18;

/// One whole GMM in base units.
pub const ONE_GMM: u128 = 10u128.pow(DECIMALS as u32);

/// Hard maximum supply: 50 billion GMM.
pub const TOKEN_CAP: u128 = 50_000_000_000 * ONE_GMM;

/// Number of allocation categories.
pub const CATEGORY_COUNT: usize = 11;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Vesting month: fixed 30 days.
pub const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;

pub const TOKEN_CONFIG_SEED: &[u8] = b"token_config";
pub const BALANCE_SEED: &[u8] = b"balance";
pub const ALLOCATOR_SEED: &[u8] = b"allocator";
