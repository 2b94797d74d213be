use anchor_lang::prelude::*;

/// Custom error codes for the GMM token and allocator.
#[error_code]
pub enum GamiumError {
    #[msg("Ownable: caller is not the owner")]
    CallerIsNotOwner,

    #[msg("Caller is not the minter")]
    CallerIsNotMinter,

    #[msg("Capped: cap exceeded")]
    CapExceeded,

    #[msg("Category allocation exceeded")]
    CategoryAllocationExceeded,

    #[msg("Category does not exist")]
    CategoryDoesNotExist,

    #[msg("TGE event did not start yet")]
    TgeNotStarted,

    #[msg("TGE start is already set")]
    TgeAlreadyStarted,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Exactly one beneficiary per category is required")]
    InvalidBeneficiaries,

    #[msg("Category allocations do not sum to the token cap")]
    AllocationMismatch,

    #[msg("A balance account is required for every category beneficiary")]
    MissingBeneficiaryAccounts,

    #[msg("Balance account does not belong to the category beneficiary")]
    InvalidBeneficiaryAccount,

    #[msg("Account belongs to a different token config")]
    InvalidTokenConfig,

    #[msg("Token name or symbol too long")]
    NameTooLong,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Result of the pure ledger and vesting logic. Converts into an anchor
/// `Result` with `?`.
pub type GamiumResult<T> = std::result::Result<T, GamiumError>;
