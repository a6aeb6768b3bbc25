use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Admin address must not be the default address")]
    InvalidAdmin,
    #[msg("Fee basis points cannot exceed 10000")]
    InvalidFeeBasisPoints,
    #[msg("Token name is empty or exceeds the maximum length")]
    InvalidTokenName,
    #[msg("Token symbol is empty or exceeds the maximum length")]
    InvalidTokenSymbol,
    #[msg("Token URI exceeds the maximum length")]
    InvalidTokenUri,
    #[msg("Token decimals exceed the supported maximum")]
    InvalidDecimals,
    #[msg("Initial supply must be greater than zero")]
    InvalidInitialSupply,
    #[msg("Invalid token mint")]
    InvalidTokenMint,
    #[msg("Invalid fee recipient")]
    InvalidFeeRecipient,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Insufficient balance for the requested amount")]
    InsufficientBalance,
    #[msg("Insufficient pool liquidity for the requested amount")]
    InsufficientLiquidity,
    #[msg("Output amount is below the caller's minimum")]
    SlippageExceeded,
    #[msg("The system is paused")]
    SystemPaused,
    #[msg("Signer is not authorized for this operation")]
    Unauthorized,
    #[msg("Account is already initialized")]
    AlreadyInitialized,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
