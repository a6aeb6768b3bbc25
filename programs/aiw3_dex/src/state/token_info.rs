use anchor_lang::prelude::*;

use crate::constants::{MAX_DECIMALS, MAX_FEE_BASIS_POINTS, MAX_NAME_LEN, MAX_SYMBOL_LEN, MAX_URI_LEN};
use crate::errors::ErrorCode;
use crate::math;

/// Closed tag distinguishing the platform token from project tokens.
/// The two variants carry no behavioral difference inside this program;
/// the tag is recorded on the `TokenInfo` record and surfaced in events.
#[derive(Clone, Copy, PartialEq, Eq, Debug, AnchorSerialize, AnchorDeserialize, InitSpace)]
pub enum TokenType {
    Aiw3,
    AiAgent,
}

/// Metadata record for an issued token, keyed by its mint address.
/// Written once by `create_token` and immutable afterwards; the transfer-fee
/// fields mirror the `TransferFeeConfig` extension baked into the mint.
#[account]
#[derive(InitSpace, Debug)]
pub struct TokenInfo {
    pub mint: Pubkey,
    pub creator: Pubkey,
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    #[max_len(MAX_SYMBOL_LEN)]
    pub symbol: String,
    #[max_len(MAX_URI_LEN)]
    pub uri: String,
    pub decimals: u8,
    pub initial_supply: u64,
    /// Fee deducted by the token program on every transfer, in basis points.
    pub transfer_fee_basis_points: u16,
    /// Absolute cap on the fee deducted from a single transfer.
    pub max_fee: u64,
    pub token_type: TokenType,
    pub bump: u8,
}

/// Parameters for issuing a new token.
#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct CreateTokenParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    pub initial_supply: u64,
    pub transfer_fee_basis_points: u16,
    pub max_fee: u64,
    pub token_type: TokenType,
}

impl CreateTokenParams {
    /// Field validation, in a fixed order so the first violation decides
    /// the surfaced error.
    pub fn validate(&self) -> Result<()> {
        require!(
            !self.name.is_empty() && self.name.len() <= MAX_NAME_LEN,
            ErrorCode::InvalidTokenName
        );
        require!(
            !self.symbol.is_empty() && self.symbol.len() <= MAX_SYMBOL_LEN,
            ErrorCode::InvalidTokenSymbol
        );
        require!(self.uri.len() <= MAX_URI_LEN, ErrorCode::InvalidTokenUri);
        require!(self.decimals <= MAX_DECIMALS, ErrorCode::InvalidDecimals);
        require!(self.initial_supply > 0, ErrorCode::InvalidInitialSupply);
        require!(
            self.transfer_fee_basis_points <= MAX_FEE_BASIS_POINTS,
            ErrorCode::InvalidFeeBasisPoints
        );
        Ok(())
    }
}

impl TokenInfo {
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    /// Quotes the fee this token's transfer primitive deducts from `amount`:
    /// `min(floor(amount * bps / 10_000), max_fee)`.
    pub fn transfer_fee(&self, amount: u64) -> Result<u64> {
        math::transfer_fee(amount, self.transfer_fee_basis_points, self.max_fee)
    }
}
