use anchor_lang::prelude::*;

use crate::state::swap_pool::SwapDirection;
use crate::state::token_info::TokenType;

#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub fee_recipient: Pubkey,
    pub swap_fee_basis_points: u16,
    pub create_token_fee_basis_points: u16,
    pub create_pool_fee_lamports: u64,
    pub timestamp: i64,
}

#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub fee_recipient: Pubkey,
    pub swap_fee_basis_points: u16,
    pub create_token_fee_basis_points: u16,
    pub create_pool_fee_lamports: u64,
    pub paused: bool,
    pub timestamp: i64,
}

#[event]
pub struct TokenCreated {
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub initial_supply: u64,
    pub creation_fee: u64,
    pub transfer_fee_basis_points: u16,
    pub max_fee: u64,
    pub token_type: TokenType,
    pub timestamp: i64,
}

#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub creator: Pubkey,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub reserve_a: u64,
    pub reserve_b: u64,
    pub fee_recipient: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct SwapExecuted {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub direction: SwapDirection,
    pub amount_in: u64,
    pub fee: u64,
    pub amount_out: u64,
    pub reserve_a: u64,
    pub reserve_b: u64,
    pub timestamp: i64,
}
