use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::math::{self, SwapQuote};

/// Which side of the canonical pair feeds the swap.
#[derive(Clone, Copy, PartialEq, Eq, Debug, AnchorSerialize, AnchorDeserialize)]
pub enum SwapDirection {
    AtoB,
    BtoA,
}

/// Constant-product pool for one token pair.
///
/// The pair order is canonical: `token_mint_a < token_mint_b` bytewise,
/// fixed at creation and independent of the order the caller supplied the
/// mints in. Reserves mirror the pool vault balances; the cumulative
/// volume/fee counters are monotone and only ever move together with the
/// reserves inside a single instruction.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct SwapPool {
    pub creator: Pubkey,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub reserve_a: u64,
    pub reserve_b: u64,
    /// Cumulative gross input volume per side.
    pub total_volume_a: u64,
    pub total_volume_b: u64,
    /// Cumulative protocol fee collected per side.
    pub total_fees_a: u64,
    pub total_fees_b: u64,
    /// Receives the protocol fee in the input token of every swap.
    pub fee_recipient: Pubkey,
    pub bump: u8,
}

/// Parameters for initializing a pool's state, already in canonical order.
#[derive(Clone)]
pub struct InitializePoolParams {
    pub creator: Pubkey,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub reserve_a: u64,
    pub reserve_b: u64,
    pub fee_recipient: Pubkey,
    pub bump: u8,
}

impl SwapPool {
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    /// Sorts a mint pair into canonical order. Both caller orders map to
    /// the same pair, hence to the same pool address.
    pub fn ordered_mints(x: Pubkey, y: Pubkey) -> (Pubkey, Pubkey) {
        if x <= y {
            (x, y)
        } else {
            (y, x)
        }
    }

    /// Writes the initial pool state. Reserves must both be positive and
    /// the mints must differ and arrive in canonical order.
    pub fn initialize(&mut self, params: InitializePoolParams) -> Result<()> {
        require!(
            self.token_mint_a == Pubkey::default(),
            ErrorCode::AlreadyInitialized
        );
        require!(
            params.token_mint_a != params.token_mint_b,
            ErrorCode::InvalidTokenMint
        );
        require!(
            params.token_mint_a <= params.token_mint_b,
            ErrorCode::InvalidTokenMint
        );
        require!(
            params.reserve_a > 0 && params.reserve_b > 0,
            ErrorCode::InvalidAmount
        );

        self.creator = params.creator;
        self.token_mint_a = params.token_mint_a;
        self.token_mint_b = params.token_mint_b;
        self.reserve_a = params.reserve_a;
        self.reserve_b = params.reserve_b;
        self.total_volume_a = 0;
        self.total_volume_b = 0;
        self.total_fees_a = 0;
        self.total_fees_b = 0;
        self.fee_recipient = params.fee_recipient;
        self.bump = params.bump;

        Ok(())
    }

    /// Prices a swap against the current reserves without mutating anything.
    pub fn quote(
        &self,
        direction: SwapDirection,
        amount_in: u64,
        fee_basis_points: u16,
    ) -> Result<SwapQuote> {
        let (reserve_in, reserve_out) = self.reserves_for(direction);
        math::quote_swap(reserve_in, reserve_out, amount_in, fee_basis_points)
    }

    /// Commits a quoted swap to the pool state. Rejects any quote that
    /// would drain the output reserve; on success the constant product
    /// cannot have decreased because only `amount_in_after_fee` enters the
    /// input side while the fee leaves the pool entirely.
    pub fn apply_swap(&mut self, direction: SwapDirection, quote: &SwapQuote) -> Result<()> {
        let (reserve_in, reserve_out) = self.reserves_for(direction);
        require!(quote.amount_out < reserve_out, ErrorCode::InsufficientLiquidity);

        let new_reserve_in = reserve_in
            .checked_add(quote.amount_in_after_fee)
            .ok_or(ErrorCode::MathOverflow)?;
        let new_reserve_out = reserve_out
            .checked_sub(quote.amount_out)
            .ok_or(ErrorCode::InsufficientLiquidity)?;
        let amount_in = quote
            .amount_in_after_fee
            .checked_add(quote.fee)
            .ok_or(ErrorCode::MathOverflow)?;

        match direction {
            SwapDirection::AtoB => {
                self.reserve_a = new_reserve_in;
                self.reserve_b = new_reserve_out;
                self.total_volume_a = self
                    .total_volume_a
                    .checked_add(amount_in)
                    .ok_or(ErrorCode::MathOverflow)?;
                self.total_fees_a = self
                    .total_fees_a
                    .checked_add(quote.fee)
                    .ok_or(ErrorCode::MathOverflow)?;
            }
            SwapDirection::BtoA => {
                self.reserve_b = new_reserve_in;
                self.reserve_a = new_reserve_out;
                self.total_volume_b = self
                    .total_volume_b
                    .checked_add(amount_in)
                    .ok_or(ErrorCode::MathOverflow)?;
                self.total_fees_b = self
                    .total_fees_b
                    .checked_add(quote.fee)
                    .ok_or(ErrorCode::MathOverflow)?;
            }
        }

        Ok(())
    }

    /// The current `reserve_a * reserve_b` product.
    pub fn constant_product(&self) -> u128 {
        (self.reserve_a as u128) * (self.reserve_b as u128)
    }

    fn reserves_for(&self, direction: SwapDirection) -> (u64, u64) {
        match direction {
            SwapDirection::AtoB => (self.reserve_a, self.reserve_b),
            SwapDirection::BtoA => (self.reserve_b, self.reserve_a),
        }
    }
}
