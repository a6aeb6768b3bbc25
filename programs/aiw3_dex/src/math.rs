/// AIW3 DEX Math Library
///
/// Pure basis-point fee arithmetic and the constant-product swap quote.
/// Every computation floors intermediate results, so rounding never favors
/// the caller, and every operation that could overflow a `u64` widens to
/// `u128` and maps failure to `ErrorCode::MathOverflow`.
use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::ErrorCode;

/// The result of pricing one swap before any account is touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapQuote {
    /// Protocol fee taken from `amount_in`, routed to the pool's fee recipient.
    pub fee: u64,
    /// Portion of `amount_in` that enters the input reserve.
    pub amount_in_after_fee: u64,
    /// Output owed to the caller from the opposite reserve.
    pub amount_out: u64,
}

impl SwapQuote {
    /// Enforces the caller's output floor.
    pub fn enforce_min(&self, min_amount_out: u64) -> Result<()> {
        require!(
            self.amount_out >= min_amount_out,
            ErrorCode::SlippageExceeded
        );
        Ok(())
    }
}

/// Computes `floor(amount * fee_basis_points / 10_000)`.
///
/// The widened product of a `u64` and a basis-point fee always fits in a
/// `u128`, and the quotient fits back in a `u64`, so the only failure mode
/// is a denominator bug, which checked ops surface instead of wrapping.
pub fn fee_amount(amount: u64, fee_basis_points: u16) -> Result<u64> {
    let fee = (amount as u128)
        .checked_mul(fee_basis_points as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    u64::try_from(fee).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Computes the fee a fee-on-transfer token deducts from `amount`:
/// `min(floor(amount * fee_basis_points / 10_000), max_fee)`.
///
/// Mirrors the policy the token program enforces, for quoting purposes.
pub fn transfer_fee(amount: u64, fee_basis_points: u16, max_fee: u64) -> Result<u64> {
    Ok(fee_amount(amount, fee_basis_points)?.min(max_fee))
}

/// Computes the constant-product output amount:
/// `floor(reserve_out * amount_in_after_fee / (reserve_in + amount_in_after_fee))`.
///
/// With `reserve_in > 0` the result is strictly less than `reserve_out`,
/// which is what keeps `reserve_in' * reserve_out'` from ever decreasing.
pub fn constant_product_out(
    reserve_in: u64,
    reserve_out: u64,
    amount_in_after_fee: u64,
) -> Result<u64> {
    let numerator = (reserve_out as u128)
        .checked_mul(amount_in_after_fee as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    let denominator = (reserve_in as u128)
        .checked_add(amount_in_after_fee as u128)
        .ok_or(ErrorCode::MathOverflow)?;
    if denominator == 0 {
        return err!(ErrorCode::InsufficientLiquidity);
    }
    let amount_out = numerator
        .checked_div(denominator)
        .ok_or(ErrorCode::MathOverflow)?;
    u64::try_from(amount_out).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Prices a swap of `amount_in` against `(reserve_in, reserve_out)` with the
/// protocol fee deducted first. Only `amount_in_after_fee` participates in
/// the invariant; the fee itself is routed out of the pool.
pub fn quote_swap(
    reserve_in: u64,
    reserve_out: u64,
    amount_in: u64,
    fee_basis_points: u16,
) -> Result<SwapQuote> {
    require!(amount_in > 0, ErrorCode::InvalidAmount);

    let fee = fee_amount(amount_in, fee_basis_points)?;
    let amount_in_after_fee = amount_in
        .checked_sub(fee)
        .ok_or(ErrorCode::MathOverflow)?;
    let amount_out = constant_product_out(reserve_in, reserve_out, amount_in_after_fee)?;

    Ok(SwapQuote {
        fee,
        amount_in_after_fee,
        amount_out,
    })
}
