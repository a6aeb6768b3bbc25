use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{CONFIG_SEED, SWAP_POOL_SEED, TOKEN_VAULT_SEED};
use crate::errors::ErrorCode;
use crate::events::SwapExecuted;
use crate::math::SwapQuote;
use crate::state::config::Config;
use crate::state::swap_pool::{SwapDirection, SwapPool};
use crate::utils;

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct SwapParams {
    pub amount_in: u64,
    pub min_amount_out: u64,
    pub direction: SwapDirection,
}

#[derive(Accounts)]
pub struct Swap<'info> {
    pub user: Signer<'info>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Box<Account<'info, Config>>,

    #[account(
        mut,
        seeds = [
            SWAP_POOL_SEED,
            swap_pool.token_mint_a.as_ref(),
            swap_pool.token_mint_b.as_ref(),
        ],
        bump = swap_pool.bump,
        constraint = swap_pool.token_mint_a == token_mint_a.key() @ ErrorCode::InvalidTokenMint,
        constraint = swap_pool.token_mint_b == token_mint_b.key() @ ErrorCode::InvalidTokenMint,
    )]
    pub swap_pool: Box<Account<'info, SwapPool>>,

    pub token_mint_a: Box<InterfaceAccount<'info, Mint>>,
    pub token_mint_b: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = token_mint_a,
        token::authority = user,
        token::token_program = token_program
    )]
    pub user_token_a_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_mint_b,
        token::authority = user,
        token::token_program = token_program
    )]
    pub user_token_b_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [TOKEN_VAULT_SEED, swap_pool.key().as_ref(), token_mint_a.key().as_ref()],
        bump,
        token::mint = token_mint_a,
        token::authority = swap_pool,
        token::token_program = token_program
    )]
    pub pool_token_a_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [TOKEN_VAULT_SEED, swap_pool.key().as_ref(), token_mint_b.key().as_ref()],
        bump,
        token::mint = token_mint_b,
        token::authority = swap_pool,
        token::token_program = token_program
    )]
    pub pool_token_b_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the protocol fee in the input token. Must belong to the
    /// pool's fee recipient; the mint is checked against the swap direction
    /// in the handler.
    #[account(
        mut,
        constraint = fee_recipient_token_account.owner == swap_pool.fee_recipient
            @ ErrorCode::InvalidFeeRecipient
    )]
    pub fee_recipient_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<Swap>, params: SwapParams) -> Result<()> {
    require!(params.amount_in > 0, ErrorCode::InvalidAmount);
    ctx.accounts.config.ensure_not_paused()?;

    let (in_mint, out_mint, user_in, user_out, vault_in, vault_out) = match params.direction {
        SwapDirection::AtoB => (
            &ctx.accounts.token_mint_a,
            &ctx.accounts.token_mint_b,
            &ctx.accounts.user_token_a_account,
            &ctx.accounts.user_token_b_account,
            &mut ctx.accounts.pool_token_a_vault,
            &mut ctx.accounts.pool_token_b_vault,
        ),
        SwapDirection::BtoA => (
            &ctx.accounts.token_mint_b,
            &ctx.accounts.token_mint_a,
            &ctx.accounts.user_token_b_account,
            &ctx.accounts.user_token_a_account,
            &mut ctx.accounts.pool_token_b_vault,
            &mut ctx.accounts.pool_token_a_vault,
        ),
    };

    require!(
        user_in.amount >= params.amount_in,
        ErrorCode::InsufficientBalance
    );
    require!(
        ctx.accounts.fee_recipient_token_account.mint == in_mint.key(),
        ErrorCode::InvalidFeeRecipient
    );

    // Price the swap and enforce the caller's floor before any token moves.
    // Every transfer and state write below is part of the same transaction,
    // so a CPI failure unwinds everything.
    let quote = ctx.accounts.swap_pool.quote(
        params.direction,
        params.amount_in,
        ctx.accounts.config.swap_fee_basis_points,
    )?;
    quote.enforce_min(params.min_amount_out)?;

    let token_mint_a = ctx.accounts.swap_pool.token_mint_a;
    let token_mint_b = ctx.accounts.swap_pool.token_mint_b;
    let pool_bump = ctx.accounts.swap_pool.bump;

    // Input side: net amount to the vault, protocol fee to the recipient.
    let vault_in_before = vault_in.amount;
    utils::transfer_tokens(
        ctx.accounts.token_program.to_account_info(),
        user_in.to_account_info(),
        in_mint.to_account_info(),
        vault_in.to_account_info(),
        ctx.accounts.user.to_account_info(),
        quote.amount_in_after_fee,
        in_mint.decimals,
    )?;
    if quote.fee > 0 {
        utils::transfer_tokens(
            ctx.accounts.token_program.to_account_info(),
            user_in.to_account_info(),
            in_mint.to_account_info(),
            ctx.accounts.fee_recipient_token_account.to_account_info(),
            ctx.accounts.user.to_account_info(),
            quote.fee,
            in_mint.decimals,
        )?;
    }

    // An input mint with its own fee-on-transfer policy delivers less than
    // the quoted net input. The reserve is credited with what the vault
    // actually received, so reserves never drift above the vault balances.
    vault_in.reload()?;
    let received = vault_in
        .amount
        .checked_sub(vault_in_before)
        .ok_or(ErrorCode::MathOverflow)?;
    let settled = SwapQuote {
        amount_in_after_fee: received,
        ..quote
    };
    ctx.accounts
        .swap_pool
        .apply_swap(params.direction, &settled)?;

    // Output side: the token program applies the output token's own
    // fee-on-transfer policy on top of the pool's quote.
    let pool_seeds: &[&[u8]] = &[
        SWAP_POOL_SEED,
        token_mint_a.as_ref(),
        token_mint_b.as_ref(),
        &[pool_bump],
    ];
    utils::transfer_tokens_signed(
        ctx.accounts.token_program.to_account_info(),
        vault_out.to_account_info(),
        out_mint.to_account_info(),
        user_out.to_account_info(),
        ctx.accounts.swap_pool.to_account_info(),
        &[pool_seeds],
        quote.amount_out,
        out_mint.decimals,
    )?;

    let swap_pool = &ctx.accounts.swap_pool;
    emit!(SwapExecuted {
        pool: swap_pool.key(),
        user: ctx.accounts.user.key(),
        direction: params.direction,
        amount_in: params.amount_in,
        fee: quote.fee,
        amount_out: quote.amount_out,
        reserve_a: swap_pool.reserve_a,
        reserve_b: swap_pool.reserve_b,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
