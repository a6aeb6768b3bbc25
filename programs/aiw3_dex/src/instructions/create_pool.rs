use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{CONFIG_SEED, SWAP_POOL_SEED, TOKEN_VAULT_SEED};
use crate::errors::ErrorCode;
use crate::events::PoolCreated;
use crate::state::config::Config;
use crate::state::swap_pool::{InitializePoolParams, SwapPool};
use crate::utils;

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct CreatePoolParams {
    /// Deposit for `token_mint_a` as supplied in the account list.
    pub initial_liquidity_a: u64,
    /// Deposit for `token_mint_b` as supplied in the account list.
    pub initial_liquidity_b: u64,
    /// Receives the protocol fee of every swap through this pool.
    pub fee_recipient: Pubkey,
}

#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Box<Account<'info, Config>>,

    pub token_mint_a: Box<InterfaceAccount<'info, Mint>>,
    pub token_mint_b: Box<InterfaceAccount<'info, Mint>>,

    /// The pool address is derived from the canonically ordered mint pair,
    /// so supplying the mints in reversed order resolves to the same pool.
    #[account(
        init,
        payer = creator,
        space = SwapPool::SIZE,
        seeds = [
            SWAP_POOL_SEED,
            SwapPool::ordered_mints(token_mint_a.key(), token_mint_b.key()).0.as_ref(),
            SwapPool::ordered_mints(token_mint_a.key(), token_mint_b.key()).1.as_ref(),
        ],
        bump
    )]
    pub swap_pool: Box<Account<'info, SwapPool>>,

    #[account(
        mut,
        token::mint = token_mint_a,
        token::authority = creator,
        token::token_program = token_program
    )]
    pub creator_token_a_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_mint_b,
        token::authority = creator,
        token::token_program = token_program
    )]
    pub creator_token_b_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init,
        payer = creator,
        seeds = [TOKEN_VAULT_SEED, swap_pool.key().as_ref(), token_mint_a.key().as_ref()],
        bump,
        token::mint = token_mint_a,
        token::authority = swap_pool,
        token::token_program = token_program
    )]
    pub pool_token_a_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init,
        payer = creator,
        seeds = [TOKEN_VAULT_SEED, swap_pool.key().as_ref(), token_mint_b.key().as_ref()],
        bump,
        token::mint = token_mint_b,
        token::authority = swap_pool,
        token::token_program = token_program
    )]
    pub pool_token_b_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: lamport destination for the flat pool-creation charge.
    #[account(
        mut,
        constraint = fee_recipient.key() == config.fee_recipient @ ErrorCode::InvalidFeeRecipient
    )]
    pub fee_recipient: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreatePool>, params: CreatePoolParams) -> Result<()> {
    ctx.accounts.config.ensure_not_paused()?;

    require!(
        params.initial_liquidity_a > 0 && params.initial_liquidity_b > 0,
        ErrorCode::InvalidAmount
    );
    require!(
        ctx.accounts.token_mint_a.key() != ctx.accounts.token_mint_b.key(),
        ErrorCode::InvalidTokenMint
    );
    require!(
        ctx.accounts.creator_token_a_account.amount >= params.initial_liquidity_a,
        ErrorCode::InsufficientBalance
    );
    require!(
        ctx.accounts.creator_token_b_account.amount >= params.initial_liquidity_b,
        ErrorCode::InsufficientBalance
    );

    // Flat pool-creation charge, routed to the protocol fee recipient.
    let pool_fee_lamports = ctx.accounts.config.create_pool_fee_lamports;
    if pool_fee_lamports > 0 {
        utils::transfer_lamports(
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.creator.to_account_info(),
            ctx.accounts.fee_recipient.to_account_info(),
            pool_fee_lamports,
        )?;
    }

    utils::transfer_tokens(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.creator_token_a_account.to_account_info(),
        ctx.accounts.token_mint_a.to_account_info(),
        ctx.accounts.pool_token_a_vault.to_account_info(),
        ctx.accounts.creator.to_account_info(),
        params.initial_liquidity_a,
        ctx.accounts.token_mint_a.decimals,
    )?;
    utils::transfer_tokens(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.creator_token_b_account.to_account_info(),
        ctx.accounts.token_mint_b.to_account_info(),
        ctx.accounts.pool_token_b_vault.to_account_info(),
        ctx.accounts.creator.to_account_info(),
        params.initial_liquidity_b,
        ctx.accounts.token_mint_b.decimals,
    )?;

    // Reserves mirror the vault balances actually received, which may be
    // below the requested deposits for fee-on-transfer mints.
    ctx.accounts.pool_token_a_vault.reload()?;
    ctx.accounts.pool_token_b_vault.reload()?;

    let supplied_a = ctx.accounts.token_mint_a.key();
    let supplied_b = ctx.accounts.token_mint_b.key();
    let (canonical_a, canonical_b) = SwapPool::ordered_mints(supplied_a, supplied_b);
    let (reserve_a, reserve_b) = if canonical_a == supplied_a {
        (
            ctx.accounts.pool_token_a_vault.amount,
            ctx.accounts.pool_token_b_vault.amount,
        )
    } else {
        (
            ctx.accounts.pool_token_b_vault.amount,
            ctx.accounts.pool_token_a_vault.amount,
        )
    };

    let swap_pool = &mut ctx.accounts.swap_pool;
    swap_pool.initialize(InitializePoolParams {
        creator: ctx.accounts.creator.key(),
        token_mint_a: canonical_a,
        token_mint_b: canonical_b,
        reserve_a,
        reserve_b,
        fee_recipient: params.fee_recipient,
        bump: ctx.bumps.swap_pool,
    })?;

    emit!(PoolCreated {
        pool: swap_pool.key(),
        creator: swap_pool.creator,
        token_mint_a: canonical_a,
        token_mint_b: canonical_b,
        reserve_a,
        reserve_b,
        fee_recipient: params.fee_recipient,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
