use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::events::ConfigInitialized;
use crate::state::config::{Config, InitializeParams};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The config singleton lives at a fixed address; a second `initialize`
    /// fails at account creation because the account already exists.
    #[account(
        init,
        payer = payer,
        space = Config::SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Box<Account<'info, Config>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.initialize(&params, ctx.bumps.config)?;

    emit!(ConfigInitialized {
        admin: config.admin,
        fee_recipient: config.fee_recipient,
        swap_fee_basis_points: config.swap_fee_basis_points,
        create_token_fee_basis_points: config.create_token_fee_basis_points,
        create_pool_fee_lamports: config.create_pool_fee_lamports,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
