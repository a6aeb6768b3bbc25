use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::errors::ErrorCode;
use crate::events::ConfigUpdated;
use crate::state::config::{Config, UpdateConfigParams};

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ ErrorCode::Unauthorized,
    )]
    pub config: Box<Account<'info, Config>>,
}

/// Admin-only partial update. Deliberately exempt from the pause gate so
/// the admin can always unpause.
pub fn handler(ctx: Context<UpdateConfig>, params: UpdateConfigParams) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.update(&params)?;

    msg!(
        "Config updated: admin {}, fee_recipient {}, swap_fee_bps {}, create_token_fee_bps {}, create_pool_fee_lamports {}, paused {}",
        config.admin,
        config.fee_recipient,
        config.swap_fee_basis_points,
        config.create_token_fee_basis_points,
        config.create_pool_fee_lamports,
        config.paused
    );

    emit!(ConfigUpdated {
        admin: config.admin,
        fee_recipient: config.fee_recipient,
        swap_fee_basis_points: config.swap_fee_basis_points,
        create_token_fee_basis_points: config.create_token_fee_basis_points,
        create_pool_fee_lamports: config.create_pool_fee_lamports,
        paused: config.paused,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
