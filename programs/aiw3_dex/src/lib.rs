#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod math;
pub mod state;
pub mod utils;

// Module for instruction handlers and their account contexts
pub mod instructions;

#[cfg(test)]
pub mod unit_test;

use instructions::create_pool::*;
use instructions::create_token::*;
use instructions::initialize::*;
use instructions::swap::*;
use instructions::update_config::*;
use state::config::{InitializeParams, UpdateConfigParams};
use state::token_info::CreateTokenParams;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod aiw3_dex {
    use super::*;

    /// Creates the global config singleton with the fee schedule and admin
    /// identity. Fails if the singleton already exists.
    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        instructions::initialize::handler(ctx, params)
    }

    /// Admin-only partial config update. `None` fields keep their current
    /// value. This is the only instruction exempt from the pause gate.
    pub fn update_config(ctx: Context<UpdateConfig>, params: UpdateConfigParams) -> Result<()> {
        instructions::update_config::handler(ctx, params)
    }

    /// Issues a Token-2022 mint with an embedded fee-on-transfer policy and
    /// mints the initial supply, net of the creation fee, to the creator.
    pub fn create_token(ctx: Context<CreateToken>, params: CreateTokenParams) -> Result<()> {
        instructions::create_token::handler(ctx, params)
    }

    /// Creates the constant-product pool for a token pair and seeds its
    /// reserves from the creator's deposits. The pair order is canonical:
    /// both supply orders resolve to the same pool address.
    pub fn create_pool(ctx: Context<CreatePool>, params: CreatePoolParams) -> Result<()> {
        instructions::create_pool::handler(ctx, params)
    }

    /// Swaps an exact input amount through the pool, deducting the protocol
    /// fee from the input and enforcing the caller's minimum output.
    pub fn swap(ctx: Context<Swap>, params: SwapParams) -> Result<()> {
        instructions::swap::handler(ctx, params)
    }
}
