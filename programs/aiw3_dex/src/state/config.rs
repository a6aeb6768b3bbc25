use anchor_lang::prelude::*;

use crate::constants::MAX_FEE_BASIS_POINTS;
use crate::errors::ErrorCode;
use crate::math;

/// Global protocol configuration. One per deployment, created once by
/// `initialize` and mutated only by the admin through `update_config`.
///
/// Every non-admin instruction loads this account first and refuses to run
/// while `paused` is set.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Config {
    pub admin: Pubkey,
    pub fee_recipient: Pubkey,
    /// Protocol fee taken from every swap input, in basis points.
    pub swap_fee_basis_points: u16,
    /// Fee charged against the minted supply on token creation, in basis points.
    pub create_token_fee_basis_points: u16,
    /// Flat lamport fee charged to the creator on pool creation.
    pub create_pool_fee_lamports: u64,
    pub paused: bool,
    pub bump: u8,
}

/// Parameters for creating the config singleton.
#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct InitializeParams {
    pub admin: Pubkey,
    pub fee_recipient: Pubkey,
    pub swap_fee_basis_points: u16,
    pub create_token_fee_basis_points: u16,
    pub create_pool_fee_lamports: u64,
}

/// Partial update of the config. `None` fields keep their current value;
/// an explicit `Some(0)` is a real overwrite, never a sentinel.
#[derive(Clone, Default, AnchorSerialize, AnchorDeserialize)]
pub struct UpdateConfigParams {
    pub admin: Option<Pubkey>,
    pub fee_recipient: Option<Pubkey>,
    pub swap_fee_basis_points: Option<u16>,
    pub create_token_fee_basis_points: Option<u16>,
    pub create_pool_fee_lamports: Option<u64>,
    pub paused: Option<bool>,
}

impl Config {
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    /// Writes the initial configuration. The singleton starts unpaused.
    pub fn initialize(&mut self, params: &InitializeParams, bump: u8) -> Result<()> {
        require!(self.admin == Pubkey::default(), ErrorCode::AlreadyInitialized);
        require!(params.admin != Pubkey::default(), ErrorCode::InvalidAdmin);
        Self::validate_basis_points(params.swap_fee_basis_points)?;
        Self::validate_basis_points(params.create_token_fee_basis_points)?;

        self.admin = params.admin;
        self.fee_recipient = params.fee_recipient;
        self.swap_fee_basis_points = params.swap_fee_basis_points;
        self.create_token_fee_basis_points = params.create_token_fee_basis_points;
        self.create_pool_fee_lamports = params.create_pool_fee_lamports;
        self.paused = false;
        self.bump = bump;

        Ok(())
    }

    /// Applies a partial update. Provided fields are re-validated before any
    /// of them is written, so a rejected update leaves the config untouched.
    pub fn update(&mut self, params: &UpdateConfigParams) -> Result<()> {
        if let Some(admin) = params.admin {
            require!(admin != Pubkey::default(), ErrorCode::InvalidAdmin);
        }
        if let Some(bps) = params.swap_fee_basis_points {
            Self::validate_basis_points(bps)?;
        }
        if let Some(bps) = params.create_token_fee_basis_points {
            Self::validate_basis_points(bps)?;
        }

        if let Some(admin) = params.admin {
            self.admin = admin;
        }
        if let Some(fee_recipient) = params.fee_recipient {
            self.fee_recipient = fee_recipient;
        }
        if let Some(bps) = params.swap_fee_basis_points {
            self.swap_fee_basis_points = bps;
        }
        if let Some(bps) = params.create_token_fee_basis_points {
            self.create_token_fee_basis_points = bps;
        }
        if let Some(lamports) = params.create_pool_fee_lamports {
            self.create_pool_fee_lamports = lamports;
        }
        if let Some(paused) = params.paused {
            self.paused = paused;
        }

        Ok(())
    }

    pub fn ensure_not_paused(&self) -> Result<()> {
        require!(!self.paused, ErrorCode::SystemPaused);
        Ok(())
    }

    /// Fee charged against the minted supply when a token is created.
    pub fn token_creation_fee(&self, initial_supply: u64) -> Result<u64> {
        math::fee_amount(initial_supply, self.create_token_fee_basis_points)
    }

    fn validate_basis_points(bps: u16) -> Result<()> {
        require!(bps <= MAX_FEE_BASIS_POINTS, ErrorCode::InvalidFeeBasisPoints);
        Ok(())
    }
}
