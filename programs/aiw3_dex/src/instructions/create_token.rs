use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke_signed;
use anchor_lang::system_program::{create_account, CreateAccount};
use anchor_spl::associated_token::{create_idempotent, AssociatedToken, Create};
use anchor_spl::token_2022::spl_token_2022::extension::transfer_fee::instruction::initialize_transfer_fee_config;
use anchor_spl::token_2022::spl_token_2022::extension::ExtensionType;
use anchor_spl::token_2022::spl_token_2022::state::Mint as MintState;
use anchor_spl::token_2022::{initialize_mint2, mint_to, InitializeMint2, MintTo, Token2022};

use crate::constants::{CONFIG_SEED, TOKEN_INFO_SEED, TOKEN_MINT_SEED};
use crate::errors::ErrorCode;
use crate::events::TokenCreated;
use crate::state::config::Config;
use crate::state::token_info::{CreateTokenParams, TokenInfo};

#[derive(Accounts)]
#[instruction(params: CreateTokenParams)]
pub struct CreateToken<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Box<Account<'info, Config>>,

    /// CHECK: PDA created and initialized as a Token-2022 mint in the handler.
    #[account(
        mut,
        seeds = [TOKEN_MINT_SEED, creator.key().as_ref(), params.symbol.as_bytes()],
        bump
    )]
    pub token_mint: UncheckedAccount<'info>,

    /// Immutable issuance record for the new token; also the mint authority,
    /// so the supply is fixed once this instruction completes.
    #[account(
        init,
        payer = creator,
        space = TokenInfo::SIZE,
        seeds = [TOKEN_INFO_SEED, token_mint.key().as_ref()],
        bump
    )]
    pub token_info: Box<Account<'info, TokenInfo>>,

    /// CHECK: creator's associated token account, created in the handler
    /// once the mint exists.
    #[account(mut)]
    pub creator_token_account: UncheckedAccount<'info>,

    /// CHECK: validated against the configured fee recipient.
    #[account(constraint = fee_recipient.key() == config.fee_recipient @ ErrorCode::InvalidFeeRecipient)]
    pub fee_recipient: UncheckedAccount<'info>,

    /// CHECK: fee recipient's associated token account, created in the
    /// handler when a creation fee is due.
    #[account(mut)]
    pub fee_recipient_token_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token2022>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateToken>, params: CreateTokenParams) -> Result<()> {
    ctx.accounts.config.ensure_not_paused()?;
    params.validate()?;

    let creator_key = ctx.accounts.creator.key();
    let mint_key = ctx.accounts.token_mint.key();
    let token_program_key = ctx.accounts.token_program.key();

    // The mint account must be sized for the transfer-fee extension.
    let mint_space =
        ExtensionType::try_calculate_account_len::<MintState>(&[ExtensionType::TransferFeeConfig])?;
    let mint_lamports = Rent::get()?.minimum_balance(mint_space);

    let mint_seeds: &[&[u8]] = &[
        TOKEN_MINT_SEED,
        creator_key.as_ref(),
        params.symbol.as_bytes(),
        &[ctx.bumps.token_mint],
    ];

    create_account(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            CreateAccount {
                from: ctx.accounts.creator.to_account_info(),
                to: ctx.accounts.token_mint.to_account_info(),
            },
            &[mint_seeds],
        ),
        mint_lamports,
        mint_space as u64,
        &token_program_key,
    )?;

    // The fee-on-transfer policy is baked into the mint before it is
    // initialized. No config authority is set, so the policy is immutable;
    // withheld fees are withdrawable by the protocol fee recipient.
    let fee_config_ix = initialize_transfer_fee_config(
        &token_program_key,
        &mint_key,
        None,
        Some(&ctx.accounts.config.fee_recipient),
        params.transfer_fee_basis_points,
        params.max_fee,
    )?;
    invoke_signed(
        &fee_config_ix,
        &[ctx.accounts.token_mint.to_account_info()],
        &[mint_seeds],
    )?;

    initialize_mint2(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            InitializeMint2 {
                mint: ctx.accounts.token_mint.to_account_info(),
            },
        ),
        params.decimals,
        &ctx.accounts.token_info.key(),
        None,
    )?;

    create_idempotent(CpiContext::new(
        ctx.accounts.associated_token_program.to_account_info(),
        Create {
            payer: ctx.accounts.creator.to_account_info(),
            associated_token: ctx.accounts.creator_token_account.to_account_info(),
            authority: ctx.accounts.creator.to_account_info(),
            mint: ctx.accounts.token_mint.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
        },
    ))?;

    // The creation fee is charged against the minted supply: the fee share
    // is minted to the protocol fee recipient, the remainder to the creator.
    let creation_fee = ctx.accounts.config.token_creation_fee(params.initial_supply)?;
    let creator_amount = params
        .initial_supply
        .checked_sub(creation_fee)
        .ok_or(ErrorCode::MathOverflow)?;

    let info_seeds: &[&[u8]] = &[
        TOKEN_INFO_SEED,
        mint_key.as_ref(),
        &[ctx.bumps.token_info],
    ];

    if creation_fee > 0 {
        create_idempotent(CpiContext::new(
            ctx.accounts.associated_token_program.to_account_info(),
            Create {
                payer: ctx.accounts.creator.to_account_info(),
                associated_token: ctx.accounts.fee_recipient_token_account.to_account_info(),
                authority: ctx.accounts.fee_recipient.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                token_program: ctx.accounts.token_program.to_account_info(),
            },
        ))?;

        mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.token_mint.to_account_info(),
                    to: ctx.accounts.fee_recipient_token_account.to_account_info(),
                    authority: ctx.accounts.token_info.to_account_info(),
                },
                &[info_seeds],
            ),
            creation_fee,
        )?;
    }

    if creator_amount > 0 {
        mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.token_mint.to_account_info(),
                    to: ctx.accounts.creator_token_account.to_account_info(),
                    authority: ctx.accounts.token_info.to_account_info(),
                },
                &[info_seeds],
            ),
            creator_amount,
        )?;
    }

    let token_info = &mut ctx.accounts.token_info;
    token_info.mint = mint_key;
    token_info.creator = creator_key;
    token_info.name = params.name.clone();
    token_info.symbol = params.symbol.clone();
    token_info.uri = params.uri.clone();
    token_info.decimals = params.decimals;
    token_info.initial_supply = params.initial_supply;
    token_info.transfer_fee_basis_points = params.transfer_fee_basis_points;
    token_info.max_fee = params.max_fee;
    token_info.token_type = params.token_type;
    token_info.bump = ctx.bumps.token_info;

    emit!(TokenCreated {
        mint: mint_key,
        creator: creator_key,
        name: params.name,
        symbol: params.symbol,
        decimals: params.decimals,
        initial_supply: params.initial_supply,
        creation_fee,
        transfer_fee_basis_points: params.transfer_fee_basis_points,
        max_fee: params.max_fee,
        token_type: params.token_type,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
