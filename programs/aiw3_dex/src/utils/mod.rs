/// Settlement CPI helpers.
///
/// Token movement always goes through `transfer_checked` so that Token-2022
/// mints with a `TransferFeeConfig` extension apply their own fee-on-transfer
/// policy inside the token program; pool code never re-implements that
/// deduction.
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use anchor_spl::token_interface::{transfer_checked, TransferChecked};

/// Transfers tokens authorized by a wallet signer.
pub fn transfer_tokens<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    to: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    amount: u64,
    decimals: u8,
) -> Result<()> {
    transfer_checked(
        CpiContext::new(
            token_program,
            TransferChecked {
                from,
                mint,
                to,
                authority,
            },
        ),
        amount,
        decimals,
    )
}

/// Transfers tokens out of a program-owned vault, signed with PDA seeds.
#[allow(clippy::too_many_arguments)]
pub fn transfer_tokens_signed<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    to: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
    decimals: u8,
) -> Result<()> {
    transfer_checked(
        CpiContext::new_with_signer(
            token_program,
            TransferChecked {
                from,
                mint,
                to,
                authority,
            },
            signer_seeds,
        ),
        amount,
        decimals,
    )
}

/// Moves lamports between system accounts (flat protocol charges).
pub fn transfer_lamports<'info>(
    system_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    lamports: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(system_program, Transfer { from, to }),
        lamports,
    )
}
