use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::errors::DuelError;
use crate::state::Engine;

// The vault's token authority is the engine PDA, so only this program can
// sign a transfer out of it.

/// Pulls `amount` from the payer's token account into the vault.
pub fn deposit_from<'info>(
    token_program: &Program<'info, Token>,
    payer: &Signer<'info>,
    payer_ata: &Account<'info, TokenAccount>,
    vault: &Account<'info, TokenAccount>,
    amount: u64,
) -> Result<()> {
    require!(payer.key() != Pubkey::default(), DuelError::AddressZero);
    require!(amount > 0, DuelError::AmountZero);

    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from: payer_ata.to_account_info(),
                to: vault.to_account_info(),
                authority: payer.to_account_info(),
            },
        ),
        amount,
    )
}

/// Pushes `amount` from the vault to the payee's token account.
pub fn withdraw_to<'info>(
    token_program: &Program<'info, Token>,
    engine: &Account<'info, Engine>,
    vault: &Account<'info, TokenAccount>,
    payee_ata: &Account<'info, TokenAccount>,
    amount: u64,
) -> Result<()> {
    require!(payee_ata.owner != Pubkey::default(), DuelError::AddressZero);
    require!(amount > 0, DuelError::AmountZero);
    require!(vault.amount >= amount, DuelError::InsufficientVault);

    let bump = [engine.bump];
    let seeds: &[&[u8]] = &[b"engine", &bump];
    let signer = &[seeds];

    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: vault.to_account_info(),
                to: payee_ata.to_account_info(),
                authority: engine.to_account_info(),
            },
            signer,
        ),
        amount,
    )
}
