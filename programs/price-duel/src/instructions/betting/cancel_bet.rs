use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::state::Engine;
use crate::events::BetCancelled;
use crate::utils::{accounts, custody};

#[derive(Accounts)]
#[instruction(bet_id: u64)]
pub struct CancelBeforeActive<'info> {
    #[account(
        mut,
        seeds = [b"engine"],
        bump = engine.bump,
    )]
    pub engine: Box<Account<'info, Engine>>,

    /// CHECK: loaded in the handler so a missing bet reports BetNotFound.
    /// Erased on success; rent goes back to the creator.
    #[account(
        mut,
        seeds = [b"bet", bet_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub bet: UncheckedAccount<'info>,

    /// CHECK: address checked against `bet.creator` after `check_cancel`.
    #[account(mut)]
    pub creator_credit: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [b"vault", engine.key().as_ref()],
        bump = engine.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = engine.collateral_mint,
        associated_token::authority = creator,
    )]
    pub creator_ata: Account<'info, TokenAccount>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_cancel_before_active(ctx: Context<CancelBeforeActive>, bet_id: u64) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    let bet = accounts::load_bet(&ctx.accounts.bet)?;
    bet.check_cancel(&creator)?;

    let mut credit = accounts::load_credit(&ctx.accounts.creator_credit, bet_id, &creator)?;

    ctx.accounts.engine.lock()?;
    let refund = credit.take()?;
    ctx.accounts.engine.release_credit(refund)?;

    // Zeroed credit and the lock must be on-chain before the vault CPI.
    accounts::write(&ctx.accounts.creator_credit, &credit)?;
    ctx.accounts.engine.exit(ctx.program_id)?;

    custody::withdraw_to(
        &ctx.accounts.token_program,
        &ctx.accounts.engine,
        &ctx.accounts.vault,
        &ctx.accounts.creator_ata,
        refund,
    )?;

    ctx.accounts.engine.unlock();

    let destination = ctx.accounts.creator.to_account_info();
    accounts::close(&ctx.accounts.bet, &destination)?;
    accounts::close(&ctx.accounts.creator_credit, &destination)?;

    emit!(BetCancelled {
        bet_id,
        creator,
        refund,
    });

    Ok(())
}
