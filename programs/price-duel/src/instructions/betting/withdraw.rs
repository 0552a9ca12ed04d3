use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::state::Engine;
use crate::events::CreditWithdrawn;
use crate::utils::{accounts, custody};

#[derive(Accounts)]
#[instruction(bet_id: u64)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [b"engine"],
        bump = engine.bump,
    )]
    pub engine: Box<Account<'info, Engine>>,

    /// CHECK: loaded in the handler so a missing bet reports BetNotFound.
    #[account(
        seeds = [b"bet", bet_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub bet: UncheckedAccount<'info>,

    /// CHECK: address checked against the recorded winner after `check_withdraw`.
    #[account(mut)]
    pub winner_credit: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [b"vault", engine.key().as_ref()],
        bump = engine.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = engine.collateral_mint,
        associated_token::authority = winner,
    )]
    pub winner_ata: Account<'info, TokenAccount>,

    pub winner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn process_withdraw(ctx: Context<Withdraw>, bet_id: u64) -> Result<()> {
    let winner = ctx.accounts.winner.key();
    let bet = accounts::load_bet(&ctx.accounts.bet)?;
    bet.check_withdraw(&winner)?;

    let mut credit = accounts::load_credit(&ctx.accounts.winner_credit, bet_id, &winner)?;

    ctx.accounts.engine.lock()?;
    let amount = credit.take()?;
    ctx.accounts.engine.release_credit(amount)?;

    // Zeroed credit and the lock must be on-chain before the vault CPI.
    accounts::write(&ctx.accounts.winner_credit, &credit)?;
    ctx.accounts.engine.exit(ctx.program_id)?;

    custody::withdraw_to(
        &ctx.accounts.token_program,
        &ctx.accounts.engine,
        &ctx.accounts.vault,
        &ctx.accounts.winner_ata,
        amount,
    )?;

    ctx.accounts.engine.unlock();

    msg!("Bet {} paid {} to {}", bet_id, amount, winner);
    emit!(CreditWithdrawn {
        bet_id,
        winner,
        amount,
    });

    Ok(())
}
