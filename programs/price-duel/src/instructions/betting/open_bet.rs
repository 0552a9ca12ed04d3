use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::state::{Engine, Bet, UserCredit, Position, ExpirationWindow, ClosingWindow};
use crate::events::BetPending;
use crate::errors::DuelError;
use crate::utils::custody;

#[derive(Accounts)]
pub struct OpenBet<'info> {
    #[account(
        mut,
        seeds = [b"engine"],
        bump = engine.bump,
    )]
    pub engine: Box<Account<'info, Engine>>,

    #[account(
        init,
        seeds = [b"bet", engine.next_bet_id.to_le_bytes().as_ref()],
        bump,
        payer = creator,
        space = Bet::LEN
    )]
    pub bet: Box<Account<'info, Bet>>,

    #[account(
        init,
        seeds = [b"credit", engine.next_bet_id.to_le_bytes().as_ref(), creator.key().as_ref()],
        bump,
        payer = creator,
        space = UserCredit::LEN
    )]
    pub creator_credit: Account<'info, UserCredit>,

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

pub fn process_open_bet(
    ctx: Context<OpenBet>,
    amount: u64,
    position: Position,
    expiration: u8,
    closing: u8,
) -> Result<u64> {
    require!(amount > 0, DuelError::AmountZero);
    let expiration = ExpirationWindow::try_from(expiration)?;
    let closing = ClosingWindow::try_from(closing)?;
    let clock = Clock::get()?;
    let creator = ctx.accounts.creator.key();

    let engine = &mut ctx.accounts.engine;
    let bet_id = engine.assign_bet_id()?;
    engine.add_credit(amount)?;

    ctx.accounts.bet.open(
        bet_id,
        creator,
        amount,
        position,
        expiration,
        closing,
        clock.unix_timestamp,
        ctx.bumps.bet,
    )?;

    let credit = &mut ctx.accounts.creator_credit;
    credit.bind(creator, bet_id, ctx.bumps.creator_credit);
    credit.deposit(amount)?;

    custody::deposit_from(
        &ctx.accounts.token_program,
        &ctx.accounts.creator,
        &ctx.accounts.creator_ata,
        &ctx.accounts.vault,
        amount,
    )?;

    emit!(BetPending {
        bet_id,
        creator,
        amount,
        position,
        created_at: clock.unix_timestamp,
    });

    Ok(bet_id)
}
