use anchor_lang::prelude::*;
use crate::state::Bet;
use crate::utils::accounts::load_bet;

#[derive(Accounts)]
#[instruction(bet_id: u64)]
pub struct ViewBet<'info> {
    /// CHECK: may be absent (never opened, or erased by a cancel); `load_bet`
    /// reports that as BetNotFound.
    #[account(
        seeds = [b"bet", bet_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub bet: UncheckedAccount<'info>,
}

pub fn process_get_bet(ctx: Context<ViewBet>, _bet_id: u64) -> Result<Bet> {
    load_bet(&ctx.accounts.bet)
}

pub fn process_is_expired(ctx: Context<ViewBet>, _bet_id: u64) -> Result<bool> {
    let bet = load_bet(&ctx.accounts.bet)?;
    bet.is_expired(Clock::get()?.unix_timestamp)
}

pub fn process_is_closed(ctx: Context<ViewBet>, _bet_id: u64) -> Result<bool> {
    let bet = load_bet(&ctx.accounts.bet)?;
    bet.is_closed(Clock::get()?.unix_timestamp)
}
