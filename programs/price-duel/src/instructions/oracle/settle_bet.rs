use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;
use crate::state::{Engine, award_pot};
use crate::events::BetSettled;
use crate::utils::{accounts, oracle};

#[derive(Accounts)]
#[instruction(bet_id: u64)]
pub struct SettleBet<'info> {
    #[account(
        seeds = [b"engine"],
        bump = engine.bump,
    )]
    pub engine: Box<Account<'info, Engine>>,

    /// CHECK: loaded in the handler so a missing bet reports BetNotFound.
    #[account(
        mut,
        seeds = [b"bet", bet_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub bet: UncheckedAccount<'info>,

    /// CHECK: address checked against `bet.creator` once the bet is known to be active.
    #[account(mut)]
    pub creator_credit: UncheckedAccount<'info>,

    /// CHECK: address checked against `bet.joiner` once the bet is known to be active.
    #[account(mut)]
    pub joiner_credit: UncheckedAccount<'info>,

    pub price_update: Account<'info, PriceUpdateV2>,

    /// Anyone may settle once the closing deadline has passed.
    pub keeper: Signer<'info>,
}

pub fn process_settle_bet(ctx: Context<SettleBet>, bet_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let mut bet = accounts::load_bet(&ctx.accounts.bet)?;

    bet.check_settle(clock.unix_timestamp)?;

    let closing_price = oracle::read_normalized_price(
        &ctx.accounts.price_update,
        &ctx.accounts.engine.price_feed_id,
        clock.unix_timestamp,
    )?;

    let mut creator_credit = accounts::load_credit(&ctx.accounts.creator_credit, bet_id, &bet.creator)?;
    let mut joiner_credit = accounts::load_credit(&ctx.accounts.joiner_credit, bet_id, &bet.joiner)?;

    let pot = award_pot(
        &mut creator_credit,
        &mut joiner_credit,
        bet.creator_wins(closing_price),
    )?;
    let winner = bet.settle(closing_price);

    accounts::write(&ctx.accounts.creator_credit, &creator_credit)?;
    accounts::write(&ctx.accounts.joiner_credit, &joiner_credit)?;
    accounts::write(&ctx.accounts.bet, &bet)?;

    msg!(
        "Bet {} settled: opening {}, closing {}, winner {}",
        bet_id, bet.opening_price, closing_price, winner
    );
    emit!(BetSettled {
        bet_id,
        winner,
        closing_price,
        pot,
    });

    Ok(())
}
