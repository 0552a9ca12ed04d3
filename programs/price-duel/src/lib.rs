use anchor_lang::prelude::*;

pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

use instructions::*;
use state::bet::{Bet, Position};

declare_id!("FiAtjV8HMPB4SNkeUNk5kRx3PNpwTTdgM5RQVZ7MwgRV");

#[program]
pub mod price_duel {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, price_feed_id: [u8; 32]) -> Result<()> {
        instructions::admin::initialize::process_initialize(ctx, price_feed_id)
    }

    pub fn set_price_feed(ctx: Context<SetPriceFeed>, price_feed_id: [u8; 32]) -> Result<()> {
        instructions::admin::set_price_feed::process_set_price_feed(ctx, price_feed_id)
    }

    /// `expiration`: 0 = 1 day, 1 = 1 week, 2 = 2 weeks.
    /// `closing`: 0 = 30 days, 1 = 60 days, 2 = 90 days.
    pub fn open(ctx: Context<OpenBet>, amount: u64, position: Position, expiration: u8, closing: u8) -> Result<u64> {
        instructions::betting::open_bet::process_open_bet(ctx, amount, position, expiration, closing)
    }

    pub fn join_bet(ctx: Context<JoinBet>, bet_id: u64, amount: u64, position: Position) -> Result<()> {
        instructions::betting::join_bet::process_join_bet(ctx, bet_id, amount, position)
    }

    pub fn settle_bet(ctx: Context<SettleBet>, bet_id: u64) -> Result<()> {
        instructions::oracle::settle_bet::process_settle_bet(ctx, bet_id)
    }

    pub fn withdraw(ctx: Context<Withdraw>, bet_id: u64) -> Result<()> {
        instructions::betting::withdraw::process_withdraw(ctx, bet_id)
    }

    pub fn cancel_before_active(ctx: Context<CancelBeforeActive>, bet_id: u64) -> Result<()> {
        instructions::betting::cancel_bet::process_cancel_before_active(ctx, bet_id)
    }

    pub fn get_bet(ctx: Context<ViewBet>, bet_id: u64) -> Result<Bet> {
        instructions::query::view_bet::process_get_bet(ctx, bet_id)
    }

    pub fn is_expired(ctx: Context<ViewBet>, bet_id: u64) -> Result<bool> {
        instructions::query::view_bet::process_is_expired(ctx, bet_id)
    }

    pub fn is_closed(ctx: Context<ViewBet>, bet_id: u64) -> Result<bool> {
        instructions::query::view_bet::process_is_closed(ctx, bet_id)
    }
}
