use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;
use crate::state::{Engine, UserCredit, Position};
use crate::events::BetActive;
use crate::utils::{accounts, custody, oracle};

#[derive(Accounts)]
#[instruction(bet_id: u64)]
pub struct JoinBet<'info> {
    #[account(
        mut,
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

    // init_if_needed so that an existing credit surfaces as CannotJoinBetTwice
    #[account(
        init_if_needed,
        seeds = [b"credit", bet_id.to_le_bytes().as_ref(), joiner.key().as_ref()],
        bump,
        payer = joiner,
        space = UserCredit::LEN
    )]
    pub joiner_credit: Account<'info, UserCredit>,

    #[account(
        mut,
        seeds = [b"vault", engine.key().as_ref()],
        bump = engine.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = engine.collateral_mint,
        associated_token::authority = joiner,
    )]
    pub joiner_ata: Account<'info, TokenAccount>,

    pub price_update: Account<'info, PriceUpdateV2>,

    #[account(mut)]
    pub joiner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_join_bet(
    ctx: Context<JoinBet>,
    bet_id: u64,
    amount: u64,
    position: Position,
) -> Result<()> {
    let clock = Clock::get()?;
    let joiner = ctx.accounts.joiner.key();
    let mut bet = accounts::load_bet(&ctx.accounts.bet)?;

    bet.check_join(
        &joiner,
        amount,
        position,
        ctx.accounts.joiner_credit.amount,
        clock.unix_timestamp,
    )?;

    let opening_price = oracle::read_normalized_price(
        &ctx.accounts.price_update,
        &ctx.accounts.engine.price_feed_id,
        clock.unix_timestamp,
    )?;

    let credit = &mut ctx.accounts.joiner_credit;
    credit.bind(joiner, bet_id, ctx.bumps.joiner_credit);
    credit.deposit(amount)?;
    ctx.accounts.engine.add_credit(amount)?;
    bet.activate(joiner, opening_price)?;
    accounts::write(&ctx.accounts.bet, &bet)?;

    custody::deposit_from(
        &ctx.accounts.token_program,
        &ctx.accounts.joiner,
        &ctx.accounts.joiner_ata,
        &ctx.accounts.vault,
        amount,
    )?;

    msg!("Bet {} active, opening price {}", bet_id, opening_price);
    emit!(BetActive {
        bet_id,
        joiner,
        opening_price,
    });

    Ok(())
}
