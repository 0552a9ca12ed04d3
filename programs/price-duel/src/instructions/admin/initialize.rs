use anchor_lang::prelude::*;
use anchor_spl::token::{Token, Mint, TokenAccount};
use crate::state::Engine;
use crate::events::EngineInitialized;
use crate::errors::DuelError;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        seeds = [b"engine"],
        bump,
        payer = admin,
        space = Engine::LEN
    )]
    pub engine: Account<'info, Engine>,

    #[account(
        init,
        seeds = [b"vault", engine.key().as_ref()],
        bump,
        payer = admin,
        token::mint = collateral_mint,
        token::authority = engine,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub collateral_mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn process_initialize(ctx: Context<Initialize>, price_feed_id: [u8; 32]) -> Result<()> {
    require!(price_feed_id != [0u8; 32], DuelError::AddressZero);

    let engine = &mut ctx.accounts.engine;
    engine.admin = ctx.accounts.admin.key();
    engine.collateral_mint = ctx.accounts.collateral_mint.key();
    engine.vault = ctx.accounts.vault.key();
    engine.price_feed_id = price_feed_id;
    engine.next_bet_id = 0;
    engine.total_credit = 0;
    engine.locked = false;
    engine.bump = ctx.bumps.engine;
    engine.vault_bump = ctx.bumps.vault;

    emit!(EngineInitialized {
        admin: engine.admin,
        collateral_mint: engine.collateral_mint,
        price_feed_id,
    });

    Ok(())
}
