use anchor_lang::prelude::*;
use crate::state::Engine;
use crate::events::PriceFeedUpdated;
use crate::errors::DuelError;

#[derive(Accounts)]
pub struct SetPriceFeed<'info> {
    #[account(
        mut,
        seeds = [b"engine"],
        bump = engine.bump,
        constraint = engine.admin == admin.key() @ DuelError::Unauthorized
    )]
    pub engine: Account<'info, Engine>,
    pub admin: Signer<'info>,
}

pub fn process_set_price_feed(ctx: Context<SetPriceFeed>, price_feed_id: [u8; 32]) -> Result<()> {
    require!(price_feed_id != [0u8; 32], DuelError::AddressZero);

    let engine = &mut ctx.accounts.engine;
    let old_feed_id = engine.price_feed_id;
    engine.price_feed_id = price_feed_id;

    msg!("Price feed rotated for engine {}", engine.key());
    emit!(PriceFeedUpdated {
        old_feed_id,
        new_feed_id: price_feed_id,
    });
    Ok(())
}
