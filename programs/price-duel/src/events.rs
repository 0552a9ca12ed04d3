use anchor_lang::prelude::*;
use crate::state::bet::Position;

#[event]
pub struct EngineInitialized {
    pub admin: Pubkey,
    pub collateral_mint: Pubkey,
    pub price_feed_id: [u8; 32],
}

#[event]
pub struct PriceFeedUpdated {
    pub old_feed_id: [u8; 32],
    pub new_feed_id: [u8; 32],
}

#[event]
pub struct BetPending {
    pub bet_id: u64,
    pub creator: Pubkey,
    pub amount: u64,
    pub position: Position,
    pub created_at: i64,
}

#[event]
pub struct BetActive {
    pub bet_id: u64,
    pub joiner: Pubkey,
    pub opening_price: i128,
}

#[event]
pub struct BetSettled {
    pub bet_id: u64,
    pub winner: Pubkey,
    pub closing_price: i128,
    pub pot: u64,
}

#[event]
pub struct BetCancelled {
    pub bet_id: u64,
    pub creator: Pubkey,
    pub refund: u64,
}

#[event]
pub struct CreditWithdrawn {
    pub bet_id: u64,
    pub winner: Pubkey,
    pub amount: u64,
}
