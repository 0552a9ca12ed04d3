use anchor_lang::prelude::*;
use pyth_solana_receiver_sdk::price_update::{PriceUpdateV2, VerificationLevel};
use crate::errors::DuelError;

/// Quotes older than this are refused.
pub const STALENESS_TIMEOUT_SECS: i64 = 2 * 60 * 60;

/// Fixed-point precision of every price the engine stores.
pub const PRICE_DECIMALS: u32 = 18;

/// 10^38 is the largest power of ten an i128 holds.
const MAX_FEED_DECIMALS: u8 = 38;

/// One reading of the price feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceRound {
    pub round_id: i64,
    pub price: i64,
    pub started_at: i64,
    pub updated_at: i64,
    pub answered_in_round: i64,
    pub decimals: u8,
}

impl PriceRound {
    /// A Pyth update carries the previous publish time alongside its own, so
    /// the previous publish opens the round and the current one answers it.
    pub fn from_price_update(update: &PriceUpdateV2) -> Result<Self> {
        let message = &update.price_message;
        require!(message.exponent <= 0, DuelError::InvalidPriceExponent);
        let decimals = u8::try_from(message.exponent.unsigned_abs())
            .map_err(|_| DuelError::InvalidPriceExponent)?;
        require!(decimals <= MAX_FEED_DECIMALS, DuelError::InvalidPriceExponent);

        Ok(Self {
            round_id: message.prev_publish_time,
            price: message.price,
            started_at: message.prev_publish_time,
            updated_at: message.publish_time,
            answered_in_round: message.publish_time,
            decimals,
        })
    }
}

/// Returns the raw price and its decimals once the round is complete and fresh.
pub fn read_validated_price(round: &PriceRound, now: i64) -> Result<(i64, u8)> {
    require!(round.updated_at != 0, DuelError::StalePrice);
    require!(round.answered_in_round >= round.round_id, DuelError::StalePrice);
    require!(round.updated_at <= now, DuelError::StalePrice);
    let age = now
        .checked_sub(round.updated_at)
        .ok_or(DuelError::ArithmeticOverflow)?;
    require!(age <= STALENESS_TIMEOUT_SECS, DuelError::StalePrice);
    Ok((round.price, round.decimals))
}

/// `price * 10^18 / 10^decimals`, multiplying first.
pub fn normalize_price(price: i64, decimals: u8) -> Result<i128> {
    let scale = 10i128
        .checked_pow(PRICE_DECIMALS)
        .ok_or(DuelError::ArithmeticOverflow)?;
    let divisor = 10i128
        .checked_pow(decimals as u32)
        .ok_or(DuelError::ArithmeticOverflow)?;
    let scaled = (price as i128)
        .checked_mul(scale)
        .ok_or(DuelError::ArithmeticOverflow)?;
    Ok(scaled / divisor)
}

/// Reads the configured feed and returns an 18-decimal price, or fails closed.
pub fn read_normalized_price(
    update: &PriceUpdateV2,
    feed_id: &[u8; 32],
    now: i64,
) -> Result<i128> {
    require!(update.price_message.feed_id == *feed_id, DuelError::InvalidPriceFeed);
    require!(
        matches!(update.verification_level, VerificationLevel::Full),
        DuelError::StalePrice
    );

    let round = PriceRound::from_price_update(update)?;
    let (price, decimals) = read_validated_price(&round, now)?;
    normalize_price(price, decimals)
}
