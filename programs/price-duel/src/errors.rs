use anchor_lang::prelude::*;

#[error_code]
pub enum DuelError {
    #[msg("Address must not be zero")]
    AddressZero,
    #[msg("Amount must be greater than 0")]
    AmountZero,
    #[msg("Bet not found")]
    BetNotFound,
    #[msg("Bet expired before a counterparty joined")]
    BetExpired,
    #[msg("Bet is not pending")]
    BetNotPending,
    #[msg("Bet is not active")]
    BetNotActive,
    #[msg("Bet closing deadline has not passed")]
    BetNotClosed,
    #[msg("Cannot join on the creator's side")]
    CannotJoinSamePosition,
    #[msg("Cannot join your own bet")]
    CannotJoinOwnBet,
    #[msg("Already holding credit on this bet")]
    CannotJoinBetTwice,
    #[msg("Stake does not match the bet amount")]
    AmountMismatch,
    #[msg("Caller is not the winner")]
    NotWinner,
    #[msg("Caller is not the creator")]
    NotCreator,
    #[msg("No credit to withdraw")]
    NoCredit,
    #[msg("Invalid expiration window")]
    InvalidExpirationEnum,
    #[msg("Invalid closing window")]
    InvalidClosingEnum,
    #[msg("Oracle price is stale (>2h) or the round is incomplete")]
    StalePrice,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Price update does not carry the configured feed id")]
    InvalidPriceFeed,
    #[msg("Price exponent cannot be expressed as decimals")]
    InvalidPriceExponent,
    #[msg("Reentrant call")]
    ReentrantCall,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Vault balance insufficient")]
    InsufficientVault,
    #[msg("Credit account is not at the expected address")]
    InvalidCreditAccount,
}
