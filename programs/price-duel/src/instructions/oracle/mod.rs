pub mod settle_bet;

pub use settle_bet::*;
