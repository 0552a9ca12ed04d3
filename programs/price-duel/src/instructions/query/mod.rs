pub mod view_bet;

pub use view_bet::*;
