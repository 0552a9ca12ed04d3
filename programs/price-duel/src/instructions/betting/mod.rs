pub mod open_bet;
pub mod join_bet;
pub mod withdraw;
pub mod cancel_bet;

pub use open_bet::*;
pub use join_bet::*;
pub use withdraw::*;
pub use cancel_bet::*;
