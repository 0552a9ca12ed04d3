pub mod initialize;
pub mod set_price_feed;

pub use initialize::*;
pub use set_price_feed::*;
