pub mod engine;
pub mod bet;
pub mod credit;

pub use engine::*;
pub use bet::*;
pub use credit::*;
