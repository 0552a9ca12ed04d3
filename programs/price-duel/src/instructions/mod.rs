pub mod admin;
pub mod betting;
pub mod oracle;
pub mod query;

pub use admin::*;
pub use betting::*;
pub use oracle::*;
pub use query::*;
