pub mod accounts;
pub mod custody;
pub mod oracle;
