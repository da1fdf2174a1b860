pub mod postback;
pub mod transaction;
