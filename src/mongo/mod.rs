pub mod aggregation;
pub mod client;
pub mod cursor;
pub mod index;
pub mod performance;
pub mod query;
