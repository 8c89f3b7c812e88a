pub mod config;
pub mod mongo;
pub mod report;
pub mod store;
pub mod utils;
