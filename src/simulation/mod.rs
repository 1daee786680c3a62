pub mod config;
pub mod engine;
pub mod refill;
pub mod transfers;
