pub mod cli;
pub mod config;
pub mod global;
pub mod numfmt;
pub mod sponsor;
pub mod transcript;
pub mod valuation;
