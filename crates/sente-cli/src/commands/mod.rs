pub mod common;
pub mod config;
pub mod dex;
pub mod tx;
