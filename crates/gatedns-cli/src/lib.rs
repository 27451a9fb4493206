//! CLI wiring for the gatedns binary.

pub mod cli;
pub mod config;

pub use cli::run;
