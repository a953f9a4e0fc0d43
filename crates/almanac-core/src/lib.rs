//! Shared building blocks for the Almanac workspace.
//!
//! - `config`: settings loaded from the environment and `almanac.toml`
//! - `constants`: product identifiers and protocol defaults
//! - `error`: the core error type

pub mod config;
pub mod constants;
pub mod error;
