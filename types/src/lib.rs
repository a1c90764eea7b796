//! Common types shared by the punto engine and simulator.
//!
//! Nothing in this crate performs randomness or IO; it only describes the shape of a
//! simulation run (configuration in, hand records out).

pub mod config;
pub mod constants;
pub mod hand;

pub use config::{BatchConfig, ConfigError};
pub use hand::{HandResult, Rank, Winner};
