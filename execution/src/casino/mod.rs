//! Card helpers and the baccarat dealing rules.

pub mod baccarat;
pub mod cards;
