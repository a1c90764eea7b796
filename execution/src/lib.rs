//! Punto execution layer.
//!
//! This crate contains the baccarat shoe engine: shoe construction, the third-card
//! tableau, the per-shoe dealing loop, and the batch runner that fans out over shoes.
//!
//! ## Determinism requirements
//! - All randomness flows from an explicit seed through [`rng::shoe_rng`].
//! - Per-shoe seeds are derived from the master seed strictly in shoe order
//!   (see [`rng::derive_shoe_seeds`]), before any shoe is played.
//! - Dealing never mutates a [`Shoe`]; the cursor is threaded through each step as a value.
//!
//! The primary entrypoint is [`simulate_many_shoes`].
//!
//! ## Minimal batch (example)
//! ```rust
//! use punto_execution::simulate_many_shoes;
//! use punto_types::BatchConfig;
//!
//! let config = BatchConfig {
//!     num_shoes: 2,
//!     decks: 8,
//!     burn_cards: 10,
//!     max_hands: Some(40),
//!     seed: Some(7),
//! };
//! let hands = simulate_many_shoes(&config).unwrap();
//! assert_eq!(hands, simulate_many_shoes(&config).unwrap());
//! ```

pub mod batch;
pub mod casino;
pub mod error;
pub mod rng;
pub mod shoe;

#[cfg(test)]
mod determinism_tests;

pub use batch::simulate_many_shoes;
pub use casino::baccarat::{banker_draws, deal_hand, player_draws, DealtHand};
pub use casino::cards::{card_value, hand_total, Shoe};
pub use error::SimulationError;
pub use rng::{derive_shoe_seeds, shoe_rng, ShoeRng};
pub use shoe::{play_shoe, simulate_shoe, ShoeParams};
