//! Fan-out over independent shoes.
//!
//! Shoes share nothing but the master seed stream, which is consumed in shoe order
//! before any shoe is dealt. With the `parallel` feature shoes are then played on a
//! rayon pool; results are reassembled in shoe order either way.

use crate::error::SimulationError;
use crate::rng::derive_shoe_seeds;
use crate::shoe::{simulate_shoe, ShoeParams};
use punto_types::{BatchConfig, HandResult};
use tracing::{info, warn};

/// Simulate `config.num_shoes` shoes (ids `1..=num_shoes`) and concatenate their hands.
///
/// Configuration is validated before any work starts. An out-of-cards error from any
/// shoe aborts the whole batch.
pub fn simulate_many_shoes(config: &BatchConfig) -> Result<Vec<HandResult>, SimulationError> {
    config.validate()?;
    if config.num_shoes > 0 && config.burns_entire_shoe() {
        warn!(
            burn_cards = config.burn_cards,
            shoe_len = config.shoe_len(),
            "burn leaves no playable cards; every shoe will be empty"
        );
    }

    info!(
        num_shoes = config.num_shoes,
        decks = config.decks,
        burn_cards = config.burn_cards,
        max_hands = ?config.max_hands,
        seed = ?config.seed,
        "simulating batch"
    );

    let params = ShoeParams::from(config);
    let seeds = derive_shoe_seeds(config.seed, config.num_shoes);
    let shoes = play_all(&params, &seeds)?;
    let results: Vec<HandResult> = shoes.into_iter().flatten().collect();

    info!(
        num_shoes = config.num_shoes,
        hands = results.len(),
        "batch complete"
    );
    Ok(results)
}

#[cfg(not(feature = "parallel"))]
fn play_all(
    params: &ShoeParams,
    seeds: &[u64],
) -> Result<Vec<Vec<HandResult>>, SimulationError> {
    seeds
        .iter()
        .zip(1u32..)
        .map(|(&seed, shoe_id)| simulate_shoe(shoe_id, params, Some(seed)))
        .collect()
}

#[cfg(feature = "parallel")]
fn play_all(
    params: &ShoeParams,
    seeds: &[u64],
) -> Result<Vec<Vec<HandResult>>, SimulationError> {
    use rayon::prelude::*;

    seeds
        .par_iter()
        .enumerate()
        .map(|(idx, &seed)| simulate_shoe(idx as u32 + 1, params, Some(seed)))
        .collect()
}
