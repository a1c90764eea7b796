//! Playing a single shoe end-to-end.

use crate::casino::baccarat::deal_hand;
use crate::casino::cards::Shoe;
use crate::error::SimulationError;
use crate::rng::shoe_rng;
use punto_types::constants::MAX_CARDS_PER_HAND;
use punto_types::{BatchConfig, HandResult};
use tracing::debug;

/// Per-shoe parameters shared by every shoe in a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShoeParams {
    pub decks: u32,
    /// Cards burned / cut off the top before the first hand. Clamped to the shoe length.
    pub burn_cards: usize,
    /// `None` deals until the shoe runs low.
    pub max_hands: Option<u32>,
}

impl From<&BatchConfig> for ShoeParams {
    fn from(config: &BatchConfig) -> Self {
        Self {
            decks: config.decks,
            burn_cards: config.burn_cards,
            max_hands: config.max_hands,
        }
    }
}

/// Deal hands from an already-built shoe.
///
/// Stops at the hand cap, or once fewer than six cards (a worst-case hand) remain, so the
/// dealer never runs out mid-hand. Burning the whole shoe yields no hands.
pub fn play_shoe(
    shoe_id: u32,
    shoe: &Shoe,
    burn_cards: usize,
    max_hands: Option<u32>,
) -> Result<Vec<HandResult>, SimulationError> {
    let mut cursor = burn_cards.min(shoe.len());
    let mut results = Vec::new();
    let mut hand_number: u32 = 1;

    while max_hands.is_none_or(|cap| hand_number <= cap)
        && shoe.remaining(cursor) >= MAX_CARDS_PER_HAND
    {
        let (hand, next) = deal_hand(shoe, cursor)?;
        cursor = next;
        results.push(hand.into_result(shoe_id, hand_number));
        hand_number += 1;
    }

    debug!(
        shoe_id,
        hands = results.len(),
        cards_remaining = shoe.remaining(cursor),
        "shoe played"
    );
    Ok(results)
}

/// Build a shoe from `seed` (OS entropy when `None`) and play it.
pub fn simulate_shoe(
    shoe_id: u32,
    params: &ShoeParams,
    seed: Option<u64>,
) -> Result<Vec<HandResult>, SimulationError> {
    let mut rng = shoe_rng(seed);
    let shoe = Shoe::build(params.decks, &mut rng);
    play_shoe(shoe_id, &shoe, params.burn_cards, params.max_hands)
}
