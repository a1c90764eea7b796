//! Shared playing-card helpers.
//!
//! Cards are plain ranks `1..=13`, where 1 is Ace and 13 is King. Suits are not
//! tracked: a shoe of `n` decks holds `4 * n` copies of every rank.

use crate::error::SimulationError;
use punto_types::constants::{CARDS_PER_DECK, RANKS_PER_SUIT, SUITS_PER_DECK};
use punto_types::Rank;
use rand::seq::SliceRandom;
use rand::Rng;

/// Get card value for Baccarat (0-9).
/// Ace = 1, 2-9 = face value, 10 and face cards = 0.
pub fn card_value(rank: Rank) -> u8 {
    match rank {
        1..=9 => rank,
        _ => 0,
    }
}

/// Calculate hand total (mod 10).
pub fn hand_total(cards: &[Rank]) -> u8 {
    let sum: u32 = cards.iter().map(|&c| u32::from(card_value(c))).sum();
    (sum % 10) as u8
}

/// An immutable, shuffled sequence of ranks consumed by a forward-moving cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Rank>,
}

impl Shoe {
    /// Build and shuffle a shoe of `decks` decks.
    pub fn build<R: Rng + ?Sized>(decks: u32, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity((decks as usize).saturating_mul(CARDS_PER_DECK));
        for _ in 0..decks {
            for rank in 1..=RANKS_PER_SUIT {
                cards.extend(std::iter::repeat(rank).take(SUITS_PER_DECK));
            }
        }
        cards.shuffle(rng);
        Self { cards }
    }

    /// Shoe in a fixed, caller-chosen order (no shuffle).
    pub fn from_ranks(cards: Vec<Rank>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Rank] {
        &self.cards
    }

    /// Cards left at or after `cursor`.
    pub fn remaining(&self, cursor: usize) -> usize {
        self.cards.len().saturating_sub(cursor)
    }

    /// Take the card at `cursor`, returning it with the advanced cursor.
    pub fn draw(&self, cursor: usize) -> Result<(Rank, usize), SimulationError> {
        let card = self
            .cards
            .get(cursor)
            .copied()
            .ok_or(SimulationError::OutOfCards {
                position: cursor,
                len: self.cards.len(),
            })?;
        Ok((card, cursor + 1))
    }
}
