use crate::constants::{
    CARDS_PER_DECK, DEFAULT_BURN_CARDS, DEFAULT_DECKS, DEFAULT_MAX_HANDS, DEFAULT_NUM_SHOES,
    MAX_CARDS_PER_HAND,
};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: u64 },
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
}

/// Parameters for a batch of independent shoes.
///
/// `max_hands = None` lets every shoe run until fewer than a full hand of cards remain.
/// `seed = None` seeds the batch from OS entropy, so output is not reproducible.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BatchConfig {
    pub num_shoes: u32,
    pub decks: u32,
    pub burn_cards: usize,
    pub max_hands: Option<u32>,
    pub seed: Option<u64>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            num_shoes: DEFAULT_NUM_SHOES,
            decks: DEFAULT_DECKS,
            burn_cards: DEFAULT_BURN_CARDS,
            max_hands: Some(DEFAULT_MAX_HANDS),
            seed: None,
        }
    }
}

impl BatchConfig {
    /// Reject configurations the engine cannot run.
    ///
    /// Zero shoes or a zero hand cap are legal; they simply produce no hands.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "decks",
                value: 0,
            });
        }
        Ok(())
    }

    /// Cards in a freshly built shoe.
    pub fn shoe_len(&self) -> usize {
        (self.decks as usize).saturating_mul(CARDS_PER_DECK)
    }

    /// Whether the burn leaves too few cards to deal even one hand.
    pub fn burns_entire_shoe(&self) -> bool {
        self.shoe_len().saturating_sub(self.burn_cards) < MAX_CARDS_PER_HAND
    }
}
