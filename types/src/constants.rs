/// Cards in a standard deck.
pub const CARDS_PER_DECK: usize = 52;

/// Ranks per suit (Ace..=King).
pub const RANKS_PER_SUIT: u8 = 13;

/// Copies of each rank in a single deck.
pub const SUITS_PER_DECK: usize = 4;

/// Worst-case cards consumed by one hand (three per side).
pub const MAX_CARDS_PER_HAND: usize = 6;

/// Cards dealt before any third-card decision.
pub const INITIAL_DEAL_CARDS: usize = 4;

/// Default number of shoes per batch.
pub const DEFAULT_NUM_SHOES: u32 = 10;

/// Baccarat is usually dealt from eight decks.
pub const DEFAULT_DECKS: u32 = 8;

/// Default cards burned / cut off the top of each shoe.
pub const DEFAULT_BURN_CARDS: usize = 0;

/// Default hand cap per shoe.
pub const DEFAULT_MAX_HANDS: u32 = 40;
