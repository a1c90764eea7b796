use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Card rank in `1..=13`, where 1 is Ace and 13 is King.
///
/// Suits never affect a baccarat total, so they are not tracked.
pub type Rank = u8;

/// Side that won a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "P")]
    Player,
    #[serde(rename = "B")]
    Banker,
    #[serde(rename = "T")]
    Tie,
}

impl Winner {
    /// Higher total wins; equal totals tie.
    pub fn from_totals(player_total: u8, banker_total: u8) -> Self {
        match player_total.cmp(&banker_total) {
            Ordering::Greater => Winner::Player,
            Ordering::Less => Winner::Banker,
            Ordering::Equal => Winner::Tie,
        }
    }

    /// Single-letter code used in reports (`P`, `B` or `T`).
    pub fn code(self) -> char {
        match self {
            Winner::Player => 'P',
            Winner::Banker => 'B',
            Winner::Tie => 'T',
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One settled hand, stamped with the shoe it came from and its position in that shoe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub shoe_id: u32,
    /// 1-based position within the shoe.
    pub hand_number: u32,
    pub player_cards: Vec<Rank>,
    pub banker_cards: Vec<Rank>,
    pub player_total: u8,
    pub banker_total: u8,
    pub winner: Winner,
    /// Either side held 8 or 9 on its first two cards.
    pub natural: bool,
}

impl HandResult {
    /// Total cards this hand consumed from the shoe.
    pub fn cards_dealt(&self) -> usize {
        self.player_cards.len() + self.banker_cards.len()
    }

    pub fn player_drew(&self) -> bool {
        self.player_cards.len() > 2
    }

    pub fn banker_drew(&self) -> bool {
        self.banker_cards.len() > 2
    }
}
