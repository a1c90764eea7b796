//! Baccarat (punto banco) dealing rules.
//!
//! One hand moves strictly forward through:
//! initial deal -> natural check -> player decision -> banker decision -> settled.
//!
//! Cards are dealt Player, Banker, Player, Banker. Either side holding 8 or 9 on two
//! cards is a natural and ends the hand. Otherwise the player draws on 0-5, and the
//! banker follows [`banker_draws`].

use super::cards::{card_value, hand_total, Shoe};
use crate::error::SimulationError;
use punto_types::{HandResult, Rank, Winner};

/// Player third-card values (bit `v` set => banker draws) for each banker total.
///
/// Only consulted when the player drew a third card.
const BANKER_DRAWS_AGAINST: [u16; 10] = [
    0b11_1111_1111, // 0: always
    0b11_1111_1111, // 1: always
    0b11_1111_1111, // 2: always
    0b10_1111_1111, // 3: unless player's third is 8
    0b00_1111_1100, // 4: player's third 2-7
    0b00_1111_0000, // 5: player's third 4-7
    0b00_1100_0000, // 6: player's third 6-7
    0,              // 7: stands
    0,              // 8: natural
    0,              // 9: natural
];

/// Highest two-card total the banker draws on when the player stood.
const BANKER_STANDALONE_DRAW_MAX: u8 = 5;

/// Highest two-card total the player draws on.
const PLAYER_DRAW_MAX: u8 = 5;

fn is_natural(total: u8) -> bool {
    total >= 8
}

/// Determine if player should draw third card.
/// Player draws on 0-5, stands on 6-7.
pub fn player_draws(player_total: u8) -> bool {
    player_total <= PLAYER_DRAW_MAX
}

/// Determine if banker should draw third card.
///
/// `player_third_value` is the baccarat value (0-9) of the player's third card, or
/// `None` if the player stood.
pub fn banker_draws(banker_total: u8, player_third_value: Option<u8>) -> bool {
    match player_third_value {
        None => banker_total <= BANKER_STANDALONE_DRAW_MAX,
        Some(value) => {
            let Some(mask) = BANKER_DRAWS_AGAINST.get(banker_total as usize) else {
                return false;
            };
            value <= 9 && (mask >> value) & 1 == 1
        }
    }
}

/// A settled hand that has not yet been assigned to a shoe position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DealtHand {
    pub player_cards: Vec<Rank>,
    pub banker_cards: Vec<Rank>,
    pub player_total: u8,
    pub banker_total: u8,
    pub winner: Winner,
    pub natural: bool,
}

impl DealtHand {
    pub fn cards_dealt(&self) -> usize {
        self.player_cards.len() + self.banker_cards.len()
    }

    /// Stamp the shoe and hand number, producing the final record.
    pub fn into_result(self, shoe_id: u32, hand_number: u32) -> HandResult {
        HandResult {
            shoe_id,
            hand_number,
            player_cards: self.player_cards,
            banker_cards: self.banker_cards,
            player_total: self.player_total,
            banker_total: self.banker_total,
            winner: self.winner,
            natural: self.natural,
        }
    }
}

/// Deal one hand from `shoe` starting at `cursor`.
///
/// Returns the hand and the cursor just past the last card used (4, 5 or 6 cards later).
/// Fails with [`SimulationError::OutOfCards`] rather than reading past the end of the shoe.
pub fn deal_hand(shoe: &Shoe, cursor: usize) -> Result<(DealtHand, usize), SimulationError> {
    // Deal 2 cards each: Player, Banker, Player, Banker
    let (p1, cursor) = shoe.draw(cursor)?;
    let (b1, cursor) = shoe.draw(cursor)?;
    let (p2, cursor) = shoe.draw(cursor)?;
    let (b2, mut cursor) = shoe.draw(cursor)?;

    let mut player_cards = Vec::with_capacity(3);
    player_cards.extend([p1, p2]);
    let mut banker_cards = Vec::with_capacity(3);
    banker_cards.extend([b1, b2]);

    let mut player_total = hand_total(&player_cards);
    let mut banker_total = hand_total(&banker_cards);

    let natural = is_natural(player_total) || is_natural(banker_total);

    if !natural {
        let mut player_third_value = None;
        if player_draws(player_total) {
            let (card, next) = shoe.draw(cursor)?;
            cursor = next;
            player_cards.push(card);
            player_third_value = Some(card_value(card));
            player_total = hand_total(&player_cards);
        }

        if banker_draws(banker_total, player_third_value) {
            let (card, next) = shoe.draw(cursor)?;
            cursor = next;
            banker_cards.push(card);
            banker_total = hand_total(&banker_cards);
        }
    }

    let hand = DealtHand {
        winner: Winner::from_totals(player_total, banker_total),
        player_cards,
        banker_cards,
        player_total,
        banker_total,
        natural,
    };
    Ok((hand, cursor))
}
