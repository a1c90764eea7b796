//! Property tests for dealing invariants and batch reproducibility.
//!
//! These complement the fixed scenarios in each module by running the tableau and
//! the batch runner over arbitrary shoes and configurations.

#[cfg(test)]
mod tests {
    use crate::casino::baccarat::deal_hand;
    use crate::casino::cards::{card_value, hand_total, Shoe};
    use crate::rng::shoe_rng;
    use crate::simulate_many_shoes;
    use punto_types::constants::MAX_CARDS_PER_HAND;
    use punto_types::{BatchConfig, HandResult, Winner};
    use proptest::prelude::*;

    fn arb_rank() -> impl Strategy<Value = u8> {
        1u8..=13
    }

    fn arb_config() -> impl Strategy<Value = BatchConfig> {
        (
            0u32..4,
            1u32..4,
            0usize..80,
            proptest::option::of(0u32..30),
            any::<u64>(),
        )
            .prop_map(|(num_shoes, decks, burn_cards, max_hands, seed)| BatchConfig {
                num_shoes,
                decks,
                burn_cards,
                max_hands,
                seed: Some(seed),
            })
    }

    fn check_hand_invariants(hand: &HandResult) -> Result<(), TestCaseError> {
        prop_assert!(hand.player_total <= 9);
        prop_assert!(hand.banker_total <= 9);
        prop_assert_eq!(hand.player_total, hand_total(&hand.player_cards));
        prop_assert_eq!(hand.banker_total, hand_total(&hand.banker_cards));
        prop_assert_eq!(
            hand.winner,
            Winner::from_totals(hand.player_total, hand.banker_total)
        );
        prop_assert_eq!(
            hand.winner == Winner::Tie,
            hand.player_total == hand.banker_total
        );
        if hand.natural {
            prop_assert_eq!(hand.cards_dealt(), 4);
            prop_assert!(hand.player_total >= 8 || hand.banker_total >= 8);
        } else {
            prop_assert!(hand_total(&hand.player_cards[..2]) <= 7);
            prop_assert!(hand_total(&hand.banker_cards[..2]) <= 7);
        }
        Ok(())
    }

    proptest! {
        /// Property: card values follow the baccarat mapping.
        #[test]
        fn prop_card_value_mapping(rank in arb_rank()) {
            let expected = if rank <= 9 { rank } else { 0 };
            prop_assert_eq!(card_value(rank), expected);
        }

        /// Property: totals stay within 0-9 for any hand size.
        #[test]
        fn prop_hand_total_in_range(cards in proptest::collection::vec(arb_rank(), 1..8)) {
            prop_assert!(hand_total(&cards) <= 9);
        }

        /// Property: every dealt hand respects the settlement invariants and consumes
        /// exactly the prefix of the shoe it reports, in dealing order.
        #[test]
        fn prop_dealt_hand_invariants(
            ranks in proptest::collection::vec(arb_rank(), MAX_CARDS_PER_HAND..=MAX_CARDS_PER_HAND),
        ) {
            let shoe = Shoe::from_ranks(ranks.clone());
            let (hand, cursor) = deal_hand(&shoe, 0).expect("six cards always suffice");
            let hand = hand.into_result(1, 1);
            check_hand_invariants(&hand)?;
            prop_assert_eq!(cursor, hand.cards_dealt());

            let mut expected = vec![
                hand.player_cards[0],
                hand.banker_cards[0],
                hand.player_cards[1],
                hand.banker_cards[1],
            ];
            expected.extend_from_slice(&hand.player_cards[2..]);
            expected.extend_from_slice(&hand.banker_cards[2..]);
            prop_assert_eq!(&ranks[..cursor], &expected[..]);
        }

        /// Property: shoes hold 4 * decks copies of every rank.
        #[test]
        fn prop_shoe_composition(decks in 1u32..=8, seed in any::<u64>()) {
            let shoe = Shoe::build(decks, &mut shoe_rng(Some(seed)));
            prop_assert_eq!(shoe.len(), 52 * decks as usize);
            let mut counts = [0usize; 14];
            for &rank in shoe.as_slice() {
                counts[rank as usize] += 1;
            }
            prop_assert_eq!(counts[0], 0);
            for rank in 1..=13 {
                prop_assert_eq!(counts[rank], 4 * decks as usize);
            }
        }

        /// Property: identical configurations produce identical batches, with contiguous
        /// hand numbers per shoe and the hand cap respected.
        #[test]
        fn prop_batch_deterministic(config in arb_config()) {
            let first = simulate_many_shoes(&config).expect("batch");
            let second = simulate_many_shoes(&config).expect("batch");
            prop_assert_eq!(&first, &second);

            let mut last: Option<(u32, u32)> = None;
            for hand in &first {
                check_hand_invariants(hand)?;
                prop_assert!(hand.shoe_id >= 1 && hand.shoe_id <= config.num_shoes);
                if let Some(cap) = config.max_hands {
                    prop_assert!(hand.hand_number <= cap);
                }
                match last {
                    Some((shoe, number)) if shoe == hand.shoe_id => {
                        prop_assert_eq!(hand.hand_number, number + 1);
                    }
                    Some((shoe, _)) => {
                        prop_assert!(hand.shoe_id > shoe);
                        prop_assert_eq!(hand.hand_number, 1);
                    }
                    None => {
                        prop_assert_eq!(hand.hand_number, 1);
                    }
                }
                last = Some((hand.shoe_id, hand.hand_number));
            }
        }
    }
}
