use punto_types::{HandResult, Winner};
use tracing::info;

/// Outcome frequencies over a list of hands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutcomeSummary {
    pub hands: u64,
    pub player_wins: u64,
    pub banker_wins: u64,
    pub ties: u64,
    pub naturals: u64,
    pub player_third_cards: u64,
    pub banker_third_cards: u64,
}

impl OutcomeSummary {
    pub fn from_results(results: &[HandResult]) -> Self {
        let mut summary = Self::default();
        for hand in results {
            summary.add(hand);
        }
        summary
    }

    pub fn add(&mut self, hand: &HandResult) {
        self.hands += 1;
        match hand.winner {
            Winner::Player => self.player_wins += 1,
            Winner::Banker => self.banker_wins += 1,
            Winner::Tie => self.ties += 1,
        }
        self.naturals += u64::from(hand.natural);
        self.player_third_cards += u64::from(hand.player_drew());
        self.banker_third_cards += u64::from(hand.banker_drew());
    }

    pub fn merge(&mut self, other: &OutcomeSummary) {
        self.hands += other.hands;
        self.player_wins += other.player_wins;
        self.banker_wins += other.banker_wins;
        self.ties += other.ties;
        self.naturals += other.naturals;
        self.player_third_cards += other.player_third_cards;
        self.banker_third_cards += other.banker_third_cards;
    }

    /// `count` as a fraction of all hands (0.0 when there are none).
    pub fn share(&self, count: u64) -> f64 {
        if self.hands == 0 {
            0.0
        } else {
            count as f64 / self.hands as f64
        }
    }

    pub fn log(&self) {
        info!(
            hands = self.hands,
            player = format_args!("{:.4}", self.share(self.player_wins)),
            banker = format_args!("{:.4}", self.share(self.banker_wins)),
            tie = format_args!("{:.4}", self.share(self.ties)),
            natural = format_args!("{:.4}", self.share(self.naturals)),
            "outcome summary"
        );
    }
}
