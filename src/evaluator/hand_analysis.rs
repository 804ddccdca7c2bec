use super::rank_groups::RankGroups;
use super::suit_groups::SuitGroups;
use crate::cards::{Card, Rank};

/// Pre-computed view of a card set.
/// Built once per evaluation and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Input cards sorted by rank descending, then suit.
    pub sorted_cards: Vec<Card>,
    pub rank_groups: RankGroups,
    pub suit_groups: SuitGroups,
}

impl HandAnalysis {
    /// Analyze a card set. The caller's slice is copied, never reordered.
    pub fn new(cards: &[Card]) -> Self {
        let mut sorted_cards = cards.to_vec();
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let mut rank_counts = [0u8; 15];
        for card in &sorted_cards {
            rank_counts[card.rank().value() as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        debug_assert!(rank_groups.max_count() <= 4, "more than four cards share a rank");
        let suit_groups = SuitGroups::from_cards(&sorted_cards);

        Self { sorted_cards, rank_groups, suit_groups }
    }

    /// Assemble five cards: `n` cards of each listed rank in order, then
    /// the highest cards of every other rank as kickers.
    ///
    /// Returns `None` when the set cannot supply the requested cards.
    pub fn with_kickers(&self, groups: &[(Rank, usize)]) -> Option<[Card; 5]> {
        let mut out: Vec<Card> = Vec::with_capacity(5);
        for &(rank, n) in groups {
            let before = out.len();
            out.extend(self.sorted_cards.iter().filter(|c| c.rank() == rank).take(n));
            if out.len() - before < n {
                return None;
            }
        }
        let missing = 5usize.checked_sub(out.len())?;
        out.extend(
            self.sorted_cards
                .iter()
                .filter(|c| groups.iter().all(|(r, _)| *r != c.rank()))
                .take(missing),
        );
        out.try_into().ok()
    }
}
