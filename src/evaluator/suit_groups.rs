use crate::cards::{Card, Suit};

/// Minimum cards of one suit for a flush.
pub const FLUSH_LEN: usize = 5;

/// Cards grouped by suit, each group kept in the order it was given
/// (rank-descending when built from a sorted view).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitGroups {
    by_suit: [Vec<Card>; 4],
}

impl SuitGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut by_suit: [Vec<Card>; 4] = Default::default();
        for &card in cards {
            by_suit[card.suit().index()].push(card);
        }
        Self { by_suit }
    }

    /// Cards of `suit`, in input order.
    pub fn cards(&self, suit: Suit) -> &[Card] {
        &self.by_suit[suit.index()]
    }

    #[cfg(test)]
    pub fn count(&self, suit: Suit) -> usize {
        self.cards(suit).len()
    }

    /// Suits holding at least five cards, with their cards.
    pub fn flush_groups(&self) -> impl Iterator<Item = (Suit, &[Card])> + '_ {
        Suit::ALL
            .iter()
            .map(move |&s| (s, self.cards(s)))
            .filter(|(_, cards)| cards.len() >= FLUSH_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_flush_in_seven() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Two, Suit::Spades),
        ];
        let groups = SuitGroups::from_cards(&cards);
        let flushes: Vec<Suit> = groups.flush_groups().map(|(s, _)| s).collect();
        assert_eq!(flushes, vec![Suit::Spades]);
        assert_eq!(groups.count(Suit::Spades), 5);
        assert_eq!(groups.cards(Suit::Spades)[0], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn test_not_flush() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        let groups = SuitGroups::from_cards(&cards);
        assert_eq!(groups.flush_groups().count(), 0);
        assert_eq!(groups.count(Suit::Hearts), 1);
        assert_eq!(groups.count(Suit::Diamonds), 0);
    }
}
