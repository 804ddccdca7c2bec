use crate::cards::{Card, Rank, Suit};
use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck.
///
/// Dealing moves cards out of the deck, so a dealt card can never be
/// dealt again.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_eval::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards still in the deck, next card to be dealt last.
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        debug!("shuffling {} cards with seed {seed}", self.cards.len());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG.
    ///
    /// `SliceRandom::shuffle` is a Fisher-Yates pass over every index,
    /// including the last one.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        debug!("shuffling {} cards", self.cards.len());
        self.cards.shuffle(rng);
    }

    /// Deal one card from the top of the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal up to `n` cards from the top of the deck.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(n);
        let mut dealt = self.cards.split_off(keep);
        dealt.reverse();
        dealt
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<Card>>;

    /// Consume the deck in dealing order.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter().rev()
    }
}
